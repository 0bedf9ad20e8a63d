//! Application state.

use std::sync::Arc;

use cineguide_store::SnapshotStore;
use cineguide_vision::{SceneAdvisor, VisionClient, VisionConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<SnapshotStore>,
    pub advisor: Arc<dyn SceneAdvisor>,
}

impl AppState {
    /// Create new application state from configuration.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store = SnapshotStore::from_url(&config.database_url).await?;
        let advisor = VisionClient::new(VisionConfig::from_env()?);

        Ok(Self {
            config,
            store: Arc::new(store),
            advisor: Arc::new(advisor),
        })
    }

    /// State with explicit collaborators. Tests substitute a stub advisor
    /// and an in-memory store here.
    pub fn with_parts(
        config: ApiConfig,
        store: Arc<SnapshotStore>,
        advisor: Arc<dyn SceneAdvisor>,
    ) -> Self {
        Self {
            config,
            store,
            advisor,
        }
    }
}
