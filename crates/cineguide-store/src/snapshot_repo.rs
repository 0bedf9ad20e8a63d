//! Append-only snapshot repository.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
    SqliteSynchronous,
};
use sqlx::Row;
use tracing::info;
use uuid::Uuid;

use cineguide_models::{GuideAction, NewSnapshot, ShotTemplate, Snapshot, TargetRect};

use crate::error::{StoreError, StoreResult};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS snapshots (
    id TEXT PRIMARY KEY,
    advice TEXT NOT NULL,
    action TEXT,
    template TEXT,
    target_locked TEXT,
    created_at TEXT NOT NULL
)";

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_snapshots_created_at ON snapshots (created_at DESC)";

/// Append-only repository for analysis snapshots.
///
/// Snapshots are written once with store-assigned `id` and `created_at`;
/// there are no update or delete operations.
pub struct SnapshotStore {
    pool: SqlitePool,
}

impl SnapshotStore {
    /// Open (or create) the store at the given file path.
    pub async fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::connection(format!("Failed to create directory: {e}")))?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", path.display()))
            .map_err(|e| StoreError::connection(format!("Invalid SQLite path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        Self::with_options(options).await
    }

    /// Open from a connection URL (`sqlite://...` or `sqlite::memory:`).
    pub async fn from_url(url: &str) -> StoreResult<Self> {
        if url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::connection(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        Self::with_options(options).await
    }

    /// Open an in-memory store. Used by tests and ephemeral deployments.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StoreError::connection(e.to_string()))?;
        Self::with_options(options).await
    }

    async fn with_options(options: SqliteConnectOptions) -> StoreResult<Self> {
        // Single connection: SQLite has one writer, and an in-memory
        // database exists per connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::connection(format!("Failed to connect to SQLite: {e}")))?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_INDEX).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Append one snapshot, assigning `id` and `created_at`. Returns the
    /// stored record including the assigned fields.
    pub async fn create(&self, new: NewSnapshot) -> StoreResult<Snapshot> {
        // The column holds microsecond precision; truncate so the record
        // handed back equals what a later list() reads.
        let now = Utc::now();
        let created_at = now
            .with_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);

        let snapshot = Snapshot {
            id: Uuid::new_v4().to_string(),
            advice: new.advice,
            action: new.action,
            template: new.template,
            target_locked: new.target_locked,
            created_at,
        };

        let target_json = snapshot
            .target_locked
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            "INSERT INTO snapshots (id, advice, action, template, target_locked, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&snapshot.id)
        .bind(&snapshot.advice)
        .bind(snapshot.action.map(|a| a.as_str()))
        .bind(snapshot.template.map(|t| t.as_str()))
        .bind(target_json)
        .bind(
            snapshot
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        )
        .execute(&self.pool)
        .await?;

        info!("Recorded snapshot {}", snapshot.id);

        Ok(snapshot)
    }

    /// All snapshots ordered by creation time descending. Insertion order
    /// breaks timestamp ties.
    pub async fn list(&self) -> StoreResult<Vec<Snapshot>> {
        let rows = sqlx::query(
            "SELECT id, advice, action, template, target_locked, created_at \
             FROM snapshots ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_snapshot).collect()
    }
}

fn row_to_snapshot(row: &SqliteRow) -> StoreResult<Snapshot> {
    let id: String = row.try_get("id")?;

    let action: Option<String> = row.try_get("action")?;
    let action = action
        .as_deref()
        .map(GuideAction::from_str)
        .transpose()
        .map_err(|e| StoreError::corrupt_record(&id, e.to_string()))?;

    let template: Option<String> = row.try_get("template")?;
    let template = template
        .as_deref()
        .map(ShotTemplate::from_str)
        .transpose()
        .map_err(|e| StoreError::corrupt_record(&id, e.to_string()))?;

    let target_locked: Option<String> = row.try_get("target_locked")?;
    let target_locked = target_locked
        .as_deref()
        .map(serde_json::from_str::<TargetRect>)
        .transpose()
        .map_err(|e| StoreError::corrupt_record(&id, e.to_string()))?;

    let created_at: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| StoreError::corrupt_record(&id, e.to_string()))?
        .with_timezone(&Utc);

    Ok(Snapshot {
        id,
        advice: row.try_get("advice")?,
        action,
        template,
        target_locked,
        created_at,
    })
}
