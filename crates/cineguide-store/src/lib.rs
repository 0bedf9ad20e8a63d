//! SQLite-backed history store.
//!
//! This crate provides:
//! - `SnapshotStore`: append-only repository for analysis snapshots
//! - Connection setup with WAL journaling and automatic schema creation
//! - In-memory databases for tests and ephemeral deployments

pub mod error;
pub mod snapshot_repo;

pub use error::{StoreError, StoreResult};
pub use snapshot_repo::SnapshotStore;
