//! Library components of the `tokens` CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod sync;

pub use config::SyncConfig;
pub use error::SyncError;
pub use sync::{SourceReport, run_sync, sync_source};
