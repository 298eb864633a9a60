//! Synchronization engine: per-file synchronizer and directory orchestrator.

mod error;
mod orchestrator;
mod report;
mod synchronizer;

pub use error::SyncError;
pub use orchestrator::Orchestrator;
pub use report::{
    FileSyncFailure,
    FileSyncReport,
    RunReport,
};
pub use synchronizer::synchronize;
