//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DashboardData, Dataset, DomainError};
use std::path::PathBuf;

/// Record source port. Produces the raw records the dashboard is built from.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Load clients, tasks, meetings and communications in one go.
    async fn load(&self) -> Result<Dataset, DomainError>;

    /// Short description for logs (e.g. the path being read).
    fn describe(&self) -> String;
}

/// Report sink port. Persists the dashboard document and rendered reports.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Write the dashboard document. Returns where it was written.
    async fn write_dashboard(&self, data: &DashboardData) -> Result<PathBuf, DomainError>;

    /// Write one already-rendered report under `file_name`.
    async fn write_report(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError>;
}
