//! Implements ReportSink on the local filesystem.
//!
//! All files land in one output directory. Every write goes through a temp
//! file and a rename, so readers never see a half-written report.

use crate::domain::{DashboardData, DomainError};
use crate::ports::ReportSink;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub const DASHBOARD_FILE: &str = "dashboard_data.json";

/// Filesystem report sink rooted at `output_dir`.
pub struct FsReportSink {
    output_dir: PathBuf,
}

impl FsReportSink {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write to `<name>.tmp`, fsync, then rename over the target.
    async fn write_atomic(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| DomainError::Export(format!("create output dir: {}", e)))?;

        let path = self.output_dir.join(file_name);
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
        f.write_all(contents)
            .await
            .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Export(format!("atomic rename failed: {}", e)))?;

        Ok(path)
    }
}

#[async_trait::async_trait]
impl ReportSink for FsReportSink {
    async fn write_dashboard(&self, data: &DashboardData) -> Result<PathBuf, DomainError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| DomainError::Export(format!("serialize dashboard: {}", e)))?;
        let path = self.write_atomic(DASHBOARD_FILE, json.as_bytes()).await?;
        info!(path = %path.display(), "dashboard data written");
        Ok(path)
    }

    async fn write_report(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(DomainError::Export(format!(
                "invalid report file name {:?}",
                file_name
            )));
        }
        let path = self.write_atomic(file_name, contents.as_bytes()).await?;
        info!(path = %path.display(), bytes = contents.len(), "report written");
        Ok(path)
    }
}
