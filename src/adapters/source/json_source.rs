//! Implements RecordSource over a single JSON document.
//!
//! Shape: `{"clients": [...], "tasks": [...], "meetings": [...], "communications": [...]}`,
//! fields as on the domain entities. Missing sections load as empty.

use crate::domain::{Dataset, DomainError};
use crate::ports::RecordSource;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> Result<Dataset, DomainError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Source(format!("read {}: {}", self.path.display(), e)))?;
        let dataset: Dataset = serde_json::from_str(&text)
            .map_err(|e| DomainError::Source(format!("parse {}: {}", self.path.display(), e)))?;
        info!(
            path = %self.path.display(),
            tasks = dataset.tasks.len(),
            meetings = dataset.meetings.len(),
            communications = dataset.communications.len(),
            "loaded JSON records"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
