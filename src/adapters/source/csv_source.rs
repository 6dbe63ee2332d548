//! Implements RecordSource over a directory of CSV exports.
//!
//! Expects `clients.csv`, `tasks.csv`, `meetings.csv` and
//! `communications.csv`, with the column headers the analysis exports use
//! (`Client ID`, `Task Name`, `Due Date`, ...). Rows are deserialized into
//! flat row structs, then mapped to domain records.

use crate::domain::{
    ClientRecord, CommunicationRecord, Dataset, DomainError, MeetingRecord, TaskRecord,
};
use crate::ports::RecordSource;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub const CLIENTS_FILE: &str = "clients.csv";
pub const TASKS_FILE: &str = "tasks.csv";
pub const MEETINGS_FILE: &str = "meetings.csv";
pub const COMMUNICATIONS_FILE: &str = "communications.csv";

#[derive(Debug, Deserialize)]
struct ClientRow {
    #[serde(rename = "Client ID")]
    id: String,
    #[serde(rename = "Client Name")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "Task ID")]
    id: u32,
    #[serde(rename = "Client ID")]
    client_id: String,
    #[serde(rename = "Task Name")]
    name: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Due Date")]
    due_date: String,
    #[serde(rename = "Priority")]
    priority: String,
}

#[derive(Debug, Deserialize)]
struct MeetingRow {
    #[serde(rename = "Meeting ID")]
    id: u32,
    #[serde(rename = "Client ID")]
    client_id: String,
    #[serde(rename = "Meeting Type")]
    meeting_type: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Duration")]
    duration: u32,
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Debug, Deserialize)]
struct CommunicationRow {
    #[serde(rename = "Communication ID")]
    id: u32,
    #[serde(rename = "Client ID")]
    client_id: String,
    #[serde(rename = "Type")]
    comm_type: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Direction")]
    direction: String,
}

/// CSV directory source.
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    async fn read_rows<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, DomainError> {
        let path = self.dir.join(file_name);
        let bytes = fs::read(&path)
            .await
            .map_err(|e| DomainError::Source(format!("read {}: {}", path.display(), e)))?;
        parse_rows(file_name, &bytes)
    }
}

/// Deserialize every row of a headered CSV document.
fn parse_rows<T: DeserializeOwned>(file_name: &str, bytes: &[u8]) -> Result<Vec<T>, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    rdr.deserialize()
        .enumerate()
        .map(|(i, row)| {
            // +2: one for the header line, one for 1-based numbering.
            row.map_err(|e| DomainError::Source(format!("{} line {}: {}", file_name, i + 2, e)))
        })
        .collect()
}

/// Accepts `YYYY-MM-DD`, or any timestamp [`parse_timestamp`] accepts (date part kept).
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| parse_timestamp(s).map(|ts| ts.date()))
        .map_err(|_| DomainError::Source(format!("invalid date {:?}", s)))
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` (optional fraction),
/// RFC 3339 (converted to its naive UTC time), or a bare date at midnight.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, DomainError> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DomainError::Source(format!("invalid timestamp {:?}", s)))
}

fn with_context<T>(file_name: &str, id: u32, r: Result<T, DomainError>) -> Result<T, DomainError> {
    r.map_err(|e| match e {
        DomainError::Source(msg) => {
            DomainError::Source(format!("{} id {}: {}", file_name, id, msg))
        }
        other => other,
    })
}

fn map_tasks(rows: Vec<TaskRow>) -> Result<Vec<TaskRecord>, DomainError> {
    rows.into_iter()
        .map(|r| -> Result<TaskRecord, DomainError> {
            let due_date = with_context(TASKS_FILE, r.id, parse_date(&r.due_date))?;
            Ok(TaskRecord {
                id: r.id,
                client_id: r.client_id,
                name: r.name,
                status: r.status,
                due_date,
                priority: r.priority,
            })
        })
        .collect()
}

fn map_meetings(rows: Vec<MeetingRow>) -> Result<Vec<MeetingRecord>, DomainError> {
    rows.into_iter()
        .map(|r| -> Result<MeetingRecord, DomainError> {
            let date = with_context(MEETINGS_FILE, r.id, parse_date(&r.date))?;
            Ok(MeetingRecord {
                id: r.id,
                client_id: r.client_id,
                meeting_type: r.meeting_type,
                date,
                duration_minutes: r.duration,
                status: r.status,
            })
        })
        .collect()
}

fn map_communications(
    rows: Vec<CommunicationRow>,
) -> Result<Vec<CommunicationRecord>, DomainError> {
    rows.into_iter()
        .map(|r| -> Result<CommunicationRecord, DomainError> {
            let timestamp = with_context(COMMUNICATIONS_FILE, r.id, parse_timestamp(&r.date))?;
            Ok(CommunicationRecord {
                id: r.id,
                client_id: r.client_id,
                comm_type: r.comm_type,
                timestamp,
                direction: r.direction,
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl RecordSource for CsvDirSource {
    async fn load(&self) -> Result<Dataset, DomainError> {
        let clients: Vec<ClientRow> = self.read_rows(CLIENTS_FILE).await?;
        let tasks: Vec<TaskRow> = self.read_rows(TASKS_FILE).await?;
        let meetings: Vec<MeetingRow> = self.read_rows(MEETINGS_FILE).await?;
        let communications: Vec<CommunicationRow> = self.read_rows(COMMUNICATIONS_FILE).await?;

        let dataset = Dataset {
            clients: clients
                .into_iter()
                .map(|r| ClientRecord {
                    id: r.id,
                    name: r.name,
                })
                .collect(),
            tasks: map_tasks(tasks)?,
            meetings: map_meetings(meetings)?,
            communications: map_communications(communications)?,
        };

        info!(
            dir = %self.dir.display(),
            clients = dataset.clients.len(),
            tasks = dataset.tasks.len(),
            meetings = dataset.meetings.len(),
            communications = dataset.communications.len(),
            "loaded CSV records"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.dir.display())
    }
}
