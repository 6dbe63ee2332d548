//! Domain entities. Pure data structures for the core business.
//!
//! No CSV/file types here; sources map their rows into these. Category
//! fields stay plain strings until the aggregator resolves them against a
//! `DimensionSpec`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A client account. Every other record points at one by `client_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
}

/// A task tracked against a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u32,
    pub client_id: String,
    pub name: String,
    /// Category along the task-status dimension.
    pub status: String,
    pub due_date: NaiveDate,
    /// Category along the task-priority dimension.
    pub priority: String,
}

/// A meeting held (or scheduled) with a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: u32,
    pub client_id: String,
    pub meeting_type: String,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub status: String,
}

/// A single logged communication event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationRecord {
    pub id: u32,
    pub client_id: String,
    #[serde(rename = "type")]
    pub comm_type: String,
    pub timestamp: NaiveDateTime,
    pub direction: String,
}

/// Everything a record source yields in one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
    #[serde(default)]
    pub communications: Vec<CommunicationRecord>,
}
