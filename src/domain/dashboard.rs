//! Dashboard document. Everything the dashboard view renders, derived from
//! one `Dataset` at one reference date.

use super::entities::{CommunicationRecord, MeetingRecord, TaskRecord};
use super::stats::Describe;
use super::summary::Summary;
use chrono::NaiveDate;
use serde::Serialize;

/// A headline figure shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: u64,
}

impl KeyMetric {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value: value as u64,
        }
    }
}

/// Distribution of per-client record counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientInsights {
    pub total_clients: usize,
    pub tasks_per_client: Option<Describe>,
    pub meetings_per_client: Option<Describe>,
    pub communications_per_client: Option<Describe>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAnalysis {
    pub total_tasks: usize,
    pub status_distribution: Summary,
    pub priority_distribution: Summary,
    pub upcoming_deadlines: Vec<TaskRecord>,
    pub overdue_tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingAnalysis {
    pub total_meetings: usize,
    pub type_distribution: Summary,
    pub status_distribution: Summary,
    pub upcoming_meetings: Vec<MeetingRecord>,
    /// Minutes. `None` when there are no meetings.
    pub average_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunicationAnalysis {
    pub total_communications: usize,
    pub type_distribution: Summary,
    pub direction_distribution: Summary,
    /// Records per distinct calendar day that has any records.
    pub daily_average: f64,
    pub busiest_day: Option<NaiveDate>,
}

/// Newest-first slices of each record kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivities {
    pub recent_tasks: Vec<TaskRecord>,
    pub recent_meetings: Vec<MeetingRecord>,
    pub recent_communications: Vec<CommunicationRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub as_of: NaiveDate,
    pub key_metrics: Vec<KeyMetric>,
    pub client_insights: ClientInsights,
    pub task_analysis: TaskAnalysis,
    pub meeting_analysis: MeetingAnalysis,
    pub communication_analysis: CommunicationAnalysis,
    pub recent_activities: RecentActivities,
}
