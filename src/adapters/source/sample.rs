//! Built-in sample dataset for demos and testing without input files.
//!
//! Deterministic: the same records on every run. Category counts reproduce
//! the reference dashboard figures (50 clients, 100 tasks, 50 meetings,
//! 200 communications).

use crate::domain::{
    ClientRecord, CommunicationRecord, Dataset, DomainError, MeetingRecord, TaskRecord,
};
use crate::ports::RecordSource;
use chrono::{NaiveDate, TimeDelta};
use tracing::info;

const CLIENT_COUNT: usize = 50;

const TASK_NAMES: [&str; 10] = [
    "Contract Review",
    "Follow-up Meeting",
    "Project Proposal",
    "Invoice Processing",
    "Client Presentation",
    "Documentation",
    "Quality Check",
    "Status Update",
    "Resource Planning",
    "Budget Review",
];

const TASK_STATUS: &[(&str, usize)] = &[
    ("Completed", 25),
    ("In Progress", 30),
    ("Pending", 35),
    ("Delayed", 10),
];
const TASK_PRIORITY: &[(&str, usize)] = &[("High", 20), ("Medium", 45), ("Low", 35)];
const MEETING_TYPE: &[(&str, usize)] = &[("Virtual", 25), ("In-Person", 15), ("Phone Call", 10)];
const MEETING_STATUS: &[(&str, usize)] = &[("Scheduled", 20), ("Completed", 20), ("Cancelled", 10)];
const MEETING_DURATIONS: [u32; 4] = [30, 60, 90, 120];
const COMM_TYPE: &[(&str, usize)] = &[
    ("Email", 80),
    ("Phone", 45),
    ("Meeting", 40),
    ("Video Call", 35),
];
const COMM_DIRECTION: &[(&str, usize)] = &[("Incoming", 100), ("Outgoing", 100)];

/// Preferred stride for interleaving categories.
const STRIDE: usize = 7;

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Expand `(label, count)` pairs and interleave them deterministically, so
/// equal labels are not bunched together.
fn spread(parts: &[(&'static str, usize)]) -> Vec<&'static str> {
    let expanded: Vec<&'static str> = parts
        .iter()
        .flat_map(|&(label, n)| std::iter::repeat_n(label, n))
        .collect();
    let n = expanded.len();
    if n <= 1 {
        return expanded;
    }
    // A stride coprime with n makes `i * stride % n` a permutation.
    let stride = (STRIDE..).find(|&s| gcd(s, n) == 1).unwrap_or(1);
    let mut out = vec![""; n];
    for (i, label) in expanded.into_iter().enumerate() {
        out[(i * stride) % n] = label;
    }
    out
}

/// Uneven but deterministic client assignment.
fn client_for(i: usize) -> String {
    client_id((i * 17 + i / 7) % CLIENT_COUNT)
}

fn client_id(idx: usize) -> String {
    format!("C{:03}", idx + 1)
}

pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    /// Build the sample dataset synchronously.
    pub fn dataset(&self) -> Result<Dataset, DomainError> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .ok_or_else(|| DomainError::Source("invalid sample start date".into()))?;
        let start_ts = start
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DomainError::Source("invalid sample start time".into()))?;

        let clients = (0..CLIENT_COUNT)
            .map(|i| ClientRecord {
                id: client_id(i),
                name: format!("Client {:03}", i + 1),
            })
            .collect();

        let statuses = spread(TASK_STATUS);
        let priorities = spread(TASK_PRIORITY);
        let tasks = statuses
            .iter()
            .zip(&priorities)
            .enumerate()
            .map(|(i, (status, priority))| TaskRecord {
                id: i as u32 + 1,
                client_id: client_for(i),
                name: TASK_NAMES[i % TASK_NAMES.len()].to_string(),
                status: status.to_string(),
                due_date: start + TimeDelta::days(i as i64),
                priority: priority.to_string(),
            })
            .collect();

        let meeting_types = spread(MEETING_TYPE);
        let meeting_statuses = spread(MEETING_STATUS);
        let meetings = meeting_types
            .iter()
            .zip(&meeting_statuses)
            .enumerate()
            .map(|(i, (kind, status))| MeetingRecord {
                id: i as u32 + 1,
                client_id: client_for(i + 3),
                meeting_type: kind.to_string(),
                date: start + TimeDelta::days(i as i64),
                duration_minutes: MEETING_DURATIONS[i % MEETING_DURATIONS.len()],
                status: status.to_string(),
            })
            .collect();

        let comm_types = spread(COMM_TYPE);
        let directions = spread(COMM_DIRECTION);
        let communications = comm_types
            .iter()
            .zip(&directions)
            .enumerate()
            .map(|(i, (kind, direction))| CommunicationRecord {
                id: i as u32 + 1,
                client_id: client_for(i + 11),
                comm_type: kind.to_string(),
                timestamp: start_ts + TimeDelta::hours(i as i64),
                direction: direction.to_string(),
            })
            .collect();

        Ok(Dataset {
            clients,
            tasks,
            meetings,
            communications,
        })
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordSource for SampleSource {
    async fn load(&self) -> Result<Dataset, DomainError> {
        let dataset = self.dataset()?;
        info!(
            tasks = dataset.tasks.len(),
            meetings = dataset.meetings.len(),
            communications = dataset.communications.len(),
            "[SAMPLE] using built-in sample records"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        "sample".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_keeps_counts_and_interleaves() {
        let out = spread(&[("A", 3), ("B", 7)]);
        assert_eq!(out, vec!["A", "B", "B", "B", "A", "B", "B", "A", "B", "B"]);

        // 7 items: stride 7 is not coprime, the next one is used.
        let out = spread(&[("A", 3), ("B", 4)]);
        assert_eq!(out.iter().filter(|&&l| l == "A").count(), 3);
        assert_eq!(out.iter().filter(|&&l| l == "B").count(), 4);
        assert!(out.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_sample_sizes_and_dates() {
        let ds = SampleSource::new().dataset().unwrap();
        assert_eq!(ds.clients.len(), 50);
        assert_eq!(ds.tasks.len(), 100);
        assert_eq!(ds.meetings.len(), 50);
        assert_eq!(ds.communications.len(), 200);

        assert_eq!(ds.clients[49].id, "C050");
        assert_eq!(ds.tasks[0].due_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(ds.tasks[99].due_date, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
        assert_eq!(
            ds.communications[25].timestamp,
            NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
        let known: std::collections::HashSet<&str> =
            ds.clients.iter().map(|c| c.id.as_str()).collect();
        assert!(ds.tasks.iter().all(|t| known.contains(t.client_id.as_str())));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let a = SampleSource::new().dataset().unwrap();
        let b = SampleSource::new().dataset().unwrap();
        assert_eq!(a, b);
    }
}
