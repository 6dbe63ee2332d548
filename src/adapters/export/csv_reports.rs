//! CSV report rendering. Uses the `csv` crate for safe serialization.
//!
//! Pure functions: records in, CSV text out. Writing to disk is the sink's job.

use crate::domain::{Dataset, DimensionSet, DomainError, MeetingRecord, TaskRecord};
use crate::usecases::aggregator::{summarize, summarize_by};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const TASK_STATUS_REPORT: &str = "task_status_report.csv";
pub const CLIENT_ACTIVITY_REPORT: &str = "client_activity_summary.csv";
pub const UPCOMING_MEETINGS_REPORT: &str = "upcoming_meetings.csv";

fn export_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Export(format!("Failed to render CSV: {}", e))
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new())
}

fn finish(mut wtr: csv::Writer<Vec<u8>>) -> Result<String, DomainError> {
    wtr.flush().map_err(export_err)?;
    let bytes = wtr.into_inner().map_err(export_err)?;
    String::from_utf8(bytes).map_err(export_err)
}

/// One row per status label: `Status,Task Count,Priority Breakdown`.
///
/// The breakdown is a compact JSON object of priority -> count, in priority
/// dimension order, with zero entries left out.
///
/// # Errors
/// `UnknownCategory` if any task status or priority is outside its dimension.
pub fn task_status_report(
    tasks: &[TaskRecord],
    dimensions: &DimensionSet,
) -> Result<String, DomainError> {
    let statuses = summarize_by(tasks, &dimensions.task_status, |t| t.status.as_str())?;

    let mut wtr = writer();
    wtr.write_record(["Status", "Task Count", "Priority Breakdown"])
        .map_err(export_err)?;

    for entry in &statuses {
        let priorities = summarize(
            tasks
                .iter()
                .filter(|t| t.status == entry.label)
                .map(|t| t.priority.as_str()),
            &dimensions.task_priority,
        )?;
        let mut breakdown = Vec::new();
        for p in priorities.iter().filter(|p| p.value > 0) {
            let key = serde_json::to_string(&p.label).map_err(export_err)?;
            breakdown.push(format!("{}:{}", key, p.value));
        }
        let breakdown = format!("{{{}}}", breakdown.join(","));
        let count = entry.value.to_string();

        wtr.write_record([entry.label.as_str(), count.as_str(), breakdown.as_str()])
            .map_err(export_err)?;
    }

    finish(wtr)
}

/// One row per client, in client order, zero-filled:
/// `Client ID,Total Tasks,Total Meetings,Total Communications`.
pub fn client_activity_summary(dataset: &Dataset) -> Result<String, DomainError> {
    let mut counts: HashMap<&str, [u64; 3]> = HashMap::with_capacity(dataset.clients.len());
    for t in &dataset.tasks {
        counts.entry(t.client_id.as_str()).or_default()[0] += 1;
    }
    for m in &dataset.meetings {
        counts.entry(m.client_id.as_str()).or_default()[1] += 1;
    }
    for c in &dataset.communications {
        counts.entry(c.client_id.as_str()).or_default()[2] += 1;
    }

    let mut wtr = writer();
    wtr.write_record([
        "Client ID",
        "Total Tasks",
        "Total Meetings",
        "Total Communications",
    ])
    .map_err(export_err)?;

    for client in &dataset.clients {
        let [tasks, meetings, comms] = counts.get(client.id.as_str()).copied().unwrap_or_default();
        wtr.write_record([
            client.id.clone(),
            tasks.to_string(),
            meetings.to_string(),
            comms.to_string(),
        ])
        .map_err(export_err)?;
    }

    finish(wtr)
}

/// Meetings on or after `as_of`, earliest first.
pub fn upcoming_meetings(
    meetings: &[MeetingRecord],
    as_of: NaiveDate,
) -> Result<String, DomainError> {
    let mut upcoming: Vec<&MeetingRecord> = meetings.iter().filter(|m| m.date >= as_of).collect();
    upcoming.sort_by_key(|m| m.date);

    let mut wtr = writer();
    wtr.write_record([
        "Meeting ID",
        "Client ID",
        "Meeting Type",
        "Date",
        "Duration",
        "Status",
    ])
    .map_err(export_err)?;

    for m in upcoming {
        wtr.write_record([
            m.id.to_string(),
            m.client_id.clone(),
            m.meeting_type.clone(),
            m.date.format("%Y-%m-%d").to_string(),
            m.duration_minutes.to_string(),
            m.status.clone(),
        ])
        .map_err(export_err)?;
    }

    finish(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientRecord;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn task(id: u32, client: &str, status: &str, priority: &str) -> TaskRecord {
        TaskRecord {
            id,
            client_id: client.into(),
            name: "Quality Check".into(),
            status: status.into(),
            due_date: date(1),
            priority: priority.into(),
        }
    }

    fn meeting(id: u32, day: u32) -> MeetingRecord {
        MeetingRecord {
            id,
            client_id: "C002".into(),
            meeting_type: "In-Person".into(),
            date: date(day),
            duration_minutes: 45,
            status: "Scheduled".into(),
        }
    }

    #[test]
    fn test_task_status_report() {
        let tasks = vec![
            task(1, "C001", "Pending", "Low"),
            task(2, "C001", "Pending", "High"),
            task(3, "C002", "Completed", "Low"),
            task(4, "C002", "Pending", "Low"),
        ];
        let csv = task_status_report(&tasks, &DimensionSet::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Status,Task Count,Priority Breakdown");
        assert_eq!(lines[1], r#"Completed,1,"{""Low"":1}""#);
        assert_eq!(lines[2], "In Progress,0,{}");
        assert_eq!(lines[3], r#"Pending,3,"{""High"":1,""Low"":2}""#);
        assert_eq!(lines[4], "Delayed,0,{}");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_task_status_report_unknown_priority() {
        let tasks = vec![task(1, "C001", "Pending", "Urgent")];
        assert!(matches!(
            task_status_report(&tasks, &DimensionSet::default()),
            Err(DomainError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_client_activity_summary_zero_fills() {
        let dataset = Dataset {
            clients: vec![
                ClientRecord {
                    id: "C001".into(),
                    name: "Acme".into(),
                },
                ClientRecord {
                    id: "C002".into(),
                    name: "Globex".into(),
                },
            ],
            tasks: vec![task(1, "C001", "Pending", "Low"), task(2, "C001", "Delayed", "Low")],
            meetings: vec![meeting(1, 3)],
            communications: Vec::new(),
        };
        let csv = client_activity_summary(&dataset).unwrap();
        assert_eq!(
            csv,
            "Client ID,Total Tasks,Total Meetings,Total Communications\n\
             C001,2,0,0\n\
             C002,0,1,0\n"
        );
    }

    #[test]
    fn test_upcoming_meetings_sorted_and_filtered() {
        let meetings = vec![meeting(1, 9), meeting(2, 2), meeting(3, 5)];
        let csv = upcoming_meetings(&meetings, date(4)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Meeting ID,Client ID,Meeting Type,Date,Duration,Status");
        assert_eq!(lines[1], "3,C002,In-Person,2025-01-05,45,Scheduled");
        assert_eq!(lines[2], "1,C002,In-Person,2025-01-09,45,Scheduled");
        assert_eq!(lines.len(), 3);
    }
}
