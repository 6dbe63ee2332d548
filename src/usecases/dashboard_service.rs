//! Dashboard service. Builds the full dashboard document from a dataset.
//!
//! Synchronous and pure: the reference date is passed in, never read from
//! the clock, so the same dataset and date always give the same document.

use super::aggregator::summarize_by;
use crate::domain::{
    ClientInsights, CommunicationAnalysis, DashboardData, Dataset, Describe, Dimension,
    DimensionSet, DomainError, KeyMetric, MeetingAnalysis, RecentActivities, Summary,
    TaskAnalysis,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_UPCOMING_LIMIT: usize = 5;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Limits for the list sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub upcoming_limit: usize,
    pub recent_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

pub struct DashboardService {
    dimensions: DimensionSet,
    options: DashboardOptions,
}

impl DashboardService {
    pub fn new(dimensions: DimensionSet, options: DashboardOptions) -> Self {
        Self {
            dimensions,
            options,
        }
    }

    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    /// Summarize one dimension of the dataset.
    pub fn summarize(
        &self,
        dataset: &Dataset,
        dimension: Dimension,
    ) -> Result<Summary, DomainError> {
        let spec = self.dimensions.get(dimension);
        match dimension {
            Dimension::TaskStatus => summarize_by(&dataset.tasks, spec, |t| t.status.as_str()),
            Dimension::TaskPriority => summarize_by(&dataset.tasks, spec, |t| t.priority.as_str()),
            Dimension::MeetingType => {
                summarize_by(&dataset.meetings, spec, |m| m.meeting_type.as_str())
            }
            Dimension::MeetingStatus => {
                summarize_by(&dataset.meetings, spec, |m| m.status.as_str())
            }
            Dimension::CommunicationType => {
                summarize_by(&dataset.communications, spec, |c| c.comm_type.as_str())
            }
            Dimension::CommunicationDirection => {
                summarize_by(&dataset.communications, spec, |c| c.direction.as_str())
            }
        }
    }

    /// Build the whole dashboard as of `as_of`.
    ///
    /// # Errors
    /// `UnknownCategory` from any dimension aborts the build.
    pub fn build(&self, dataset: &Dataset, as_of: NaiveDate) -> Result<DashboardData, DomainError> {
        debug!(
            clients = dataset.clients.len(),
            tasks = dataset.tasks.len(),
            meetings = dataset.meetings.len(),
            communications = dataset.communications.len(),
            %as_of,
            "building dashboard"
        );

        Ok(DashboardData {
            as_of,
            key_metrics: key_metrics(dataset),
            client_insights: client_insights(dataset),
            task_analysis: self.task_analysis(dataset, as_of)?,
            meeting_analysis: self.meeting_analysis(dataset, as_of)?,
            communication_analysis: self.communication_analysis(dataset)?,
            recent_activities: self.recent_activities(dataset),
        })
    }

    fn task_analysis(
        &self,
        dataset: &Dataset,
        as_of: NaiveDate,
    ) -> Result<TaskAnalysis, DomainError> {
        let mut upcoming: Vec<_> = dataset
            .tasks
            .iter()
            .filter(|t| t.due_date >= as_of)
            .cloned()
            .collect();
        upcoming.sort_by_key(|t| t.due_date);
        upcoming.truncate(self.options.upcoming_limit);

        Ok(TaskAnalysis {
            total_tasks: dataset.tasks.len(),
            status_distribution: self.summarize(dataset, Dimension::TaskStatus)?,
            priority_distribution: self.summarize(dataset, Dimension::TaskPriority)?,
            upcoming_deadlines: upcoming,
            overdue_tasks: dataset.tasks.iter().filter(|t| t.due_date < as_of).count(),
        })
    }

    fn meeting_analysis(
        &self,
        dataset: &Dataset,
        as_of: NaiveDate,
    ) -> Result<MeetingAnalysis, DomainError> {
        let meetings = &dataset.meetings;
        let mut upcoming: Vec<_> = meetings.iter().filter(|m| m.date >= as_of).cloned().collect();
        upcoming.sort_by_key(|m| m.date);
        upcoming.truncate(self.options.upcoming_limit);

        let average_duration = (!meetings.is_empty()).then(|| {
            let total: u64 = meetings.iter().map(|m| u64::from(m.duration_minutes)).sum();
            total as f64 / meetings.len() as f64
        });

        Ok(MeetingAnalysis {
            total_meetings: meetings.len(),
            type_distribution: self.summarize(dataset, Dimension::MeetingType)?,
            status_distribution: self.summarize(dataset, Dimension::MeetingStatus)?,
            upcoming_meetings: upcoming,
            average_duration,
        })
    }

    fn communication_analysis(
        &self,
        dataset: &Dataset,
    ) -> Result<CommunicationAnalysis, DomainError> {
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for c in &dataset.communications {
            *per_day.entry(c.timestamp.date()).or_default() += 1;
        }

        let daily_average = if per_day.is_empty() {
            0.0
        } else {
            dataset.communications.len() as f64 / per_day.len() as f64
        };

        // Ascending scan with strict `>` keeps the earliest day on ties.
        let mut busiest: Option<(NaiveDate, u64)> = None;
        for (&day, &count) in &per_day {
            if busiest.is_none_or(|(_, best)| count > best) {
                busiest = Some((day, count));
            }
        }

        Ok(CommunicationAnalysis {
            total_communications: dataset.communications.len(),
            type_distribution: self.summarize(dataset, Dimension::CommunicationType)?,
            direction_distribution: self.summarize(dataset, Dimension::CommunicationDirection)?,
            daily_average,
            busiest_day: busiest.map(|(day, _)| day),
        })
    }

    fn recent_activities(&self, dataset: &Dataset) -> RecentActivities {
        let limit = self.options.recent_limit;

        let mut tasks = dataset.tasks.clone();
        tasks.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        tasks.truncate(limit);

        let mut meetings = dataset.meetings.clone();
        meetings.sort_by(|a, b| b.date.cmp(&a.date));
        meetings.truncate(limit);

        let mut communications = dataset.communications.clone();
        communications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        communications.truncate(limit);

        RecentActivities {
            recent_tasks: tasks,
            recent_meetings: meetings,
            recent_communications: communications,
        }
    }
}

fn key_metrics(dataset: &Dataset) -> Vec<KeyMetric> {
    vec![
        KeyMetric::new("Total Clients", dataset.clients.len()),
        KeyMetric::new("Active Tasks", dataset.tasks.len()),
        KeyMetric::new("Scheduled Meetings", dataset.meetings.len()),
        KeyMetric::new("Communications", dataset.communications.len()),
    ]
}

fn client_insights(dataset: &Dataset) -> ClientInsights {
    ClientInsights {
        total_clients: dataset.clients.len(),
        tasks_per_client: per_client(dataset.tasks.iter().map(|t| t.client_id.as_str())),
        meetings_per_client: per_client(dataset.meetings.iter().map(|m| m.client_id.as_str())),
        communications_per_client: per_client(
            dataset.communications.iter().map(|c| c.client_id.as_str()),
        ),
    }
}

/// Describe the record counts of clients that appear at least once.
fn per_client<'a>(client_ids: impl Iterator<Item = &'a str>) -> Option<Describe> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for id in client_ids {
        *counts.entry(id).or_default() += 1;
    }
    let values: Vec<u64> = counts.into_values().collect();
    Describe::of(&values)
}
