//! Core domain layer. No external I/O dependencies.
//!
//! Entities, dimensions, summaries and the dashboard document live here.
//! Dependencies flow inward.

pub mod dashboard;
pub mod dimension;
pub mod entities;
pub mod errors;
pub mod stats;
pub mod summary;

pub use dashboard::{
    ClientInsights, CommunicationAnalysis, DashboardData, KeyMetric, MeetingAnalysis,
    RecentActivities, TaskAnalysis,
};
pub use dimension::{Dimension, DimensionSet, DimensionSpec};
pub use entities::{ClientRecord, CommunicationRecord, Dataset, MeetingRecord, TaskRecord};
pub use errors::DomainError;
pub use stats::Describe;
pub use summary::{CategoryCount, Summary};
