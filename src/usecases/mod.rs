//! Application use cases. Orchestrate domain logic via ports.

pub mod aggregator;
pub mod dashboard_service;
pub mod report_service;

pub use aggregator::{summarize, summarize_by};
pub use dashboard_service::{DashboardOptions, DashboardService};
pub use report_service::{ExportOutcome, ReportService};
