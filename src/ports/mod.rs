//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (record sources, report sinks)

pub mod outbound;

pub use outbound::{RecordSource, ReportSink};
