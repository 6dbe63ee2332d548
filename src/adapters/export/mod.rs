//! Output boundary. Renders reports and writes them to disk.

pub mod csv_reports;
pub mod fs_sink;

pub use fs_sink::FsReportSink;
