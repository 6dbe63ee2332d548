//! Report service. Orchestrates the load -> aggregate -> export workflow.
//!
//! Coordinates between the record source (data), the dashboard service
//! (aggregation) and the report sink (files).

use super::dashboard_service::DashboardService;
use crate::adapters::export::csv_reports::{
    self, CLIENT_ACTIVITY_REPORT, TASK_STATUS_REPORT, UPCOMING_MEETINGS_REPORT,
};
use crate::domain::{DashboardData, Dimension, DomainError, Summary};
use crate::ports::{RecordSource, ReportSink};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Paths written by a full export.
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub dashboard: PathBuf,
    pub reports: Vec<PathBuf>,
}

pub struct ReportService {
    source: Arc<dyn RecordSource>,
    sink: Arc<dyn ReportSink>,
    dashboard: DashboardService,
}

impl ReportService {
    /// # Arguments
    /// * `source` - Where records come from (CSV, JSON, sample)
    /// * `sink` - Where dashboard JSON and CSV reports go
    /// * `dashboard` - Aggregation settings (dimensions, list limits)
    pub fn new(
        source: Arc<dyn RecordSource>,
        sink: Arc<dyn ReportSink>,
        dashboard: DashboardService,
    ) -> Self {
        Self {
            source,
            sink,
            dashboard,
        }
    }

    /// Load records and summarize a single dimension. Writes nothing.
    pub async fn summary(&self, dimension: Dimension) -> Result<Summary, DomainError> {
        let dataset = self.source.load().await?;
        let summary = self.dashboard.summarize(&dataset, dimension)?;
        info!(
            source = %self.source.describe(),
            %dimension,
            total = summary.total(),
            "summarized"
        );
        Ok(summary)
    }

    /// Load records, build the dashboard and write `dashboard_data.json`.
    pub async fn dashboard(
        &self,
        as_of: NaiveDate,
    ) -> Result<(DashboardData, PathBuf), DomainError> {
        let dataset = self.source.load().await?;
        let data = self.dashboard.build(&dataset, as_of)?;
        let path = self.sink.write_dashboard(&data).await?;
        Ok((data, path))
    }

    /// Dashboard JSON plus the task status, client activity and upcoming
    /// meetings CSV reports.
    ///
    /// Everything is rendered before anything is written, so a data error
    /// leaves the output directory untouched.
    pub async fn export(&self, as_of: NaiveDate) -> Result<ExportOutcome, DomainError> {
        let dataset = self.source.load().await?;
        let data = self.dashboard.build(&dataset, as_of)?;

        let dims = self.dashboard.dimensions();
        let rendered = [
            (
                TASK_STATUS_REPORT,
                csv_reports::task_status_report(&dataset.tasks, dims)?,
            ),
            (
                CLIENT_ACTIVITY_REPORT,
                csv_reports::client_activity_summary(&dataset)?,
            ),
            (
                UPCOMING_MEETINGS_REPORT,
                csv_reports::upcoming_meetings(&dataset.meetings, as_of)?,
            ),
        ];

        let dashboard = self.sink.write_dashboard(&data).await?;
        let mut reports = Vec::with_capacity(rendered.len());
        for (name, contents) in &rendered {
            reports.push(self.sink.write_report(name, contents).await?);
        }

        info!(
            source = %self.source.describe(),
            %as_of,
            reports = reports.len(),
            "export complete"
        );
        Ok(ExportOutcome { dashboard, reports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::source::SampleSource;
    use crate::domain::{Dataset, DimensionSet};
    use crate::usecases::dashboard_service::DashboardOptions;
    use std::sync::Mutex;

    /// Sink that records what it was asked to write.
    #[derive(Default)]
    struct MemorySink {
        written: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl ReportSink for MemorySink {
        async fn write_dashboard(&self, data: &DashboardData) -> Result<PathBuf, DomainError> {
            let json = serde_json::to_string(data).map_err(|e| DomainError::Export(e.to_string()))?;
            self.written
                .lock()
                .unwrap()
                .push(("dashboard".into(), json));
            Ok(PathBuf::from("dashboard"))
        }

        async fn write_report(
            &self,
            file_name: &str,
            contents: &str,
        ) -> Result<PathBuf, DomainError> {
            self.written
                .lock()
                .unwrap()
                .push((file_name.into(), contents.into()));
            Ok(PathBuf::from(file_name))
        }
    }

    struct FixedSource(Dataset);

    #[async_trait::async_trait]
    impl RecordSource for FixedSource {
        async fn load(&self) -> Result<Dataset, DomainError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    fn service(source: Arc<dyn RecordSource>, sink: Arc<MemorySink>) -> ReportService {
        ReportService::new(
            source,
            sink,
            DashboardService::new(DimensionSet::default(), DashboardOptions::default()),
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[tokio::test]
    async fn test_summary_of_sample() {
        let sink = Arc::new(MemorySink::default());
        let svc = service(Arc::new(SampleSource::new()), Arc::clone(&sink));
        let summary = svc.summary(Dimension::CommunicationType).await.unwrap();
        let pairs: Vec<(&str, u64)> = summary.iter().map(|c| (c.label.as_str(), c.value)).collect();
        assert_eq!(
            pairs,
            vec![("Email", 80), ("Phone", 45), ("Meeting", 40), ("Video Call", 35)]
        );
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_writes_dashboard_and_reports() {
        let sink = Arc::new(MemorySink::default());
        let svc = service(Arc::new(SampleSource::new()), Arc::clone(&sink));
        let outcome = svc.export(as_of()).await.unwrap();
        assert_eq!(outcome.dashboard, PathBuf::from("dashboard"));
        assert_eq!(
            outcome.reports,
            vec![
                PathBuf::from(TASK_STATUS_REPORT),
                PathBuf::from(CLIENT_ACTIVITY_REPORT),
                PathBuf::from(UPCOMING_MEETINGS_REPORT),
            ]
        );
        let written = sink.written.lock().unwrap();
        assert_eq!(written.len(), 4);
        // 50 clients + header.
        assert_eq!(written[2].1.lines().count(), 51);
    }

    #[tokio::test]
    async fn test_export_writes_nothing_on_unknown_category() {
        let mut dataset = SampleSource::new().dataset().unwrap();
        dataset.meetings[0].meeting_type = "Carrier Pigeon".into();
        let sink = Arc::new(MemorySink::default());
        let svc = service(Arc::new(FixedSource(dataset)), Arc::clone(&sink));

        let err = svc.export(as_of()).await.unwrap_err();
        assert!(matches!(err, DomainError::UnknownCategory { .. }));
        assert!(sink.written.lock().unwrap().is_empty());
    }
}
