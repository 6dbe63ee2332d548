//! Application configuration. Record source, paths, limits, dimension labels.

use crate::domain::{Dimension, DimensionSet, DomainError};
use crate::usecases::dashboard_service::{
    DashboardOptions, DEFAULT_RECENT_LIMIT, DEFAULT_UPCOMING_LIMIT,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_DIR: &str = "./reports";
const ENV_PREFIX: &str = "CLIENT_DASH";

/// Where records are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Built-in deterministic sample dataset.
    #[default]
    Sample,
    /// Directory of CSV exports.
    Csv,
    /// Single JSON dataset file.
    Json,
}

impl FromStr for SourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(SourceKind::Sample),
            "csv" => Ok(SourceKind::Csv),
            "json" => Ok(SourceKind::Json),
            other => Err(DomainError::Config(format!(
                "unknown source {:?} (expected sample, csv or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::Sample => "sample",
            SourceKind::Csv => "csv",
            SourceKind::Json => "json",
        })
    }
}

/// Label overrides per dimension. Only settable from a config file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DimensionOverrides {
    #[serde(default)]
    pub task_status: Option<Vec<String>>,
    #[serde(default)]
    pub task_priority: Option<Vec<String>>,
    #[serde(default)]
    pub meeting_type: Option<Vec<String>>,
    #[serde(default)]
    pub meeting_status: Option<Vec<String>>,
    #[serde(default)]
    pub communication_type: Option<Vec<String>>,
    #[serde(default)]
    pub communication_direction: Option<Vec<String>>,
}

impl DimensionOverrides {
    fn iter(&self) -> impl Iterator<Item = (Dimension, &Vec<String>)> {
        [
            (Dimension::TaskStatus, &self.task_status),
            (Dimension::TaskPriority, &self.task_priority),
            (Dimension::MeetingType, &self.meeting_type),
            (Dimension::MeetingStatus, &self.meeting_status),
            (Dimension::CommunicationType, &self.communication_type),
            (Dimension::CommunicationDirection, &self.communication_direction),
        ]
        .into_iter()
        .filter_map(|(d, labels)| labels.as_ref().map(|l| (d, l)))
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Record source: sample | csv | json. Read from CLIENT_DASH_SOURCE.
    #[serde(default)]
    pub source: Option<String>,

    /// Directory of CSV exports (csv source). Read from CLIENT_DASH_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// JSON dataset file (json source). Read from CLIENT_DASH_INPUT.
    #[serde(default)]
    pub input: Option<String>,

    /// Where dashboard JSON and CSV reports are written. Read from CLIENT_DASH_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Reference date (YYYY-MM-DD) for upcoming/overdue. Read from CLIENT_DASH_AS_OF.
    #[serde(default)]
    pub as_of: Option<String>,

    /// Max upcoming deadlines/meetings listed. Read from CLIENT_DASH_UPCOMING_LIMIT.
    #[serde(default)]
    pub upcoming_limit: Option<usize>,

    /// Max recent activities listed per kind. Read from CLIENT_DASH_RECENT_LIMIT.
    #[serde(default)]
    pub recent_limit: Option<usize>,

    #[serde(default)]
    pub dimensions: DimensionOverrides,
}

impl AppConfig {
    /// Environment (CLIENT_DASH_*) over an optional file named by CLIENT_DASH_CONFIG.
    /// Any unreadable or malformed value is a `Config` error.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let file = std::env::var("CLIENT_DASH_CONFIG").ok();
        Self::from_sources(file.as_deref(), env_source())
    }

    fn from_sources(file: Option<&str>, env: config::Environment) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn source_kind_or_default(&self) -> Result<SourceKind, DomainError> {
        self.source
            .as_deref()
            .map(str::parse::<SourceKind>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// JSON input path. Defaults to `<data_dir>/dataset.json`.
    pub fn input_or_default(&self) -> PathBuf {
        self.input
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join("dataset.json"))
    }

    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    /// Configured reference date, if any.
    pub fn as_of(&self) -> Result<Option<NaiveDate>, DomainError> {
        self.as_of
            .as_deref()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map_err(|e| DomainError::Config(format!("as_of {:?}: {}", s, e)))
            })
            .transpose()
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            upcoming_limit: self.upcoming_limit.unwrap_or(DEFAULT_UPCOMING_LIMIT),
            recent_limit: self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT),
        }
    }

    /// Built-in dimensions with configured label overrides applied.
    pub fn dimension_set(&self) -> Result<DimensionSet, DomainError> {
        let mut set = DimensionSet::default();
        for (dimension, labels) in self.dimensions.iter() {
            set.override_labels(dimension, labels.clone())?;
        }
        Ok(set)
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        env_source().source(Some(map))
    }

    #[test]
    fn test_load_from_environment() {
        let cfg = AppConfig::from_sources(
            None,
            env(&[
                ("CLIENT_DASH_SOURCE", "csv"),
                ("CLIENT_DASH_DATA_DIR", "/srv/exports"),
                ("CLIENT_DASH_UPCOMING_LIMIT", "3"),
                ("CLIENT_DASH_AS_OF", "2025-02-15"),
                ("OTHER_APP_SOURCE", "json"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.source_kind_or_default().unwrap(), SourceKind::Csv);
        assert_eq!(cfg.data_dir_or_default(), PathBuf::from("/srv/exports"));
        assert_eq!(cfg.dashboard_options().upcoming_limit, 3);
        assert_eq!(cfg.dashboard_options().recent_limit, DEFAULT_RECENT_LIMIT);
        assert_eq!(cfg.as_of().unwrap(), NaiveDate::from_ymd_opt(2025, 2, 15));
    }

    #[test]
    fn test_malformed_environment_value_is_config_error() {
        let result = AppConfig::from_sources(
            None,
            env(&[
                ("CLIENT_DASH_SOURCE", "csv"),
                ("CLIENT_DASH_UPCOMING_LIMIT", "five"),
            ]),
        );
        assert!(matches!(
            result,
            Err(DomainError::Config(ref msg)) if msg.contains("upcoming_limit")
        ));
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let missing = std::env::temp_dir().join("client-dash-no-such-config.toml");
        let result = AppConfig::from_sources(missing.to_str(), env(&[]));
        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.source_kind_or_default().unwrap(), SourceKind::Sample);
        assert_eq!(cfg.output_dir_or_default(), PathBuf::from("./reports"));
        assert_eq!(cfg.input_or_default(), PathBuf::from("./data/dataset.json"));
        assert_eq!(cfg.as_of().unwrap(), None);
        assert_eq!(cfg.dashboard_options(), DashboardOptions::default());
        assert_eq!(cfg.dimension_set().unwrap(), DimensionSet::default());
    }

    #[test]
    fn test_source_kind_parsing() {
        let cfg = AppConfig {
            source: Some("CSV".into()),
            ..Default::default()
        };
        assert_eq!(cfg.source_kind_or_default().unwrap(), SourceKind::Csv);

        let cfg = AppConfig {
            source: Some("ftp".into()),
            ..Default::default()
        };
        assert!(matches!(
            cfg.source_kind_or_default(),
            Err(DomainError::Config(_))
        ));
    }

    #[test]
    fn test_as_of_parsing() {
        let cfg = AppConfig {
            as_of: Some("2025-03-01".into()),
            ..Default::default()
        };
        assert_eq!(cfg.as_of().unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1));

        let cfg = AppConfig {
            as_of: Some("March".into()),
            ..Default::default()
        };
        assert!(cfg.as_of().is_err());
    }

    #[test]
    fn test_dimension_overrides() {
        let cfg = AppConfig {
            dimensions: DimensionOverrides {
                communication_direction: Some(vec!["In".into(), "Out".into(), "Internal".into()]),
                ..Default::default()
            },
            ..Default::default()
        };
        let set = cfg.dimension_set().unwrap();
        assert_eq!(
            set.get(Dimension::CommunicationDirection).labels(),
            &["In", "Out", "Internal"]
        );
        assert_eq!(set.task_status, Dimension::TaskStatus.default_spec());

        let cfg = AppConfig {
            dimensions: DimensionOverrides {
                task_status: Some(vec!["Done".into(), "Done".into()]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            cfg.dimension_set(),
            Err(DomainError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_deserialize_from_toml_file_source() {
        let toml = r#"
            source = "json"
            upcoming_limit = 3

            [dimensions]
            task_priority = ["Critical", "Normal"]
        "#;
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.source_kind_or_default().unwrap(), SourceKind::Json);
        assert_eq!(cfg.dashboard_options().upcoming_limit, 3);
        assert_eq!(
            cfg.dimension_set().unwrap().task_priority.labels(),
            &["Critical", "Normal"]
        );
    }
}
