//! Dimensions: the axes records are counted along, each with a fixed,
//! ordered label set.
//!
//! Label order is display order. Renderers assign colors by position, so
//! the order must not depend on the data.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The dimensions the dashboard knows how to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    TaskStatus,
    TaskPriority,
    MeetingType,
    MeetingStatus,
    CommunicationType,
    CommunicationDirection,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::TaskStatus,
        Dimension::TaskPriority,
        Dimension::MeetingType,
        Dimension::MeetingStatus,
        Dimension::CommunicationType,
        Dimension::CommunicationDirection,
    ];

    /// Kebab-case key used on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::TaskStatus => "task-status",
            Dimension::TaskPriority => "task-priority",
            Dimension::MeetingType => "meeting-type",
            Dimension::MeetingStatus => "meeting-status",
            Dimension::CommunicationType => "communication-type",
            Dimension::CommunicationDirection => "communication-direction",
        }
    }

    /// Human-readable title, e.g. for chart headings.
    pub fn title(self) -> &'static str {
        match self {
            Dimension::TaskStatus => "Task Status",
            Dimension::TaskPriority => "Task Priority",
            Dimension::MeetingType => "Meeting Type",
            Dimension::MeetingStatus => "Meeting Status",
            Dimension::CommunicationType => "Communication Type",
            Dimension::CommunicationDirection => "Communication Direction",
        }
    }

    fn default_labels(self) -> &'static [&'static str] {
        match self {
            Dimension::TaskStatus => &["Completed", "In Progress", "Pending", "Delayed"],
            Dimension::TaskPriority => &["High", "Medium", "Low"],
            Dimension::MeetingType => &["Virtual", "In-Person", "Phone Call"],
            Dimension::MeetingStatus => &["Scheduled", "Completed", "Cancelled"],
            Dimension::CommunicationType => &["Email", "Phone", "Meeting", "Video Call"],
            Dimension::CommunicationDirection => &["Incoming", "Outgoing"],
        }
    }

    /// Built-in spec for this dimension.
    pub fn default_spec(self) -> DimensionSpec {
        DimensionSpec {
            name: self.title().to_string(),
            labels: self
                .default_labels()
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Dimension::ALL
            .into_iter()
            .find(|d| d.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
                DomainError::InvalidDimension(format!(
                    "unknown dimension {:?} (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Canonical ordered label set for one axis of categorization.
///
/// Constructed through [`DimensionSpec::new`], which rejects empty and
/// duplicate label sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSpec {
    name: String,
    labels: Vec<String>,
}

impl DimensionSpec {
    pub fn new(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(DomainError::InvalidDimension(format!(
                "dimension {:?} has no labels",
                name
            )));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(DomainError::InvalidDimension(format!(
                    "dimension {:?} lists label {:?} more than once",
                    name, label
                )));
            }
        }
        Ok(Self { name, labels })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of `label` in canonical order. Exact, case-sensitive match.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// One spec per [`Dimension`]. Defaults to the built-in label sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSet {
    pub task_status: DimensionSpec,
    pub task_priority: DimensionSpec,
    pub meeting_type: DimensionSpec,
    pub meeting_status: DimensionSpec,
    pub communication_type: DimensionSpec,
    pub communication_direction: DimensionSpec,
}

impl DimensionSet {
    pub fn get(&self, dimension: Dimension) -> &DimensionSpec {
        match dimension {
            Dimension::TaskStatus => &self.task_status,
            Dimension::TaskPriority => &self.task_priority,
            Dimension::MeetingType => &self.meeting_type,
            Dimension::MeetingStatus => &self.meeting_status,
            Dimension::CommunicationType => &self.communication_type,
            Dimension::CommunicationDirection => &self.communication_direction,
        }
    }

    /// Replace the label set of one dimension. The display name is kept.
    pub fn override_labels(
        &mut self,
        dimension: Dimension,
        labels: Vec<String>,
    ) -> Result<(), DomainError> {
        let spec = DimensionSpec::new(dimension.title(), labels)?;
        let slot = match dimension {
            Dimension::TaskStatus => &mut self.task_status,
            Dimension::TaskPriority => &mut self.task_priority,
            Dimension::MeetingType => &mut self.meeting_type,
            Dimension::MeetingStatus => &mut self.meeting_status,
            Dimension::CommunicationType => &mut self.communication_type,
            Dimension::CommunicationDirection => &mut self.communication_direction,
        };
        *slot = spec;
        Ok(())
    }
}

impl Default for DimensionSet {
    fn default() -> Self {
        Self {
            task_status: Dimension::TaskStatus.default_spec(),
            task_priority: Dimension::TaskPriority.default_spec(),
            meeting_type: Dimension::MeetingType.default_spec(),
            meeting_status: Dimension::MeetingStatus.default_spec(),
            communication_type: Dimension::CommunicationType.default_spec(),
            communication_direction: Dimension::CommunicationDirection.default_spec(),
        }
    }
}
