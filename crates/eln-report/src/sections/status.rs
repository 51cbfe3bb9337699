//! Reaction status badge.

use eln_common::ReactionStatus;
use serde::{Deserialize, Serialize};

/// Semantic marker of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMarker {
    Success,
    Planned,
    Failure,
}

impl StatusMarker {
    /// Tooltip text.
    pub fn tooltip(&self) -> &'static str {
        match self {
            StatusMarker::Success => "Successful Reaction",
            StatusMarker::Planned => "Planned Reaction",
            StatusMarker::Failure => "Not Successful Reaction",
        }
    }

    /// Icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            StatusMarker::Success => "check-circle",
            StatusMarker::Planned => "clock-o",
            StatusMarker::Failure => "times-circle-o",
        }
    }
}

impl From<ReactionStatus> for StatusMarker {
    fn from(status: ReactionStatus) -> Self {
        match status {
            ReactionStatus::Successful => StatusMarker::Success,
            ReactionStatus::Planned => StatusMarker::Planned,
            ReactionStatus::NotSuccessful => StatusMarker::Failure,
        }
    }
}

/// Status badge shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub marker: StatusMarker,
    pub tooltip: String,
    pub icon: String,
}

impl StatusBadge {
    /// Badge for a status; no status means no badge.
    pub fn for_status(status: Option<ReactionStatus>) -> Option<Self> {
        status.map(|s| {
            let marker = StatusMarker::from(s);
            Self {
                marker,
                tooltip: marker.tooltip().to_string(),
                icon: marker.icon().to_string(),
            }
        })
    }

    /// Badge for a raw status string; unrecognized values yield no badge.
    pub fn from_raw(status: Option<&str>) -> Option<Self> {
        Self::for_status(status.and_then(ReactionStatus::parse))
    }
}
