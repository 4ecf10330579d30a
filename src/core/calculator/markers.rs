//! Calendar marker derivation: a count badge or a fixed-priority row of
//! status dots per day.

use crate::errors::{AppError, AppResult};
use crate::models::DaySummary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerMode {
    SingleCount,
    StatusDots,
}

impl MarkerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerMode::SingleCount => "single-count",
            MarkerMode::StatusDots => "status-dots",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "single-count" | "count" => Ok(MarkerMode::SingleCount),
            "status-dots" | "dots" => Ok(MarkerMode::StatusDots),
            other => Err(AppError::InvalidMarkerMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPolicy {
    pub mode: MarkerMode,
    pub max_dots: usize,
    /// Status tags in drawing order, highest priority first.
    pub priority: Vec<String>,
}

impl MarkerPolicy {
    pub fn single_count() -> Self {
        Self {
            mode: MarkerMode::SingleCount,
            max_dots: 0,
            priority: Vec::new(),
        }
    }

    pub fn status_dots<S: AsRef<str>>(priority: &[S], max_dots: usize) -> Self {
        Self {
            mode: MarkerMode::StatusDots,
            max_dots,
            priority: priority.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDot {
    pub status: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MarkerSpec {
    Count(usize),
    Dots(Vec<StatusDot>),
}

impl MarkerSpec {
    /// True when the marker has nothing to draw.
    pub fn is_blank(&self) -> bool {
        match self {
            MarkerSpec::Count(n) => *n == 0,
            MarkerSpec::Dots(dots) => dots.iter().all(|d| !d.present),
        }
    }
}

/// Derive the display marker of a day.
///
/// In dot mode every status of the priority list yields one `(status, present)`
/// entry in list order, and the list is cut after `max_dots` entries.
pub fn marker_glyph(summary: &DaySummary, policy: &MarkerPolicy) -> MarkerSpec {
    match policy.mode {
        MarkerMode::SingleCount => MarkerSpec::Count(summary.count),
        MarkerMode::StatusDots => MarkerSpec::Dots(
            policy
                .priority
                .iter()
                .take(policy.max_dots)
                .map(|status| StatusDot {
                    status: status.clone(),
                    present: summary.status_count(status) > 0,
                })
                .collect(),
        ),
    }
}
