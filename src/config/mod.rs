use crate::core::{MarkerMode, MarkerPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::booking::BookingStatus;
use crate::models::bus_assignment::BusStatus;
use crate::models::guide_application::ApplicationStatus;
use crate::models::shift::ShiftStatus;
use crate::models::{RecordKind, SearchField};
use crate::ui::messages::success;
use crate::utils::date::ReferenceZone;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON snapshot of the backend fetch results
    #[serde(default = "default_records")]
    pub records: String,
    #[serde(default = "default_timezone")]
    pub reference_timezone: String,
    #[serde(default = "default_marker_mode")]
    pub marker_mode: String,
    #[serde(default = "default_max_dots")]
    pub max_dots: usize,
    #[serde(default = "default_status_priority")]
    pub status_priority: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_records() -> String {
    Config::records_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_marker_mode() -> String {
    MarkerMode::StatusDots.as_str().to_string()
}
fn default_max_dots() -> usize {
    3
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_search_fields() -> Vec<String> {
    SearchField::defaults()
        .iter()
        .map(|f| f.as_str().to_string())
        .collect()
}

fn default_status_priority() -> BTreeMap<String, Vec<String>> {
    RecordKind::all()
        .into_iter()
        .map(|k| {
            let order = builtin_priority(k).into_iter().map(String::from).collect();
            (k.as_str().to_string(), order)
        })
        .collect()
}

fn builtin_priority(kind: RecordKind) -> Vec<&'static str> {
    match kind {
        RecordKind::Booking => BookingStatus::priority(),
        RecordKind::Shift => ShiftStatus::priority(),
        RecordKind::GuideApplication => ApplicationStatus::priority(),
        RecordKind::BusAssignment => BusStatus::priority(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records: default_records(),
            reference_timezone: default_timezone(),
            marker_mode: default_marker_mode(),
            max_dots: default_max_dots(),
            status_priority: default_status_priority(),
            search_fields: default_search_fields(),
            separator_char: default_separator_char(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tourdesk")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tourdesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tourdesk.conf")
    }

    /// Default location of the records snapshot
    pub fn records_file() -> PathBuf {
        Self::config_dir().join("records.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Create the config directory and write a default config file.
    /// In test mode nothing is written.
    pub fn init_all(custom_records: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(records) = custom_records {
            config.records = records;
        }

        if is_test {
            return Ok(config);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&config)?;
        fs::write(Self::config_file(), yaml)?;
        success(format!("Config file: {}", Self::config_file().display()));

        Ok(config)
    }

    pub fn records_path(&self) -> PathBuf {
        expand_tilde(&self.records)
    }

    pub fn zone(&self) -> AppResult<ReferenceZone> {
        ReferenceZone::parse(&self.reference_timezone)
    }

    /// Search fields from config; unknown names are a configuration error.
    pub fn search_fields(&self) -> AppResult<Vec<SearchField>> {
        if self.search_fields.is_empty() {
            return Ok(SearchField::defaults());
        }
        self.search_fields
            .iter()
            .map(|f| {
                SearchField::from_str_opt(f)
                    .ok_or_else(|| AppError::Config(format!("unknown search field '{f}'")))
            })
            .collect()
    }

    /// Status drawing order for `kind`, or the merged order of all kinds.
    pub fn status_priority(&self, kind: Option<RecordKind>) -> Vec<String> {
        let kinds: Vec<RecordKind> = match kind {
            Some(k) => vec![k],
            None => RecordKind::all().to_vec(),
        };

        let mut order: Vec<String> = Vec::new();
        for k in kinds {
            let list = match self.status_priority.get(k.as_str()) {
                Some(configured) => configured.clone(),
                None => builtin_priority(k).into_iter().map(String::from).collect(),
            };
            for status in list {
                if !order.contains(&status) {
                    order.push(status);
                }
            }
        }
        order
    }

    /// Marker policy for `kind`, with optional CLI overrides.
    pub fn marker_policy(
        &self,
        kind: Option<RecordKind>,
        mode: Option<MarkerMode>,
        max_dots: Option<usize>,
    ) -> AppResult<MarkerPolicy> {
        let mode = match mode {
            Some(m) => m,
            None => MarkerMode::parse(&self.marker_mode)?,
        };
        Ok(MarkerPolicy {
            mode,
            max_dots: max_dots.unwrap_or(self.max_dots),
            priority: self.status_priority(kind),
        })
    }
}
