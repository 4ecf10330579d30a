use super::{Fetched, RecordSource, UnreadableEntry};
use crate::errors::{AppError, AppResult};
use crate::models::{DatedRecord, Record};
use crate::utils::date::{self, ReferenceZone};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads a JSON array of tagged records, as exported from the backend.
///
/// ```json
/// [{"kind": "booking", "id": "b1", "confirmation_code": "TX-1", ...}]
/// ```
pub struct JsonFileSource {
    path: PathBuf,
    zone: ReferenceZone,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, zone: ReferenceZone) -> Self {
        Self {
            path: path.into(),
            zone,
        }
    }

    /// Every entry of the snapshot, unfiltered.
    pub fn fetch_all(&self) -> AppResult<Fetched> {
        if !self.path.exists() {
            return Err(AppError::SourceMissing(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<Value> = serde_json::from_str(&content)?;

        let mut fetched = Fetched {
            records: Vec::with_capacity(entries.len()),
            unreadable: Vec::new(),
        };
        for (position, entry) in entries.into_iter().enumerate() {
            let id = entry.get("id").map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });
            match serde_json::from_value::<Record>(entry) {
                Ok(r) => fetched.records.push(r),
                Err(e) => {
                    warn!(position, id = ?id, "unreadable record: {e}");
                    fetched.unreadable.push(UnreadableEntry {
                        position,
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            records = fetched.records.len(),
            unreadable = fetched.unreadable.len(),
            "snapshot loaded"
        );
        Ok(fetched)
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Fetched> {
        let mut fetched = self.fetch_all()?;

        fetched.records.retain(|r| {
            match r.occurs_on().and_then(|raw| date::day_key(raw, self.zone)) {
                Some(day) => day >= start && day <= end,
                // undated records always go through so they get reported
                None => true,
            }
        });
        Ok(fetched)
    }
}
