use crate::config::Config;
use crate::core::AggregationIndex;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{DaySummaryExport, ExportFormat};
use crate::models::{Record, RecordKind};
use crate::ui::report::report_rejected;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::io;

pub struct ExportLogic;

impl ExportLogic {
    /// Export per-day summaries.
    ///
    /// - `range`: `None` exports every day that has records; a period
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `start:end`) exports every day of
    ///   it, empty days included
    pub fn export(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        kind: Option<RecordKind>,
        force: bool,
    ) -> AppResult<usize> {
        let (start, end) = match range {
            Some(r) => date::parse_period(r)?,
            None => (NaiveDate::MIN, NaiveDate::MAX),
        };

        let outcome = Core::load_configured(cfg, start, end, kind)?;
        report_rejected(&outcome);

        let days = Self::collect(&outcome.index, range.as_ref().map(|_| (start, end)));

        // the output path is created or overwritten only after the inputs load
        let path = expand_tilde(file);
        ensure_writable(&path, force, &mut io::stdin().lock())?;

        match format {
            ExportFormat::Csv => export_csv(&days, &path)?,
            ExportFormat::Json => export_json(&days, &path)?,
        }
        Ok(days.len())
    }

    /// Rows for every day of `bounds`, or only non-empty days without bounds.
    pub fn collect(
        index: &AggregationIndex<Record>,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<DaySummaryExport> {
        match bounds {
            Some((start, end)) => index
                .summaries_between(start, end)
                .into_iter()
                .map(|(d, s)| DaySummaryExport::new(d, s))
                .collect(),
            None => index
                .days()
                .map(|(d, b)| DaySummaryExport::new(d, b.summary()))
                .collect(),
        }
    }
}
