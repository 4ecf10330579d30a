// src/export/model.rs

use crate::models::DaySummary;
use crate::utils::formatting::counts_plain;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One exported day, status breakdown kept as a map (JSON).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DaySummaryExport {
    pub date: String,
    pub count: usize,
    pub counts_by_status: BTreeMap<String, usize>,
    pub total_secondary_quantity: u64,
}

/// Flat version of `DaySummaryExport` for CSV, statuses as `a=1 b=2`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DaySummaryRow {
    pub date: String,
    pub count: usize,
    pub statuses: String,
    pub total_secondary_quantity: u64,
}

impl DaySummaryExport {
    pub fn new(date: NaiveDate, summary: DaySummary) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            count: summary.count,
            counts_by_status: summary.counts_by_status,
            total_secondary_quantity: summary.total_secondary_quantity,
        }
    }
}

impl From<&DaySummaryExport> for DaySummaryRow {
    fn from(e: &DaySummaryExport) -> Self {
        Self {
            date: e.date.clone(),
            count: e.count,
            statuses: counts_plain(&e.counts_by_status),
            total_secondary_quantity: e.total_secondary_quantity,
        }
    }
}
