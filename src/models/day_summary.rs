use serde::Serialize;
use std::collections::BTreeMap;

/// Derived view of one calendar day.
///
/// `counts_by_status` always sums to `count`; absent days summarize to
/// `DaySummary::default()`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub count: usize,
    pub counts_by_status: BTreeMap<String, usize>,
    pub total_secondary_quantity: u64,
}

impl DaySummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn status_count(&self, status: &str) -> usize {
        self.counts_by_status.get(status).copied().unwrap_or(0)
    }
}
