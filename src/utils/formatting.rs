//! Formatting helpers shared by list, summary and calendar output.

use std::collections::BTreeMap;

use super::colors::paint_status;

/// `pending=2 approved=1`, statuses coloured, in map order.
pub fn counts_inline(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(status, n)| format!("{}={}", paint_status(status), n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as `counts_inline` without colours, for files.
pub fn counts_plain(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(status, n)| format!("{status}={n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn quantity(q: Option<u32>) -> String {
    q.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}
