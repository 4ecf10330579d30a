use super::messages::warning;
use crate::core::{Loaded, RejectedRecord};
use crate::models::Record;
use crate::source::UnreadableEntry;

/// Print every fetched entry that did not make it onto a day.
pub fn report_rejected(loaded: &Loaded) {
    print_rejected(&loaded.rejected);
    print_unreadable(&loaded.unreadable);
}

fn print_rejected(rejected: &[RejectedRecord<Record>]) {
    if rejected.is_empty() {
        return;
    }
    warning(format!("{} record(s) without a usable date:", rejected.len()));
    for r in rejected {
        println!(
            "  - [{}] {}: {}",
            r.record.kind().as_str(),
            r.record.label(),
            r.error
        );
    }
}

fn print_unreadable(unreadable: &[UnreadableEntry]) {
    if unreadable.is_empty() {
        return;
    }
    warning(format!("{} unreadable entry(ies) in the snapshot:", unreadable.len()));
    for u in unreadable {
        println!(
            "  - #{} {}: {}",
            u.position,
            u.id.as_deref().unwrap_or("(no id)"),
            u.reason
        );
    }
}
