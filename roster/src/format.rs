//! Cell formatting for roster rows.

use votelens_types::{DelegateRow, LockTotal};
use votelens_utils::{abbreviate, format_grouped};

/// Above this value lock totals are shown without decimals.
const INTEGER_THRESHOLD: f64 = 999.0;

/// Characters kept from each end of an unnamed delegate's address.
const LABEL_HEAD: usize = 8;
const LABEL_TAIL: usize = 4;

/// Render a lock total for display.
///
/// Totals above 999 are rounded to a grouped integer (`1,235`); smaller
/// totals keep exactly two grouped decimals (`45.60`).
pub fn format_lock_total(total: &LockTotal) -> String {
    let value = total.value();
    if value > INTEGER_THRESHOLD {
        format_grouped(value.round(), 0)
    } else {
        format_grouped(value, 2)
    }
}

/// Text of the delegate cell: the name, or the abbreviated address for unnamed delegates.
pub fn delegate_label(row: &DelegateRow) -> String {
    match row.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => abbreviate(row.vote_delegate.as_str(), LABEL_HEAD, LABEL_TAIL),
    }
}

/// Block-explorer page for the delegate's address.
pub fn explorer_link(base_url: &str, row: &DelegateRow) -> String {
    format!("{}/address/{}", base_url.trim_end_matches('/'), row.vote_delegate)
}
