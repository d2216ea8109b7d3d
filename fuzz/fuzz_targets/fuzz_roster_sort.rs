#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use votelens_roster::{sort_rows, SortDirection, SortField, SortState};
use votelens_types::DelegateRow;

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<(u64, String)>,
    by_lock_total: bool,
    ascending: bool,
}

// Sorting arbitrary rows (including unparseable lock totals) must not panic,
// must keep every row, and must leave keys monotone in the requested direction.
fuzz_target!(|input: Input| {
    let rows: Vec<DelegateRow> = input
        .rows
        .into_iter()
        .enumerate()
        .map(|(i, (delegators, total))| {
            DelegateRow::new(None, format!("0x{i:040x}"), delegators, total.as_str())
        })
        .collect();

    let field = if input.by_lock_total {
        SortField::LockTotal
    } else {
        SortField::DelegatorCount
    };
    let direction = if input.ascending {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };

    let sorted = sort_rows(&rows, SortState::new(field, direction));
    assert_eq!(sorted.len(), rows.len());

    for pair in sorted.windows(2) {
        let (a, b) = (field.key(&pair[0]), field.key(&pair[1]));
        match direction {
            SortDirection::Ascending => assert!(a.total_cmp(&b).is_le()),
            SortDirection::Descending => assert!(a.total_cmp(&b).is_ge()),
        }
    }
});
