#![no_main]

use libfuzzer_sys::fuzz_target;

use votelens_hierarchy::{resolve_click, Slice};
use votelens_nullables::fixtures;

// Parse arbitrary "Branch/leaf" paths and route them through click resolution.
// A resolved click must always carry an address.
fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };
    let balances = fixtures::grouped_balances(4, 3, 5);

    if let Some(slice) = Slice::parse_leaf(path) {
        if let Some(selection) = resolve_click(&balances, &slice) {
            assert!(selection.address.is_some());
        }
    }
});
