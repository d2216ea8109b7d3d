#![no_main]

use libfuzzer_sys::fuzz_target;

use votelens_dashboard::{Dashboard, Snapshot};

// Arbitrary snapshot text must never panic the loader or the views built on it.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = Snapshot::from_json_str(text) else {
        return;
    };

    let mut dashboard = Dashboard::default();
    if dashboard.load_snapshot(snapshot).is_err() {
        return;
    }
    let _ = dashboard.chart_view();
    let _ = dashboard.roster_view();
    let _ = dashboard.click_row(0);
});
