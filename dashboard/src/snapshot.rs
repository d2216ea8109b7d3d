//! JSON snapshots of the two datasets the dashboard consumes.

use crate::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use votelens_types::{DelegateRow, GroupedBalances, LoadState};

/// Both datasets as produced by the aggregation layer.
///
/// A missing section means that dataset has not arrived yet and loads as
/// [`LoadState::Loading`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub balances: Option<GroupedBalances>,
    #[serde(default)]
    pub delegates: Option<Vec<DelegateRow>>,
}

impl Snapshot {
    pub fn from_json_str(s: &str) -> Result<Self, DashboardError> {
        serde_json::from_str(s).map_err(|e| DashboardError::Snapshot(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn balances_state(&self) -> LoadState<GroupedBalances> {
        self.balances.clone().into()
    }

    pub fn delegates_state(&self) -> LoadState<Vec<DelegateRow>> {
        self.delegates.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_are_loading() {
        let snapshot = Snapshot::from_json_str("{}").unwrap();
        assert!(snapshot.balances_state().is_loading());
        assert!(snapshot.delegates_state().is_loading());
    }

    #[test]
    fn test_full_snapshot() {
        let json = r#"{
            "balances": {
                "recognizedDelegates": [{"name": "Alice", "address": "0xa", "amount": 500}],
                "shadowDelegates": [],
                "users": []
            },
            "delegates": [
                {"name": "Alice", "voteDelegate": "0xa", "delegatorCount": 3, "lockTotal": "500.0"}
            ]
        }"#;
        let snapshot = Snapshot::from_json_str(json).unwrap();
        assert!(snapshot.balances_state().is_ready());
        assert_eq!(snapshot.delegates.unwrap()[0].delegator_count, 3);
    }

    #[test]
    fn test_malformed_json_is_snapshot_error() {
        assert!(matches!(
            Snapshot::from_json_str("{\"balances\": 3}"),
            Err(DashboardError::Snapshot(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Snapshot::from_json_file("/nonexistent/snapshot.json"),
            Err(DashboardError::Io(_))
        ));
    }
}
