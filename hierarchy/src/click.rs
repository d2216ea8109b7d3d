//! Click routing from hierarchy nodes back to a delegate identity.

use crate::branch::Branch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use votelens_types::{GroupedBalances, Selection};

/// Depth of a leaf node (root is 0, branches are 1).
pub const LEAF_DEPTH: usize = 2;

/// A clicked hierarchy node as reported by the chart.
///
/// `path` lists node names from the root down to the clicked node, so for a
/// leaf `path == [root, branch, id]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub id: String,
    pub path: Vec<String>,
    pub depth: usize,
}

impl Slice {
    /// A leaf slice under `branch`.
    pub fn leaf(branch: Branch, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            path: vec![crate::ROOT_NAME.to_string(), branch.label().to_string(), id.clone()],
            id,
            depth: LEAF_DEPTH,
        }
    }

    /// The branch node itself.
    pub fn branch(branch: Branch) -> Self {
        Self {
            id: branch.label().to_string(),
            path: vec![crate::ROOT_NAME.to_string(), branch.label().to_string()],
            depth: 1,
        }
    }

    pub fn root() -> Self {
        Self {
            id: crate::ROOT_NAME.to_string(),
            path: vec![crate::ROOT_NAME.to_string()],
            depth: 0,
        }
    }

    /// Parse a `"Branch label/leaf id"` string into a leaf slice.
    ///
    /// Only the first `/` separates, so leaf ids may contain slashes.
    pub fn parse_leaf(s: &str) -> Option<Self> {
        let (label, id) = s.split_once('/')?;
        Branch::from_label(label).map(|branch| Self::leaf(branch, id))
    }
}

/// Resolve a click into a selection, or `None` when the click is a no-op.
///
/// Only leaves are actionable. The branch is decoded from `path[1]`; an
/// unknown branch label selects nothing. When several recognized delegates
/// share the clicked name the first one wins and a warning is logged.
pub fn resolve_click(data: &GroupedBalances, slice: &Slice) -> Option<Selection> {
    if slice.depth != LEAF_DEPTH {
        return None;
    }
    let Some(branch) = slice.path.get(1).and_then(|l| Branch::from_label(l)) else {
        tracing::warn!(path = ?slice.path, "click on leaf with unknown branch ignored");
        return None;
    };

    if branch == Branch::Recognized {
        let candidates = data
            .recognized_delegates
            .iter()
            .filter(|d| d.name.as_deref() == Some(slice.id.as_str()))
            .count();
        if candidates > 1 {
            tracing::warn!(
                name = %slice.id,
                candidates,
                "recognized delegate name is ambiguous, selecting first match"
            );
        }
    }

    let selection = branch.select(data, &slice.id);
    if selection.is_none() {
        tracing::debug!(name = %slice.id, "no recognized delegate with this name");
    }
    selection
}

/// Recognized-delegate names carried by more than one entry, with their counts.
pub fn duplicate_recognized_names(data: &GroupedBalances) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in data.recognized_delegates.iter().filter_map(|d| d.name.as_deref()) {
        *counts.entry(name).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use votelens_types::BalanceEntry;

    const ALICE: &str = "0xaaaa00000000000000000000000000000000111a";
    const SHADOW: &str = "0xbbbb00000000000000000000000000000000222b";

    fn sample() -> GroupedBalances {
        GroupedBalances {
            recognized_delegates: vec![BalanceEntry::named("Alice", ALICE, 500.0)],
            shadow_delegates: vec![BalanceEntry::new(SHADOW, 300.0)],
            users: vec![BalanceEntry::new("0xuser", 1.0)],
        }
    }

    #[test]
    fn test_root_and_branch_clicks_are_noops() {
        let data = sample();
        assert_eq!(resolve_click(&data, &Slice::root()), None);
        for branch in Branch::ALL {
            assert_eq!(resolve_click(&data, &Slice::branch(branch)), None);
        }
    }

    #[test]
    fn test_recognized_leaf_resolves_by_name() {
        let selection = resolve_click(&sample(), &Slice::leaf(Branch::Recognized, "Alice")).unwrap();
        assert_eq!(selection.address.as_deref(), Some(ALICE));
        assert_eq!(selection.delegate.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_recognized_leaf_miss_is_noop() {
        assert_eq!(
            resolve_click(&sample(), &Slice::leaf(Branch::Recognized, "Mallory")),
            None
        );
    }

    #[test]
    fn test_recognized_leaf_does_not_match_address() {
        assert_eq!(
            resolve_click(&sample(), &Slice::leaf(Branch::Recognized, ALICE)),
            None
        );
    }

    #[test]
    fn test_shadow_and_user_leaves_select_address() {
        let data = sample();
        let shadow = resolve_click(&data, &Slice::leaf(Branch::Shadow, SHADOW)).unwrap();
        assert_eq!(shadow, Selection::new(SHADOW, None));

        // No lookup: even an id absent from the dataset is emitted.
        let user = resolve_click(&data, &Slice::leaf(Branch::User, "0xunknown")).unwrap();
        assert_eq!(user, Selection::new("0xunknown", None));
    }

    #[test]
    fn test_unknown_branch_label_is_noop() {
        let slice = Slice {
            id: "0xuser".to_string(),
            path: vec!["vote weights".into(), "Whales".into(), "0xuser".into()],
            depth: 2,
        };
        assert_eq!(resolve_click(&sample(), &slice), None);
    }

    #[test]
    fn test_duplicate_names_pick_first_and_are_reported() {
        let mut data = sample();
        data.recognized_delegates
            .push(BalanceEntry::named("Alice", "0xsecond", 5.0));
        let selection = resolve_click(&data, &Slice::leaf(Branch::Recognized, "Alice")).unwrap();
        assert_eq!(selection.address.as_deref(), Some(ALICE));
        assert_eq!(
            duplicate_recognized_names(&data),
            vec![("Alice".to_string(), 2)]
        );
        assert!(duplicate_recognized_names(&sample()).is_empty());
    }

    #[test]
    fn test_parse_leaf() {
        let slice = Slice::parse_leaf("Shadow delegates/0xabc").unwrap();
        assert_eq!(slice, Slice::leaf(Branch::Shadow, "0xabc"));
        let slashed = Slice::parse_leaf("Recognized delegates/A/B").unwrap();
        assert_eq!(slashed.id, "A/B");
        assert!(Slice::parse_leaf("Whales/0xabc").is_none());
        assert!(Slice::parse_leaf("no separator").is_none());
    }
}
