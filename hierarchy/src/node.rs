//! Hierarchy nodes and the projection from grouped balances.

use crate::branch::Branch;
use serde::{Deserialize, Serialize};
use votelens_types::{GroupedBalances, LoadState};

/// Name of the hierarchy root.
pub const ROOT_NAME: &str = "vote weights";

/// A node of the vote-weight hierarchy.
///
/// Leaves carry `amount`; internal nodes carry `children`. Serializes to the
/// `{name, amount?, children?}` shape hierarchical chart libraries read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn leaf(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount),
            children: Vec::new(),
        }
    }

    pub fn internal(name: impl Into<String>, children: Vec<HierarchyNode>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.amount.is_some()
    }

    /// Child with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The branch node for `branch` (only meaningful on a root).
    pub fn branch(&self, branch: Branch) -> Option<&HierarchyNode> {
        self.child(branch.label())
    }

    /// Sum of leaf amounts below (or at) this node.
    pub fn total(&self) -> f64 {
        if let Some(amount) = self.amount {
            amount
        } else {
            self.children.iter().map(HierarchyNode::total).sum()
        }
    }

    /// Number of leaves below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(HierarchyNode::leaf_count).sum()
        }
    }
}

/// Project grouped balances into the three-branch hierarchy.
///
/// Branch order is fixed; leaf order mirrors input order. Nothing is
/// aggregated, sorted or filtered. A branch with no entries is still present,
/// with no children.
pub fn project(data: &GroupedBalances) -> HierarchyNode {
    let children = Branch::ALL
        .into_iter()
        .map(|branch| {
            let leaves = branch
                .entries(data)
                .iter()
                .map(|entry| HierarchyNode::leaf(branch.leaf_id(entry), entry.amount))
                .collect();
            HierarchyNode::internal(branch.label(), leaves)
        })
        .collect();

    tracing::debug!(
        recognized = data.recognized_delegates.len(),
        shadow = data.shadow_delegates.len(),
        users = data.users.len(),
        "projected vote-weight hierarchy"
    );

    HierarchyNode::internal(ROOT_NAME, children)
}

/// Project a dataset that may still be loading.
pub fn project_state(data: &LoadState<GroupedBalances>) -> LoadState<HierarchyNode> {
    match data {
        LoadState::Ready(balances) => LoadState::Ready(project(balances)),
        LoadState::Loading => LoadState::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use votelens_types::BalanceEntry;

    fn sample() -> GroupedBalances {
        GroupedBalances {
            recognized_delegates: vec![
                BalanceEntry::named("Alice", "0xaaaa", 500.0),
                BalanceEntry::named("Carol", "0xcccc", 50.0),
            ],
            shadow_delegates: vec![BalanceEntry::new("0xbbbb", 300.0)],
            users: vec![
                BalanceEntry::new("0xdddd", 2.0),
                BalanceEntry::new("0xeeee", 1.0),
                BalanceEntry::new("0xffff", 3.0),
            ],
        }
    }

    #[test]
    fn test_root_and_branch_order() {
        let root = project(&sample());
        assert_eq!(root.name, ROOT_NAME);
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Recognized delegates", "Shadow delegates", "Users"]);
    }

    #[test]
    fn test_branch_children_match_input_lengths() {
        let data = sample();
        let root = project(&data);
        assert_eq!(root.children[0].children.len(), data.recognized_delegates.len());
        assert_eq!(root.children[1].children.len(), data.shadow_delegates.len());
        assert_eq!(root.children[2].children.len(), data.users.len());
    }

    #[test]
    fn test_recognized_keyed_by_name_others_by_address() {
        let root = project(&sample());
        let recognized = root.branch(Branch::Recognized).unwrap();
        assert_eq!(recognized.children[0].name, "Alice");
        assert_ne!(recognized.children[0].name, "0xaaaa");
        assert_eq!(root.branch(Branch::Shadow).unwrap().children[0].name, "0xbbbb");
        assert_eq!(root.branch(Branch::User).unwrap().children[0].name, "0xdddd");
    }

    #[test]
    fn test_leaf_order_mirrors_input() {
        let root = project(&sample());
        let users: Vec<&str> = root
            .branch(Branch::User)
            .unwrap()
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // No re-sort by amount.
        assert_eq!(users, ["0xdddd", "0xeeee", "0xffff"]);
    }

    #[test]
    fn test_leaves_carry_amount_internals_do_not() {
        let root = project(&sample());
        assert_eq!(root.amount, None);
        let alice = &root.children[0].children[0];
        assert_eq!(alice.amount, Some(500.0));
        assert!(alice.is_leaf());
        assert!((root.total() - 856.0).abs() < f64::EPSILON);
        assert_eq!(root.leaf_count(), 6);
    }

    #[test]
    fn test_empty_dataset_keeps_three_branches() {
        let root = project(&GroupedBalances::default());
        assert_eq!(root.children.len(), 3);
        assert!(root.children.iter().all(|c| c.children.is_empty() && !c.is_leaf()));
        assert_eq!(root.leaf_count(), 0);
    }

    #[test]
    fn test_project_state_loading() {
        assert!(project_state(&LoadState::Loading).is_loading());
        assert!(project_state(&LoadState::Ready(sample())).is_ready());
    }

    #[test]
    fn test_serializes_to_chart_shape() {
        let data = GroupedBalances {
            users: vec![BalanceEntry::new("0x1", 5.0)],
            ..Default::default()
        };
        let json = serde_json::to_value(project(&data)).unwrap();
        assert_eq!(json["name"], "vote weights");
        assert!(json.get("amount").is_none());
        assert!(json["children"][0].get("children").is_none());
        assert_eq!(json["children"][2]["children"][0]["name"], "0x1");
        assert_eq!(json["children"][2]["children"][0]["amount"], 5.0);
    }
}
