//! The three fixed branches under the hierarchy root.

use serde::{Deserialize, Serialize};
use votelens_types::{BalanceEntry, GroupedBalances, Selection};

/// A first-level branch of the vote-weight hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Delegates with a known display name. Leaves are keyed by name.
    Recognized,
    /// Delegates without a display name. Leaves are keyed by address.
    Shadow,
    /// Individual holders. Leaves are keyed by address.
    User,
}

impl Branch {
    /// All branches in the order they appear under the root.
    pub const ALL: [Branch; 3] = [Branch::Recognized, Branch::Shadow, Branch::User];

    /// Display label, also used as the branch node name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recognized => "Recognized delegates",
            Self::Shadow => "Shadow delegates",
            Self::User => "Users",
        }
    }

    /// Decode a branch node name back into a branch.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    /// The input group this branch is projected from.
    pub fn entries<'a>(&self, data: &'a GroupedBalances) -> &'a [BalanceEntry] {
        match self {
            Self::Recognized => &data.recognized_delegates,
            Self::Shadow => &data.shadow_delegates,
            Self::User => &data.users,
        }
    }

    /// Leaf identifier for an entry of this branch.
    ///
    /// A recognized delegate without a name gets an empty identifier.
    pub fn leaf_id<'a>(&self, entry: &'a BalanceEntry) -> &'a str {
        match self {
            Self::Recognized => entry.name.as_deref().unwrap_or(""),
            Self::Shadow | Self::User => entry.address.as_str(),
        }
    }

    /// Turn a leaf identifier of this branch back into a selection.
    ///
    /// Recognized leaves are looked up by exact name, first match; a miss
    /// selects nothing. For the other branches the identifier is the address
    /// and no delegate name is known.
    pub fn select(&self, data: &GroupedBalances, leaf_id: &str) -> Option<Selection> {
        match self {
            Self::Recognized => data
                .find_recognized(leaf_id)
                .map(|found| Selection::new(found.address.as_str(), found.name.clone())),
            Self::Shadow | Self::User => Some(Selection::new(leaf_id, None)),
        }
    }
}
