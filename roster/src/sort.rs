//! Sort state and the pure, copy-producing row ordering.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use votelens_types::DelegateRow;

/// Numeric columns the roster can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    LockTotal,
    DelegatorCount,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::DelegatorCount, SortField::LockTotal];

    /// Field name as it appears in delegate data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LockTotal => "lockTotal",
            Self::DelegatorCount => "delegatorCount",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LockTotal => "MKR Delegated",
            Self::DelegatorCount => "Delegators",
        }
    }

    /// Numeric sort key of `row` for this field.
    ///
    /// Lock totals are coerced from their decimal string; unparseable totals
    /// count as zero.
    pub fn key(&self, row: &DelegateRow) -> f64 {
        match self {
            Self::LockTotal => row.lock_total.value(),
            Self::DelegatorCount => row.delegator_count as f64,
        }
    }

    fn compare(&self, a: &DelegateRow, b: &DelegateRow) -> Ordering {
        match self {
            Self::DelegatorCount => a.delegator_count.cmp(&b.delegator_count),
            Self::LockTotal => a.lock_total.value().total_cmp(&b.lock_total.value()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lockTotal" | "lock-total" | "lock_total" => Ok(Self::LockTotal),
            "delegatorCount" | "delegator-count" | "delegator_count" => Ok(Self::DelegatorCount),
            other => Err(RosterError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Glyph shown next to an active column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "^",
            Self::Descending => "v",
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::LockTotal,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// State after a sort request on `field`.
    ///
    /// Only a repeated request on the active descending field goes ascending.
    /// Switching fields, or re-requesting an ascending field, lands on
    /// descending.
    pub fn toggle(self, field: SortField) -> Self {
        let direction = if field == self.field && self.direction == SortDirection::Descending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        Self { field, direction }
    }
}

/// Return `rows` ordered by `state`, leaving the input untouched.
///
/// The sort is stable: rows with equal keys keep their relative input order
/// in both directions.
pub fn sort_rows(rows: &[DelegateRow], state: SortState) -> Vec<DelegateRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ord = state.field.compare(a, b);
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}
