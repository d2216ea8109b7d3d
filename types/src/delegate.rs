//! Delegate roster rows.

use crate::address::Address;
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total locked amount, kept in the decimal-string form it arrives in.
///
/// Comparison and display work on [`LockTotal::value`], the numeric coercion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockTotal(String);

impl LockTotal {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` if the string is not a finite decimal.
    pub fn try_value(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Numeric value; unparseable totals coerce to `0.0`.
    pub fn value(&self) -> f64 {
        self.try_value().unwrap_or(0.0)
    }
}

impl fmt::Display for LockTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LockTotal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<f64> for LockTotal {
    fn from(v: f64) -> Self {
        Self(v.to_string())
    }
}

/// One delegate in the roster table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vote_delegate: Address,
    pub delegator_count: u64,
    pub lock_total: LockTotal,
}

impl DelegateRow {
    pub fn new(
        name: Option<&str>,
        vote_delegate: impl Into<Address>,
        delegator_count: u64,
        lock_total: impl Into<LockTotal>,
    ) -> Self {
        Self {
            name: name.map(str::to_string),
            vote_delegate: vote_delegate.into(),
            delegator_count,
            lock_total: lock_total.into(),
        }
    }

    /// Reject rows whose lock total is not a finite, non-negative decimal.
    pub fn validate(&self) -> Result<(), TypesError> {
        match self.lock_total.try_value() {
            Some(v) if v >= 0.0 => Ok(()),
            _ => Err(TypesError::InvalidLockTotal {
                delegate: self.vote_delegate.to_string(),
                value: self.lock_total.to_string(),
            }),
        }
    }
}
