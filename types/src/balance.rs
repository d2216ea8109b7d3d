//! Vote-weight balances grouped by holder category.

use crate::address::Address;
use crate::error::TypesError;
use serde::{Deserialize, Serialize};

/// One holder's vote weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Human label, only known for recognized delegates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address: Address,
    pub amount: f64,
}

impl BalanceEntry {
    pub fn new(address: impl Into<Address>, amount: f64) -> Self {
        Self {
            name: None,
            address: address.into(),
            amount,
        }
    }

    pub fn named(name: impl Into<String>, address: impl Into<Address>, amount: f64) -> Self {
        Self {
            name: Some(name.into()),
            address: address.into(),
            amount,
        }
    }

    /// Reject negative, NaN and infinite amounts.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.amount.is_finite() && self.amount >= 0.0 {
            Ok(())
        } else {
            Err(TypesError::InvalidAmount {
                address: self.address.to_string(),
                amount: self.amount,
            })
        }
    }
}

/// Balances pre-aggregated by an external layer into three ordered groups.
///
/// Order inside each group is meaningful and is preserved by every consumer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedBalances {
    #[serde(default)]
    pub recognized_delegates: Vec<BalanceEntry>,
    #[serde(default)]
    pub shadow_delegates: Vec<BalanceEntry>,
    #[serde(default)]
    pub users: Vec<BalanceEntry>,
}

impl GroupedBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.recognized_delegates.len() + self.shadow_delegates.len() + self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of every amount in every group.
    pub fn total_amount(&self) -> f64 {
        self.entries().map(|e| e.amount).sum()
    }

    /// Iterate over all entries, recognized delegates first, then shadow delegates, then users.
    pub fn entries(&self) -> impl Iterator<Item = &BalanceEntry> {
        self.recognized_delegates
            .iter()
            .chain(self.shadow_delegates.iter())
            .chain(self.users.iter())
    }

    /// First recognized delegate whose name is exactly `name`.
    pub fn find_recognized(&self, name: &str) -> Option<&BalanceEntry> {
        self.recognized_delegates
            .iter()
            .find(|d| d.name.as_deref() == Some(name))
    }

    /// Check every entry; stops at the first invalid amount.
    pub fn validate(&self) -> Result<(), TypesError> {
        self.entries().try_for_each(BalanceEntry::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupedBalances {
        GroupedBalances {
            recognized_delegates: vec![
                BalanceEntry::named("Alice", "0xa", 500.0),
                BalanceEntry::named("Bob", "0xb", 200.0),
            ],
            shadow_delegates: vec![BalanceEntry::new("0xc", 300.0)],
            users: vec![BalanceEntry::new("0xd", 1.5)],
        }
    }

    #[test]
    fn test_len_and_total() {
        let data = sample();
        assert_eq!(data.len(), 4);
        assert!((data.total_amount() - 1001.5).abs() < f64::EPSILON);
        assert!(GroupedBalances::new().is_empty());
    }

    #[test]
    fn test_find_recognized_exact_first_match() {
        let mut data = sample();
        data.recognized_delegates
            .push(BalanceEntry::named("Alice", "0xe", 10.0));
        let found = data.find_recognized("Alice").unwrap();
        assert_eq!(found.address.as_str(), "0xa");
        assert!(data.find_recognized("alice").is_none());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut data = sample();
        assert!(data.validate().is_ok());
        data.users.push(BalanceEntry::new("0xf", -1.0));
        assert!(matches!(
            data.validate(),
            Err(TypesError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(BalanceEntry::new("0x1", f64::NAN).validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "recognizedDelegates": [{"name": "Alice", "address": "0xa", "amount": 500}],
            "shadowDelegates": [{"address": "0xb", "amount": 300}]
        }"#;
        let data: GroupedBalances = serde_json::from_str(json).unwrap();
        assert_eq!(data.recognized_delegates[0].name.as_deref(), Some("Alice"));
        assert_eq!(data.shadow_delegates[0].name, None);
        assert!(data.users.is_empty());
    }
}
