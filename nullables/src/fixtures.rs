//! Reproducible datasets for tests and benches.

use votelens_types::{BalanceEntry, DelegateRow, GroupedBalances};

/// A 42-character account address derived from `seed`.
///
/// Distinct seeds give distinct addresses; the same seed always gives the
/// same address.
pub fn account(seed: u32) -> String {
    format!("0x{seed:040x}")
}

/// Balances with `recognized` named delegates, `shadow` shadow delegates and
/// `users` individual holders. Amounts decrease with position.
pub fn grouped_balances(recognized: usize, shadow: usize, users: usize) -> GroupedBalances {
    let shadow_base = recognized as u32;
    let user_base = shadow_base + shadow as u32;
    GroupedBalances {
        recognized_delegates: (0..recognized)
            .map(|i| {
                let seed = i as u32 + 1;
                BalanceEntry::named(
                    format!("Delegate {seed}"),
                    account(seed),
                    (recognized - i) as f64 * 100.0,
                )
            })
            .collect(),
        shadow_delegates: (0..shadow)
            .map(|i| BalanceEntry::new(account(shadow_base + i as u32 + 1), (shadow - i) as f64 * 10.0))
            .collect(),
        users: (0..users)
            .map(|i| BalanceEntry::new(account(user_base + i as u32 + 1), (users - i) as f64))
            .collect(),
    }
}

/// A roster of `n` delegates with deterministic, non-monotonic counts and totals.
///
/// Every third row is unnamed.
pub fn delegate_rows(n: usize) -> Vec<DelegateRow> {
    (0..n)
        .map(|i| {
            let seed = i as u64 + 1;
            let name = (i % 3 != 2).then(|| format!("Delegate {seed}"));
            let delegators = (seed * 7919) % 97;
            let total = ((seed * 104_729) % 100_000) as f64 / 8.0;
            DelegateRow::new(name.as_deref(), account(seed as u32), delegators, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_shape() {
        let a = account(255);
        assert_eq!(a.len(), 42);
        assert!(a.starts_with("0x"));
        assert!(a.ends_with("ff"));
        assert_ne!(account(1), account(2));
    }

    #[test]
    fn test_grouped_balances_sizes() {
        let data = grouped_balances(2, 3, 4);
        assert_eq!(data.recognized_delegates.len(), 2);
        assert_eq!(data.shadow_delegates.len(), 3);
        assert_eq!(data.users.len(), 4);
        assert!(data.validate().is_ok());
        assert!(data.recognized_delegates.iter().all(|d| d.name.is_some()));
    }

    #[test]
    fn test_delegate_rows_are_valid() {
        let rows = delegate_rows(9);
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.validate().is_ok()));
        assert_eq!(rows.iter().filter(|r| r.name.is_none()).count(), 3);
    }
}
