use proptest::prelude::*;

use votelens_utils::{abbreviate, format_grouped, group_thousands};

proptest! {
    /// Removing the separators gives back the plain integer.
    #[test]
    fn grouping_is_lossless(n in any::<i64>()) {
        let grouped = group_thousands(n as i128);
        prop_assert_eq!(grouped.replace(',', ""), n.to_string());
    }

    /// Every group after the first has exactly three digits.
    #[test]
    fn groups_have_three_digits(n in 0i128..1_000_000_000_000) {
        let grouped = group_thousands(n);
        let mut groups = grouped.split(',');
        let first = groups.next().unwrap();
        prop_assert!((1..=3).contains(&first.len()));
        for group in groups {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Whole cents always render exactly, with two decimals.
    #[test]
    fn cents_render_exactly(cents in 0u64..10_000_000_000) {
        let value = cents as f64 / 100.0;
        let shown = format_grouped(value, 2);
        let expected = format!("{}.{:02}", cents / 100, cents % 100);
        prop_assert_eq!(shown.replace(',', ""), expected);
    }

    /// Abbreviation keeps the requested head and tail around `...`.
    #[test]
    fn abbreviate_keeps_head_and_tail(s in "[a-z0-9]{17,60}") {
        let short = abbreviate(&s, 12, 4);
        prop_assert_eq!(short.len(), 19);
        prop_assert!(short.starts_with(&s[..12]));
        prop_assert!(short.ends_with(&s[s.len() - 4..]));
    }
}
