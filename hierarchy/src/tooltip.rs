//! Tooltip text for hierarchy nodes (display only).

use votelens_types::Address;
use votelens_utils::{abbreviate, k_format};

/// Characters kept from the start of an abbreviated account id.
const HEAD_CHARS: usize = 12;
/// Characters kept from the end of an abbreviated account id.
const TAIL_CHARS: usize = 4;

/// Label shown for a node id: account-shaped ids are abbreviated.
pub fn tooltip_label(id: &str) -> String {
    if Address::has_account_shape(id) {
        abbreviate(id, HEAD_CHARS, TAIL_CHARS)
    } else {
        id.to_string()
    }
}

/// Full tooltip line: `"{label}: {compact} {currency} | {formatted}"`.
///
/// `formatted_value` is whatever the chart layer rendered for the node
/// (typically its share of the total), passed through untouched.
pub fn tooltip_text(id: &str, value: f64, formatted_value: &str, currency: &str) -> String {
    format!(
        "{}: {} {} | {}",
        tooltip_label(id),
        k_format(value, 2),
        currency,
        formatted_value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn test_account_id_is_abbreviated() {
        assert_eq!(tooltip_label(ACCOUNT), "0x1234567890...5678");
    }

    #[test]
    fn test_other_ids_are_verbatim() {
        assert_eq!(tooltip_label("Alice"), "Alice");
        assert_eq!(tooltip_label("0x1234"), "0x1234");
        // Right length, wrong prefix.
        let no_prefix = "ab1234567890abcdef1234567890abcdef12345678";
        assert_eq!(no_prefix.len(), 42);
        assert_eq!(tooltip_label(no_prefix), no_prefix);
    }

    #[test]
    fn test_multibyte_id_of_account_byte_length_is_verbatim() {
        let id = format!("0x{}", "é".repeat(20));
        assert_eq!(id.len(), 42);
        assert_eq!(tooltip_label(&id), id);
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(
            tooltip_text(ACCOUNT, 1500.0, "12.5%", "MKR"),
            "0x1234567890...5678: 1.5k MKR | 12.5%"
        );
        assert_eq!(
            tooltip_text("Users", 42.126, "3%", "MKR"),
            "Users: 42.13 MKR | 3%"
        );
    }
}
