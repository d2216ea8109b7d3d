//! Display formatting helpers for amounts and identifiers.
//!
//! Grouping follows the `en-US` convention: `,` between thousands, `.` before
//! the fraction.

/// Insert `,` between groups of three digits of an integer.
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round `value` to `decimals` fraction digits, ties away from zero.
///
/// `format!("{:.2}")` alone resolves exact ties to even (`0.125` → `0.12`).
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Format `value` with exactly `decimals` fraction digits and a grouped integer part.
///
/// Non-finite values render as zero.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { round_to(value, decimals) } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    match int_part.parse::<i128>() {
        Ok(n) => out.push_str(&group_thousands(n)),
        Err(_) => out.push_str(int_part),
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Compact "k" notation: values above 999 are divided by 1000 and suffixed with `k`.
///
/// At most `digits` fraction digits are kept; trailing zeros are trimmed.
pub fn k_format(value: f64, digits: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value.abs() > 999.0 {
        let thousands = round_to(value / 1000.0, digits);
        format!("{}k", trim_fraction(&format!("{:.*}", digits, thousands)))
    } else {
        trim_fraction(&format!("{:.*}", digits, round_to(value, digits)))
    }
}

/// Keep the first `head` and last `tail` characters of `s`, joined by `...`.
///
/// Strings too short to shorten are returned unchanged.
pub fn abbreviate(s: &str, head: usize, tail: usize) -> String {
    let count = s.chars().count();
    if count <= head + tail {
        return s.to_string();
    }
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(count - tail).collect();
    format!("{start}...{end}")
}

fn trim_fraction(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
