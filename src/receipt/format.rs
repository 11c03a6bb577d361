//! en-US number formatting for receipt amounts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::round_half_away;

/// Format an amount as US currency: `$1,234.50`.
///
/// Two decimals, midpoints rounded away from zero, thousands grouped
/// with commas. Negative amounts render as `-$1.00`.
pub fn format_currency(value: Decimal) -> String {
    let (negative, digits) = two_places(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${digits}")
}

/// Format a fraction as a percentage: `0.08` becomes `8.00%`.
pub fn format_percent(fraction: Decimal) -> String {
    let (negative, digits) = two_places(fraction * dec!(100));
    let sign = if negative { "-" } else { "" };
    format!("{sign}{digits}%")
}

/// Round to cents and group the integer part. Returns the sign separately
/// so a value that rounds to zero never renders as `-0.00`.
fn two_places(value: Decimal) -> (bool, String) {
    let mut rounded = round_half_away(value, 2);
    let negative = rounded < Decimal::ZERO;
    rounded = rounded.abs();
    rounded.rescale(2);

    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    (negative, format!("{}.{}", group_thousands(int_part), frac_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
