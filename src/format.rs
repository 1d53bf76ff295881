//! Indian-style currency formatting (₹12,34,567)
//!
//! Amounts below one thousand are rounded and rendered with the symbol in
//! front (`₹999`, `₹-500`). From one thousand up, the integer part is grouped
//! as thousands, then lakhs and crores: the last three digits together and
//! every two digits after that (`₹1,23,45,678`).

pub const CURRENCY_SYMBOL: &str = "₹";

/// Magnitude at which lakh/crore grouping starts
const INDIAN_GROUPING_THRESHOLD: f64 = 1000.0;

/// Format an amount in rupees.
///
/// NaN formats as an empty string; infinities fall back to their plain
/// string form. Never panics.
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return String::new();
    }
    if !amount.is_finite() {
        return amount.to_string();
    }
    // -0.0 renders as 0
    let amount = amount + 0.0;

    if amount.abs() < INDIAN_GROUPING_THRESHOLD {
        let rounded = format!("{:.0}", amount);
        let (sign, digits) = match rounded.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", rounded.as_str()),
        };
        // Rounding can carry into a fourth digit (999.6 -> 1,000)
        return format!("{}{}{}", CURRENCY_SYMBOL, sign, group_digits(digits, 3, 3));
    }

    let digits = format!("{:.0}", amount.abs().trunc());
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_digits(&digits, 3, 2))
}

/// Format an optional amount; a missing amount formats as an empty string
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map(format_inr).unwrap_or_default()
}

/// Insert commas into an ASCII digit string: `first` digits in the rightmost
/// group, `rest` digits in every group to its left
fn group_digits(digits: &str, first: usize, rest: usize) -> String {
    let mut groups = Vec::new();
    let mut remaining = digits;
    let mut width = first;

    while remaining.len() > width {
        let (head, tail) = remaining.split_at(remaining.len() - width);
        groups.push(tail);
        remaining = head;
        width = rest;
    }
    groups.push(remaining);

    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(13584000.0), "₹1,35,84,000");
        assert_eq!(format_inr(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-1234567.0), "-₹12,34,567");
        assert_eq!(format_inr(-500.0), "₹-500");
    }

    #[test]
    fn test_small_amounts_are_rounded() {
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(-0.0), "₹0");
        assert_eq!(format_inr(12.7), "₹13");
        assert_eq!(format_inr(999.6), "₹1,000");
    }

    #[test]
    fn test_large_amounts_are_truncated() {
        assert_eq!(format_inr(1234.9), "₹1,234");
        assert_eq!(format_inr(-1999.99), "-₹1,999");
    }

    #[test]
    fn test_missing_and_non_finite() {
        assert_eq!(format_inr(f64::NAN), "");
        assert_eq!(format_amount(None), "");
        assert_eq!(format_amount(Some(999.0)), "₹999");
        assert_eq!(format_inr(f64::INFINITY), "inf");
        assert_eq!(format_inr(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", 3, 2), "1");
        assert_eq!(group_digits("123", 3, 2), "123");
        assert_eq!(group_digits("1234", 3, 3), "1,234");
        assert_eq!(group_digits("1234567", 3, 3), "1,234,567");
    }
}
