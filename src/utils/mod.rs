//! Formatting utilities for console display
//!
//! Centralized helpers so currency and percentage values render the same
//! way across the CLI summary output.

use rust_decimal::Decimal;

/// Format a dollar amount in billions.
///
/// # Examples
/// ```
/// use altsdash::utils::format_billions;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_billions(dec!(1500000000), 2), "$1.50B");
/// ```
pub fn format_billions(value: Decimal, precision: usize) -> String {
    format!("${:.*}B", precision, value / Decimal::from(1_000_000_000))
}

/// Format a dollar amount in millions.
///
/// # Examples
/// ```
/// use altsdash::utils::format_millions;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_millions(dec!(2500000), 1), "$2.5M");
/// ```
pub fn format_millions(value: Decimal, precision: usize) -> String {
    format!("${:.*}M", precision, value / Decimal::from(1_000_000))
}

/// Format a percentage value.
///
/// # Examples
/// ```
/// use altsdash::utils::format_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_percent(dec!(10), 2), "10.00%");
/// ```
pub fn format_percent(value: Decimal, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}

/// Format a count with thousands separators.
///
/// # Examples
/// ```
/// use altsdash::utils::format_thousands;
///
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_billions_rounding() {
        assert_eq!(format_billions(dec!(1234500000), 2), "$1.23B");
        assert_eq!(format_billions(Decimal::ZERO, 2), "$0.00B");
    }

    #[test]
    fn test_format_millions_negative() {
        assert_eq!(format_millions(dec!(-500000), 2), "$-0.50M");
    }

    #[test]
    fn test_format_percent_precision() {
        assert_eq!(format_percent(dec!(1.5), 2), "1.50%");
        assert_eq!(format_percent(dec!(-3.25), 2), "-3.25%");
    }

    #[test]
    fn test_format_thousands_small_values() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
    }
}
