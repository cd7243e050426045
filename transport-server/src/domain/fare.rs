//! Fare strings.
//!
//! Fares travel as display strings with a rupee prefix (`"₹450"`), both from
//! the live provider and from the synthetic generator.

/// Currency prefix used on every fare string.
pub const RUPEE: &str = "₹";

/// Format a whole-rupee amount as a fare string.
pub fn format_fare(amount: u32) -> String {
    format!("{RUPEE}{amount}")
}

/// Read the numeric amount from a fare string.
///
/// The rupee prefix and surrounding whitespace are optional. Only the leading
/// number is read, so `"₹450 onwards"` gives 450. Returns `None` when there is
/// no leading number.
pub fn parse_fare_amount(fare: &str) -> Option<f64> {
    let trimmed = fare.trim();
    let amount = trimmed.strip_prefix(RUPEE).unwrap_or(trimmed).trim_start();

    let end = amount
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (c == '.' && !amount[..i].contains('.'))))
        .map_or(amount.len(), |(i, _)| i);

    amount[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_prefix() {
        assert_eq!(format_fare(450), "₹450");
        assert_eq!(format_fare(0), "₹0");
    }

    #[test]
    fn parses_prefixed_and_bare() {
        assert_eq!(parse_fare_amount("₹450"), Some(450.0));
        assert_eq!(parse_fare_amount("180"), Some(180.0));
        assert_eq!(parse_fare_amount(" ₹ 99.5 "), Some(99.5));
    }

    #[test]
    fn reads_leading_number_only() {
        assert_eq!(parse_fare_amount("₹450 onwards"), Some(450.0));
        assert_eq!(parse_fare_amount("₹1.5.2"), Some(1.5));
    }

    #[test]
    fn no_number() {
        assert_eq!(parse_fare_amount(""), None);
        assert_eq!(parse_fare_amount("₹"), None);
        assert_eq!(parse_fare_amount("free"), None);
    }
}
