//! Parsing of free-text millimetre entries.
//!
//! Clinical entry fields accept plain decimals with either `.` or `,` as
//! the decimal separator. Thousands separators, exponents and special
//! values (NaN, infinity) are not valid sizes and are rejected.

/// Parse a decimal measurement string.
///
/// Accepts:
/// - Plain numbers: "7", "7.2", "-1.5"
/// - Comma decimal separator: "7,2"
/// - Surrounding whitespace: "  7.2  "
///
/// Returns None for anything else. Zero and negative values are returned
/// as parsed; callers decide whether they are usable sizes.
pub fn parse_measurement(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(',', ".");
    let digits = normalized
        .strip_prefix('-')
        .or_else(|| normalized.strip_prefix('+'))
        .unwrap_or(&normalized);

    let mut separators = 0;
    let mut has_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' => separators += 1,
            _ => return None,
        }
    }
    if !has_digit || separators > 1 {
        return None;
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns true when the text is blank and should be treated as absent.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_values() {
        assert_eq!(parse_measurement("7"), Some(7.0));
        assert_eq!(parse_measurement("7.2"), Some(7.2));
        assert_eq!(parse_measurement("-1.5"), Some(-1.5));
        assert_eq!(parse_measurement(".5"), Some(0.5));
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_measurement("7,2"), Some(7.2));
        assert_eq!(parse_measurement(" 12,25 "), Some(12.25));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_measurement("  8.5  "), Some(8.5));
        assert_eq!(parse_measurement("\t6\n"), Some(6.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert!(is_blank("  "));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_measurement("abc"), None);
        assert_eq!(parse_measurement("7mm"), None);
        assert_eq!(parse_measurement("1,234.5"), None);
        assert_eq!(parse_measurement("12.34.56"), None);
        assert_eq!(parse_measurement("1e3"), None);
        assert_eq!(parse_measurement("nan"), None);
        assert_eq!(parse_measurement("inf"), None);
        assert_eq!(parse_measurement("-"), None);
        assert_eq!(parse_measurement("."), None);
    }

    #[test]
    fn test_zero_and_negative_pass_through() {
        assert_eq!(parse_measurement("0"), Some(0.0));
        assert_eq!(parse_measurement("-3"), Some(-3.0));
    }
}
