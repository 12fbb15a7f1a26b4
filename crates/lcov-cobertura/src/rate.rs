//! Coverage ratio formatting and lenient integer reading.
//!
//! Both the parser and the serializer go through these helpers so that the
//! numbers in the model and the numbers in the XML agree textually.

/// Values below this magnitude are written in exponent form (`1e-7`).
const EXPONENT_THRESHOLD: f64 = 1e-6;

/// Format `covered / total` as a Cobertura rate string.
///
/// Returns `"0.0"` when there is nothing to cover. Otherwise the ratio is
/// written as the shortest decimal that reads back to the same `f64`, so
/// `1/2` is `"0.5"`, `2/2` is `"1"` and `1/3` is `"0.3333333333333333"`.
#[must_use]
pub fn format_rate(total: u64, covered: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let ratio = covered as f64 / total as f64;
    if ratio != 0.0 && ratio < EXPONENT_THRESHOLD {
        format!("{ratio:e}")
    } else {
        format!("{ratio}")
    }
}

/// Read the integer at the start of `token`.
///
/// Leading whitespace and a single sign are accepted and anything after the
/// digits is ignored (`"12abc"` reads as 12). Returns `None` when no digit
/// follows, e.g. for `"====="`, `"-"` or an empty token. Values that do not
/// fit in an `i64` saturate.
#[must_use]
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// True when `token` reads as an integer greater than zero.
#[must_use]
pub fn is_positive_count(token: &str) -> bool {
    parse_leading_int(token).is_some_and(|n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_without_total() {
        assert_eq!(format_rate(0, 0), "0.0");
        assert_eq!(format_rate(0, 5), "0.0");
    }

    #[test]
    fn test_rate_half() {
        assert_eq!(format_rate(2, 1), "0.5");
    }

    #[test]
    fn test_rate_whole_numbers_have_no_fraction() {
        assert_eq!(format_rate(4, 4), "1");
        assert_eq!(format_rate(4, 0), "0");
    }

    #[test]
    fn test_rate_keeps_full_precision() {
        assert_eq!(format_rate(3, 1), "0.3333333333333333");
        assert_eq!(format_rate(3, 2), "0.6666666666666666");
        assert_eq!(format_rate(8, 1), "0.125");
    }

    #[test]
    fn test_rate_tiny_uses_exponent() {
        assert_eq!(format_rate(10_000_000, 1), "1e-7");
        assert_eq!(format_rate(1_000_000, 1), "0.000001");
    }

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("  5 "), Some(5));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_leading_int("====="), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("#####"), None);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_positive_count() {
        assert!(is_positive_count("1"));
        assert!(!is_positive_count("0"));
        assert!(!is_positive_count("-1"));
        assert!(!is_positive_count("abc"));
    }
}
