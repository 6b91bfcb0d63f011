//! Path id parsing
//!
//! Ids are read with a leading-integer rule: optional leading whitespace, an
//! optional sign, then the longest run of ASCII digits. A `0x`/`0X` prefix
//! switches to hex digits. Anything after the digits is ignored, so `"2abc"`
//! reads as `2`. Input without leading digits yields `None`, which lookups
//! treat exactly like an unknown id.

/// Parse the leading integer of a path segment
pub fn parse_id(segment: &str) -> Option<i64> {
    let s = segment.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(parse_id("2"), Some(2));
        assert_eq!(parse_id("99"), Some(99));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(parse_id("2abc"), Some(2));
        assert_eq!(parse_id("3.7"), Some(3));
        assert_eq!(parse_id(" 4"), Some(4));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("+1"), Some(1));
        assert_eq!(parse_id("-"), None);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_id("0x2"), Some(2));
        assert_eq!(parse_id("0X1f"), Some(31));
        assert_eq!(parse_id("-0x2"), Some(-2));
        assert_eq!(parse_id("0x2g"), Some(2));
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("0xg"), None);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("x1"), None);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(parse_id("99999999999999999999999"), None);
    }
}
