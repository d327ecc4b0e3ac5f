// Rule evaluators: pure predicates, one per rule kind

use once_cell::sync::Lazy;
use regex::Regex;

const MIN_EMAIL_LEN: usize = 3;
const MAX_EMAIL_LEN: usize = 320;

/// RFC 5322 address pattern: dot-atom or quoted-string local part, then a
/// dotted hostname or a bracketed IPv4 / tagged address literal. Case
/// folding is ASCII-only so `[a-z]` never admits characters like U+017F.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?i-u)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
        r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}"#,
        r#"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9]"#,
        r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x5e-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    ))
    .expect("email pattern is valid")
});

/// Email format. Inputs shorter than 3 bytes, longer than 320 bytes or
/// without an `@` are rejected before the pattern runs.
pub fn email(s: &str) -> bool {
    if s.len() < MIN_EMAIL_LEN || s.len() > MAX_EMAIL_LEN || !s.contains('@') {
        return false;
    }

    EMAIL_REGEX.is_match(s)
}

/// Non-empty once surrounding whitespace is trimmed.
pub fn required(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Inclusive lower bound. Used for both integer and float rules; NaN on
/// either side fails.
pub fn min<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Inclusive upper bound.
pub fn max<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Inclusive range.
pub fn between<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Length in characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn min_string(s: &str, min: usize) -> bool {
    char_len(s) >= min
}

pub fn max_string(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

pub fn len_string(s: &str, len: usize) -> bool {
    char_len(s) == len
}

pub fn matches(s: &str, pattern: &Regex) -> bool {
    pattern.is_match(s)
}

pub fn one_of<T: PartialEq>(value: &T, allowed: &[T]) -> bool {
    allowed.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(email("john.doe@example.com"));
        assert!(email("user+tag@example.co.uk"));
        assert!(email("John.Doe@Example.COM"));
        assert!(email("\"john.doe\"@example.com"));
        // qtext has no bare space
        assert!(!email("\"john doe\"@example.com"));
        assert!(email("admin@[192.168.0.1]"));
    }

    #[test]
    fn test_email_cheap_rejections() {
        assert!(!email(""));
        assert!(!email("a@"));
        assert!(!email("no-at-sign.example.com"));

        let long_local = "a".repeat(310);
        assert!(!email(&format!("{}@example.com", long_local)));
    }

    #[test]
    fn test_email_length_boundaries() {
        // 320 bytes exactly still reaches the pattern
        let local = "a".repeat(64);
        let label = "b".repeat(63);
        let domain = format!("{label}.{label}.{label}.{}.com", "c".repeat(59));
        let address = format!("{local}@{domain}");
        assert_eq!(address.len(), 320);
        assert!(email(&address));

        let too_long = format!("{local}a@{domain}");
        assert_eq!(too_long.len(), 321);
        assert!(!email(&too_long));
    }

    #[test]
    fn test_email_pattern_rejections() {
        // Shape passes the cheap checks but the domain has no dot
        assert!(!email("a@b"));
        assert!(!email("@example.com"));
        assert!(!email("user@"));
        assert!(!email("user@-example.com"));
        assert!(!email("two..dots@example.com"));
        assert!(!email("admin@[256.1.1.1]"));
    }

    #[test]
    fn test_email_rejects_non_ascii_case_folds() {
        // U+017F folds to `s`, U+212A KELVIN SIGN folds to `k`
        assert!(!email("\u{17f}@example.com"));
        assert!(!email("a@\u{212a}.com"));
        assert!(!email("us\u{17f}r@example.com"));
        assert!(email("USER@EXAMPLE.COM"));
    }

    #[test]
    fn test_email_tagged_address_literal() {
        assert!(email("admin@[IPv6:2001:db8::1]"));
        assert!(email("admin@[ipv6:fe80::1]"));
        // tag must be followed by at least one dtext character
        assert!(!email("admin@[IPv6:]"));
        assert!(!email("admin@[-:1]"));
    }

    #[test]
    fn test_email_quoted_local_part_escapes() {
        assert!(email(r#""a\"b"@x.com"#));
        assert!(email(r#""a\\b"@x.com"#));
        // bare quote inside the quoted string
        assert!(!email(r#""a"b"@x.com"#));
        // escape with nothing to escape
        assert!(!email(r#""a\"@x.com"#));
    }

    #[test]
    fn test_min_inclusive() {
        assert!(min(10, 10));
        assert!(min(11, 10));
        assert!(!min(9, 10));
        assert!(min(10.0, 10.0));
        assert!(!min(9.75, 10.0));
        assert!(!min(f64::NAN, 0.0));
    }

    #[test]
    fn test_max_and_between() {
        assert!(max(10, 10));
        assert!(!max(11, 10));
        assert!(between(0, 0, 10));
        assert!(between(10, 0, 10));
        assert!(!between(-1, 0, 10));
        assert!(!between(10.5, 0.0, 10.0));
    }

    #[test]
    fn test_string_lengths_count_chars() {
        assert!(!min_string(" ", 2));
        assert!(min_string(" ", 1));
        assert!(min_string("", 0));
        assert!(min_string("héllo", 5));
        assert!(max_string("日本語", 3));
        assert!(len_string("日本語", 3));
        assert!(!len_string("abcd", 3));
    }

    #[test]
    fn test_required() {
        assert!(required("x"));
        assert!(!required(""));
        assert!(!required(" \t\n"));
    }

    #[test]
    fn test_matches_and_one_of() {
        let phone = Regex::new(r"^\d{3}-\d{4}$").unwrap();
        assert!(matches("555-1234", &phone));
        assert!(!matches("5551234", &phone));

        assert!(one_of(&"red", &["red", "green"]));
        assert!(!one_of(&3, &[1, 2]));
    }
}
