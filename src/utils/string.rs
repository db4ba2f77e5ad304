//! String utility functions for text processing

/// Interpret a loosely typed flag value
///
/// `1`, `true`, `yes` and `on` (any case) are truthy, everything else is false.
///
/// # Examples
/// ```
/// use clash_subserver::utils::string::to_bool;
///
/// assert!(to_bool("Yes"));
/// assert!(!to_bool("off"));
/// ```
pub fn to_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Render a boolean the way Clash expects it in YAML
pub fn yaml_bool(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Check that a string is made only of ASCII decimal digits
///
/// An empty string is not numeric.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bool() {
        assert!(to_bool("1"));
        assert!(to_bool("TRUE"));
        assert!(to_bool(" on "));
        assert!(!to_bool("0"));
        assert!(!to_bool(""));
        assert!(!to_bool("enabled"));
    }

    #[test]
    fn test_yaml_bool() {
        assert_eq!(yaml_bool(true), "true");
        assert_eq!(yaml_bool(false), "false");
    }

    #[test]
    fn test_is_ascii_digits() {
        assert!(is_ascii_digits("443"));
        assert!(is_ascii_digits("0"));
        assert!(!is_ascii_digits(""));
        assert!(!is_ascii_digits("80a"));
        assert!(!is_ascii_digits("-1"));
        assert!(!is_ascii_digits("8.0"));
        assert!(!is_ascii_digits("+80"));
        assert!(!is_ascii_digits("\u{0663}"));
    }
}
