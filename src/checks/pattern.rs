//! Gmail pattern check - anchored match against the accepted address shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::CheckResult;

static GMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").expect("hard-coded pattern compiles")
});

/// Checks that the whole address matches the Gmail `.com` shape.
pub fn gmail_pattern_check(email: &str) -> CheckResult {
    CheckResult {
        name: "gmail_pattern",
        passed: GMAIL_PATTERN.is_match(email),
        message: "Valid Gmail address with .com domain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_accepts_gmail_com() {
        assert!(gmail_pattern_check("validuser@gmail.com").passed);
        assert!(gmail_pattern_check("Valid.User+tag@gmail.com").passed);
    }

    #[test]
    fn test_pattern_rejects_other_domains() {
        assert!(!gmail_pattern_check("validuser@gmail.org").passed);
        assert!(!gmail_pattern_check("validuser@outlook.com").passed);
    }

    #[test]
    fn test_pattern_is_anchored() {
        assert!(!gmail_pattern_check(" validuser@gmail.com").passed);
        assert!(!gmail_pattern_check("validuser@gmail.com.evil").passed);
    }

    #[test]
    fn test_pattern_rejects_empty_local_part() {
        assert!(!gmail_pattern_check("@gmail.com").passed);
    }
}
