//! Presence checks - non-empty input and `@` separator.

use crate::types::CheckResult;

/// Checks that the address is not the empty string.
pub fn non_empty_check(email: &str) -> CheckResult {
    CheckResult {
        name: "non_empty",
        passed: !email.is_empty(),
        message: "Email is not empty",
    }
}

/// Checks that the address contains the `@` separator.
pub fn contains_at_check(email: &str) -> CheckResult {
    CheckResult {
        name: "contains_at",
        passed: email.contains('@'),
        message: "Contains @ symbol",
    }
}
