//! Reserved-alias check - rejects administrative local parts.

use super::local_part;
use crate::aliases::is_reserved_alias;
use crate::types::CheckResult;

/// Checks that the local part is not a reserved alias (case-insensitive).
pub fn reserved_alias_check(email: &str) -> CheckResult {
    CheckResult {
        name: "reserved_alias",
        passed: !is_reserved_alias(local_part(email)),
        message: "Username not a reserved alias",
    }
}
