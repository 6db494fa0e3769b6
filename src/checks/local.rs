//! Local-part checks - length bounds, banned characters, consecutive dots.

use super::local_part;
use crate::types::CheckResult;

const MIN_LOCAL_LEN: usize = 6;
const MAX_LOCAL_LEN: usize = 30;

/// Characters not accepted in the local part even though some of them
/// pass the pattern check.
const BANNED_LOCAL_CHARS: [char; 9] = ['&', '=', '_', '\'', '-', '+', ',', '<', '>'];

/// Checks that the local part length is within `[6, 30]`.
pub fn local_part_length_check(email: &str) -> CheckResult {
    let len = local_part(email).chars().count();
    CheckResult {
        name: "local_part_length",
        passed: (MIN_LOCAL_LEN..=MAX_LOCAL_LEN).contains(&len),
        message: "Username length between 6-30 characters",
    }
}

/// Checks that the local part contains none of the banned characters.
pub fn banned_characters_check(email: &str) -> CheckResult {
    let clean = !local_part(email)
        .chars()
        .any(|c| BANNED_LOCAL_CHARS.contains(&c));
    CheckResult {
        name: "banned_characters",
        passed: clean,
        message: "No invalid special characters in username",
    }
}

/// Checks that the local part has no two consecutive `.` characters.
pub fn consecutive_dots_check(email: &str) -> CheckResult {
    CheckResult {
        name: "consecutive_dots",
        passed: !local_part(email).contains(".."),
        message: "No consecutive periods",
    }
}
