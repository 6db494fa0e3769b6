//! Email validator - runs the check sequence and builds the report.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{
    banned_characters_check, consecutive_dots_check, contains_at_check, gmail_pattern_check,
    local_part_length_check, non_empty_check, reserved_alias_check,
};
use crate::types::{CheckResult, ValidationReport};

/// Checks in display order.
const CHECKS: [fn(&str) -> CheckResult; 7] = [
    gmail_pattern_check,
    non_empty_check,
    contains_at_check,
    local_part_length_check,
    banned_characters_check,
    consecutive_dots_check,
    reserved_alias_check,
];

/// Validates an email address and returns a detailed report.
///
/// Total over all inputs: every string, including the empty one,
/// produces a report. Invalid addresses fail checks instead of
/// raising errors.
///
/// # Returns
/// A `ValidationReport` with one `CheckResult` per check, in display
/// order, and `is_valid` set when every check passed.
pub fn validate_email(email: &str) -> ValidationReport {
    let checks: Vec<CheckResult> = CHECKS.iter().map(|check| check(email)).collect();

    #[cfg(feature = "tracing")]
    for check in checks.iter().filter(|c| !c.passed) {
        tracing::debug!(check = check.name, "email check failed");
    }

    let is_valid = checks.iter().all(|c| c.passed);

    #[cfg(feature = "tracing")]
    tracing::info!(is_valid, "email validated");

    ValidationReport { is_valid, checks }
}

/// Async version that debounces, honors cancellation, and sends the
/// report via channel. Intended for input-change wiring in a UI layer.
#[cfg(feature = "async")]
pub async fn validate_email_tx(
    email: &str,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::warn!("validation cancelled before running");
        return;
    }

    let report = validate_email(email);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send validation report: {}", e);
    }
}
