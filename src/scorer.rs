//! Strength scorer - fixed additive rubric over a password.

use crate::deriver::SPECIAL_CHARS;

/// Scores a password with the additive rubric, clamped to `[0, 100]`.
///
/// Points, with no early exit:
/// - +40 for length >= 12
/// - +20 for any ASCII uppercase letter
/// - +20 for any ASCII lowercase letter
/// - +10 for any ASCII digit
/// - +10 for any character from the special alphabet
pub fn score_password(password: &str) -> u8 {
    let mut score: u8 = 0;

    if password.chars().count() >= 12 {
        score += 40;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 10;
    }

    score.min(100)
}
