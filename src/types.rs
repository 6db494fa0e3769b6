//! Value types shared by validation, derivation and scoring.

use secrecy::SecretString;

/// Outcome of a single validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Stable identifier of the check.
    pub name: &'static str,
    pub passed: bool,
    /// Human-readable description for a pass/fail row.
    pub message: &'static str,
}

/// Aggregate result of running every validation check on an address.
///
/// `is_valid` is the conjunction of all check outcomes. Check order is
/// fixed and only significant for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    /// Iterates over the checks that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.passed)
    }
}

/// A password derived from an address username, with its rubric score.
#[derive(Debug)]
pub struct DerivedPassword {
    pub password: SecretString,
    /// Rubric score in `[0, 100]`.
    pub strength: u8,
}

impl DerivedPassword {
    /// Display bucket for the strength score.
    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_score(self.strength)
    }
}

/// Display bucket for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Moderate,
    Strong,
}

impl StrengthBand {
    /// Buckets a score: below 40 is weak, below 70 moderate, else strong.
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            StrengthBand::Weak
        } else if score < 70 {
            StrengthBand::Moderate
        } else {
            StrengthBand::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Moderate => "Moderate",
            StrengthBand::Strong => "Strong",
        }
    }

    /// Indicator color for a strength bar.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthBand::Weak => "red",
            StrengthBand::Moderate => "orange",
            StrengthBand::Strong => "green",
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
