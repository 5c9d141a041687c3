//! Strength score and display policy types.

use std::fmt;

/// Points awarded by every passing check.
pub const CHECK_POINTS: u8 = 25;

/// Heuristic password strength, always one of 0, 25, 50, 75 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const ZERO: StrengthScore = StrengthScore(0);
    pub const MAX: StrengthScore = StrengthScore(4 * CHECK_POINTS);

    /// Builds a score from the number of passing checks (clamped to 4).
    pub fn from_passed_checks(passed: usize) -> Self {
        let passed = passed.min(4) as u8;
        StrengthScore(passed * CHECK_POINTS)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Label shown next to the password field.
    ///
    /// `None` at zero, `Pass` from 75 upward, `Weak` otherwise.
    pub fn label(self) -> Option<StrengthLabel> {
        if self.is_zero() {
            None
        } else if self.0 >= 75 {
            Some(StrengthLabel::Pass)
        } else {
            Some(StrengthLabel::Weak)
        }
    }

    /// Color bucket of the strength meter.
    pub fn progress_tone(self) -> ProgressTone {
        match self.0 {
            100 => ProgressTone::Complete,
            s if s >= 75 => ProgressTone::Good,
            _ => ProgressTone::Poor,
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> u8 {
        score.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Pass,
    Weak,
}

impl StrengthLabel {
    pub fn text(self) -> &'static str {
        match self {
            StrengthLabel::Pass => "Pass",
            StrengthLabel::Weak => "Weak password",
        }
    }

    pub fn tone(self) -> LabelTone {
        match self {
            StrengthLabel::Pass => LabelTone::Affirming,
            StrengthLabel::Weak => LabelTone::Warning,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelTone {
    Affirming,
    Warning,
}

/// Meter color: green at 100, yellow at 75, red below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressTone {
    Complete,
    Good,
    Poor,
}

/// Result of a full evaluation: the score and the reason of every failed check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: StrengthScore,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn label(&self) -> Option<StrengthLabel> {
        self.score.label()
    }
}
