//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::score::{PasswordEvaluation, StrengthScore};
use crate::sections::SECTIONS;

/// Computes the strength score of a password.
///
/// Every passing section adds 25 points. The result only depends on
/// `password`, so callers recompute it on every change.
pub fn compute_password_strength(password: &str) -> StrengthScore {
    let password = SecretString::new(password.into());
    compute_secret_strength(&password)
}

/// Same as [`compute_password_strength`] for a password already held as a secret.
pub fn compute_secret_strength(password: &SecretString) -> StrengthScore {
    let passed = SECTIONS
        .iter()
        .filter(|(_, section_fn)| section_fn(password).is_none())
        .count();
    StrengthScore::from_passed_checks(passed)
}

/// Evaluates password strength and returns the score with the reason of
/// every failed section.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let mut passed = 0;

    // Orchestrator: execute sections in sequence
    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("password section failed: {}", _section_name);
                reasons.push(reason);
            }
            None => passed += 1,
        }
    }

    PasswordEvaluation {
        score: StrengthScore::from_passed_checks(passed),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::StrengthLabel;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(compute_password_strength(""), StrengthScore::ZERO);
        assert_eq!(compute_password_strength("").label(), None);
    }

    #[test]
    fn test_known_scores() {
        let cases = [
            ("abc", 25),
            ("abcdef", 50),
            ("Abc123", 100),
            ("ABC123", 75),
            ("123456", 50),
            ("ABCDEF", 50),
            ("aB1", 75),
            ("!!!!!!", 25),
            ("!", 0),
        ];
        for (pwd, expected) in cases {
            assert_eq!(
                compute_password_strength(pwd).value(),
                expected,
                "unexpected score for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_score_is_always_a_multiple_of_25() {
        let passwords = [
            "", "a", "A", "1", "aA", "a1", "A1", "aA1", "abcdefgh", "ABCDEFGH1",
            "Correct Horse Battery Staple", "パスワード", "ümlaut", "   ", "Zz9",
        ];
        for pwd in passwords {
            let score = compute_password_strength(pwd).value();
            assert!(
                [0, 25, 50, 75, 100].contains(&score),
                "score {} out of domain for {:?}",
                score,
                pwd
            );
        }
    }

    #[test]
    fn test_label_follows_score() {
        assert_eq!(compute_password_strength("abc").label(), Some(StrengthLabel::Weak));
        assert_eq!(compute_password_strength("abcdef").label(), Some(StrengthLabel::Weak));
        assert_eq!(compute_password_strength("ABC123").label(), Some(StrengthLabel::Pass));
        assert_eq!(compute_password_strength("Abc123").label(), Some(StrengthLabel::Pass));
    }

    #[test]
    fn test_repeated_evaluation_is_deterministic() {
        let first = compute_password_strength("Abc1");
        let _ = compute_password_strength("Abc123");
        assert_eq!(compute_password_strength("Abc1"), first);
    }

    #[test]
    fn test_evaluate_collects_reasons() {
        let evaluation = evaluate_password_strength(&secret("abc"));
        assert_eq!(evaluation.score.value(), 25);
        assert_eq!(evaluation.reasons.len(), 3);
        assert!(evaluation.reasons[0].contains("at least 6"));
        assert!(evaluation.reasons.iter().any(|r| r.contains("numbers")));
        assert!(evaluation.reasons.iter().any(|r| r.contains("uppercase")));
    }

    #[test]
    fn test_evaluate_strong_password_has_no_reasons() {
        let evaluation = evaluate_password_strength(&secret("Abc123"));
        assert_eq!(evaluation.score, StrengthScore::MAX);
        assert!(evaluation.reasons.is_empty());
        assert_eq!(evaluation.label(), Some(StrengthLabel::Pass));
    }

    #[test]
    fn test_evaluate_matches_compute() {
        for pwd in ["", "abc", "ABC123", "Abc123", "zzzzzzzz"] {
            assert_eq!(
                evaluate_password_strength(&secret(pwd)).score,
                compute_password_strength(pwd)
            );
        }
    }
}
