//! Password strength checks
//!
//! Each section checks one aspect of the password and is worth
//! [`CHECK_POINTS`](crate::score::CHECK_POINTS) when it passes.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Result type for section check functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// A named check, run in order by the evaluator.
pub type Section = (&'static str, fn(&SecretString) -> SectionResult);

pub const SECTIONS: [Section; 4] = [
    ("length", length_section),
    ("digit", digit_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
];
