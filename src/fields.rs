//! Field descriptors of the registration form.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// HTML-style input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl Field {
    /// All fields in render order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Name => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Password | Field::ConfirmPassword => InputKind::Password,
        }
    }

    pub fn is_secret(self) -> bool {
        self.input_kind() == InputKind::Password
    }

    /// Whether the strength meter is attached to this field.
    pub fn shows_strength(self) -> bool {
        self == Field::Password
    }

    /// Browser autocomplete is disabled on every field.
    pub fn autocomplete(self) -> bool {
        false
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
