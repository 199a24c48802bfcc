#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Characters the policy counts as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 6;

/// Result of checking a password against the four policy criteria.
///
/// Each criterion is independent; the struct is recomputed from scratch on
/// every edit rather than updated incrementally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PasswordPolicy {
    pub has_uppercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub is_long_enough: bool,
}

impl PasswordPolicy {
    /// Evaluate all four criteria for `value`.
    pub fn evaluate(value: &str) -> Self {
        Self {
            has_uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
            has_number: value.chars().any(|c| c.is_ascii_digit()),
            has_special_char: value.chars().any(|c| SPECIAL_CHARS.contains(c)),
            is_long_enough: value.chars().count() >= MIN_LENGTH,
        }
    }

    /// True when every criterion is met.
    pub fn satisfied(self) -> bool {
        self.has_uppercase && self.has_number && self.has_special_char && self.is_long_enough
    }
}
