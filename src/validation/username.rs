//! Username validation
//!
//! Enforces the username rules for a login submission: the field must be
//! filled and may contain letters and digits only.

use crate::error::ValidationError;

/// Validates the username field of a login submission.
///
/// A username is accepted when it is non-empty and every character is an
/// ASCII letter or digit. The input is checked as typed; no trimming.
pub fn verify_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidUsernameCharacters);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_rejected() {
        assert_eq!(verify_username(""), Err(ValidationError::EmptyUsername));
    }

    // The character class checks the content of the username itself: a
    // non-empty alphanumeric username passes.
    #[test]
    fn test_alphanumeric_username_accepted() {
        assert_eq!(verify_username("abc123"), Ok(()));
        assert_eq!(verify_username("alice"), Ok(()));
        assert_eq!(verify_username("007"), Ok(()));
    }

    #[test]
    fn test_username_with_space_rejected() {
        assert_eq!(
            verify_username("abc 123"),
            Err(ValidationError::InvalidUsernameCharacters)
        );
    }

    #[test]
    fn test_username_with_symbols_rejected() {
        assert_eq!(
            verify_username("abc_123"),
            Err(ValidationError::InvalidUsernameCharacters)
        );
        assert_eq!(
            verify_username("alice@rink"),
            Err(ValidationError::InvalidUsernameCharacters)
        );
    }

    // Only ASCII letters count as letters here.
    #[test]
    fn test_username_with_non_ascii_letters_rejected() {
        assert_eq!(
            verify_username("héllo"),
            Err(ValidationError::InvalidUsernameCharacters)
        );
    }

    // Whitespace is not trimmed, so a blank-but-filled field fails the
    // character class, not the empty check.
    #[test]
    fn test_whitespace_username_rejected_as_invalid_characters() {
        assert_eq!(
            verify_username(" "),
            Err(ValidationError::InvalidUsernameCharacters)
        );
    }
}
