//! Error types
//!
//! Defines the validation rejection kinds and the form application errors.

use std::fmt;
use std::io;

/// Validation rejection kinds
///
/// `Display` renders the exact message shown to the user on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUsername,
    InvalidUsernameCharacters,
    EmptyPassword,
    PasswordTooShort,
    PasswordTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyUsername => write!(f, "Fill the username please!"),
            ValidationError::InvalidUsernameCharacters => {
                write!(f, "Username must consist of letters or numbers only.")
            }
            ValidationError::EmptyPassword => write!(f, "Fill the password please!"),
            ValidationError::PasswordTooShort => {
                write!(f, "Password length must be at least 8 characters")
            }
            ValidationError::PasswordTooLong => {
                write!(f, "Password length must not exceed 15 characters")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Form application errors
#[derive(Debug)]
pub enum FormError {
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Io(e) => write!(f, "I/O error: {}", e),
            FormError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for FormError {}

impl From<io::Error> for FormError {
    fn from(error: io::Error) -> Self {
        FormError::Io(error)
    }
}

impl From<config::ConfigError> for FormError {
    fn from(error: config::ConfigError) -> Self {
        FormError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ValidationError::EmptyUsername.to_string(),
            "Fill the username please!"
        );
        assert_eq!(
            ValidationError::InvalidUsernameCharacters.to_string(),
            "Username must consist of letters or numbers only."
        );
        assert_eq!(
            ValidationError::EmptyPassword.to_string(),
            "Fill the password please!"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password length must be at least 8 characters"
        );
        assert_eq!(
            ValidationError::PasswordTooLong.to_string(),
            "Password length must not exceed 15 characters"
        );
    }
}
