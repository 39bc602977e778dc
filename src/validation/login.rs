//! Login validation orchestration
//!
//! Runs the password and username checks for one submission and aggregates
//! their outcomes.

use super::password::verify_password;
use super::results::{FieldOutcome, LoginReport};
use super::username::verify_username;

/// Validates one login submission.
///
/// Both checks always run; a rejected password does not stop the username
/// check. The report carries one outcome per field.
pub fn validate_login(username: &str, password: &str) -> LoginReport {
    let password_outcome = FieldOutcome::from(verify_password(password));
    let username_outcome = FieldOutcome::from(verify_username(username));

    LoginReport {
        password: password_outcome,
        username: username_outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_valid_submission_accepted() {
        let report = validate_login("alice99", "validPass1");
        assert!(report.is_accepted());
        assert_eq!(report.password, FieldOutcome::Accepted);
        assert_eq!(report.username, FieldOutcome::Accepted);
    }

    #[test]
    fn test_both_failures_preserved() {
        let report = validate_login("", "");
        assert_eq!(
            report.rejections(),
            vec![
                &ValidationError::EmptyPassword,
                &ValidationError::EmptyUsername
            ]
        );
    }

    #[test]
    fn test_username_checked_even_when_password_fails() {
        let report = validate_login("abc 123", "");
        assert_eq!(
            report.password,
            FieldOutcome::Rejected(ValidationError::EmptyPassword)
        );
        assert_eq!(
            report.username,
            FieldOutcome::Rejected(ValidationError::InvalidUsernameCharacters)
        );
    }

    #[test]
    fn test_password_checked_even_when_username_fails() {
        let report = validate_login("", "short1");
        assert_eq!(
            report.password,
            FieldOutcome::Rejected(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            report.username,
            FieldOutcome::Rejected(ValidationError::EmptyUsername)
        );
    }
}
