//! Module `form::state`
//!
//! Defines the `LoginForm` struct tying the field checks to the status line
//! they report through.

use crate::form::surface::MessageSurface;
use crate::validation::{FieldOutcome, LoginReport, validate_login};

/// Notice shown on the status line when the username field is accepted.
pub const USERNAME_ACCEPTED_NOTICE: &str = "Username is correct";

/// Notice shown on the status line when the password field is accepted.
pub const PASSWORD_ACCEPTED_NOTICE: &str = "Password is correct";

/// Represents the login form: two input fields and the single status line
/// underneath them.
#[derive(Debug, Default)]
pub struct LoginForm {
    surface: MessageSurface,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status line.
    pub fn surface(&self) -> &MessageSurface {
        &self.surface
    }

    /// Validates one submission and refreshes the status line.
    ///
    /// The line is cleared first, then receives the password notice and then
    /// the username notice. The line holds one message, so when both fields
    /// produce a notice only the username's stays visible; the returned
    /// report keeps both outcomes.
    pub fn submit(&mut self, username: &str, password: &str) -> LoginReport {
        self.surface.clear();

        let report = validate_login(username, password);

        self.surface
            .set(&field_notice(&report.password, PASSWORD_ACCEPTED_NOTICE));
        self.surface
            .set(&field_notice(&report.username, USERNAME_ACCEPTED_NOTICE));

        report
    }
}

/// Notice text for one field outcome: the rejection message, or the field's
/// acknowledgment line when accepted.
fn field_notice(outcome: &FieldOutcome, accepted_notice: &str) -> String {
    match outcome {
        FieldOutcome::Accepted => accepted_notice.to_string(),
        FieldOutcome::Rejected(reason) => reason.to_string(),
    }
}
