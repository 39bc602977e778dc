//! Interactive form session
//!
//! Drives the login form over line-based input and output: prompts for the
//! two fields, validates the submission, and prints the status line, until
//! a submission is accepted or the attempt limit is reached.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::form::results::SessionOutcome;
use crate::form::state::LoginForm;

/// Runs login attempts against a form until one is accepted, input ends, or
/// the configured attempt limit is reached.
pub struct FormSession {
    form: LoginForm,
    max_attempts: usize,
}

impl FormSession {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: LoginForm::new(),
            max_attempts: config.max_attempts,
        }
    }

    /// Returns the form driven by this session.
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Runs the session to completion.
    ///
    /// Each attempt reads a username line and a password line, submits them,
    /// and writes the resulting status line back out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<SessionOutcome, FormError> {
        for attempt in 1..=self.max_attempts {
            let Some(username) = prompt_field(reader, writer, "Username: ")? else {
                info!("Input closed before a submission was accepted");
                return Ok(SessionOutcome::InputClosed);
            };
            let Some(password) = prompt_field(reader, writer, "Password: ")? else {
                info!("Input closed before a submission was accepted");
                return Ok(SessionOutcome::InputClosed);
            };

            let report = self.form.submit(&username, &password);
            writeln!(writer, "{}", self.form.surface().message())?;

            if report.is_accepted() {
                info!("Login submission accepted for user {}", username);
                return Ok(SessionOutcome::Accepted { username });
            }

            for reason in report.rejections() {
                warn!("Attempt {} rejected: {}", attempt, reason);
            }
        }

        warn!("No submission accepted after {} attempts", self.max_attempts);
        Ok(SessionOutcome::AttemptsExhausted)
    }
}

/// Prompts for one field and reads its line. Returns `None` when input has
/// ended.
fn prompt_field<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>, FormError> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    // Strip only the line terminator; field content is validated as typed.
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}
