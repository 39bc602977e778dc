//! Login Form Validator - Entry Point
//!
//! A terminal rendition of a login form: prompts for a username and a
//! password, validates them, and reports the result on a status line.

use std::io;
use std::process::ExitCode;

use log::{error, info};

use login_form_validator::config::FormConfig;
use login_form_validator::error::FormError;
use login_form_validator::form::{FormSession, SessionOutcome};

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login form...");

    match run() {
        Ok(SessionOutcome::Accepted { username }) => {
            info!("Session finished: {} logged in", username);
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::AttemptsExhausted) => {
            error!("Session finished: attempt limit reached");
            ExitCode::FAILURE
        }
        Ok(SessionOutcome::InputClosed) => {
            error!("Session finished: input closed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SessionOutcome, FormError> {
    let config = FormConfig::load()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = FormSession::new(&config);
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
