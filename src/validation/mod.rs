//! Login form validation
//!
//! Implements the per-field checks and the submission-level orchestration.

pub mod login;
pub mod password;
pub mod results;
pub mod username;

pub use login::validate_login;
pub use password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, verify_password};
pub use results::{FieldOutcome, LoginReport};
pub use username::verify_username;
