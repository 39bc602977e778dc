pub mod config;
pub mod error;
pub mod form;
pub mod validation;

pub use error::{FormError, ValidationError};
pub use form::{FormSession, LoginForm, MessageSurface, SessionOutcome};
pub use validation::{FieldOutcome, LoginReport, validate_login, verify_password, verify_username};
