//! Login form surface and interaction
//!
//! Models the form state, its status line, and the interactive session that
//! drives it.

pub mod results;
pub mod session;
pub mod state;
pub mod surface;

pub use results::SessionOutcome;
pub use session::FormSession;
pub use state::{LoginForm, PASSWORD_ACCEPTED_NOTICE, USERNAME_ACCEPTED_NOTICE};
pub use surface::MessageSurface;
