//! Error handling
//!
//! Defines error types and handling for the login form validator.

pub mod types;

pub use types::*;
