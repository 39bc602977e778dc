//! Validation result types
//!
//! Defines result structures returned by login validation.

use crate::error::ValidationError;

/// Outcome of a single field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Accepted,
    Rejected(ValidationError),
}

impl FieldOutcome {
    /// Returns whether the field was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, FieldOutcome::Accepted)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            FieldOutcome::Accepted => None,
            FieldOutcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), ValidationError>> for FieldOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldOutcome::Accepted,
            Err(reason) => FieldOutcome::Rejected(reason),
        }
    }
}

/// Aggregated outcome of one login submission
///
/// Holds one outcome per field, in check order (password first), so no
/// rejection is lost when both fields fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReport {
    pub password: FieldOutcome,
    pub username: FieldOutcome,
}

impl LoginReport {
    /// Returns whether both fields were accepted.
    pub fn is_accepted(&self) -> bool {
        self.password.is_accepted() && self.username.is_accepted()
    }

    /// Returns every rejection, in check order.
    pub fn rejections(&self) -> Vec<&ValidationError> {
        [&self.password, &self.username]
            .into_iter()
            .filter_map(FieldOutcome::rejection)
            .collect()
    }
}
