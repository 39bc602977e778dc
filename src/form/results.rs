//! Form session result types
//!
//! Defines result structures returned by the interactive form session.

/// Terminal state of one interactive form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A submission passed both checks.
    Accepted { username: String },
    /// Every allowed attempt was rejected.
    AttemptsExhausted,
    /// Input ended before a submission was accepted.
    InputClosed,
}
