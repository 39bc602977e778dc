//! Status message surface
//!
//! Models the single status line shown under the form. The line holds at
//! most one message: writes overwrite, and each validation run starts by
//! clearing it.

/// The single status/error line of the login form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageSurface {
    message: String,
}

impl MessageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the status line regardless of its current content.
    pub fn clear(&mut self) {
        self.message.clear();
    }

    /// Replaces the status line content.
    pub fn set(&mut self, message: &str) {
        self.message.clear();
        self.message.push_str(message);
    }

    /// Returns the current status line content.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the status line is empty.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
