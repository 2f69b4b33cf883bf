//! Console port - Interface for user-facing terminal I/O
//!
//! All prompts and printed results go through this port so the task flows
//! can be driven by scripted input in tests.

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for console interaction
#[cfg_attr(test, automock)]
pub trait ConsolePort: Send + Sync {
    /// Print a line to the user
    fn say(&self, message: &str);

    /// Print a prompt and read one line of input
    ///
    /// # Errors
    /// Fails if standard input is closed or unreadable.
    fn prompt(&self, message: &str) -> Result<String, ApplicationError>;
}
