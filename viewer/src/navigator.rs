use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Why the input never became a ServerId. The messages double as the warning
// text shown to the user, so keep them phrased for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerIdError {
    #[error("please enter a server ID")]
    Empty,
    #[error("server ID must contain only numbers")]
    NonNumeric,
}

/// A validated server identifier: a non-empty string of decimal digits.
///
/// Every entry path (CLI argument, interactive prompt) funnels through
/// [`FromStr`], so the validation rules cannot drift between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerId(String);

impl FromStr for ServerId {
    type Err = ServerIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ServerIdError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ServerIdError::NonNumeric);
        }
        Ok(ServerId(trimmed.to_string()))
    }
}

impl ServerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Browser-facing page for this server's queue.
    pub fn queue_path(&self) -> String {
        format!("/serverqueue/{}", self.0)
    }

    /// JSON endpoint the viewer polls.
    pub fn api_path(&self) -> String {
        format!("/api/queue/{}", self.0)
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
