//! User-facing alerts raised by page actions

use bim_admin_client::ClientError;
use serde_json::Value;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Neutral information
    Info,
    /// An action completed
    Success,
    /// An action failed
    Error,
}

/// A one-shot message for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text to show
    pub message: String,
}

impl Notice {
    /// Informational notice
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Whether this reports a failure
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Error notice for a failed request.
    ///
    /// A message sent by the server wins; otherwise `rejected` is used when the
    /// server answered and `unreachable` when it never did.
    pub fn from_failure(err: &ClientError, rejected: &str, unreachable: &str) -> Self {
        let message = match err {
            ClientError::Api { message, .. } | ClientError::Forbidden { message }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            ClientError::Transport(_) | ClientError::Decode(_) | ClientError::Session(_) => {
                unreachable.to_string()
            }
            _ => rejected.to_string(),
        };
        Self::error(message)
    }
}

/// The `message` of a success payload, if it carries one
pub fn response_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
