//! Error types for the admin API client

use bim_admin_types::TypesError;
use reqwest::StatusCode;
use std::collections::BTreeMap;
use thiserror::Error;

/// Server-side validation messages keyed by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::ApiClient`] and the API groups
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend rejected the credentials; the session has been cleared
    #[error("Not authenticated")]
    Unauthorized,

    /// The signed-in user lacks the required role
    #[error("Permission denied: {message}")]
    Forbidden {
        /// Server message
        message: String,
    },

    /// The backend rejected a form
    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    /// Any other non-success status
    #[error("API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server message
        message: String,
    },

    /// A form failed local checks; nothing was sent
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] TypesError),

    /// A form failed its declared constraints; nothing was sent
    #[error("Invalid form: {0}")]
    InvalidForm(#[from] validator::ValidationErrors),

    /// Network or protocol failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The query string could not be encoded
    #[error("Cannot encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The configured base URL or a path is malformed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Credential storage failed
    #[error("Session error: {0}")]
    Session(#[from] bim_admin_core::Error),
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    /// Classify a non-success response
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let payload: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = payload
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| fallback_message(status, body));

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden { message },
            StatusCode::BAD_REQUEST => payload
                .as_ref()
                .filter(|p| server_message(p).is_none())
                .map(field_errors)
                .filter(|errors| !errors.is_empty())
                .map_or(
                    Self::Api {
                        status: status.as_u16(),
                        message,
                    },
                    Self::Validation,
                ),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this is the unauthorized outcome
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Whether this is the forbidden outcome
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    /// Server-side field errors, if any
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// First server message for `field`
    pub fn first_field_message(&self, field: &str) -> Option<&str> {
        self.field_errors()?
            .get(field)?
            .first()
            .map(String::as_str)
    }

    /// Whether the request never reached the server
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidForm(_) | Self::Query(_) | Self::Url(_)
        )
    }
}

fn server_message(payload: &serde_json::Value) -> Option<String> {
    ["message", "error", "detail"].iter().find_map(|key| {
        match payload.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => items.first()?.as_str().map(str::to_string),
            _ => None,
        }
    })
}

fn field_errors(payload: &serde_json::Value) -> FieldErrors {
    let Some(map) = payload.as_object() else {
        return FieldErrors::new();
    };
    map.iter()
        .filter_map(|(field, value)| {
            let messages: Vec<String> = match value {
                serde_json::Value::String(s) => vec![s.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            (!messages.is_empty()).then(|| (field.clone(), messages))
        })
        .collect()
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('<') {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.chars().take(200).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_errors_from_bad_request() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"email": ["user with this email already exists."], "username": "taken"}"#,
        );
        assert_eq!(
            err.first_field_message("email"),
            Some("user with this email already exists.")
        );
        assert_eq!(err.first_field_message("username"), Some("taken"));
        assert!(err.first_field_message("password").is_none());
    }

    #[test]
    fn test_bad_request_with_message_is_api_error() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Only feedback messages can become testimonials"}"#,
        );
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Only feedback messages can become testimonials");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_forbidden_takes_detail() {
        let err = ClientError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"detail": "You do not have permission to perform this action."}"#,
        );
        assert!(err.is_forbidden());
        assert!(err.to_string().contains("permission"));
    }

    #[test]
    fn test_html_body_falls_back_to_reason() {
        let err = ClientError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
        );
        assert_eq!(err.to_string(), "API returned 500: Internal Server Error");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ClientError::from_response(StatusCode::UNAUTHORIZED, "").is_unauthorized());
    }
}
