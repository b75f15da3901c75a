//! Login payloads and the stored session descriptor

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// The staff user stored locally at login; drives role-gated navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User id
    pub id: RecordId,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Staff flag
    #[serde(default)]
    pub is_staff: bool,
    /// Superadmin flag; unlocks the admins section
    #[serde(default)]
    pub is_superuser: bool,
}

/// Body of `POST /api/auth/login/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Response of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Access token
    #[serde(alias = "token", alias = "access_token")]
    pub access: String,
    /// Refresh token, when the backend issues one
    #[serde(default, alias = "refresh_token")]
    pub refresh: Option<String>,
    /// The authenticated user
    pub user: SessionUser,
}

/// Body of `POST /api/token/refresh/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    /// Refresh token
    pub refresh: String,
}

/// Response of a token refresh
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
    /// Rotated refresh token
    #[serde(default)]
    pub refresh: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_response_accepts_token_alias() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "user": {"id": 1, "username": "root", "is_superuser": true}
        }))
        .unwrap();
        assert_eq!(response.access, "abc");
        assert!(response.refresh.is_none());
        assert!(response.user.is_superuser);
    }

    #[test]
    fn test_session_user_defaults_to_non_superuser() {
        let user: SessionUser =
            serde_json::from_value(serde_json::json!({"id": 2, "username": "mod"})).unwrap();
        assert!(!user.is_superuser);
    }
}
