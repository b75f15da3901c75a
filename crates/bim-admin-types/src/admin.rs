//! Staff (admin) accounts, visible to superadmins only

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

use crate::{RecordId, TypesError};

/// An admin account row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Record id
    pub id: RecordId,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Whether the account may log in
    pub is_active: bool,
    /// Phone number
    #[serde(default)]
    pub phone_number: String,
    /// Creation time
    pub date_joined: DateTime<Utc>,
    /// Last login time, `None` if never
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Aggregate counters from `/api/admin/admins/statistics/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStatistics {
    /// All admins
    pub total_admins: u64,
    /// Active admins
    pub active_admins: u64,
    /// Deactivated admins
    pub inactive_admins: u64,
}

/// Create-admin form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct NewAdmin {
    /// Login name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Email address
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password2: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Phone number
    pub phone_number: String,
}

/// Partial update for `PATCH /api/admin/admins/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminUpdate {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl AdminUpdate {
    /// Whether the update carries no changes
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
    }
}

/// Active-state filter on the admins page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminActiveFilter {
    /// No filter
    #[default]
    All,
    /// Only active admins
    Active,
    /// Only deactivated admins
    Inactive,
}

impl AdminActiveFilter {
    /// Value of the `is_active` query parameter
    pub const fn as_query(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Active => Some(true),
            Self::Inactive => Some(false),
        }
    }
}

impl FromStr for AdminActiveFilter {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(TypesError::unknown("admin filter", other)),
        }
    }
}

impl fmt::Display for AdminActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        })
    }
}
