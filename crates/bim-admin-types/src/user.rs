//! Platform users as seen by staff

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{RecordId, TypesError, percent};

/// A user row in the users list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
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
    /// `false` once the user has been banned
    pub is_active: bool,
    /// Email verified by staff or by link
    pub is_verified: bool,
    /// Staff account
    #[serde(default)]
    pub is_staff: bool,
    /// Study semester, when provided
    #[serde(default)]
    pub current_semester: Option<String>,
    /// Registration time
    pub date_joined: DateTime<Utc>,
    /// Number of posts
    #[serde(default)]
    pub posts_count: u64,
    /// Number of shared materials
    #[serde(default)]
    pub materials_count: u64,
    /// Number of news articles authored
    #[serde(default)]
    pub news_count: u64,
    /// Number of completed donations
    #[serde(default)]
    pub successful_donations_count: u64,
}

impl User {
    /// Name to show, falling back to the username
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Full user profile shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    /// Fields shared with the list row
    #[serde(flatten)]
    pub user: User,
    /// Free-form biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Birth date
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Phone number
    #[serde(default)]
    pub phone_number: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Country
    #[serde(default)]
    pub country: String,
    /// Postal code
    #[serde(default)]
    pub postal_code: String,
    /// Latitude of the address
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the address
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Superadmin flag
    #[serde(default)]
    pub is_superuser: bool,
    /// Facebook profile
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// Twitter profile
    #[serde(default)]
    pub twitter_url: Option<String>,
    /// `LinkedIn` profile
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Last login time
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Aggregate counters from `/api/admin/users/statistics/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatistics {
    /// All users
    pub total_users: u64,
    /// Verified users
    pub verified_users: u64,
    /// Active (not banned) users
    pub active_users: u64,
    /// Staff users
    pub staff_users: u64,
    /// Unverified users
    pub unverified_users: u64,
    /// Banned users
    pub inactive_users: u64,
}

impl UserStatistics {
    /// Share of verified users, in percent
    pub fn verified_percent(&self) -> f64 {
        percent(self.verified_users, self.total_users)
    }

    /// Share of active users, in percent
    pub fn active_percent(&self) -> f64 {
        percent(self.active_users, self.total_users)
    }

    /// Share of staff users, in percent
    pub fn staff_percent(&self) -> f64 {
        percent(self.staff_users, self.total_users)
    }

    /// Share of banned users, in percent
    pub fn inactive_percent(&self) -> f64 {
        percent(self.inactive_users, self.total_users)
    }
}

/// Create-user form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct NewUser {
    /// Email address
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Login name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation
    pub password2: String,
    /// Given name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Family name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Study semester
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_semester: String,
}

impl NewUser {
    /// Check the form before anything is sent
    pub fn check_passwords(&self) -> Result<(), TypesError> {
        if self.password == self.password2 {
            Ok(())
        } else {
            Err(TypesError::PasswordMismatch)
        }
    }
}
