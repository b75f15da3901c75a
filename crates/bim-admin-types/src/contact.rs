//! Contact-form messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Optimistic, RecordId, TypesError};

/// Topic picked by the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    /// General feedback; may be turned into a testimonial
    Feedback,
    /// Feature or resource request
    Request,
    /// Technical support
    Support,
    /// Anything else
    Other,
}

impl ContactSubject {
    /// Wire value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::Request => "request",
            Self::Support => "support",
            Self::Other => "other",
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::Request => "Request",
            Self::Support => "Technical Support",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactSubject {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feedback" => Ok(Self::Feedback),
            "request" => Ok(Self::Request),
            "support" => Ok(Self::Support),
            "other" => Ok(Self::Other),
            other => Err(TypesError::unknown("contact subject", other)),
        }
    }
}

/// Whether the sender had an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Logged-in sender
    Registered,
    /// Anonymous sender
    Guest,
}

impl UserType {
    /// Wire value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(Self::Registered),
            "guest" => Ok(Self::Guest),
            other => Err(TypesError::unknown("user type", other)),
        }
    }
}

/// A message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Record id
    pub id: RecordId,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Topic
    pub subject: ContactSubject,
    /// Message body
    pub message: String,
    /// Sender account id
    #[serde(default)]
    pub user: Option<RecordId>,
    /// Sender account name
    #[serde(default)]
    pub user_username: Option<String>,
    /// Sender account email
    #[serde(default)]
    pub user_email: Option<String>,
    /// Registered or guest
    pub user_type: UserType,
    /// Read by staff
    pub is_read: Optimistic<bool>,
    /// Answered by staff
    pub is_replied: Optimistic<bool>,
    /// Internal notes
    #[serde(default)]
    pub admin_notes: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Last modification
    pub updated_at: DateTime<Utc>,
}

/// Per-subject message counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectBreakdown {
    /// Feedback messages
    pub feedback: u64,
    /// Requests
    pub request: u64,
    /// Support messages
    pub support: u64,
    /// Other messages
    pub other: u64,
}

/// Counters from `/api/admin/contacts/statistics/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactStatistics {
    /// All messages
    pub total_messages: u64,
    /// Messages not yet read
    pub unread_messages: u64,
    /// Messages not yet answered
    pub unreplied_messages: u64,
    /// Messages from registered users
    pub registered_users: u64,
    /// Messages from guests
    pub guest_users: u64,
    /// Counts per subject
    pub by_subject: SubjectBreakdown,
}

/// Read/replied filter on the contacts page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatusFilter {
    /// No filter
    #[default]
    All,
    /// `is_read=false`
    Unread,
    /// `is_read=true`
    Read,
    /// `is_replied=false`
    Unreplied,
    /// `is_replied=true`
    Replied,
}

impl ContactStatusFilter {
    /// `(is_read, is_replied)` query values
    pub const fn as_query(self) -> (Option<bool>, Option<bool>) {
        match self {
            Self::All => (None, None),
            Self::Unread => (Some(false), None),
            Self::Read => (Some(true), None),
            Self::Unreplied => (None, Some(false)),
            Self::Replied => (None, Some(true)),
        }
    }
}

impl FromStr for ContactStatusFilter {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            "unreplied" => Ok(Self::Unreplied),
            "replied" => Ok(Self::Replied),
            other => Err(TypesError::unknown("contact status", other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_flags_decode_as_confirmed() {
        let message: ContactMessage = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Lea",
            "email": "lea@example.com",
            "subject": "feedback",
            "message": "Great platform",
            "user": null,
            "user_username": null,
            "user_email": null,
            "user_type": "guest",
            "is_read": false,
            "is_replied": true,
            "admin_notes": "",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(message.is_read, Optimistic::Confirmed(false));
        assert!(message.is_replied.get());
        assert_eq!(message.subject.label(), "Feedback");
    }

    #[test]
    fn test_status_filter_query_values() {
        assert_eq!(ContactStatusFilter::Unread.as_query(), (Some(false), None));
        assert_eq!(ContactStatusFilter::Replied.as_query(), (None, Some(true)));
        assert_eq!("read".parse::<ContactStatusFilter>().unwrap(), ContactStatusFilter::Read);
    }

    #[test]
    fn test_subject_label_for_support() {
        assert_eq!("support".parse::<ContactSubject>().unwrap().label(), "Technical Support");
    }
}
