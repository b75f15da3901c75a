//! User reports and moderation decisions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{RecordId, TypesError};

/// Moderation state of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Not yet looked at
    #[default]
    Pending,
    /// Opened by a moderator
    UnderReview,
    /// Confirmed; action taken against the reported user
    Verified,
    /// Dismissed
    Rejected,
    /// Closed
    Resolved,
}

impl ReportStatus {
    /// Wire value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Resolved => "resolved",
        }
    }

    /// Badge label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "under_review" => Ok(Self::UnderReview),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            "resolved" => Ok(Self::Resolved),
            other => Err(TypesError::unknown("report status", other)),
        }
    }
}

/// The user who filed a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParty {
    /// User id
    pub id: RecordId,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// The user a report is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedUser {
    /// User id
    pub id: RecordId,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Reports filed against this user so far
    #[serde(default)]
    pub report_count: u64,
}

/// A report filed by one user about another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Record id
    pub id: RecordId,
    /// Who filed it
    pub reporter: ReportParty,
    /// Who it is about
    pub reported_user: ReportedUser,
    /// Report type key
    pub report_type: String,
    /// Report type label
    #[serde(default)]
    pub report_type_display: String,
    /// Reason key
    pub reason: String,
    /// Reason label
    #[serde(default)]
    pub reason_display: String,
    /// Reporter's description
    #[serde(default)]
    pub description: String,
    /// Screenshot URL
    #[serde(default)]
    pub screenshot: Option<String>,
    /// Moderation state
    pub status: ReportStatus,
    /// Moderation state label
    #[serde(default)]
    pub status_display: String,
    /// Filing time
    pub created_at: DateTime<Utc>,
    /// Moderator who reviewed it
    #[serde(default)]
    pub reviewed_by_username: Option<String>,
    /// Review time
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Internal notes
    #[serde(default)]
    pub admin_notes: String,
    /// Action recorded on verification
    #[serde(default)]
    pub action_taken: String,
}

/// Report counters by state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSummary {
    /// All reports
    pub total_reports: u64,
    /// Pending
    pub pending_reports: u64,
    /// Under review
    pub under_review_reports: u64,
    /// Verified
    pub verified_reports: u64,
    /// Rejected
    pub rejected_reports: u64,
    /// Resolved
    pub resolved_reports: u64,
}

/// Payload of `/api/admin/reports/dashboard/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStats {
    /// Counters
    pub summary: ReportSummary,
}

/// Moderation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportAction {
    /// Confirm the report; requires `action_taken`
    Verify,
    /// Dismiss the report
    Reject,
    /// Claim the report for review
    MarkUnderReview,
}

impl ReportAction {
    /// Path segment of the transition endpoint
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Reject => "reject",
            Self::MarkUnderReview => "mark_under_review",
        }
    }
}

impl FromStr for ReportAction {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verify" => Ok(Self::Verify),
            "reject" => Ok(Self::Reject),
            "mark_under_review" | "review" => Ok(Self::MarkUnderReview),
            other => Err(TypesError::unknown("report action", other)),
        }
    }
}

/// Body sent with a moderation transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDecision {
    /// What was done about the reported user
    #[serde(default)]
    pub action_taken: String,
    /// Internal notes
    #[serde(default)]
    pub admin_notes: String,
}

impl ReportDecision {
    /// Check the decision carries what `action` needs
    pub fn check_for(&self, action: ReportAction) -> Result<(), TypesError> {
        if action == ReportAction::Verify && self.action_taken.trim().is_empty() {
            return Err(TypesError::MissingField {
                field: "action_taken",
            });
        }
        Ok(())
    }
}
