//! Query strings for the list endpoints
//!
//! Unset fields are left out of the encoded string so the backend applies its
//! own defaults.

use serde::Serialize;

use crate::{ContactStatusFilter, ContactSubject, NewsStatus, ReportStatus, UserType};

#[allow(clippy::ref_option)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Filters of `GET /api/admin/users/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Free text search
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    /// Verification filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// Ban filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Staff filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Filters of `GET /api/admin/admins/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Free text search
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    /// Active filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters of `GET /api/news/articles/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Free text search
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    /// Publication state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NewsStatus>,
}

impl NewsQuery {
    /// Smallest page of `status`, used to read the total count only
    pub const fn count_only(status: Option<NewsStatus>) -> Self {
        Self {
            page: None,
            page_size: Some(1),
            search: None,
            status,
        }
    }
}

/// Filters of `GET /api/admin/contacts/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Free text search
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    /// Topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<ContactSubject>,
    /// Read flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    /// Replied flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_replied: Option<bool>,
    /// Registered or guest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

impl ContactQuery {
    /// Apply a read/replied status filter
    #[must_use]
    pub fn with_status(mut self, status: ContactStatusFilter) -> Self {
        let (is_read, is_replied) = status.as_query();
        self.is_read = is_read;
        self.is_replied = is_replied;
        self
    }
}

/// Filters of `GET /api/admin/reports/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Moderation state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    /// Report type key
    #[serde(rename = "type", skip_serializing_if = "is_blank")]
    pub report_type: Option<String>,
    /// Free text search
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
}

/// Filters of `GET /api/admin/testimonials/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestimonialQuery {
    /// Approval filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}
