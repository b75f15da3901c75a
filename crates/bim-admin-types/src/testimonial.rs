//! Testimonials shown on the public site

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Optimistic, RecordId, TypesError};

/// A testimonial, usually created from a feedback message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Record id
    pub id: RecordId,
    /// Author name
    pub name: String,
    /// Author title or role
    #[serde(default)]
    pub title: String,
    /// Quote
    pub message: String,
    /// Visible on the site
    pub is_approved: Optimistic<bool>,
    /// Highlighted on the site
    pub is_featured: Optimistic<bool>,
    /// Sort key
    #[serde(default)]
    pub display_order: i64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Source contact message
    #[serde(default)]
    pub contact_message: Option<RecordId>,
}

/// Approval filter on the testimonials page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestimonialFilter {
    /// No filter
    #[default]
    All,
    /// `is_approved=true`
    Approved,
    /// `is_approved=false`
    Pending,
}

impl TestimonialFilter {
    /// Value of the `is_approved` query parameter
    pub const fn as_query(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Approved => Some(true),
            Self::Pending => Some(false),
        }
    }

    /// Whether a record with the given approval belongs in this view
    pub const fn admits(self, approved: bool) -> bool {
        match self {
            Self::All => true,
            Self::Approved => approved,
            Self::Pending => !approved,
        }
    }
}

impl fmt::Display for TestimonialFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Approved => "approved",
            Self::Pending => "pending",
        })
    }
}

impl FromStr for TestimonialFilter {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            other => Err(TypesError::unknown("testimonial filter", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_admits() {
        assert!(TestimonialFilter::All.admits(false));
        assert!(TestimonialFilter::Approved.admits(true));
        assert!(!TestimonialFilter::Pending.admits(true));
    }
}
