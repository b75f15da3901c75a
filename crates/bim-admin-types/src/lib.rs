//! Record, statistics and form types for the BIM admin console
//!
//! Everything in this crate mirrors the backend's JSON representation and
//! performs no I/O. Records are flat; the only client-side state carried on a
//! record is the [`Optimistic`] wrapper around toggleable flags.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod admin;
pub mod contact;
pub mod error;
pub mod news;
pub mod optimistic;
pub mod page;
pub mod query;
pub mod report;
pub mod routes;
pub mod session;
pub mod testimonial;
pub mod user;

pub use admin::{Admin, AdminActiveFilter, AdminStatistics, AdminUpdate, NewAdmin};
pub use contact::{
    ContactMessage, ContactStatistics, ContactStatusFilter, ContactSubject, SubjectBreakdown,
    UserType,
};
pub use error::{TypesError, TypesResult};
pub use news::{
    CategoryInput, ImageUpload, News, NewsAuthor, NewsCategory, NewsCategoryRef, NewsDraft,
    NewsStatus,
};
pub use optimistic::Optimistic;
pub use page::Page;
pub use query::{AdminQuery, ContactQuery, NewsQuery, ReportQuery, TestimonialQuery, UserQuery};
pub use report::{
    Report, ReportAction, ReportDecision, ReportParty, ReportStats, ReportStatus, ReportSummary,
    ReportedUser,
};
pub use session::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, SessionUser};
pub use testimonial::{Testimonial, TestimonialFilter};
pub use user::{NewUser, User, UserDetail, UserStatistics};

/// Numeric identifier used by every backend record
pub type RecordId = i64;

/// Percentage of `part` in `total`, `0.0` when `total` is zero
#[must_use]
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
