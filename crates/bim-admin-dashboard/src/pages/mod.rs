//! Page controllers, one per console section
//!
//! A controller owns a clone of the API client and the state its page shows.
//! Actions are `&mut self` async methods; alerts come back as [`Notice`]s and
//! low-stakes failures are only logged.
//!
//! [`Notice`]: crate::notice::Notice

pub mod admins;
pub mod analytics;
pub mod categories;
pub mod contacts;
pub mod news;
pub mod news_detail;
pub mod news_editor;
pub mod overview;
pub mod reports;
pub mod testimonials;
pub mod user_detail;
pub mod users;

pub use admins::AdminsPage;
pub use analytics::{AnalyticsPage, Share};
pub use categories::CategoriesPage;
pub use contacts::{ContactFilters, ContactFlag, ContactsPage};
pub use news::{NewsPage, NewsTransition};
pub use news_detail::NewsDetailPage;
pub use news_editor::{EditorMode, NewsEditor};
pub use overview::{NewsCounts, OverviewPage};
pub use reports::{ReportFilters, ReportsPage};
pub use testimonials::{TestimonialFlag, TestimonialsPage};
pub use user_detail::{UserAction, UserDetailPage};
pub use users::{UserFilters, UsersPage};
