//! Page controllers, navigation and terminal rendering for the BIM admin
//! console
//!
//! The crate drives the admin REST API through [`bim_admin_client`] and keeps
//! per-page state: paginated lists with stale-response protection, optimistic
//! toggles that roll back on failure, and role-gated navigation.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod forms;
pub mod list;
pub mod navigation;
pub mod notice;
pub mod optimistic;
pub mod pages;
pub mod pagination;
pub mod render;

pub use app::App;
pub use list::{FetchTicket, ListState, LoadStatus};
pub use navigation::{NavEntry, Sidebar, logout};
pub use notice::{Notice, NoticeLevel};
pub use optimistic::{Outcome, Toggle};
pub use pagination::Pager;
