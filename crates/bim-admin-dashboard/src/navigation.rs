//! Sidebar navigation, filtered by the signed-in user's role

use bim_admin_core::{Navigator, Session};
use bim_admin_types::{SessionUser, routes};
use tracing::info;

/// A sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Link text
    pub label: &'static str,
    /// Target route
    pub href: &'static str,
    /// Hidden from everyone but superadmins
    pub requires_super_admin: bool,
}

impl NavEntry {
    const fn new(label: &'static str, href: &'static str, requires_super_admin: bool) -> Self {
        Self {
            label,
            href,
            requires_super_admin,
        }
    }

    /// Whether `path` is this entry or one of its sub-pages
    pub fn is_active(&self, path: &str) -> bool {
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Every section of the console, in display order
pub const ALL_ENTRIES: [NavEntry; 8] = [
    NavEntry::new("Dashboard", routes::DASHBOARD, false),
    NavEntry::new("Users", routes::USERS, false),
    NavEntry::new("Admins", routes::ADMINS, true),
    NavEntry::new("News", routes::NEWS, false),
    NavEntry::new("Reports", routes::REPORTS, false),
    NavEntry::new("Contacts", routes::CONTACTS, false),
    NavEntry::new("Testimonials", routes::TESTIMONIALS, false),
    NavEntry::new("Analytics", routes::ANALYTICS, false),
];

/// The sidebar as seen by one user
///
/// Filtering is advisory; the backend enforces roles.
#[derive(Debug, Clone)]
pub struct Sidebar {
    user: Option<SessionUser>,
    entries: Vec<NavEntry>,
}

impl Sidebar {
    /// Build from the stored session descriptor; a missing descriptor is
    /// treated as a regular staff user
    pub fn from_session(session: &Session) -> Self {
        Self::for_user(session.user())
    }

    /// Build for `user`
    pub fn for_user(user: Option<SessionUser>) -> Self {
        let superuser = user.as_ref().is_some_and(|u| u.is_superuser);
        let entries = ALL_ENTRIES
            .iter()
            .filter(|entry| superuser || !entry.requires_super_admin)
            .copied()
            .collect();
        Self { user, entries }
    }

    /// Visible entries
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Signed-in user, if known
    pub const fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Whether the superadmin badge applies
    pub fn is_superuser(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }

    /// Visible entry with `href`, if any
    pub fn entry(&self, href: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.href == href)
    }

    /// Entries highlighted for `path`
    pub fn active(&self, path: &str) -> Vec<&NavEntry> {
        self.entries.iter().filter(|e| e.is_active(path)).collect()
    }
}

/// Sign out: forget the stored credentials and go to the login route
///
/// # Errors
///
/// Returns an error if the store could not remove an entry; navigation still
/// happens.
pub fn logout(session: &Session, navigator: &dyn Navigator) -> bim_admin_core::Result<()> {
    let cleared = session.clear();
    navigator.navigate(routes::LOGIN);
    info!("Logged out");
    cleared
}
