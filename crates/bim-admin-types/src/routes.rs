//! Console routes

use crate::RecordId;

/// Login screen; target of the unauthorized redirect
pub const LOGIN: &str = "/login";
/// Overview page
pub const DASHBOARD: &str = "/dashboard";
/// User management
pub const USERS: &str = "/dashboard/users";
/// Admin management, superadmins only
pub const ADMINS: &str = "/dashboard/admins";
/// News management
pub const NEWS: &str = "/dashboard/news";
/// News categories
pub const NEWS_CATEGORIES: &str = "/dashboard/news/categories";
/// Report moderation
pub const REPORTS: &str = "/dashboard/reports";
/// Contact messages
pub const CONTACTS: &str = "/dashboard/contacts";
/// Testimonials
pub const TESTIMONIALS: &str = "/dashboard/testimonials";
/// Analytics
pub const ANALYTICS: &str = "/dashboard/analytics";

/// Whether `path` is the login route or lies under the dashboard
pub fn is_console_route(path: &str) -> bool {
    path == LOGIN
        || path
            .strip_prefix(DASHBOARD)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Detail page of a user
pub fn user_detail(id: RecordId) -> String {
    format!("{USERS}/{id}")
}

/// Detail page of an article
pub fn news_detail(id: RecordId) -> String {
    format!("{NEWS}/{id}")
}

/// Edit form of an article
pub fn news_edit(id: RecordId) -> String {
    format!("{NEWS}/{id}/edit")
}

/// Article creation form
pub fn news_create() -> String {
    format!("{NEWS}/create")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes_nest_under_section() {
        assert_eq!(user_detail(7), "/dashboard/users/7");
        assert_eq!(news_edit(3), "/dashboard/news/3/edit");
        assert!(news_create().starts_with(NEWS));
    }

    #[test]
    fn test_console_routes() {
        assert!(is_console_route(LOGIN));
        assert!(is_console_route(DASHBOARD));
        assert!(is_console_route(&user_detail(7)));
        assert!(!is_console_route("/dashboardx"));
        assert!(!is_console_route("/"));
    }
}
