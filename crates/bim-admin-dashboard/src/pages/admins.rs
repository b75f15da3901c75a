//! Staff account management, reserved for superadmins
//!
//! The page checks the stored session before anything is fetched: no session
//! goes to the login route, a non-superuser goes back to the dashboard. A 403
//! from the backend is handled the same way as a failed local check.

use bim_admin_client::{ApiClient, ClientError, ClientResult, FieldErrors};
use bim_admin_core::Session;
use bim_admin_types::{
    Admin, AdminActiveFilter, AdminQuery, AdminStatistics, AdminUpdate, NewAdmin, Page, RecordId,
    routes,
};
use tracing::{info, warn};

use crate::{
    forms::field_errors,
    list::{FetchTicket, ListState},
    notice::Notice,
    pagination::Pager,
};

/// Alert shown when the backend refuses the admins list
pub const FORBIDDEN_MESSAGE: &str =
    "You do not have permission to view admins. Only superadmins can access this page.";

/// Prompt shown before an admin is activated or deactivated
pub const TOGGLE_CONFIRM: &str = "Are you sure you want to change this admin's active status?";

/// Prompt shown before an admin is deleted
pub const DELETE_CONFIRM: &str =
    "Are you sure you want to delete this admin? This action cannot be undone.";

/// Where a session that may not see the page is sent
pub fn guard(session: &Session) -> Result<(), &'static str> {
    match session.user() {
        None => Err(routes::LOGIN),
        Some(user) if !user.is_superuser => Err(routes::DASHBOARD),
        Some(_) => Ok(()),
    }
}

/// Admins page
#[derive(Debug)]
pub struct AdminsPage {
    client: ApiClient,
    search: String,
    filter: AdminActiveFilter,
    pager: Pager,
    list: ListState<Admin>,
    stats: AdminStatistics,
    form_errors: FieldErrors,
}

impl AdminsPage {
    /// Open the page if the session allows it; otherwise navigate away and
    /// return `None`
    pub fn open(client: ApiClient) -> Option<Self> {
        if let Err(route) = guard(client.session()) {
            warn!(redirect = route, "Admins page requires a superadmin session");
            client.navigator().navigate(route);
            return None;
        }
        Some(Self {
            client,
            search: String::new(),
            filter: AdminActiveFilter::All,
            pager: Pager::default(),
            list: ListState::new(),
            stats: AdminStatistics::default(),
            form_errors: FieldErrors::new(),
        })
    }

    /// Query for the current page and filters
    pub fn query(&self) -> AdminQuery {
        AdminQuery {
            page: Some(self.pager.page()),
            search: Some(self.search.clone()),
            is_active: self.filter.as_query(),
        }
    }

    /// Fetch the list and statistics; a 403 alerts and leaves the page
    pub async fn load(&mut self) -> Option<Notice> {
        let ticket = self.list.begin();
        let query = self.query();
        let admins = self.client.admins();
        let (page, stats) = tokio::join!(admins.list(&query), admins.statistics());
        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Error fetching admin statistics"),
        }
        self.finish_fetch(ticket, page)
    }

    /// Refetch the current page
    pub async fn refetch(&mut self) -> Option<Notice> {
        let ticket = self.list.begin();
        let query = self.query();
        let page = self.client.admins().list(&query).await;
        self.finish_fetch(ticket, page)
    }

    fn finish_fetch(&mut self, ticket: FetchTicket, page: ClientResult<Page<Admin>>) -> Option<Notice> {
        let forbidden = page.as_ref().is_err_and(ClientError::is_forbidden);
        if !self.list.apply(ticket, page) {
            return None;
        }
        if forbidden {
            warn!("Backend refused the admins list");
            self.client.navigator().navigate(routes::DASHBOARD);
            return Some(Notice::error(FORBIDDEN_MESSAGE));
        }
        self.pager.set_count(self.list.count());
        None
    }

    /// Change the search term; back to page 1
    pub async fn set_search(&mut self, search: impl Into<String>) -> Option<Notice> {
        self.search = search.into();
        self.pager.reset();
        self.refetch().await
    }

    /// Change the active filter; back to page 1
    pub async fn set_filter(&mut self, filter: AdminActiveFilter) -> Option<Notice> {
        self.filter = filter;
        self.pager.reset();
        self.refetch().await
    }

    /// Jump to `page`
    pub async fn go_to_page(&mut self, page: u32) -> Option<Notice> {
        if self.pager.go_to(page) {
            self.refetch().await
        } else {
            None
        }
    }

    /// Submit the create-admin form.
    ///
    /// Field errors, local or from the server, are kept for inline display
    /// and produce no alert.
    pub async fn create(&mut self, form: &NewAdmin) -> Option<Notice> {
        match self.client.admins().create(form).await {
            Ok(admin) => {
                info!(admin = admin.id, username = %admin.username, "Admin created");
                self.form_errors.clear();
                self.reload().await;
                Some(Notice::success("Admin created successfully!"))
            }
            Err(e) => {
                warn!(error = %e, "Error creating admin");
                if let Some(errors) = field_errors(&e) {
                    self.form_errors = errors;
                    return None;
                }
                Some(Notice::error("Failed to create admin"))
            }
        }
    }

    /// Change profile fields of an admin
    pub async fn update(&mut self, id: RecordId, changes: &AdminUpdate) -> Option<Notice> {
        if changes.is_empty() {
            return Some(Notice::info("Nothing to update"));
        }
        match self.client.admins().update(id, changes).await {
            Ok(_) => {
                self.refetch().await;
                Some(Notice::success("Admin updated successfully"))
            }
            Err(e) => {
                warn!(admin = id, error = %e, "Error updating admin");
                Some(Notice::error("Failed to update admin"))
            }
        }
    }

    /// Activate or deactivate an admin
    pub async fn toggle_active(&mut self, id: RecordId) -> Option<Notice> {
        match self.client.admins().toggle_active(id).await {
            Ok(_) => {
                self.reload().await;
                None
            }
            Err(e) => {
                warn!(admin = id, error = %e, "Error toggling admin status");
                Some(Notice::error("Failed to update admin status"))
            }
        }
    }

    /// Delete an admin
    pub async fn delete(&mut self, id: RecordId) -> Option<Notice> {
        match self.client.admins().delete(id).await {
            Ok(()) => {
                info!(admin = id, "Admin deleted");
                self.reload().await;
                Some(Notice::success("Admin deleted successfully"))
            }
            Err(e) => {
                warn!(admin = id, error = %e, "Error deleting admin");
                Some(Notice::error("Failed to delete admin"))
            }
        }
    }

    async fn reload(&mut self) {
        self.refetch().await;
        match self.client.admins().statistics().await {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Error fetching admin statistics"),
        }
    }

    /// Field errors of the last create attempt
    pub const fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    /// Current filter
    pub const fn filter(&self) -> AdminActiveFilter {
        self.filter
    }

    /// Pagination state
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Loaded rows
    pub const fn list(&self) -> &ListState<Admin> {
        &self.list
    }

    /// Admin counters
    pub const fn stats(&self) -> &AdminStatistics {
        &self.stats
    }
}
