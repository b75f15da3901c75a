//! Users list, statistics and the create-user form

use bim_admin_client::{ApiClient, ClientError, ClientResult};
use bim_admin_types::{NewUser, Page, RecordId, TypesError, User, UserQuery, UserStatistics};
use tracing::{info, warn};

use crate::{
    forms::{field_errors, first_message},
    list::{FetchTicket, ListState},
    notice::Notice,
    pagination::Pager,
};

/// Prompt shown before a user is deleted
pub const DELETE_CONFIRM: &str =
    "Are you sure you want to delete this user? This action cannot be undone.";

/// Prompt shown before a user is banned or unbanned
pub const BAN_CONFIRM: &str = "Are you sure you want to change this user's ban status?";

/// List filters; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    /// Free text search
    pub search: String,
    /// Verification state
    pub verified: Option<bool>,
    /// `Some(false)` lists banned users
    pub active: Option<bool>,
    /// Staff accounts
    pub staff: Option<bool>,
}

/// Users page
#[derive(Debug)]
pub struct UsersPage {
    client: ApiClient,
    filters: UserFilters,
    pager: Pager,
    list: ListState<User>,
    stats: UserStatistics,
}

impl UsersPage {
    /// Open the page on page 1 with no filters
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            filters: UserFilters::default(),
            pager: Pager::new(page_size),
            list: ListState::new(),
            stats: UserStatistics::default(),
        }
    }

    /// Query for the current page and filters
    pub fn query(&self) -> UserQuery {
        UserQuery {
            page: Some(self.pager.page()),
            page_size: Some(self.pager.page_size()),
            search: Some(self.filters.search.clone()),
            is_verified: self.filters.verified,
            is_active: self.filters.active,
            is_staff: self.filters.staff,
        }
    }

    /// Fetch the list and the statistics concurrently
    pub async fn load(&mut self) {
        let ticket = self.list.begin();
        let query = self.query();
        let users = self.client.users();
        let (page, stats) = tokio::join!(users.list(&query), users.statistics());
        self.finish_fetch(ticket, page);
        self.apply_stats(stats);
    }

    /// Refetch the current page of the list
    pub async fn refetch(&mut self) {
        let (ticket, query) = self.begin_fetch();
        let page = self.client.users().list(&query).await;
        self.finish_fetch(ticket, page);
    }

    /// Refetch the statistics
    pub async fn refetch_stats(&mut self) {
        let stats = self.client.users().statistics().await;
        self.apply_stats(stats);
    }

    /// Stamp a new fetch; returns the ticket and the query to send
    pub fn begin_fetch(&mut self) -> (FetchTicket, UserQuery) {
        (self.list.begin(), self.query())
    }

    /// Apply a fetch result; stale tickets are dropped
    pub fn finish_fetch(&mut self, ticket: FetchTicket, page: ClientResult<Page<User>>) -> bool {
        let applied = self.list.apply(ticket, page);
        if applied {
            self.pager.set_count(self.list.count());
        }
        applied
    }

    fn apply_stats(&mut self, stats: ClientResult<UserStatistics>) {
        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Error fetching user statistics"),
        }
    }

    /// Change the search term; back to page 1
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.pager.reset();
        self.refetch().await;
    }

    /// Replace every filter at once; back to page 1
    pub async fn set_filters(&mut self, filters: UserFilters) {
        self.filters = filters;
        self.pager.reset();
        self.refetch().await;
    }

    /// Jump to `page`; refetches only if the page changed
    pub async fn go_to_page(&mut self, page: u32) {
        if self.pager.go_to(page) {
            self.refetch().await;
        }
    }

    /// Next page, if any
    pub async fn next_page(&mut self) {
        if self.pager.next() {
            self.refetch().await;
        }
    }

    /// Previous page, if any
    pub async fn prev_page(&mut self) {
        if self.pager.prev() {
            self.refetch().await;
        }
    }

    /// Flip a user's verified flag, then reload
    pub async fn toggle_verification(&mut self, id: RecordId) {
        match self.client.users().toggle_verification(id).await {
            Ok(_) => self.reload().await,
            Err(e) => warn!(user = id, error = %e, "Error toggling verification"),
        }
    }

    /// Ban or unban a user, then reload
    pub async fn toggle_ban(&mut self, id: RecordId) {
        match self.client.users().toggle_ban(id).await {
            Ok(_) => self.reload().await,
            Err(e) => warn!(user = id, error = %e, "Error toggling ban"),
        }
    }

    /// Delete a user; returns a notice on failure
    pub async fn delete(&mut self, id: RecordId) -> Option<Notice> {
        match self.client.users().delete(id).await {
            Ok(()) => {
                info!(user = id, "User deleted");
                self.reload().await;
                None
            }
            Err(e) => {
                warn!(user = id, error = %e, "Error deleting user");
                Some(Notice::error("Failed to delete user"))
            }
        }
    }

    /// Submit the create-user form.
    ///
    /// Mismatched passwords are reported without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns the notice to show when the user was not created.
    pub async fn create(&mut self, form: &NewUser) -> Result<User, Notice> {
        match self.client.users().create(form).await {
            Ok(user) => {
                info!(user = user.id, username = %user.username, "User created");
                self.reload().await;
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "Error creating user");
                Err(create_failure(&e))
            }
        }
    }

    async fn reload(&mut self) {
        self.refetch().await;
        self.refetch_stats().await;
    }

    /// Current filters
    pub const fn filters(&self) -> &UserFilters {
        &self.filters
    }

    /// Pagination state
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Loaded rows
    pub const fn list(&self) -> &ListState<User> {
        &self.list
    }

    /// Population counters
    pub const fn stats(&self) -> &UserStatistics {
        &self.stats
    }
}

/// Message for a failed create: the password check, then the first email
/// error, then the first username error
pub fn create_failure(err: &ClientError) -> Notice {
    if matches!(err, ClientError::InvalidInput(TypesError::PasswordMismatch)) {
        return Notice::error(TypesError::PasswordMismatch.to_string());
    }
    let message = field_errors(err)
        .as_ref()
        .and_then(|errors| first_message(errors, &["email", "username"]).map(str::to_string))
        .unwrap_or_else(|| "Failed to create user".to_string());
    Notice::error(message)
}
