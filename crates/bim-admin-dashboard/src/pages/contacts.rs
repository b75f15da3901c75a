//! Contact messages: filters, read/replied toggles, notes and testimonials
//!
//! Read and replied toggles are optimistic. The flag flips in the list and in
//! the selected message at once, and the unread/unreplied counters move with
//! it. A rejected toggle puts both back and reloads the list and counters.

use bim_admin_client::{ApiClient, ClientResult};
use bim_admin_types::{
    ContactMessage, ContactQuery, ContactStatistics, ContactStatusFilter, ContactSubject,
    Optimistic, Page, RecordId, UserType,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    list::{FetchTicket, ListState},
    notice::{Notice, response_message},
    optimistic::{Outcome, Toggle, settle_flag, shift_counter},
    pagination::Pager,
};

/// Shown when the server confirms without a message of its own
pub const TESTIMONIAL_CREATED: &str =
    "Testimonial created successfully! Please review and approve it in the Testimonials section.";

/// Toggleable flags of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFlag {
    /// `is_read`
    Read,
    /// `is_replied`
    Replied,
}

impl ContactFlag {
    /// Field name in records and toggle responses
    pub const fn field(self) -> &'static str {
        match self {
            Self::Read => "is_read",
            Self::Replied => "is_replied",
        }
    }

    const fn of(self, message: &mut ContactMessage) -> &mut Optimistic<bool> {
        match self {
            Self::Read => &mut message.is_read,
            Self::Replied => &mut message.is_replied,
        }
    }

    const fn counter(self, stats: &mut ContactStatistics) -> &mut u64 {
        match self {
            Self::Read => &mut stats.unread_messages,
            Self::Replied => &mut stats.unreplied_messages,
        }
    }
}

/// List filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilters {
    /// Free text search
    pub search: String,
    /// Topic
    pub subject: Option<ContactSubject>,
    /// Read/replied state
    pub status: ContactStatusFilter,
    /// Registered or guest sender
    pub user_type: Option<UserType>,
}

/// Contacts page
#[derive(Debug)]
pub struct ContactsPage {
    client: ApiClient,
    filters: ContactFilters,
    pager: Pager,
    list: ListState<ContactMessage>,
    stats: ContactStatistics,
    selected: Option<ContactMessage>,
}

impl ContactsPage {
    /// Open the page on page 1 with no filters
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            filters: ContactFilters::default(),
            pager: Pager::default(),
            list: ListState::new(),
            stats: ContactStatistics::default(),
            selected: None,
        }
    }

    /// Query for the current page and filters
    pub fn query(&self) -> ContactQuery {
        ContactQuery {
            page: Some(self.pager.page()),
            search: Some(self.filters.search.clone()),
            subject: self.filters.subject,
            is_read: None,
            is_replied: None,
            user_type: self.filters.user_type,
        }
        .with_status(self.filters.status)
    }

    /// Fetch the list and the counters concurrently
    pub async fn load(&mut self) {
        let ticket = self.list.begin();
        let query = self.query();
        let contacts = self.client.contacts();
        let (page, stats) = tokio::join!(contacts.list(&query), contacts.statistics());
        self.finish_fetch(ticket, page);
        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Error fetching contact statistics"),
        }
    }

    /// Refetch the current page
    pub async fn refetch(&mut self) {
        let ticket = self.list.begin();
        let query = self.query();
        let page = self.client.contacts().list(&query).await;
        self.finish_fetch(ticket, page);
    }

    fn finish_fetch(&mut self, ticket: FetchTicket, page: ClientResult<Page<ContactMessage>>) {
        if !self.list.apply(ticket, page) {
            return;
        }
        self.pager.set_count(self.list.count());
        if let Some(selected) = &mut self.selected
            && let Some(fresh) = self.list.find(|m| m.id == selected.id)
        {
            *selected = fresh.clone();
        }
    }

    /// Replace the filters; back to page 1
    pub async fn set_filters(&mut self, filters: ContactFilters) {
        self.filters = filters;
        self.pager.reset();
        self.refetch().await;
    }

    /// Change the search term; back to page 1
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.pager.reset();
        self.refetch().await;
    }

    /// Jump to `page`
    pub async fn go_to_page(&mut self, page: u32) {
        if self.pager.go_to(page) {
            self.refetch().await;
        }
    }

    /// Open a message from the list; returns whether it was found
    pub fn select(&mut self, id: RecordId) -> bool {
        self.selected = self.list.find(|m| m.id == id).cloned();
        self.selected.is_some()
    }

    /// Close the open message
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Flip `flag` locally on every copy of message `id` and move the matching
    /// counter. Returns `None` when the message is not loaded.
    pub fn begin_toggle(&mut self, id: RecordId, flag: ContactFlag) -> Option<Toggle<ContactFlag>> {
        let current = self
            .list
            .find(|m| m.id == id)
            .or(self.selected.as_ref().filter(|m| m.id == id))
            .map(|m| match flag {
                ContactFlag::Read => m.is_read.get(),
                ContactFlag::Replied => m.is_replied.get(),
            })?;
        let proposed = !current;

        for message in self.copies_mut(id) {
            flag.of(message).propose(proposed);
        }
        shift_counter(flag.counter(&mut self.stats), false, current, proposed);
        debug!(message = id, field = flag.field(), proposed, "Toggle applied locally");

        Some(Toggle {
            id,
            field: flag,
            proposed,
        })
    }

    /// Settle a toggle with the server's answer; a rejection restores the
    /// flag and the counter
    pub fn settle_toggle(&mut self, toggle: Toggle<ContactFlag>, response: &ClientResult<Value>) -> Outcome {
        let outcome = Outcome::from_response(response, toggle.field.field());
        for message in self.copies_mut(toggle.id) {
            settle_flag(toggle.field.of(message), outcome);
        }

        let settled = match outcome {
            Outcome::Accepted(server) => server.unwrap_or(toggle.proposed),
            Outcome::Rejected => !toggle.proposed,
        };
        shift_counter(
            toggle.field.counter(&mut self.stats),
            false,
            toggle.proposed,
            settled,
        );
        if let Err(e) = response {
            warn!(message = toggle.id, field = toggle.field.field(), error = %e, "Toggle rejected");
        }
        outcome
    }

    /// Toggle `flag` on message `id`; a rejection reloads list and counters
    pub async fn toggle(&mut self, id: RecordId, flag: ContactFlag) {
        let Some(toggle) = self.begin_toggle(id, flag) else {
            warn!(message = id, "Message is not loaded");
            return;
        };
        let contacts = self.client.contacts();
        let response = match flag {
            ContactFlag::Read => contacts.toggle_read(id).await,
            ContactFlag::Replied => contacts.toggle_replied(id).await,
        };
        if self.settle_toggle(toggle, &response).is_rejected() {
            self.load().await;
        }
    }

    fn copies_mut(&mut self, id: RecordId) -> impl Iterator<Item = &mut ContactMessage> {
        self.list
            .items_mut()
            .iter_mut()
            .filter(move |m| m.id == id)
            .chain(self.selected.as_mut().filter(|m| m.id == id))
    }

    /// Replace the internal notes of message `id`; the returned record
    /// becomes the selection and the list is refetched
    pub async fn save_notes(&mut self, id: RecordId, notes: &str) -> Option<Notice> {
        match self.client.contacts().update_notes(id, notes).await {
            Ok(message) => {
                info!(message = id, "Notes saved");
                self.selected = Some(message);
                self.refetch().await;
                None
            }
            Err(e) => {
                warn!(message = id, error = %e, "Error updating notes");
                Some(Notice::error("Failed to update notes"))
            }
        }
    }

    /// Turn feedback message `id` into a testimonial
    pub async fn post_as_testimonial(&mut self, id: RecordId) -> Notice {
        if let Some(message) = self.list.find(|m| m.id == id)
            && message.subject != ContactSubject::Feedback
        {
            return Notice::error("Only feedback messages can be posted as testimonials");
        }
        match self.client.contacts().create_testimonial(id).await {
            Ok(body) => {
                info!(message = id, "Testimonial created from message");
                Notice::success(response_message(&body).unwrap_or_else(|| TESTIMONIAL_CREATED.to_string()))
            }
            Err(e) => {
                warn!(message = id, error = %e, "Error creating testimonial");
                Notice::from_failure(&e, "Failed to create testimonial", "Error creating testimonial")
            }
        }
    }

    /// Current filters
    pub const fn filters(&self) -> &ContactFilters {
        &self.filters
    }

    /// Pagination state
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Loaded messages
    pub const fn list(&self) -> &ListState<ContactMessage> {
        &self.list
    }

    /// Message counters
    pub const fn stats(&self) -> &ContactStatistics {
        &self.stats
    }

    /// Open message
    pub const fn selected(&self) -> Option<&ContactMessage> {
        self.selected.as_ref()
    }
}
