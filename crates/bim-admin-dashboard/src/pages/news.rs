//! News article list with search, status filter and lifecycle actions

use bim_admin_client::{ApiClient, ClientResult};
use bim_admin_types::{News, NewsQuery, NewsStatus, Page, RecordId};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    list::{FetchTicket, ListState},
    pagination::Pager,
};

/// Prompt shown before an article is deleted
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this news article?";

/// Lifecycle transitions offered per row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsTransition {
    /// Make visible
    Publish,
    /// Back to draft
    Unpublish,
    /// Withdraw
    Archive,
}

impl NewsTransition {
    /// Transitions that make sense from `status`
    pub const fn available(status: NewsStatus) -> &'static [Self] {
        match status {
            NewsStatus::Draft => &[Self::Publish, Self::Archive],
            NewsStatus::Published => &[Self::Unpublish, Self::Archive],
            NewsStatus::Archived => &[Self::Publish],
        }
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Publish => "publishing",
            Self::Unpublish => "unpublishing",
            Self::Archive => "archiving",
        }
    }
}

/// News list page
#[derive(Debug)]
pub struct NewsPage {
    client: ApiClient,
    search: String,
    status: Option<NewsStatus>,
    pager: Pager,
    list: ListState<News>,
}

impl NewsPage {
    /// Open the page on page 1 with no filters
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            search: String::new(),
            status: None,
            pager: Pager::new(page_size),
            list: ListState::new(),
        }
    }

    /// Query for the current page and filters
    pub fn query(&self) -> NewsQuery {
        NewsQuery {
            page: Some(self.pager.page()),
            page_size: Some(self.pager.page_size()),
            search: Some(self.search.clone()),
            status: self.status,
        }
    }

    /// Fetch the current page
    pub async fn refetch(&mut self) {
        let (ticket, query) = self.begin_fetch();
        let page = self.client.news().list(&query).await;
        self.finish_fetch(ticket, page);
    }

    /// Stamp a new fetch; returns the ticket and the query to send
    pub fn begin_fetch(&mut self) -> (FetchTicket, NewsQuery) {
        (self.list.begin(), self.query())
    }

    /// Apply a fetch result; stale tickets are dropped
    pub fn finish_fetch(&mut self, ticket: FetchTicket, page: ClientResult<Page<News>>) -> bool {
        let applied = self.list.apply(ticket, page);
        if applied {
            self.pager.set_count(self.list.count());
        }
        applied
    }

    /// Change the search term; back to page 1
    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.pager.reset();
        self.refetch().await;
    }

    /// Change the status filter; back to page 1
    pub async fn set_status(&mut self, status: Option<NewsStatus>) {
        self.status = status;
        self.pager.reset();
        self.refetch().await;
    }

    /// Change the page size; back to page 1
    pub async fn set_page_size(&mut self, page_size: u32) {
        self.pager = Pager::new(page_size);
        self.refetch().await;
    }

    /// Jump to `page`
    pub async fn go_to_page(&mut self, page: u32) {
        if self.pager.go_to(page) {
            self.refetch().await;
        }
    }

    /// Apply a lifecycle transition and refetch; failures are only logged
    pub async fn transition(&mut self, id: RecordId, transition: NewsTransition) {
        let news = self.client.news();
        let outcome: ClientResult<Value> = match transition {
            NewsTransition::Publish => news.publish(id).await,
            NewsTransition::Unpublish => news.unpublish(id).await,
            NewsTransition::Archive => news.archive(id).await,
        };
        match outcome {
            Ok(_) => {
                info!(article = id, action = ?transition, "Article updated");
                self.refetch().await;
            }
            Err(e) => warn!(article = id, error = %e, "Error {} news", transition.verb()),
        }
    }

    /// Delete an article and refetch
    pub async fn delete(&mut self, id: RecordId) {
        match self.client.news().delete(id).await {
            Ok(()) => {
                info!(article = id, "Article deleted");
                self.refetch().await;
            }
            Err(e) => warn!(article = id, error = %e, "Error deleting news"),
        }
    }

    /// Current status filter
    pub const fn status(&self) -> Option<NewsStatus> {
        self.status
    }

    /// Pagination state
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Loaded rows
    pub const fn list(&self) -> &ListState<News> {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_available_transitions() {
        assert_eq!(
            NewsTransition::available(NewsStatus::Draft),
            &[NewsTransition::Publish, NewsTransition::Archive]
        );
        assert_eq!(
            NewsTransition::available(NewsStatus::Archived),
            &[NewsTransition::Publish]
        );
    }
}
