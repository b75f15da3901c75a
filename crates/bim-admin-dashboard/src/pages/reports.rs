//! Report moderation: list, counters and verify/reject/review transitions

use bim_admin_client::{ApiClient, ClientError, ClientResult};
use bim_admin_types::{
    Page, RecordId, Report, ReportAction, ReportDecision, ReportQuery, ReportStats, ReportStatus,
};
use tracing::{info, warn};

use crate::{
    list::{FetchTicket, ListState},
    notice::{Notice, response_message},
    pagination::Pager,
};

/// Shown when a verify is attempted without an action
pub const ACTION_REQUIRED: &str = "Action taken is required for verification";

/// List filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Moderation state
    pub status: Option<ReportStatus>,
    /// Report type key
    pub report_type: Option<String>,
    /// Free text search
    pub search: String,
}

/// Reports page
#[derive(Debug)]
pub struct ReportsPage {
    client: ApiClient,
    filters: ReportFilters,
    pager: Pager,
    list: ListState<Report>,
    stats: ReportStats,
    selected: Option<Report>,
}

impl ReportsPage {
    /// Open the page on page 1 with no filters
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            filters: ReportFilters::default(),
            pager: Pager::new(page_size),
            list: ListState::new(),
            stats: ReportStats::default(),
            selected: None,
        }
    }

    /// Query for the current page and filters
    pub fn query(&self) -> ReportQuery {
        ReportQuery {
            page: Some(self.pager.page()),
            page_size: Some(self.pager.page_size()),
            status: self.filters.status,
            report_type: self.filters.report_type.clone(),
            search: Some(self.filters.search.clone()),
        }
    }

    /// Fetch the list and the counters concurrently
    pub async fn load(&mut self) {
        let ticket = self.list.begin();
        let query = self.query();
        let reports = self.client.reports();
        let (page, stats) = tokio::join!(reports.list(&query), reports.dashboard());
        self.finish_fetch(ticket, page);
        self.apply_stats(stats);
    }

    /// Refetch the current page
    pub async fn refetch(&mut self) {
        let ticket = self.list.begin();
        let query = self.query();
        let page = self.client.reports().list(&query).await;
        self.finish_fetch(ticket, page);
    }

    fn finish_fetch(&mut self, ticket: FetchTicket, page: ClientResult<Page<Report>>) {
        if self.list.apply(ticket, page) {
            self.pager.set_count(self.list.count());
        }
    }

    fn apply_stats(&mut self, stats: ClientResult<ReportStats>) {
        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!(error = %e, "Error fetching report statistics"),
        }
    }

    /// Replace the filters; back to page 1
    pub async fn set_filters(&mut self, filters: ReportFilters) {
        self.filters = filters;
        self.pager.reset();
        self.refetch().await;
    }

    /// Jump to `page`
    pub async fn go_to_page(&mut self, page: u32) {
        if self.pager.go_to(page) {
            self.refetch().await;
        }
    }

    /// Open report `id`. A pending report is claimed for review first and
    /// the list refetched.
    pub async fn view(&mut self, id: RecordId) -> Option<&Report> {
        self.selected = self.list.find(|r| r.id == id).cloned();
        let pending = self
            .selected
            .as_ref()
            .is_some_and(|r| r.status == ReportStatus::Pending);

        if pending {
            let claimed = self
                .client
                .reports()
                .act(id, ReportAction::MarkUnderReview, &ReportDecision::default())
                .await;
            match claimed {
                Ok(_) => {
                    if let Some(report) = &mut self.selected {
                        report.status = ReportStatus::UnderReview;
                    }
                }
                Err(e) => warn!(report = id, error = %e, "Error marking report under review"),
            }
            self.refetch().await;
        }
        self.selected.as_ref()
    }

    /// Close the open report
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Apply a moderation transition to report `id`.
    ///
    /// A verify without `action_taken` is refused locally and nothing is
    /// sent. On success the list and counters are refetched.
    pub async fn act(&mut self, id: RecordId, action: ReportAction, decision: &ReportDecision) -> Notice {
        if decision.check_for(action).is_err() {
            return Notice::error(ACTION_REQUIRED);
        }
        match self.client.reports().act(id, action, decision).await {
            Ok(body) => {
                self.selected = None;
                let reports = self.client.reports();
                let ticket = self.list.begin();
                let query = self.query();
                let (page, stats) = tokio::join!(reports.list(&query), reports.dashboard());
                self.finish_fetch(ticket, page);
                self.apply_stats(stats);
                info!(report = id, action = action.path_segment(), "Report action applied");
                Notice::success(response_message(&body).unwrap_or_else(|| "Report updated".to_string()))
            }
            Err(ClientError::InvalidInput(_)) => Notice::error(ACTION_REQUIRED),
            Err(e) => {
                warn!(report = id, error = %e, "Error performing report action");
                Notice::from_failure(&e, "Action failed", "Failed to perform action")
            }
        }
    }

    /// Current filters
    pub const fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    /// Pagination state
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Loaded reports
    pub const fn list(&self) -> &ListState<Report> {
        &self.list
    }

    /// Moderation counters
    pub const fn stats(&self) -> &ReportStats {
        &self.stats
    }

    /// Open report
    pub const fn selected(&self) -> Option<&Report> {
        self.selected.as_ref()
    }
}
