use bim_admin_types::{Page, RecordId, Report, ReportAction, ReportDecision, ReportQuery, ReportStats};
use serde_json::Value;
use tracing::info;

use crate::{ApiClient, ClientResult};

/// `/api/admin/reports/`
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReportsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of reports
    pub async fn list(&self, query: &ReportQuery) -> ClientResult<Page<Report>> {
        self.client.get_with("/api/admin/reports/", query).await
    }

    /// Moderation counters
    pub async fn dashboard(&self) -> ClientResult<ReportStats> {
        self.client
            .get_json("/api/admin/reports/dashboard/")
            .await
    }

    /// Apply a moderation transition; a verify without `action_taken` is
    /// rejected before any request is made
    pub async fn act(
        &self,
        id: RecordId,
        action: ReportAction,
        decision: &ReportDecision,
    ) -> ClientResult<Value> {
        decision.check_for(action)?;
        let response = self
            .client
            .post_json(
                &format!("/api/admin/reports/{id}/{}/", action.path_segment()),
                decision,
            )
            .await?;
        info!(report = id, action = action.path_segment(), "Report updated");
        Ok(response)
    }
}
