//! Landing page: population counters and article counts

use bim_admin_client::ApiClient;
use bim_admin_types::{NewsStatus, UserStatistics};
use tracing::{debug, warn};

use crate::list::LoadStatus;

/// Article counts by publication state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsCounts {
    /// All articles
    pub total: u64,
    /// Published articles
    pub published: u64,
    /// Drafts
    pub draft: u64,
}

/// Dashboard overview
#[derive(Debug)]
pub struct OverviewPage {
    client: ApiClient,
    stats: UserStatistics,
    news: NewsCounts,
    superuser: bool,
    status: LoadStatus,
}

impl OverviewPage {
    /// Open the page for the signed-in user
    pub fn new(client: ApiClient) -> Self {
        let superuser = client.session().is_superuser();
        Self {
            client,
            stats: UserStatistics::default(),
            news: NewsCounts::default(),
            superuser,
            status: LoadStatus::Idle,
        }
    }

    /// Fetch user statistics and the three article counts concurrently
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        let users = self.client.users();
        let news = self.client.news();
        let (stats, total, published, draft) = tokio::join!(
            users.statistics(),
            news.count(None),
            news.count(Some(NewsStatus::Published)),
            news.count(Some(NewsStatus::Draft)),
        );

        match (stats, total, published, draft) {
            (Ok(stats), Ok(total), Ok(published), Ok(draft)) => {
                self.stats = stats;
                self.news = NewsCounts {
                    total,
                    published,
                    draft,
                };
                self.status = LoadStatus::Idle;
                debug!(users = stats.total_users, news = total, "Overview loaded");
            }
            (stats, total, published, draft) => {
                let err = [
                    stats.err(),
                    total.err(),
                    published.err(),
                    draft.err(),
                ]
                .into_iter()
                .flatten()
                .next()
                .map_or_else(|| "unknown error".to_string(), |e| e.to_string());
                warn!(error = %err, "Error fetching statistics");
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    /// User counters
    pub const fn stats(&self) -> &UserStatistics {
        &self.stats
    }

    /// Article counts
    pub const fn news(&self) -> NewsCounts {
        self.news
    }

    /// Whether the superadmin badge is shown
    pub const fn is_superuser(&self) -> bool {
        self.superuser
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}
