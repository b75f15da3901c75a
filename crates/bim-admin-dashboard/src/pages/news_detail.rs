//! Read-only view of one article

use bim_admin_client::ApiClient;
use bim_admin_types::{News, RecordId, routes};
use tracing::{info, warn};

use crate::{list::LoadStatus, notice::Notice};

/// Article detail page
#[derive(Debug)]
pub struct NewsDetailPage {
    client: ApiClient,
    id: RecordId,
    article: Option<News>,
    status: LoadStatus,
}

impl NewsDetailPage {
    /// Open the page for `id`
    pub const fn new(client: ApiClient, id: RecordId) -> Self {
        Self {
            client,
            id,
            article: None,
            status: LoadStatus::Idle,
        }
    }

    /// Fetch the article
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        match self.client.news().get(self.id).await {
            Ok(article) => {
                self.article = Some(article);
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                warn!(article = self.id, error = %e, "Error fetching news");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Go to the edit form
    pub fn edit(&self) {
        self.client.navigator().navigate(&routes::news_edit(self.id));
    }

    /// Delete the article and return to the list
    pub async fn delete(&mut self) -> Option<Notice> {
        match self.client.news().delete(self.id).await {
            Ok(()) => {
                info!(article = self.id, "Article deleted");
                self.client.navigator().navigate(routes::NEWS);
                None
            }
            Err(e) => {
                warn!(article = self.id, error = %e, "Error deleting news");
                Some(Notice::error("Failed to delete news article"))
            }
        }
    }

    /// Loaded article
    pub const fn article(&self) -> Option<&News> {
        self.article.as_ref()
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}
