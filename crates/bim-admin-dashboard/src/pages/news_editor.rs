//! Create and edit forms for articles

use bim_admin_client::ApiClient;
use bim_admin_types::{News, NewsDraft, RecordId, routes};
use tracing::{info, warn};

use crate::{forms::field_errors, notice::Notice};

/// Whether the form creates a new article or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// New article
    Create,
    /// Existing article
    Edit(RecordId),
}

/// Article form
#[derive(Debug)]
pub struct NewsEditor {
    client: ApiClient,
    mode: EditorMode,
    draft: NewsDraft,
}

impl NewsEditor {
    /// Empty form for a new article
    pub fn create(client: ApiClient) -> Self {
        Self {
            client,
            mode: EditorMode::Create,
            draft: NewsDraft::default(),
        }
    }

    /// Form prefilled from article `id`
    ///
    /// # Errors
    ///
    /// Returns the notice to show when the article cannot be loaded.
    pub async fn edit(client: ApiClient, id: RecordId) -> Result<Self, Notice> {
        let loaded = client.news().get(id).await;
        match loaded {
            Ok(article) => Ok(Self {
                draft: NewsDraft::from_article(&article),
                client,
                mode: EditorMode::Edit(id),
            }),
            Err(e) => {
                warn!(article = id, error = %e, "Error fetching news");
                Err(Notice::error("Failed to load news article"))
            }
        }
    }

    /// Form mode
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current form values
    pub const fn draft(&self) -> &NewsDraft {
        &self.draft
    }

    /// Form values for editing
    pub const fn draft_mut(&mut self) -> &mut NewsDraft {
        &mut self.draft
    }

    /// Send the form; on success return to the news list
    ///
    /// # Errors
    ///
    /// Returns the notice to show when the article was not saved.
    pub async fn submit(&self) -> Result<News, Notice> {
        let news = self.client.news();
        let (result, failure) = match self.mode {
            EditorMode::Create => (news.create(&self.draft).await, "Failed to create news article"),
            EditorMode::Edit(id) => (
                news.update(id, &self.draft).await,
                "Failed to update news article",
            ),
        };

        match result {
            Ok(article) => {
                info!(article = article.id, status = %article.status, "Article saved");
                self.client.navigator().navigate(routes::NEWS);
                Ok(article)
            }
            Err(e) => {
                warn!(error = %e, "Error saving news");
                let detail = field_errors(&e).and_then(|errors| {
                    errors
                        .into_iter()
                        .next()
                        .and_then(|(field, messages)| Some(format!("{field}: {}", messages.first()?)))
                });
                Err(Notice::error(
                    detail.map_or_else(|| failure.to_string(), |d| format!("{failure} ({d})")),
                ))
            }
        }
    }
}
