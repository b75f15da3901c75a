use bim_admin_types::{CategoryInput, NewsCategory, Page};
use validator::Validate;

use crate::{ApiClient, ClientResult};

/// `/api/news/categories/`, keyed by slug
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every category
    pub async fn list(&self) -> ClientResult<Vec<NewsCategory>> {
        let page: Page<NewsCategory> = self.client.get_json("/api/news/categories/").await?;
        Ok(page.results)
    }

    /// Create a category
    pub async fn create(&self, input: &CategoryInput) -> ClientResult<NewsCategory> {
        input.validate()?;
        self.client
            .post_json("/api/news/categories/", input)
            .await
    }

    /// Rename or redescribe a category
    pub async fn update(&self, slug: &str, input: &CategoryInput) -> ClientResult<NewsCategory> {
        input.validate()?;
        self.client
            .patch_json(&format!("/api/news/categories/{slug}/"), input)
            .await
    }

    /// Delete a category
    pub async fn delete(&self, slug: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/news/categories/{slug}/"))
            .await
    }
}
