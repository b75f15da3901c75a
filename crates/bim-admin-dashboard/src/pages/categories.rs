//! News categories, keyed by slug

use bim_admin_client::ApiClient;
use bim_admin_types::{CategoryInput, NewsCategory};
use tracing::{info, warn};

use crate::{list::LoadStatus, notice::Notice};

/// Prompt shown before a category is deleted
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this category?";

/// Categories page
#[derive(Debug)]
pub struct CategoriesPage {
    client: ApiClient,
    categories: Vec<NewsCategory>,
    status: LoadStatus,
}

impl CategoriesPage {
    /// Open the page
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            categories: Vec::new(),
            status: LoadStatus::Idle,
        }
    }

    /// Fetch every category
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        match self.client.categories().list().await {
            Ok(categories) => {
                self.categories = categories;
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                warn!(error = %e, "Error fetching categories");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Create a category
    pub async fn create(&mut self, input: &CategoryInput) -> Notice {
        match self.client.categories().create(input).await {
            Ok(category) => {
                info!(slug = %category.slug, "Category created");
                self.load().await;
                Notice::success(format!("Category '{}' created", category.name))
            }
            Err(e) => {
                warn!(error = %e, "Error creating category");
                Notice::error("Failed to create category")
            }
        }
    }

    /// Rename or redescribe the category at `slug`
    pub async fn update(&mut self, slug: &str, input: &CategoryInput) -> Notice {
        match self.client.categories().update(slug, input).await {
            Ok(category) => {
                info!(slug = %category.slug, "Category updated");
                self.load().await;
                Notice::success(format!("Category '{}' updated", category.name))
            }
            Err(e) => {
                warn!(slug, error = %e, "Error updating category");
                Notice::error("Failed to update category")
            }
        }
    }

    /// Delete the category at `slug`
    pub async fn delete(&mut self, slug: &str) -> Notice {
        match self.client.categories().delete(slug).await {
            Ok(()) => {
                info!(slug, "Category deleted");
                self.load().await;
                Notice::success("Category deleted")
            }
            Err(e) => {
                warn!(slug, error = %e, "Error deleting category");
                Notice::error("Failed to delete category")
            }
        }
    }

    /// Loaded categories
    pub fn categories(&self) -> &[NewsCategory] {
        &self.categories
    }

    /// Category with `slug`
    pub fn find(&self, slug: &str) -> Option<&NewsCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}
