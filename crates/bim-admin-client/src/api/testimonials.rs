use bim_admin_types::{Page, RecordId, Testimonial, TestimonialQuery};
use serde_json::Value;

use crate::{ApiClient, ClientResult};

/// `/api/admin/testimonials/`
#[derive(Debug, Clone, Copy)]
pub struct TestimonialsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TestimonialsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Testimonials matching `query`; the endpoint may return a bare array
    pub async fn list(&self, query: &TestimonialQuery) -> ClientResult<Vec<Testimonial>> {
        let page: Page<Testimonial> = self
            .client
            .get_with("/api/admin/testimonials/", query)
            .await?;
        Ok(page.results)
    }

    /// Delete a testimonial
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/admin/testimonials/{id}/"))
            .await
    }

    /// Flip the approved flag
    pub async fn toggle_approval(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/testimonials/{id}/toggle_approval/"))
            .await
    }

    /// Flip the featured flag
    pub async fn toggle_featured(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/testimonials/{id}/toggle_featured/"))
            .await
    }
}
