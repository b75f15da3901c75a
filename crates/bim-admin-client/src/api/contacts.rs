use bim_admin_types::{ContactMessage, ContactQuery, ContactStatistics, Page, RecordId};
use serde_json::{Value, json};

use crate::{ApiClient, ClientResult};

/// `/api/admin/contacts/`
#[derive(Debug, Clone, Copy)]
pub struct ContactsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ContactsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of messages
    pub async fn list(&self, query: &ContactQuery) -> ClientResult<Page<ContactMessage>> {
        self.client.get_with("/api/admin/contacts/", query).await
    }

    /// Message counters
    pub async fn statistics(&self) -> ClientResult<ContactStatistics> {
        self.client
            .get_json("/api/admin/contacts/statistics/")
            .await
    }

    /// Replace the internal notes; returns the updated message
    pub async fn update_notes(&self, id: RecordId, notes: &str) -> ClientResult<ContactMessage> {
        self.client
            .patch_json(
                &format!("/api/admin/contacts/{id}/"),
                &json!({ "admin_notes": notes }),
            )
            .await
    }

    /// Flip the read flag
    pub async fn toggle_read(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/contacts/{id}/toggle_read/"))
            .await
    }

    /// Flip the replied flag
    pub async fn toggle_replied(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/contacts/{id}/toggle_replied/"))
            .await
    }

    /// Turn a feedback message into a testimonial
    pub async fn create_testimonial(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/contacts/{id}/create_testimonial/"))
            .await
    }
}
