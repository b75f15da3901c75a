use bim_admin_types::{Admin, AdminQuery, AdminStatistics, AdminUpdate, NewAdmin, Page, RecordId};
use serde_json::Value;
use validator::Validate;

use crate::{ApiClient, ClientResult};

/// `/api/admin/admins/`; superadmins only
#[derive(Debug, Clone, Copy)]
pub struct AdminsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of admins
    pub async fn list(&self, query: &AdminQuery) -> ClientResult<Page<Admin>> {
        self.client.get_with("/api/admin/admins/", query).await
    }

    /// One admin
    pub async fn get(&self, id: RecordId) -> ClientResult<Admin> {
        self.client
            .get_json(&format!("/api/admin/admins/{id}/"))
            .await
    }

    /// Create an admin; the form is checked locally first
    pub async fn create(&self, form: &NewAdmin) -> ClientResult<Admin> {
        form.validate()?;
        self.client.post_json("/api/admin/admins/", form).await
    }

    /// Change profile fields
    pub async fn update(&self, id: RecordId, changes: &AdminUpdate) -> ClientResult<Admin> {
        self.client
            .patch_json(&format!("/api/admin/admins/{id}/"), changes)
            .await
    }

    /// Delete an admin
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/admin/admins/{id}/"))
            .await
    }

    /// Flip the active flag
    pub async fn toggle_active(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/admins/{id}/toggle_active/"))
            .await
    }

    /// Admin counters
    pub async fn statistics(&self) -> ClientResult<AdminStatistics> {
        self.client
            .get_json("/api/admin/admins/statistics/")
            .await
    }
}
