use bim_admin_types::{NewUser, Page, RecordId, User, UserDetail, UserQuery, UserStatistics};
use serde_json::Value;
use validator::Validate;

use crate::{ApiClient, ClientResult};

/// `/api/admin/users/`
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of users
    pub async fn list(&self, query: &UserQuery) -> ClientResult<Page<User>> {
        self.client.get_with("/api/admin/users/", query).await
    }

    /// Full profile of one user
    pub async fn get(&self, id: RecordId) -> ClientResult<UserDetail> {
        self.client
            .get_json(&format!("/api/admin/users/{id}/"))
            .await
    }

    /// Create a user; the form is checked locally first and nothing is sent
    /// when it fails
    pub async fn create(&self, form: &NewUser) -> ClientResult<User> {
        form.check_passwords()?;
        form.validate()?;
        self.client.post_json("/api/admin/users/", form).await
    }

    /// Delete a user
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/admin/users/{id}/"))
            .await
    }

    /// Flip the verified flag
    pub async fn toggle_verification(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/users/{id}/toggle_verification/"))
            .await
    }

    /// Flip the banned state
    pub async fn toggle_ban(&self, id: RecordId) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/admin/users/{id}/toggle_ban/"))
            .await
    }

    /// Population counters
    pub async fn statistics(&self) -> ClientResult<UserStatistics> {
        self.client
            .get_json("/api/admin/users/statistics/")
            .await
    }
}
