//! Profile of a single user

use bim_admin_client::ApiClient;
use bim_admin_types::{RecordId, UserDetail, routes};
use tracing::{info, warn};

use crate::{list::LoadStatus, notice::Notice};

/// Actions offered on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Mark the email verified or unverified
    ToggleVerification,
    /// Ban or unban
    ToggleBan,
    /// Remove the account
    Delete,
}

impl UserAction {
    /// Verb used in the confirmation prompt, given the user's current state
    pub const fn verb(self, user: &UserDetail) -> &'static str {
        match self {
            Self::ToggleVerification if user.user.is_verified => "unverify",
            Self::ToggleVerification => "verify",
            Self::ToggleBan if user.user.is_active => "ban",
            Self::ToggleBan => "unban",
            Self::Delete => "delete",
        }
    }

    /// Confirmation prompt for this action
    pub fn confirm_prompt(self, user: &UserDetail) -> String {
        format!("Are you sure you want to {} this user?", self.verb(user))
    }
}

/// User detail page
#[derive(Debug)]
pub struct UserDetailPage {
    client: ApiClient,
    id: RecordId,
    user: Option<UserDetail>,
    status: LoadStatus,
}

impl UserDetailPage {
    /// Open the page for `id`
    pub const fn new(client: ApiClient, id: RecordId) -> Self {
        Self {
            client,
            id,
            user: None,
            status: LoadStatus::Idle,
        }
    }

    /// Fetch the profile
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        match self.client.users().get(self.id).await {
            Ok(user) => {
                self.user = Some(user);
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                warn!(user = self.id, error = %e, "Error fetching user");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Run `action`; toggles reload the profile, delete returns to the list
    pub async fn perform(&mut self, action: UserAction) -> Option<Notice> {
        let users = self.client.users();
        let outcome = match action {
            UserAction::ToggleVerification => users.toggle_verification(self.id).await.map(drop),
            UserAction::ToggleBan => users.toggle_ban(self.id).await.map(drop),
            UserAction::Delete => users.delete(self.id).await,
        };

        match (action, outcome) {
            (UserAction::Delete, Ok(())) => {
                info!(user = self.id, "User deleted");
                self.client.navigator().navigate(routes::USERS);
                None
            }
            (_, Ok(())) => {
                self.load().await;
                None
            }
            (UserAction::Delete, Err(e)) => {
                warn!(user = self.id, error = %e, "Error deleting user");
                Some(Notice::error("Failed to delete user"))
            }
            (_, Err(e)) => {
                warn!(user = self.id, error = %e, "Error updating user");
                Some(Notice::error("Failed to update user"))
            }
        }
    }

    /// Record id
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Loaded profile
    pub const fn user(&self) -> Option<&UserDetail> {
        self.user.as_ref()
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}
