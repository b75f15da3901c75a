use bim_admin_types::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, SessionUser};
use tracing::info;

use crate::{ApiClient, ClientError, ClientResult};

/// Credential exchange; a 401 here is a wrong password, not an expired session
pub(crate) const LOGIN_PATH: &str = "/api/auth/login/";

/// `/api/auth/` and token endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sign in and store the returned credentials
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionUser> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .client
            .post_json(LOGIN_PATH, &request)
            .await?;

        self.client.session().store_login(
            &response.access,
            response.refresh.as_deref(),
            &response.user,
        )?;
        self.client.reset_redirect();
        info!(
            user = %response.user.username,
            superuser = response.user.is_superuser,
            "Signed in"
        );
        Ok(response.user)
    }

    /// Exchange the stored refresh token for a new access token
    pub async fn refresh(&self) -> ClientResult<()> {
        let refresh = self
            .client
            .session()
            .refresh_token()
            .ok_or(ClientError::Unauthorized)?;
        let response: RefreshResponse = self
            .client
            .post_json("/api/token/refresh/", &RefreshRequest { refresh })
            .await?;
        self.client
            .session()
            .set_tokens(&response.access, response.refresh.as_deref())?;
        Ok(())
    }

    /// Profile of the signed-in user
    pub async fn me(&self) -> ClientResult<SessionUser> {
        self.client.get_json("/api/auth/me/").await
    }

    /// Forget the stored credentials; the backend keeps no session to end
    pub fn logout(&self) -> ClientResult<()> {
        self.client.session().clear()?;
        info!("Signed out");
        Ok(())
    }
}
