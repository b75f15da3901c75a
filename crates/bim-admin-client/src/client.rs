//! HTTP client for communicating with the BIM admin API

use bim_admin_core::{Navigator, Session, config::ApiConfig};
use bim_admin_types::routes;
use reqwest::{Client, Method, RequestBuilder, Response, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{debug, warn};
use url::Url;

use crate::{
    ClientError, ClientResult,
    api::{
        AdminsApi, AuthApi, CategoriesApi, ContactsApi, LOGIN_PATH, NewsApi, ReportsApi,
        TestimonialsApi, UsersApi,
    },
};

/// API client for the admin backend
///
/// Every request carries the stored token. A 401 from any endpoint other than
/// login clears the stored credentials and sends the navigator to the login
/// route; the redirect fires once until the next successful login.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_scheme: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
    redirected: Arc<AtomicBool>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth_scheme", &self.auth_scheme)
            .field("authenticated", &self.session.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is malformed or the HTTP client cannot
    /// be built.
    pub fn new(
        config: &ApiConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("bim-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_scheme: config.auth_scheme.clone(),
            session,
            navigator,
            redirected: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stored credentials
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Navigator receiving redirects
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Authentication endpoints
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// User management endpoints
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Admin management endpoints
    pub const fn admins(&self) -> AdminsApi<'_> {
        AdminsApi::new(self)
    }

    /// News article endpoints
    pub const fn news(&self) -> NewsApi<'_> {
        NewsApi::new(self)
    }

    /// News category endpoints
    pub const fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    /// Contact message endpoints
    pub const fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(self)
    }

    /// Report moderation endpoints
    pub const fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    /// Testimonial endpoints
    pub const fn testimonials(&self) -> TestimonialsApi<'_> {
        TestimonialsApi::new(self)
    }

    /// Build the URL for `path`, appending `query` when it encodes to something
    pub(crate) fn endpoint<Q>(&self, path: &str, query: Option<&Q>) -> ClientResult<Url>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))?;
        if let Some(query) = query {
            let encoded = serde_urlencoded::to_string(query)?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("{} {token}", self.auth_scheme)),
            None => request,
        }
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> ClientResult<Response> {
        debug!(%method, %url, "Sending request");
        let response = build(self.request(method.clone(), url.clone())).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ClientError::from_response(status, &body);
        if error.is_unauthorized() && !url.path().ends_with(LOGIN_PATH) {
            self.handle_unauthorized();
        } else {
            debug!(%method, %url, status = status.as_u16(), error = %error, "Request rejected");
        }
        Err(error)
    }

    /// Apply the unauthorized policy: forget credentials and go to login once
    fn handle_unauthorized(&self) {
        if self.redirected.swap(true, Ordering::SeqCst) {
            return;
        }
        warn!("Backend rejected the session; signing out");
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear stored credentials");
        }
        self.navigator.navigate(routes::LOGIN);
    }

    /// Re-arm the unauthorized redirect after a successful login
    pub(crate) fn reset_redirect(&self) {
        self.redirected.store(false, Ordering::SeqCst);
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.text().await?;
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    /// GET `path` and decode the body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint::<()>(path, None)?;
        Self::decode(self.execute(Method::GET, url, |r| r).await?).await
    }

    /// GET `path` with a query string and decode the body
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path, Some(query))?;
        Self::decode(self.execute(Method::GET, url, |r| r).await?).await
    }

    /// POST a JSON body and decode the response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint::<()>(path, None)?;
        Self::decode(self.execute(Method::POST, url, |r| r.json(body)).await?).await
    }

    /// POST without a body; used by the state transition endpoints
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint::<()>(path, None)?;
        Self::decode(self.execute(Method::POST, url, |r| r).await?).await
    }

    /// PATCH a JSON body and decode the response
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint::<()>(path, None)?;
        Self::decode(self.execute(Method::PATCH, url, |r| r.json(body)).await?).await
    }

    /// DELETE `path`, ignoring any body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.endpoint::<()>(path, None)?;
        self.execute(Method::DELETE, url, |r| r).await?;
        Ok(())
    }

    /// Send a multipart form with `method` and decode the response
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let url = self.endpoint::<()>(path, None)?;
        Self::decode(self.execute(method, url, |r| r.multipart(form)).await?).await
    }
}
