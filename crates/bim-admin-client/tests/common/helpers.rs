//! Test helper functions and utilities

use bim_admin_client::ApiClient;
use bim_admin_core::{HistoryNavigator, Session, config::ApiConfig};
use bim_admin_types::SessionUser;
use std::sync::{Arc, Once};
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// A mock backend and a client pointed at it
pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
    pub session: Session,
    pub navigator: Arc<HistoryNavigator>,
}

impl TestBackend {
    /// Start a mock server with a signed-out client
    pub async fn start() -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        let session = Session::in_memory();
        let navigator = Arc::new(HistoryNavigator::default());
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, session.clone(), navigator.clone())
            .expect("client should build");
        Self {
            server,
            client,
            session,
            navigator,
        }
    }

    /// Start a mock server with a client already holding `token`
    pub async fn signed_in(token: &str, superuser: bool) -> Self {
        let backend = Self::start().await;
        backend
            .session
            .store_login(token, Some("refresh-1"), &session_user(superuser))
            .expect("memory store accepts writes");
        backend
    }
}

/// Session descriptor for a staff user
pub fn session_user(superuser: bool) -> SessionUser {
    SessionUser {
        id: 1,
        username: if superuser { "root" } else { "moderator" }.into(),
        email: "staff@bim.org".into(),
        first_name: String::new(),
        last_name: String::new(),
        is_staff: true,
        is_superuser: superuser,
    }
}
