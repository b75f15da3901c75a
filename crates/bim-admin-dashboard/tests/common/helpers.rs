//! Test helper functions and utilities

use bim_admin_core::{AdminConfig, Session};
use bim_admin_dashboard::App;
use bim_admin_types::SessionUser;
use std::sync::Once;
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

/// A mock backend and a console pointed at it
pub struct TestConsole {
    pub server: MockServer,
    pub app: App,
}

impl TestConsole {
    /// Console with no stored credentials
    pub async fn signed_out() -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        let mut config = AdminConfig::default();
        config.api.base_url = server.uri();
        let app = App::with_session(config, Session::in_memory()).expect("console should build");
        Self { server, app }
    }

    /// Console signed in as a staff user
    pub async fn signed_in(superuser: bool) -> Self {
        let console = Self::signed_out().await;
        console
            .app
            .session()
            .store_login("tok-1", Some("refresh-1"), &staff_user(superuser))
            .expect("memory store accepts writes");
        console
    }
}

/// Session descriptor for a staff user
pub fn staff_user(superuser: bool) -> SessionUser {
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
