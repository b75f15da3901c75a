//! Wiring of configuration, credential storage, navigation and the client

use bim_admin_client::{ApiClient, ClientResult};
use bim_admin_core::{AdminConfig, FileSessionStore, HistoryNavigator, Navigator, Session};
use bim_admin_types::routes;
use std::sync::Arc;
use tracing::debug;

use crate::{
    navigation::Sidebar,
    pages::{
        AdminsPage, AnalyticsPage, CategoriesPage, ContactsPage, NewsPage, OverviewPage,
        ReportsPage, TestimonialsPage, UsersPage,
    },
};

/// A ready-to-use console: one client, one session, one navigator
#[derive(Debug, Clone)]
pub struct App {
    config: AdminConfig,
    client: ApiClient,
    navigator: Arc<HistoryNavigator>,
}

impl App {
    /// Open the session file named by `config` and build the client
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be opened or the base URL
    /// is invalid.
    pub fn new(config: AdminConfig) -> ClientResult<Self> {
        let path = config.session.resolve_path();
        debug!(path = %path.display(), "Opening session store");
        let session = Session::new(Arc::new(FileSessionStore::open(path)?));
        Self::with_session(config, session)
    }

    /// Build around an existing session
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_session(config: AdminConfig, session: Session) -> ClientResult<Self> {
        let navigator = Arc::new(HistoryNavigator::new(routes::DASHBOARD));
        let client = ApiClient::new(&config.api, session, navigator.clone())?;
        Ok(Self {
            config,
            client,
            navigator,
        })
    }

    /// Effective configuration
    pub const fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// API client
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Stored credentials
    pub const fn session(&self) -> &Session {
        self.client.session()
    }

    /// Route history
    pub const fn navigator(&self) -> &Arc<HistoryNavigator> {
        &self.navigator
    }

    /// Route currently shown
    pub fn current_route(&self) -> String {
        self.navigator.current()
    }

    /// Whether anything sent the console to the login route
    pub fn sent_to_login(&self) -> bool {
        self.navigator.visits(routes::LOGIN) > 0
    }

    /// Sidebar for the stored session
    pub fn sidebar(&self) -> Sidebar {
        Sidebar::from_session(self.session())
    }

    fn page_size(&self) -> u32 {
        self.config.pagination.page_size
    }

    /// Dashboard overview
    pub fn overview(&self) -> OverviewPage {
        OverviewPage::new(self.client.clone())
    }

    /// Analytics
    pub fn analytics(&self) -> AnalyticsPage {
        AnalyticsPage::new(self.client.clone())
    }

    /// Users list
    pub fn users(&self) -> UsersPage {
        UsersPage::new(self.client.clone(), self.page_size())
    }

    /// Admins list, if the session may see it
    pub fn admins(&self) -> Option<AdminsPage> {
        AdminsPage::open(self.client.clone())
    }

    /// News list
    pub fn news(&self) -> NewsPage {
        NewsPage::new(self.client.clone(), self.page_size())
    }

    /// News categories
    pub fn categories(&self) -> CategoriesPage {
        CategoriesPage::new(self.client.clone())
    }

    /// Contact messages
    pub fn contacts(&self) -> ContactsPage {
        ContactsPage::new(self.client.clone())
    }

    /// Reports
    pub fn reports(&self) -> ReportsPage {
        ReportsPage::new(self.client.clone(), self.page_size())
    }

    /// Testimonials
    pub fn testimonials(&self) -> TestimonialsPage {
        TestimonialsPage::new(self.client.clone())
    }
}
