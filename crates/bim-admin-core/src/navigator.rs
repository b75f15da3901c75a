//! Route changes requested by the console

use parking_lot::Mutex;
use std::fmt;
use tracing::debug;

use crate::{Error, Result};

/// Receives route changes (the redirect to login, guard bounces, logout)
pub trait Navigator: Send + Sync + fmt::Debug {
    /// Move to `route`
    fn navigate(&self, route: &str);

    /// Route currently shown
    fn current(&self) -> String;
}

/// Reject routes the console does not serve
///
/// # Errors
///
/// Returns [`Error::Navigation`] for anything other than the login route or a
/// dashboard route.
pub fn check_route(route: &str) -> Result<()> {
    if bim_admin_types::routes::is_console_route(route) {
        Ok(())
    } else {
        Err(Error::Navigation {
            route: route.to_string(),
        })
    }
}

/// Navigator that records every route it was sent to
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    /// Start at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial.into()]),
        }
    }

    /// Every route visited, starting with the initial one
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    /// How many times navigation targeted `route`, not counting the start
    pub fn visits(&self, route: &str) -> usize {
        self.history
            .lock()
            .iter()
            .skip(1)
            .filter(|r| r.as_str() == route)
            .count()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(bim_admin_types::routes::DASHBOARD)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str) {
        debug!(route, "Navigating");
        self.history.lock().push(route.to_string());
    }

    fn current(&self) -> String {
        self.history.lock().last().cloned().unwrap_or_default()
    }
}
