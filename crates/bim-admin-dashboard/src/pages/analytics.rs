//! User analytics with derived shares

use bim_admin_client::ApiClient;
use bim_admin_types::UserStatistics;
use tracing::warn;

use crate::list::LoadStatus;

/// One row of the breakdown: label, absolute count, share of all users
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    /// Row label
    pub label: &'static str,
    /// Absolute count
    pub count: u64,
    /// Percent of all users, `0.0` when there are none
    pub percent: f64,
}

/// Analytics page
#[derive(Debug)]
pub struct AnalyticsPage {
    client: ApiClient,
    stats: Option<UserStatistics>,
    status: LoadStatus,
}

impl AnalyticsPage {
    /// Open the page
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            stats: None,
            status: LoadStatus::Idle,
        }
    }

    /// Fetch the counters
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        match self.client.users().statistics().await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                warn!(error = %e, "Error fetching analytics");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Raw counters, once loaded
    pub const fn stats(&self) -> Option<&UserStatistics> {
        self.stats.as_ref()
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Verified, active, staff and banned shares
    pub fn shares(&self) -> Vec<Share> {
        let Some(stats) = &self.stats else {
            return Vec::new();
        };
        vec![
            Share {
                label: "Verified",
                count: stats.verified_users,
                percent: stats.verified_percent(),
            },
            Share {
                label: "Active",
                count: stats.active_users,
                percent: stats.active_percent(),
            },
            Share {
                label: "Staff",
                count: stats.staff_users,
                percent: stats.staff_percent(),
            },
            Share {
                label: "Banned",
                count: stats.inactive_users,
                percent: stats.inactive_percent(),
            },
        ]
    }
}
