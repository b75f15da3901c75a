//! Loaded collections and their fetch lifecycle
//!
//! A list moves `Idle -> Loading -> Idle | Failed`. Every fetch is stamped with
//! a ticket from a monotonically increasing counter; only the response to the
//! most recent ticket is applied, so a slow reply to an older query never
//! overwrites newer data. A failed fetch keeps whatever was shown before.

use bim_admin_types::Page;
use std::fmt;
use tracing::{debug, warn};

/// Fetch state of a list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch failed; previous items are still shown
    Failed(String),
}

/// Stamp identifying one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Items of one page of a collection plus the total count
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    count: u64,
    status: LoadStatus,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            status: LoadStatus::Idle,
            latest: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Empty, idle list
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; any earlier ticket becomes stale
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.status = LoadStatus::Loading;
        FetchTicket(self.latest)
    }

    /// Apply the outcome of the fetch stamped `ticket`.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn apply<E: fmt::Display>(&mut self, ticket: FetchTicket, outcome: Result<Page<T>, E>) -> bool {
        if ticket.0 != self.latest {
            debug!(ticket = ticket.0, latest = self.latest, "Dropping stale list response");
            return false;
        }
        match outcome {
            Ok(page) => {
                self.count = page.count;
                self.items = page.results;
                self.status = LoadStatus::Idle;
            }
            Err(e) => {
                warn!(error = %e, "List fetch failed");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Items currently shown
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access for local patches
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Total records on the server for the current query
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Fetch state
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether a fetch is in flight
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Whether nothing is shown
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item matching `pred`
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| pred(item))
    }

    /// First item matching `pred`, mutably
    pub fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| pred(item))
    }

    /// Remove every item matching `pred`; returns how many were removed
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = before - self.items.len();
        self.count = self.count.saturating_sub(removed as u64);
        removed
    }
}
