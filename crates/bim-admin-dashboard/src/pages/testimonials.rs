//! Testimonial moderation with optimistic approve, feature and delete
//!
//! The page keeps two collections: the filtered view and the full set used
//! for the approved/pending counts. Every local change is applied to both.

use bim_admin_client::{ApiClient, ClientResult};
use bim_admin_types::{Optimistic, Page, RecordId, Testimonial, TestimonialFilter, TestimonialQuery};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    list::{FetchTicket, ListState},
    optimistic::{Outcome, Toggle, settle_flag},
};

/// Prompt shown before a testimonial is deleted
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this testimonial?";

/// Toggleable flags of a testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialFlag {
    /// `is_approved`
    Approved,
    /// `is_featured`
    Featured,
}

impl TestimonialFlag {
    /// Field name in records and toggle responses
    pub const fn field(self) -> &'static str {
        match self {
            Self::Approved => "is_approved",
            Self::Featured => "is_featured",
        }
    }

    const fn of(self, testimonial: &mut Testimonial) -> &mut Optimistic<bool> {
        match self {
            Self::Approved => &mut testimonial.is_approved,
            Self::Featured => &mut testimonial.is_featured,
        }
    }
}

/// Testimonials page
#[derive(Debug)]
pub struct TestimonialsPage {
    client: ApiClient,
    filter: TestimonialFilter,
    view: ListState<Testimonial>,
    all: ListState<Testimonial>,
}

impl TestimonialsPage {
    /// Open the page with no filter
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            filter: TestimonialFilter::All,
            view: ListState::new(),
            all: ListState::new(),
        }
    }

    /// Fetch the filtered view and the full set concurrently
    pub async fn load(&mut self) {
        let view_ticket = self.view.begin();
        let all_ticket = self.all.begin();
        let query = TestimonialQuery {
            is_approved: self.filter.as_query(),
        };
        let api = self.client.testimonials();
        let all_query = TestimonialQuery::default();
        let (view, all) = tokio::join!(api.list(&query), api.list(&all_query));
        self.finish_fetch(view_ticket, all_ticket, view, all);
    }

    /// Apply both fetch results; stale tickets are dropped per collection
    pub fn finish_fetch(
        &mut self,
        view_ticket: FetchTicket,
        all_ticket: FetchTicket,
        view: ClientResult<Vec<Testimonial>>,
        all: ClientResult<Vec<Testimonial>>,
    ) {
        self.view.apply(view_ticket, view.map(Page::from_results));
        self.all.apply(all_ticket, all.map(Page::from_results));
    }

    /// Change the approval filter and reload
    pub async fn set_filter(&mut self, filter: TestimonialFilter) {
        self.filter = filter;
        self.load().await;
    }

    /// Flip `flag` on every copy of testimonial `id`
    pub fn begin_toggle(&mut self, id: RecordId, flag: TestimonialFlag) -> Option<Toggle<TestimonialFlag>> {
        let current = self
            .view
            .find(|t| t.id == id)
            .or_else(|| self.all.find(|t| t.id == id))
            .map(|t| match flag {
                TestimonialFlag::Approved => t.is_approved.get(),
                TestimonialFlag::Featured => t.is_featured.get(),
            })?;
        let proposed = !current;
        for testimonial in self.copies_mut(id) {
            flag.of(testimonial).propose(proposed);
        }
        debug!(testimonial = id, field = flag.field(), proposed, "Toggle applied locally");
        Some(Toggle {
            id,
            field: flag,
            proposed,
        })
    }

    /// Settle a toggle with the server's answer
    pub fn settle_toggle(
        &mut self,
        toggle: Toggle<TestimonialFlag>,
        response: &ClientResult<Value>,
    ) -> Outcome {
        let outcome = Outcome::from_response(response, toggle.field.field());
        for testimonial in self.copies_mut(toggle.id) {
            settle_flag(toggle.field.of(testimonial), outcome);
        }
        if let Err(e) = response {
            warn!(testimonial = toggle.id, field = toggle.field.field(), error = %e, "Toggle rejected");
        }
        outcome
    }

    /// Toggle `flag` on testimonial `id`; a rejection reloads both collections
    pub async fn toggle(&mut self, id: RecordId, flag: TestimonialFlag) {
        let Some(toggle) = self.begin_toggle(id, flag) else {
            warn!(testimonial = id, "Testimonial is not loaded");
            return;
        };
        let api = self.client.testimonials();
        let response = match flag {
            TestimonialFlag::Approved => api.toggle_approval(id).await,
            TestimonialFlag::Featured => api.toggle_featured(id).await,
        };
        if self.settle_toggle(toggle, &response).is_rejected() {
            self.load().await;
        }
    }

    /// Remove testimonial `id` locally, then on the server; a failure
    /// reloads both collections
    pub async fn delete(&mut self, id: RecordId) {
        self.view.remove_where(|t| t.id == id);
        self.all.remove_where(|t| t.id == id);
        match self.client.testimonials().delete(id).await {
            Ok(()) => info!(testimonial = id, "Testimonial deleted"),
            Err(e) => {
                warn!(testimonial = id, error = %e, "Error deleting testimonial");
                self.load().await;
            }
        }
    }

    fn copies_mut(&mut self, id: RecordId) -> impl Iterator<Item = &mut Testimonial> {
        self.view
            .items_mut()
            .iter_mut()
            .chain(self.all.items_mut().iter_mut())
            .filter(move |t| t.id == id)
    }

    /// Current filter
    pub const fn filter(&self) -> TestimonialFilter {
        self.filter
    }

    /// Testimonials in the filtered view
    pub fn testimonials(&self) -> &[Testimonial] {
        self.view.items()
    }

    /// Full set
    pub fn all(&self) -> &[Testimonial] {
        self.all.items()
    }

    /// Approved testimonials in the full set
    pub fn approved_count(&self) -> usize {
        self.all.items().iter().filter(|t| t.is_approved.get()).count()
    }

    /// Pending testimonials in the full set
    pub fn pending_count(&self) -> usize {
        self.all.items().len() - self.approved_count()
    }
}
