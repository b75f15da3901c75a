//! Glue between toggle requests and [`Optimistic`] flags
//!
//! Pages split a toggle into two phases. `begin_*` flips the flag in every
//! local copy and returns a [`Toggle`]; `settle_*` feeds the request outcome
//! back. On success the server's value is adopted when the response carries
//! one; on failure the flag is reverted and the page refetches.

use bim_admin_client::ClientResult;
use bim_admin_types::{Optimistic, RecordId};
use serde_json::Value;

/// A flag change waiting for the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle<F> {
    /// Record being changed
    pub id: RecordId,
    /// Which flag
    pub field: F,
    /// Value shown while waiting
    pub proposed: bool,
}

/// What the server said about a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted; carries the server's value when the response reported it
    Accepted(Option<bool>),
    /// Rejected or never delivered
    Rejected,
}

impl Outcome {
    /// Classify a toggle response, looking for `field` in the body
    pub fn from_response(response: &ClientResult<Value>, field: &str) -> Self {
        match response {
            Ok(body) => Self::Accepted(reported_flag(body, field)),
            Err(_) => Self::Rejected,
        }
    }

    /// Whether the request failed
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Value of `field` in a toggle response, at the top level or inside a
/// nested record
pub fn reported_flag(body: &Value, field: &str) -> Option<bool> {
    body.get(field).and_then(Value::as_bool).or_else(|| {
        body.as_object()?
            .values()
            .find_map(|nested| nested.get(field).and_then(Value::as_bool))
    })
}

/// Apply `outcome` to one copy of a flag
pub fn settle_flag(flag: &mut Optimistic<bool>, outcome: Outcome) {
    match outcome {
        Outcome::Accepted(Some(server)) => flag.confirm_with(server),
        Outcome::Accepted(None) => flag.confirm(),
        Outcome::Rejected => flag.revert(),
    }
}

/// Move a counter of records whose flag equals `counted` when one record's
/// flag changes from `from` to `to`
pub const fn shift_counter(counter: &mut u64, counted: bool, from: bool, to: bool) {
    if from == to {
        return;
    }
    if to == counted {
        *counter += 1;
    } else {
        *counter = counter.saturating_sub(1);
    }
}
