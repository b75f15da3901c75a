//! Server pagination envelope

use serde::{Deserialize, Deserializer, Serialize};

/// One page of a server-paginated collection
///
/// The backend normally answers with `{count, next, previous, results}`, but
/// some unpaginated endpoints return a bare array. Both decode into a `Page`;
/// a bare array becomes a single page whose count is its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// A page with no records
    pub const fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }

    /// Build a single page holding every record
    pub fn from_results(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageWire<T> {
    Envelope {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PageWire::deserialize(deserializer)? {
            PageWire::Envelope {
                count,
                next,
                previous,
                results,
            } => Self {
                count: count.unwrap_or(results.len() as u64),
                next,
                previous,
                results,
            },
            PageWire::Bare(results) => Self::from_results(results),
        })
    }
}
