//! Tagged wrapper for values that are shown before the server confirms them
//!
//! A toggle such as "mark read" is applied to the local copy immediately and
//! sent to the backend afterwards. The wrapper remembers what was shown before
//! the change so the value can snap back when the request fails, and records
//! whether the value currently on screen has been confirmed.
//!
//! On the wire the wrapper is transparent: it deserializes from the plain
//! value (always as [`Optimistic::Confirmed`]) and serializes the shown value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that may be displaying an unconfirmed local change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optimistic<T> {
    /// Matches the last value reported by the server
    Confirmed(T),

    /// Changed locally, request still in flight
    Pending {
        /// Value currently shown
        shown: T,
        /// Last value known to be on the server
        previous: T,
    },

    /// A local change the server rejected; holds the restored value
    Reverted(T),
}

impl<T> Optimistic<T> {
    /// Wrap a value reported by the server
    pub const fn confirmed(value: T) -> Self {
        Self::Confirmed(value)
    }

    /// The value to display
    pub const fn value(&self) -> &T {
        match self {
            Self::Confirmed(value) | Self::Reverted(value) | Self::Pending { shown: value, .. } => {
                value
            }
        }
    }

    /// Consume the wrapper, returning the displayed value
    pub fn into_value(self) -> T {
        match self {
            Self::Confirmed(value) | Self::Reverted(value) | Self::Pending { shown: value, .. } => {
                value
            }
        }
    }

    /// Whether a local change is waiting for the server
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Whether the last local change was rolled back
    pub const fn is_reverted(&self) -> bool {
        matches!(self, Self::Reverted(_))
    }
}

impl<T: Clone> Optimistic<T> {
    /// Show `value` immediately.
    ///
    /// Proposing again while a change is pending keeps the original server
    /// value as the rollback target.
    pub fn propose(&mut self, value: T) {
        let previous = match self {
            Self::Pending { previous, .. } => previous.clone(),
            Self::Confirmed(current) | Self::Reverted(current) => current.clone(),
        };
        *self = Self::Pending {
            shown: value,
            previous,
        };
    }

    /// Accept the shown value as the server's
    pub fn confirm(&mut self) {
        if let Self::Pending { shown, .. } = self {
            *self = Self::Confirmed(shown.clone());
        }
    }

    /// Adopt the value the server actually returned
    pub fn confirm_with(&mut self, server_value: T) {
        *self = Self::Confirmed(server_value);
    }

    /// Roll a pending change back to the previous value
    pub fn revert(&mut self) {
        if let Self::Pending { previous, .. } = self {
            *self = Self::Reverted(previous.clone());
        }
    }
}

impl Optimistic<bool> {
    /// Propose the negation of the shown value and return it
    pub fn toggle(&mut self) -> bool {
        let next = !*self.value();
        self.propose(next);
        next
    }

    /// Shorthand for `*self.value()`
    pub const fn get(&self) -> bool {
        *self.value()
    }
}

impl<T: Default> Default for Optimistic<T> {
    fn default() -> Self {
        Self::Confirmed(T::default())
    }
}

impl<T> From<T> for Optimistic<T> {
    fn from(value: T) -> Self {
        Self::Confirmed(value)
    }
}

impl<T: Serialize> Serialize for Optimistic<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optimistic<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Confirmed)
    }
}
