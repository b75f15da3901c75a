//! Typed REST client for the BIM platform's admin API
//!
//! [`ApiClient`] owns the HTTP connection, attaches the stored token and
//! applies the unauthorized policy. Endpoints are grouped per resource and
//! reached through accessors such as [`ApiClient::users`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api;
pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult, FieldErrors};
