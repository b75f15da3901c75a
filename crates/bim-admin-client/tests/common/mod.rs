//! Common test utilities and fixtures for the client integration tests

#![allow(dead_code, unreachable_pub, clippy::expect_used)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
