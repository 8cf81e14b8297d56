//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`bridge`] - `ScriptedBridge`, a recording host with queued answers.
//! - [`backend`] - `FailingBackend`, rejects every request.
//! - [`config`] - Canonical test configurations and a wired controller.

pub mod backend;
pub mod bridge;
pub mod config;
