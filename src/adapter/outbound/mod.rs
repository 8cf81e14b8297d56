//! Outbound adapters: implementations of outbound ports.

pub mod backend;
pub mod bridge;
