//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Surfaces that drive the controller (the CLI)
//! - [`outbound`] - Platform bridges and exchange backends

pub mod inbound;
pub mod outbound;
