//! Outbound ports: collaborators the controller calls out to.

pub mod backend;
pub mod bridge;
