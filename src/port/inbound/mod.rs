//! Inbound ports: what drives the controller.

pub mod action;
