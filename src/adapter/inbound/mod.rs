//! Inbound adapters: surfaces that turn user input into actions.

pub mod cli;
