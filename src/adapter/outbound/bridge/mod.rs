//! Platform bridge adapters.

pub mod channel;
pub mod terminal;

pub use channel::{ChannelBridge, HostRequest};
pub use terminal::TerminalBridge;
