//! Exchange backend adapters.

pub mod mock;

pub use mock::MockBackend;
