//! Infrastructure configuration modules.

pub mod logging;
pub mod rates;
pub mod settings;
pub mod theme;
pub mod trading;
pub mod wallet;
