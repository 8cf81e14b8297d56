//! Bridge Exchange - headless controller for a chat-hosted exchange mini-app.
//!
//! The mini-app shows a wallet, a currency converter, a trade ticket, a
//! service catalog and an asset list. This crate owns everything behind the
//! view: UI state, navigation, conversion against a static rate table, order
//! composition and the mocked deposit/withdrawal flows.
//!
//! # Architecture
//!
//! - [`domain`] - Currencies, rates, orders, funding requests, view state
//! - [`port`] - The host bridge and exchange backend traits, inbound actions
//! - [`application`] - The [`MiniApp`](application::MiniApp) controller and renderer
//! - [`adapter`] - Terminal and channel bridges, the mock backend, the CLI
//! - [`infrastructure`] - TOML configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use bridge_exchange::domain::{ConversionRequest, Currency};
//! use bridge_exchange::infrastructure::config::settings::Config;
//!
//! let table = Config::default().rates.table().unwrap();
//! let request = ConversionRequest::new(1.into(), Currency::btc(), Currency::usdt());
//! let conversion = table.apply(&request).unwrap();
//! assert_eq!(conversion.dest_amount.to_string(), "43000.00000000");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
