//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!      inbound                                     outbound
//! ┌─────────────┐      ┌───────────────────┐      ┌────────────────┐
//! │   Action    │─────▶│      MiniApp      │─────▶│ PlatformBridge │
//! │PlatformEvent│      │  (application)    │      └────────────────┘
//! └─────────────┘      │  domain + ports   │      ┌────────────────┐
//!                      │                   │─────▶│ExchangeBackend │
//!                      └───────────────────┘      └────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PlatformBridge`] - Host chat client: lifecycle, theming, alerts, confirmations
//! - [`ExchangeBackend`] - Profile, balances, invoices, withdrawals, orders, swaps
//! - [`Action`], [`PlatformEvent`] - Inbound interaction vocabulary

pub mod inbound;
pub mod outbound;

pub use inbound::action::{Action, PlatformEvent, GENERIC_FAILURE};
pub use outbound::backend::{
    DepositInvoice, ExchangeBackend, OrderReceipt, RequestStatus, SwapReceipt, WithdrawalTicket,
};
pub use outbound::bridge::{Confirmation, PlatformBridge};
