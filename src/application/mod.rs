//! Application services (use cases).
//!
//! The [`MiniApp`] controller and the flows it runs, plus the presentation
//! layer that renders its state.

mod context;
mod controller;
mod exchange;
mod funding;
mod trade;

pub mod render;

pub use context::{DepositForm, ExchangeForm, OrderForm, UiContext, WithdrawForm};
pub use controller::{MiniApp, MiniAppSettings, Theme, MORE_MESSAGE, PAY_MESSAGE};
pub use exchange::EXCHANGE_EXECUTED;
pub use render::{order_button_label, Frame, ModalFrame};
pub use trade::ORDER_PLACED;
