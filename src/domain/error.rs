//! Domain errors.
//!
//! Two families live here:
//!
//! - [`ValidationError`]: bad user input. The `Display` text is exactly what
//!   the user is shown, so flows can alert it verbatim and abort.
//! - [`DomainError`]: invariant violations while building domain values
//!   (for example a non-positive rate in the rate table).
//!
//! # Examples
//!
//! ```
//! use bridge_exchange::domain::error::ValidationError;
//!
//! assert_eq!(ValidationError::MissingAmount.to_string(), "Please enter amount");
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::currency::Currency;

/// Rejected user input. Handled locally by alerting and aborting the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Order amount field is empty.
    #[error("Please enter amount")]
    MissingAmount,

    /// Amount is not a number or not strictly positive.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// Limit price is not a number or not strictly positive.
    #[error("Please enter a valid price")]
    InvalidPrice,

    /// Send or receive amount is missing on the converter.
    #[error("Please enter amounts")]
    MissingExchangeAmounts,

    /// Withdrawal address is empty.
    #[error("Please enter withdrawal address")]
    MissingAddress,

    /// No rate for this direction.
    #[error("Conversion from {from} to {to} is not available")]
    UnknownPair {
        /// Source currency.
        from: Currency,
        /// Destination currency.
        to: Currency,
    },

    /// Service name outside the catalogue.
    #[error("Unknown service: {0}")]
    UnknownService(String),
}

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every rate in the table must be strictly positive.
    #[error("rate {from}->{to} must be positive, got {rate}")]
    NonPositiveRate {
        /// Source currency.
        from: Currency,
        /// Destination currency.
        to: Currency,
        /// The rejected multiplier.
        rate: Decimal,
    },

    /// Currency codes cannot be blank.
    #[error("currency code cannot be empty")]
    EmptyCurrency,
}
