//! Deposit and withdrawal requests.

use super::currency::Currency;
use super::error::ValidationError;
use super::money::{parse_positive, Amount};

/// Request to top up a balance through an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// Asset to deposit.
    pub asset: Currency,
    /// Strictly positive amount.
    pub amount: Amount,
}

impl DepositRequest {
    /// Validate raw form input.
    pub fn from_input(asset: Currency, amount: &str) -> Result<Self, ValidationError> {
        let amount = parse_positive(amount).ok_or(ValidationError::InvalidAmount)?;
        Ok(Self { asset, amount })
    }
}

/// Request to send funds to an external address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    /// Asset to withdraw.
    pub asset: Currency,
    /// Strictly positive amount.
    pub amount: Amount,
    /// Destination address, non-empty.
    pub address: String,
}

impl WithdrawalRequest {
    /// Validate raw form input. The amount is checked before the address.
    pub fn from_input(
        asset: Currency,
        amount: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        let amount = parse_positive(amount).ok_or(ValidationError::InvalidAmount)?;
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        Ok(Self {
            asset,
            amount,
            address: address.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deposit_requires_positive_amount() {
        assert_eq!(
            DepositRequest::from_input(Currency::usdt(), ""),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            DepositRequest::from_input(Currency::usdt(), "-3"),
            Err(ValidationError::InvalidAmount)
        );
        let ok = DepositRequest::from_input(Currency::usdt(), "100").unwrap();
        assert_eq!(ok.amount, dec!(100));
    }

    #[test]
    fn withdrawal_checks_amount_then_address() {
        assert_eq!(
            WithdrawalRequest::from_input(Currency::btc(), "0", ""),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            WithdrawalRequest::from_input(Currency::btc(), "0.01", "  "),
            Err(ValidationError::MissingAddress)
        );
        let ok = WithdrawalRequest::from_input(Currency::btc(), "0.01", " bc1qxyz ").unwrap();
        assert_eq!(ok.address, "bc1qxyz");
    }
}
