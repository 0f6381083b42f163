//! Handoff of validated card details to a payment processor.

mod dry_run;
mod error;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CardBrand, PaymentDetails};

pub use dry_run::DryRunGateway;
pub use error::GatewayError;

/// Acknowledgement of an accepted payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Gateway reference for the payment.
    pub reference: String,
    pub brand: CardBrand,
    /// Last four digits of the card number.
    pub last4: String,
    /// Expiration as entered, `MMYY`.
    pub card_expiration: String,
    pub submitted_at: DateTime<Utc>,
}

/// Receives validated details from the form when the user submits.
pub trait PaymentGateway {
    /// Submits a payment and returns its receipt.
    fn submit(&mut self, details: &PaymentDetails) -> Result<Receipt, GatewayError>;
}
