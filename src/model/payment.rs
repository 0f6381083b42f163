use serde::{Deserialize, Serialize};

use super::card::CardBrand;

/// Card details that passed every validation rule, ready for a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(rename = "cardName")]
    pub card_name: String,
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    #[serde(rename = "cardExpiration")]
    pub card_expiration: String,
    #[serde(rename = "cardCVV")]
    pub card_cvv: String,
}

impl PaymentDetails {
    /// Brand of the card number, if recognized.
    pub fn brand(&self) -> Option<CardBrand> {
        CardBrand::detect(&self.card_number)
    }

    /// Last four digits of the card number.
    pub fn last4(&self) -> &str {
        let n = self.card_number.len();
        self.card_number.get(n.saturating_sub(4)..).unwrap_or("")
    }
}
