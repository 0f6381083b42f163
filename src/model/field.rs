use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the four inputs on the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "cardName")]
    CardName,
    #[serde(rename = "cardNumber")]
    CardNumber,
    #[serde(rename = "cardExpiration")]
    CardExpiration,
    #[serde(rename = "cardCVV")]
    CardCvv,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 4] = [
        Self::CardName,
        Self::CardNumber,
        Self::CardExpiration,
        Self::CardCvv,
    ];

    /// Returns the key used for this field in submitted payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::CardName => "cardName",
            Self::CardNumber => "cardNumber",
            Self::CardExpiration => "cardExpiration",
            Self::CardCvv => "cardCVV",
        }
    }

    /// Returns the label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::CardName => "Full name",
            Self::CardNumber => "Card number",
            Self::CardExpiration => "Expiration Date (MMYY)",
            Self::CardCvv => "CVV2",
        }
    }

    /// Position of this field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::CardName => 0,
            Self::CardNumber => 1,
            Self::CardExpiration => 2,
            Self::CardCvv => 3,
        }
    }

    /// Returns the field at `index` in form order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_payload_names() {
        let keys: Vec<&str> = FieldId::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["cardName", "cardNumber", "cardExpiration", "cardCVV"]
        );
    }

    #[test]
    fn index_round_trips_through_all() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FieldId::from_index(i), Some(*field));
        }
        assert_eq!(FieldId::from_index(4), None);
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&FieldId::CardCvv).unwrap();
        assert_eq!(json, "\"cardCVV\"");
        let parsed: FieldId = serde_json::from_str("\"cardExpiration\"").unwrap();
        assert_eq!(parsed, FieldId::CardExpiration);
    }

    #[test]
    fn display_is_key() {
        assert_eq!(FieldId::CardNumber.to_string(), "cardNumber");
    }
}
