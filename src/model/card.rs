use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static VISA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4[0-9]{15}$").expect("valid hardcoded regex"));

static AMEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[47][0-9]{13}$").expect("valid hardcoded regex"));

/// Card networks accepted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Amex,
}

impl CardBrand {
    /// Detects the brand of a card number.
    ///
    /// Visa numbers are 16 digits starting with `4`; Amex numbers are 15
    /// digits starting with `34` or `37`. Anything else has no brand.
    pub fn detect(number: &str) -> Option<Self> {
        if VISA_RE.is_match(number) {
            Some(Self::Visa)
        } else if AMEX_RE.is_match(number) {
            Some(Self::Amex)
        } else {
            None
        }
    }

    /// Number of CVV digits this brand prints.
    pub fn cvv_len(self) -> usize {
        match self {
            Self::Visa => 3,
            Self::Amex => 4,
        }
    }

    /// Where the cardholder finds the CVV for this brand.
    pub fn cvv_hint(self) -> &'static str {
        match self {
            Self::Visa => "Last three digits on signature strip",
            Self::Amex => "Four digits on front of card",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visa => write!(f, "Visa"),
            Self::Amex => write!(f, "American Express"),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn visa_sixteen_digits() {
        assert_eq!(CardBrand::detect("4123456789012345"), Some(CardBrand::Visa));
    }

    #[test]
    fn amex_34_and_37() {
        assert_eq!(CardBrand::detect("341234567890123"), Some(CardBrand::Amex));
        assert_eq!(CardBrand::detect("371234567890123"), Some(CardBrand::Amex));
    }

    #[test]
    fn amex_other_prefix_rejected() {
        assert_eq!(CardBrand::detect("351234567890123"), None);
    }

    #[test]
    fn mastercard_rejected() {
        assert_eq!(CardBrand::detect("5123456789012345"), None);
    }

    #[test]
    fn wrong_lengths_rejected() {
        assert_eq!(CardBrand::detect("412345"), None);
        assert_eq!(CardBrand::detect("41234567890123456"), None);
        assert_eq!(CardBrand::detect("3412345678901234"), None);
    }

    #[test]
    fn non_digits_rejected() {
        assert_eq!(CardBrand::detect("4123 4567 8901 2345"), None);
        assert_eq!(CardBrand::detect("412345678901234a"), None);
        assert_eq!(CardBrand::detect(""), None);
    }

    #[test]
    fn cvv_lengths() {
        assert_eq!(CardBrand::Visa.cvv_len(), 3);
        assert_eq!(CardBrand::Amex.cvv_len(), 4);
    }

    #[test]
    fn display_names() {
        assert_eq!(CardBrand::Visa.to_string(), "Visa");
        assert_eq!(CardBrand::Amex.to_string(), "American Express");
    }

    #[quickcheck]
    fn any_fifteen_digits_after_4_is_visa(digits: Vec<u8>) -> bool {
        let tail: String = digits
            .iter()
            .chain(std::iter::repeat(&0))
            .take(15)
            .map(|d| (b'0' + d % 10) as char)
            .collect();
        CardBrand::detect(&format!("4{tail}")) == Some(CardBrand::Visa)
    }

    #[quickcheck]
    fn detect_never_accepts_non_digit_input(s: String) -> bool {
        if s.chars().all(|c| c.is_ascii_digit()) {
            return true; // skip all-digit input
        }
        CardBrand::detect(&s).is_none()
    }
}
