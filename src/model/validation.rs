use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use thiserror::Error;

use super::card::CardBrand;
use super::field::FieldId;

/// Reasons a field value is rejected.
///
/// The `Display` text is the helper text shown under the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter the name as it appears on the card")]
    InvalidName,
    #[error("only Visa (16 digits) and American Express (15 digits) are accepted")]
    UnsupportedCardNumber,
    #[error("use the MMYY format, e.g. 0427")]
    MalformedExpiration,
    #[error("month must be between 01 and 12")]
    InvalidExpirationMonth,
    #[error("this card has expired")]
    CardExpired,
    #[error("CVV must be 3 or 4 digits")]
    MalformedCvv,
    #[error("{brand} cards use a {expected}-digit CVV")]
    CvvLengthMismatch { brand: CardBrand, expected: usize },
}

static CARD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z ,.'-]+$").expect("valid hardcoded regex"));

static EXPIRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid hardcoded regex"));

static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("valid hardcoded regex"));

/// Validates a cardholder name: a letter followed by one or more letters,
/// spaces, commas, periods, apostrophes or hyphens.
pub fn validate_card_name(name: &str) -> Result<(), ValidationError> {
    if CARD_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Validates a card number as either a Visa or an Amex number.
pub fn validate_card_number(number: &str) -> Result<(), ValidationError> {
    CardBrand::detect(number)
        .map(|_| ())
        .ok_or(ValidationError::UnsupportedCardNumber)
}

/// Validates an `MMYY` expiration against `today`.
///
/// A card is usable through the last day of its expiration month, so the
/// value is accepted only when the first day of the following month is
/// strictly after `today`.
pub fn validate_expiration(mmyy: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let expires_after = expiration_cutoff(mmyy)?;
    if expires_after > today {
        Ok(())
    } else {
        Err(ValidationError::CardExpired)
    }
}

/// Returns the first day on which a card with the given `MMYY` expiration is
/// no longer valid.
pub fn expiration_cutoff(mmyy: &str) -> Result<NaiveDate, ValidationError> {
    if !EXPIRATION_RE.is_match(mmyy) {
        return Err(ValidationError::MalformedExpiration);
    }
    let (month, year) = mmyy.split_at(2);
    let month: u32 = month
        .parse()
        .map_err(|_| ValidationError::MalformedExpiration)?;
    let year: i32 = year
        .parse::<i32>()
        .map_err(|_| ValidationError::MalformedExpiration)?
        + 2000;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidExpirationMonth);
    }
    let (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidExpirationMonth)
}

/// Validates a CVV against the card number currently on the form.
///
/// With no card number entered yet, any 3 or 4 digit CVV is accepted so the
/// user is not blocked while filling the form out of order. Otherwise the
/// length must match the detected brand; an unrecognized card number makes
/// every CVV invalid.
pub fn validate_cvv(cvv: &str, card_number: &str) -> Result<(), ValidationError> {
    if !CVV_RE.is_match(cvv) {
        return Err(ValidationError::MalformedCvv);
    }
    if card_number.is_empty() {
        return Ok(());
    }
    match CardBrand::detect(card_number) {
        Some(brand) if cvv.len() == brand.cvv_len() => Ok(()),
        Some(brand) => Err(ValidationError::CvvLengthMismatch {
            brand,
            expected: brand.cvv_len(),
        }),
        None => Err(ValidationError::UnsupportedCardNumber),
    }
}

/// Runs the rule for `field` against `value`.
///
/// `card_number` is only consulted for [`FieldId::CardCvv`]; `today` only for
/// [`FieldId::CardExpiration`].
pub fn validate_field(
    field: FieldId,
    value: &str,
    card_number: &str,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match field {
        FieldId::CardName => validate_card_name(value),
        FieldId::CardNumber => validate_card_number(value),
        FieldId::CardExpiration => validate_expiration(value, today),
        FieldId::CardCvv => validate_cvv(value, card_number),
    }
}

/// Boolean form of [`validate_field`].
pub fn is_valid(field: FieldId, value: &str, card_number: &str, today: NaiveDate) -> bool {
    validate_field(field, value, card_number, today).is_ok()
}

/// Formats a cutoff date as the `MM/YY` a cardholder reads off the card.
pub fn display_expiration(cutoff: NaiveDate) -> String {
    let last_valid = cutoff.pred_opt().unwrap_or(cutoff);
    format!("{:02}/{:02}", last_valid.month(), last_valid.year() % 100)
}
