mod card;
mod clock;
mod field;
mod payment;
mod validation;

pub use card::CardBrand;
pub use clock::{Clock, FixedClock, SystemClock};
pub use field::FieldId;
pub use payment::PaymentDetails;
pub use validation::{
    ValidationError, display_expiration, expiration_cutoff, is_valid, validate_card_name,
    validate_card_number, validate_cvv, validate_expiration, validate_field,
};
