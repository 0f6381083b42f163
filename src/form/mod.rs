//! Payment form state: field values, validation flags and submit eligibility.

mod error;
mod state;

pub use error::SubmitError;
pub use state::{FormStatus, PaymentForm};
