//! TUI screen implementations.

pub mod help;
pub mod payment;
pub mod receipt;

pub use help::{HelpState, draw_help};
pub use payment::{PaymentScreenState, draw_payment};
pub use receipt::{draw_receipt, handle_receipt_key};
