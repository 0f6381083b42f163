//! Actions returned by screen event handlers.

use crate::model::PaymentDetails;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to talk to the gateway and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Hand validated details to the payment gateway.
    Submit(PaymentDetails),
    /// Clear the form and start over.
    NewPayment,
    /// Quit the application.
    Quit,
}
