/// Errors a [`PaymentGateway`](super::PaymentGateway) can report.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The payment details could not be encoded for transport.
    #[error("could not encode payment: {0}")]
    Encode(#[from] serde_json::Error),

    /// The gateway refused the payment.
    #[error("payment declined: {0}")]
    Declined(String),
}
