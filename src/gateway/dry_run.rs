use chrono::{DateTime, Utc};

use super::{GatewayError, PaymentGateway, Receipt};
use crate::model::PaymentDetails;

/// A gateway that never leaves the process.
///
/// Each submission is encoded to its JSON payload and kept in memory, and a
/// receipt with a `DRY-` reference is returned.
#[derive(Debug, Default)]
pub struct DryRunGateway {
    payloads: Vec<String>,
}

impl DryRunGateway {
    /// Creates a gateway with no recorded submissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON payloads of every accepted submission, oldest first.
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }

    fn submit_at(
        &mut self,
        details: &PaymentDetails,
        now: DateTime<Utc>,
    ) -> Result<Receipt, GatewayError> {
        let brand = details
            .brand()
            .ok_or_else(|| GatewayError::Declined("unsupported card".into()))?;
        let payload = serde_json::to_string(details)?;
        self.payloads.push(payload);

        let reference = format!(
            "DRY-{}-{}",
            now.format("%Y%m%d%H%M%S"),
            self.payloads.len()
        );
        tracing::info!(%reference, %brand, "dry-run payment accepted");
        Ok(Receipt {
            reference,
            brand,
            last4: details.last4().to_string(),
            card_expiration: details.card_expiration.clone(),
            submitted_at: now,
        })
    }
}

impl PaymentGateway for DryRunGateway {
    fn submit(&mut self, details: &PaymentDetails) -> Result<Receipt, GatewayError> {
        self.submit_at(details, Utc::now())
    }
}
