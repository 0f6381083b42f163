use crate::model::{
    CardBrand, Clock, FieldId, PaymentDetails, SystemClock, ValidationError, validate_field,
};

use super::error::SubmitError;

/// Whether the form may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// At least one field is empty or invalid.
    #[default]
    Incomplete,
    /// Every field is filled in and valid.
    ReadyToSubmit,
}

/// Field values, per-field validation results and the derived submit
/// eligibility of the payment form.
///
/// Every edit goes through [`PaymentForm::on_field_change`], which validates
/// only the edited field and then recomputes eligibility.
#[derive(Debug, Clone)]
pub struct PaymentForm<C = SystemClock> {
    values: [String; 4],
    errors: [Option<ValidationError>; 4],
    can_submit: bool,
    clock: C,
}

impl Default for PaymentForm<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentForm<SystemClock> {
    /// Creates an empty form that checks expirations against the system date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> PaymentForm<C> {
    /// Creates an empty form using the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            values: Default::default(),
            errors: Default::default(),
            can_submit: false,
            clock,
        }
    }

    /// Stores `value` for `field`, validates it and recomputes eligibility.
    ///
    /// The CVV rule reads the card number already on the form. Editing the
    /// card number does not revalidate the CVV; that happens at submit time.
    pub fn on_field_change(&mut self, field: FieldId, value: impl Into<String>) {
        let i = field.index();
        self.values[i] = value.into();
        let result = validate_field(
            field,
            &self.values[i],
            self.value(FieldId::CardNumber),
            self.clock.today(),
        );
        tracing::debug!(%field, valid = result.is_ok(), "field changed");
        self.errors[i] = result.err();
        self.recompute_eligibility();
    }

    /// Re-derives submit eligibility from the current values and errors.
    ///
    /// Returns the new eligibility.
    pub fn recompute_eligibility(&mut self) -> bool {
        let was = self.can_submit;
        self.can_submit = FieldId::ALL
            .iter()
            .all(|&f| !self.value(f).is_empty() && !self.is_invalid(f));
        if was != self.can_submit {
            tracing::info!(status = ?self.status(), "form status changed");
        }
        self.can_submit
    }

    /// Revalidates every field and, if all pass, returns the details to hand
    /// to a payment gateway.
    ///
    /// Revalidation catches a CVV flag left stale by a later card number
    /// edit and a card that expired while the form was open. Any failures
    /// are recorded on the form before the error is returned.
    pub fn on_submit(&mut self) -> Result<PaymentDetails, SubmitError> {
        if !self.can_submit {
            return Err(SubmitError::NotReady);
        }

        let today = self.clock.today();
        let card_number = self.value(FieldId::CardNumber).to_string();
        let mut invalid = Vec::new();
        for field in FieldId::ALL {
            let i = field.index();
            if let Err(e) = validate_field(field, &self.values[i], &card_number, today) {
                self.errors[i] = Some(e);
                invalid.push(field);
            }
        }

        if !invalid.is_empty() {
            self.recompute_eligibility();
            tracing::warn!(?invalid, "submit rejected on revalidation");
            return Err(SubmitError::Invalid(invalid));
        }

        Ok(PaymentDetails {
            card_name: self.values[FieldId::CardName.index()].clone(),
            card_number,
            card_expiration: self.values[FieldId::CardExpiration.index()].clone(),
            card_cvv: self.values[FieldId::CardCvv.index()].clone(),
        })
    }

    /// Clears every value and error.
    pub fn reset(&mut self) {
        self.values = Default::default();
        self.errors = Default::default();
        self.can_submit = false;
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Returns the validation failure recorded for `field`, if any.
    pub fn error(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors[field.index()].as_ref()
    }

    /// Returns `true` if `field` is flagged invalid.
    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.errors[field.index()].is_some()
    }

    /// Returns the current submit eligibility.
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    /// Returns the form status derived from eligibility.
    pub fn status(&self) -> FormStatus {
        if self.can_submit {
            FormStatus::ReadyToSubmit
        } else {
            FormStatus::Incomplete
        }
    }

    /// Brand of the card number currently entered, if recognized.
    pub fn card_brand(&self) -> Option<CardBrand> {
        CardBrand::detect(self.value(FieldId::CardNumber))
    }

    /// Returns a mutable reference to the clock.
    #[cfg(test)]
    pub(crate) fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::FixedClock;

    const VISA: &str = "4111111111111111";
    const AMEX: &str = "371449635398431";

    fn make_form() -> PaymentForm<FixedClock> {
        PaymentForm::with_clock(FixedClock(
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        ))
    }

    fn filled_form() -> PaymentForm<FixedClock> {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Ada Lovelace");
        form.on_field_change(FieldId::CardNumber, VISA);
        form.on_field_change(FieldId::CardExpiration, "1230");
        form.on_field_change(FieldId::CardCvv, "123");
        form
    }

    // --- Initial state ---

    #[test]
    fn starts_empty_and_incomplete() {
        let form = make_form();
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_invalid(field));
        }
        assert!(!form.can_submit());
        assert_eq!(form.status(), FormStatus::Incomplete);
    }

    // --- on_field_change ---

    #[test]
    fn change_stores_value_and_flags_invalid() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "7");
        assert_eq!(form.value(FieldId::CardName), "7");
        assert_eq!(
            form.error(FieldId::CardName),
            Some(&ValidationError::InvalidName)
        );
    }

    #[test]
    fn correcting_a_field_clears_its_flag() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "7");
        form.on_field_change(FieldId::CardName, "Jo");
        assert!(!form.is_invalid(FieldId::CardName));
    }

    #[test]
    fn clearing_a_field_flags_it_invalid() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Jo");
        form.on_field_change(FieldId::CardName, "");
        assert!(form.is_invalid(FieldId::CardName));
    }

    #[test]
    fn edit_only_touches_its_own_field() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardNumber, "5123456789012345");
        assert!(form.is_invalid(FieldId::CardNumber));
        assert!(!form.is_invalid(FieldId::CardName));
        assert!(!form.is_invalid(FieldId::CardCvv));
    }

    #[test]
    fn cvv_before_card_number_is_provisionally_valid() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardCvv, "1234");
        assert!(!form.is_invalid(FieldId::CardCvv));
    }

    #[test]
    fn cvv_checked_against_entered_brand() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardNumber, AMEX);
        form.on_field_change(FieldId::CardCvv, "123");
        assert!(form.is_invalid(FieldId::CardCvv));
        form.on_field_change(FieldId::CardCvv, "1234");
        assert!(!form.is_invalid(FieldId::CardCvv));
    }

    #[test]
    fn card_number_change_does_not_revalidate_cvv() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardCvv, "1234");
        form.on_field_change(FieldId::CardNumber, VISA);
        assert!(!form.is_invalid(FieldId::CardCvv));
    }

    #[test]
    fn card_brand_follows_number() {
        let mut form = make_form();
        assert_eq!(form.card_brand(), None);
        form.on_field_change(FieldId::CardNumber, AMEX);
        assert_eq!(form.card_brand(), Some(CardBrand::Amex));
    }

    // --- Eligibility ---

    #[test]
    fn all_valid_fields_enable_submit() {
        let form = filled_form();
        assert!(form.can_submit());
        assert_eq!(form.status(), FormStatus::ReadyToSubmit);
    }

    #[test]
    fn three_of_four_fields_not_enough() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Ada Lovelace");
        form.on_field_change(FieldId::CardNumber, VISA);
        form.on_field_change(FieldId::CardExpiration, "1230");
        assert!(!form.can_submit());
    }

    #[test]
    fn invalid_cvv_disables_submit() {
        let mut form = filled_form();
        form.on_field_change(FieldId::CardCvv, "1234");
        assert!(!form.can_submit());
        assert_eq!(form.status(), FormStatus::Incomplete);
    }

    #[test]
    fn invalid_then_corrected_reenables_submit() {
        let mut form = filled_form();
        form.on_field_change(FieldId::CardExpiration, "0524");
        assert!(!form.can_submit());
        form.on_field_change(FieldId::CardExpiration, "0625");
        assert!(form.can_submit());
    }

    #[test]
    fn correcting_one_field_keeps_other_failures() {
        let mut form = filled_form();
        form.on_field_change(FieldId::CardName, "7");
        form.on_field_change(FieldId::CardExpiration, "13");
        form.on_field_change(FieldId::CardName, "Ada");
        assert!(!form.can_submit());
    }

    #[test]
    fn resubmitting_same_valid_value_is_idempotent() {
        let mut form = filled_form();
        form.on_field_change(FieldId::CardNumber, VISA);
        assert!(!form.is_invalid(FieldId::CardNumber));
        assert!(form.can_submit());
    }

    #[test]
    fn recompute_reports_eligibility() {
        let mut form = filled_form();
        assert!(form.recompute_eligibility());
        form.reset();
        assert!(!form.recompute_eligibility());
    }

    #[quickcheck]
    fn eligibility_matches_definition(edits: Vec<(u8, String)>) -> bool {
        let mut form = make_form();
        for (slot, value) in edits {
            let field = FieldId::ALL[usize::from(slot) % 4];
            form.on_field_change(field, value);
        }
        let expected = FieldId::ALL
            .iter()
            .all(|&f| !form.value(f).is_empty() && !form.is_invalid(f));
        form.can_submit() == expected
    }

    // --- on_submit ---

    #[test]
    fn submit_when_incomplete_is_refused() {
        let mut form = make_form();
        assert_eq!(form.on_submit(), Err(SubmitError::NotReady));
    }

    #[test]
    fn submit_returns_details() {
        let mut form = filled_form();
        let details = form.on_submit().unwrap();
        assert_eq!(
            details,
            PaymentDetails {
                card_name: "Ada Lovelace".into(),
                card_number: VISA.into(),
                card_expiration: "1230".into(),
                card_cvv: "123".into(),
            }
        );
    }

    #[test]
    fn submit_catches_stale_cvv() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Ada Lovelace");
        form.on_field_change(FieldId::CardCvv, "1234");
        form.on_field_change(FieldId::CardExpiration, "1230");
        form.on_field_change(FieldId::CardNumber, VISA);
        assert!(form.can_submit());

        assert_eq!(
            form.on_submit(),
            Err(SubmitError::Invalid(vec![FieldId::CardCvv]))
        );
        assert!(form.is_invalid(FieldId::CardCvv));
        assert!(!form.can_submit());
    }

    #[test]
    fn submit_catches_expiry_while_open() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Ada Lovelace");
        form.on_field_change(FieldId::CardNumber, VISA);
        form.on_field_change(FieldId::CardExpiration, "0624");
        form.on_field_change(FieldId::CardCvv, "123");
        assert!(form.can_submit());

        *form.clock_mut() = FixedClock(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(
            form.on_submit(),
            Err(SubmitError::Invalid(vec![FieldId::CardExpiration]))
        );
        assert_eq!(
            form.error(FieldId::CardExpiration),
            Some(&ValidationError::CardExpired)
        );
    }

    // --- reset ---

    #[test]
    fn reset_clears_everything() {
        let mut form = filled_form();
        form.on_field_change(FieldId::CardCvv, "1");
        form.reset();
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_invalid(field));
        }
        assert!(!form.can_submit());
    }

    // --- End to end ---

    #[test]
    fn ada_lovelace_scenario() {
        let mut form = make_form();
        form.on_field_change(FieldId::CardName, "Ada Lovelace");
        assert!(!form.can_submit());
        form.on_field_change(FieldId::CardNumber, "4111111111111111");
        assert!(!form.can_submit());
        form.on_field_change(FieldId::CardExpiration, "1230");
        assert!(!form.can_submit());
        form.on_field_change(FieldId::CardCvv, "123");
        assert!(form.can_submit());
        form.on_field_change(FieldId::CardCvv, "1234");
        assert!(!form.can_submit());
    }
}
