use crate::model::FieldId;

/// Reasons [`PaymentForm::on_submit`](super::PaymentForm::on_submit) refuses to hand off details.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The form was not eligible for submission.
    #[error("the form is not complete")]
    NotReady,

    /// Revalidation at submit time found fields that are no longer valid.
    #[error("please correct: {}", field_list(.0))]
    Invalid(Vec<FieldId>),
}

fn field_list(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
