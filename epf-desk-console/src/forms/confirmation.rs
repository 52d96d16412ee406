//! Editor for a pending record.
//!
//! The form works on its own copy of the record, so nothing the operator
//! types shows up in the listing until a submit succeeds and the view
//! re-fetches. Every change goes through [`ConfirmationForm::set_field`],
//! which applies the field's input policy and either takes the new value
//! whole or drops it.

use std::str::FromStr;

use chrono::NaiveDate;
use epf_desk_api::domain::field_rules::{accepts_digit_input, normalize_upper, DigitField};
use epf_desk_api::domain::transition::{next_status, Outcome, TransitionContext, WorkflowAction};
use epf_desk_api::ApiResult;
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::models::requests::MutationAck;
use epf_desk_store::repository::{Confirm, Update};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use tracing::debug;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const PASSWORD_MASK: char = '•';

/// Editable fields. The customer name and password are set at creation
/// and only shown here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    AadharCardName,
    Dob,
    AadharNumber,
    AadharMobile,
    UanNumber,
    UanPassword,
    BankAccountNumber,
    IfscCode,
    CommissionAmount,
    PaidAmount,
    UpdatedStatus,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::AadharCardName,
        FormField::Dob,
        FormField::AadharNumber,
        FormField::AadharMobile,
        FormField::UanNumber,
        FormField::UanPassword,
        FormField::BankAccountNumber,
        FormField::IfscCode,
        FormField::CommissionAmount,
        FormField::PaidAmount,
        FormField::UpdatedStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::AadharCardName => "Aadhar Card Name",
            FormField::Dob => "DOB",
            FormField::AadharNumber => "Aadhar Number",
            FormField::AadharMobile => "Aadhar Mobile",
            FormField::UanNumber => "UAN Number",
            FormField::UanPassword => "UAN Password",
            FormField::BankAccountNumber => "Bank A/C No.",
            FormField::IfscCode => "IFSC Code",
            FormField::CommissionAmount => "Commission",
            FormField::PaidAmount => "Paid Amount",
            FormField::UpdatedStatus => "Updated Status",
        }
    }

    /// Whether a partial entry is a valid value. Dates and amounts only
    /// parse once complete.
    pub fn takes_keystrokes(self) -> bool {
        !matches!(
            self,
            FormField::Dob | FormField::CommissionAmount | FormField::PaidAmount
        )
    }

    pub fn digit_field(self) -> Option<DigitField> {
        match self {
            FormField::AadharNumber => Some(DigitField::AadharNumber),
            FormField::AadharMobile => Some(DigitField::AadharMobile),
            FormField::UanNumber => Some(DigitField::UanNumber),
            FormField::BankAccountNumber => Some(DigitField::BankAccountNumber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Applied,
    /// The input broke the field's policy and the old value was kept.
    Discarded,
}

/// The two ways out of the editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Save progress; the record is sent as "In Progress".
    Update,
    /// Send the record as is; the backend stamps it "Completed".
    Confirm,
}

impl From<FormAction> for WorkflowAction {
    fn from(action: FormAction) -> Self {
        match action {
            FormAction::Update => WorkflowAction::Update,
            FormAction::Confirm => WorkflowAction::Confirm,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmationForm {
    record: CustomerModel,
    reveal_password: bool,
}

impl ConfirmationForm {
    pub fn new(record: CustomerModel) -> Self {
        Self {
            record,
            reveal_password: false,
        }
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn record(&self) -> &CustomerModel {
        &self.record
    }

    /// Current value of `field` as it would be shown in an input box.
    pub fn value(&self, field: FormField) -> String {
        let r = &self.record;
        match field {
            FormField::AadharCardName => r.aadhar_card_name.clone().unwrap_or_default(),
            FormField::Dob => r
                .dob
                .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
            FormField::AadharNumber => r.aadhar_number.as_deref().unwrap_or_default().to_string(),
            FormField::AadharMobile => r.aadhar_mobile.as_deref().unwrap_or_default().to_string(),
            FormField::UanNumber => r.uan_number.as_deref().unwrap_or_default().to_string(),
            FormField::UanPassword => r.uan_password.clone().unwrap_or_default(),
            FormField::BankAccountNumber => r.bank_account_number.clone().unwrap_or_default(),
            FormField::IfscCode => r.ifsc_code.clone().unwrap_or_default(),
            FormField::CommissionAmount => r.commission_amount.map(|a| a.to_string()).unwrap_or_default(),
            FormField::PaidAmount => r.paid_amount.map(|a| a.to_string()).unwrap_or_default(),
            FormField::UpdatedStatus => r.updated_status.clone().unwrap_or_default(),
        }
    }

    /// Replaces the value of `field` with `raw`, subject to its input policy.
    ///
    /// An empty string always clears the field.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> FieldChange {
        if let Some(digits) = field.digit_field() {
            if !accepts_digit_input(digits, raw) {
                return FieldChange::Discarded;
            }
        }

        let r = &mut self.record;
        match field {
            FormField::AadharCardName => r.aadhar_card_name = non_empty(&normalize_upper(raw)),
            FormField::UanPassword => r.uan_password = non_empty(raw),
            FormField::BankAccountNumber => r.bank_account_number = non_empty(raw),
            FormField::IfscCode => r.ifsc_code = non_empty(&normalize_upper(raw)),
            FormField::UpdatedStatus => r.updated_status = non_empty(raw),
            FormField::AadharNumber => match bounded(raw) {
                Some(value) => r.aadhar_number = value,
                None => return FieldChange::Discarded,
            },
            FormField::AadharMobile => match bounded(raw) {
                Some(value) => r.aadhar_mobile = value,
                None => return FieldChange::Discarded,
            },
            FormField::UanNumber => match bounded(raw) {
                Some(value) => r.uan_number = value,
                None => return FieldChange::Discarded,
            },
            FormField::Dob => match parse_optional(raw, |s| NaiveDate::parse_from_str(s, DATE_INPUT_FORMAT).ok()) {
                Some(value) => r.dob = value,
                None => return FieldChange::Discarded,
            },
            FormField::CommissionAmount => match parse_optional(raw, |s| Decimal::from_str(s).ok()) {
                Some(value) => r.commission_amount = value,
                None => return FieldChange::Discarded,
            },
            FormField::PaidAmount => match parse_optional(raw, |s| Decimal::from_str(s).ok()) {
                Some(value) => r.paid_amount = value,
                None => return FieldChange::Discarded,
            },
        }
        FieldChange::Applied
    }

    /// Appends `text` one keystroke at a time.
    ///
    /// Each keystroke is a separate change, so a rejected character is
    /// dropped on its own and the rest still land. Fields that do not take
    /// keystrokes get the appended text as a single change.
    pub fn type_into(&mut self, field: FormField, text: &str) -> FieldChange {
        if !field.takes_keystrokes() {
            let mut proposed = self.value(field);
            proposed.push_str(text);
            return self.set_field(field, &proposed);
        }

        let mut result = FieldChange::Applied;
        for c in text.chars() {
            let mut proposed = self.value(field);
            proposed.push(c);
            if self.set_field(field, &proposed) == FieldChange::Discarded {
                result = FieldChange::Discarded;
            }
        }
        result
    }

    /// Sets a field from a complete entry.
    ///
    /// Digit fields are retyped from scratch, which keeps the first digits up
    /// to the cap. Other fields take the entry whole.
    pub fn enter(&mut self, field: FormField, raw: &str) -> FieldChange {
        if field.digit_field().is_some() {
            self.set_field(field, "");
            self.type_into(field, raw)
        } else {
            self.set_field(field, raw)
        }
    }

    pub fn is_enabled(&self, action: FormAction) -> bool {
        match action {
            FormAction::Update => true,
            FormAction::Confirm => self.record.has_positive_paid_amount(),
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    pub fn is_password_revealed(&self) -> bool {
        self.reveal_password
    }

    /// The record password, masked unless revealed.
    pub fn password_display(&self) -> String {
        let password = self.record.password.as_deref().unwrap_or_default();
        if self.reveal_password {
            password.to_string()
        } else {
            std::iter::repeat(PASSWORD_MASK).take(password.chars().count()).collect()
        }
    }

    /// Sends the edited record with `action`.
    ///
    /// Update forces the status to "In Progress"; Confirm sends the status
    /// untouched and is refused locally unless the paid amount is positive.
    /// Both normalize the uppercase fields first.
    pub async fn submit<R>(&mut self, repo: &R, action: FormAction) -> ApiResult<MutationAck>
    where
        R: Update<CustomerModel> + Confirm<CustomerModel> + ?Sized,
    {
        let ctx = TransitionContext {
            paid_amount: self.record.paid_amount,
            admin_password: None,
        };
        let outcome = next_status(self.record.work_status.as_ref(), action.into(), &ctx)?;

        let mut body = self.record.clone().normalized();
        let id = body.id;
        debug!(id, ?action, "submitting confirmation form");

        match action {
            FormAction::Update => {
                if let Outcome::Status(status) = outcome {
                    body.work_status = Some(status);
                }
                repo.update(id, &body).await
            }
            FormAction::Confirm => repo.confirm(id, &body).await,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// `Some(None)` for an empty entry, `Some(Some(v))` when it parses, `None`
/// when the entry has to be discarded.
fn parse_optional<T>(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<Option<T>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Some(None)
    } else {
        parse(trimmed).map(Some)
    }
}

fn bounded<const N: usize>(raw: &str) -> Option<Option<HeaplessString<N>>> {
    parse_optional(raw, |s| HeaplessString::try_from(s).ok())
}
