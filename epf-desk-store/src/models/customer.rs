use chrono::{NaiveDate, NaiveDateTime};
use epf_desk_api::domain::field_rules::{normalize_upper, AADHAR_MOBILE_LEN, AADHAR_NUMBER_LEN, UAN_NUMBER_LEN};
use epf_desk_api::domain::work_status::WorkStatus;
use epf_desk_api::service::search::Searchable;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One EPF service request as stored by the backend
/// - Every field except `id` may be null on the wire
/// - `password` is set once at creation and never edited by the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerModel {
    pub id: i64,

    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub aadhar_card_name: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_date")]
    pub dob: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_bounded")]
    pub aadhar_number: Option<HeaplessString<AADHAR_NUMBER_LEN>>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_bounded")]
    pub aadhar_mobile: Option<HeaplessString<AADHAR_MOBILE_LEN>>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_bounded")]
    pub uan_number: Option<HeaplessString<UAN_NUMBER_LEN>>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub uan_password: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub bank_account_number: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub ifsc_code: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub commission_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub paid_amount: Option<Decimal>,

    #[serde(
        default,
        serialize_with = "epf_desk_api::domain::work_status::serialize_optional_work_status",
        deserialize_with = "epf_desk_api::domain::work_status::deserialize_optional_work_status"
    )]
    pub work_status: Option<WorkStatus>,
    /// Free-text work notes
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub updated_status: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_text")]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_timestamp")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_timestamp")]
    pub update_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "crate::utils::deserialize_optional_timestamp")]
    pub confirm_date: Option<NaiveDateTime>,
}

impl CustomerModel {
    /// A record carrying only an id, every other field empty.
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            name: None,
            aadhar_card_name: None,
            dob: None,
            aadhar_number: None,
            aadhar_mobile: None,
            uan_number: None,
            uan_password: None,
            bank_account_number: None,
            ifsc_code: None,
            commission_amount: None,
            paid_amount: None,
            work_status: None,
            updated_status: None,
            password: None,
            create_date: None,
            update_date: None,
            confirm_date: None,
        }
    }

    /// Uppercases the aadhar-card name and IFSC code, as sent on every submit.
    pub fn normalized(mut self) -> Self {
        self.aadhar_card_name = self.aadhar_card_name.map(|v| normalize_upper(&v));
        self.ifsc_code = self.ifsc_code.map(|v| normalize_upper(&v));
        self
    }

    pub fn has_positive_paid_amount(&self) -> bool {
        self.paid_amount.is_some_and(|paid| paid > Decimal::ZERO)
    }

    /// Status as displayed; a missing status reads as "Pending".
    pub fn status_label(&self) -> &str {
        self.work_status
            .as_ref()
            .map(WorkStatus::as_str)
            .unwrap_or("Pending")
    }

    pub fn has_notes(&self) -> bool {
        self.updated_status.as_deref().is_some_and(|notes| !notes.is_empty())
    }
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Searchable for CustomerModel {
    fn work_status(&self) -> Option<&WorkStatus> {
        self.work_status.as_ref()
    }

    fn search_fields(&self) -> [Option<&str>; 3] {
        [
            self.name.as_deref(),
            self.uan_number.as_deref(),
            self.aadhar_card_name.as_deref(),
        ]
    }
}
