/// Maximum characters in an Aadhar number.
pub const AADHAR_NUMBER_LEN: usize = 12;
/// Maximum characters in a UAN number.
pub const UAN_NUMBER_LEN: usize = 12;
/// Maximum characters in the Aadhar-linked mobile number.
pub const AADHAR_MOBILE_LEN: usize = 10;

/// Fields that only ever hold ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitField {
    AadharNumber,
    UanNumber,
    BankAccountNumber,
    AadharMobile,
}

impl DigitField {
    pub const fn max_len(self) -> Option<usize> {
        match self {
            DigitField::AadharNumber => Some(AADHAR_NUMBER_LEN),
            DigitField::UanNumber => Some(UAN_NUMBER_LEN),
            DigitField::BankAccountNumber => None,
            DigitField::AadharMobile => Some(AADHAR_MOBILE_LEN),
        }
    }
}

/// Whether a proposed value for a digit field may replace the current one.
///
/// Out-of-policy changes are dropped as a whole, so feeding one character at
/// a time stops growing the value at the cap.
pub fn accepts_digit_input(field: DigitField, proposed: &str) -> bool {
    if !proposed.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match field.max_len() {
        Some(max) => proposed.len() <= max,
        None => true,
    }
}

/// Uppercase normalization applied to aadhar-card names, IFSC codes and new
/// customer names.
pub fn normalize_upper(value: &str) -> String {
    value.to_uppercase()
}
