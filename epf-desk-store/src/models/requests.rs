use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/epf/create`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Body of the password-gated reopen and delete calls.
///
/// The password is forwarded to the backend as entered; it is never checked
/// on the client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPasswordRequest {
    pub password: String,
}

impl AdminPasswordRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateCustomerRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateCustomerRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for AdminPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPasswordRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Acknowledgement of a mutating call.
///
/// Read leniently: an empty or non-JSON body yields no message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationAck {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<MutationAck>(body).unwrap_or_default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
