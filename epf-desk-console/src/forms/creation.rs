use epf_desk_api::domain::field_rules::normalize_upper;
use epf_desk_api::{ApiError, ApiResult};
use epf_desk_store::models::requests::{CreateCustomerRequest, MutationAck};
use epf_desk_store::repository::Create;
use tracing::debug;
use validator::Validate;

pub const MISSING_FIELDS: &str = "Please fill both fields";

/// Editor for a brand-new customer: a name and a password.
#[derive(Default)]
pub struct CreationForm {
    name: String,
    password: String,
}

impl CreationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name, uppercased as typed.
    pub fn set_name(&mut self, raw: &str) {
        self.name = normalize_upper(raw);
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.password.clear();
    }

    /// The request body, or a validation error if either field is empty.
    pub fn request(&self) -> ApiResult<CreateCustomerRequest> {
        let request = CreateCustomerRequest {
            name: self.name.clone(),
            password: self.password.clone(),
        };
        request
            .validate()
            .map_err(|_| ApiError::ValidationError(MISSING_FIELDS.to_string()))?;
        Ok(request)
    }

    /// Posts the new customer. The fields are cleared only on success.
    pub async fn submit<R>(&mut self, repo: &R) -> ApiResult<MutationAck>
    where
        R: Create<CreateCustomerRequest> + ?Sized,
    {
        let request = self.request()?;
        debug!(name = %request.name, "creating customer");
        let ack = repo.create(request).await?;
        self.clear();
        Ok(ack)
    }
}

impl std::fmt::Debug for CreationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreationForm")
            .field("name", &self.name)
            .field("has_password", &self.has_password())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epf_desk_store::repository::in_memory::{InMemoryCustomerRepository, RecordedCall};

    #[tokio::test]
    async fn test_submit_uppercases_name() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryCustomerRepository::new("admin123");
        let mut form = CreationForm::new();
        form.set_name("john");
        form.set_password("x");

        form.submit(&repo).await?;

        assert_eq!(
            repo.calls(),
            vec![RecordedCall::Create(CreateCustomerRequest {
                name: "JOHN".to_string(),
                password: "x".to_string(),
            })]
        );
        assert_eq!(form.name(), "");
        assert!(!form.has_password());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let repo = InMemoryCustomerRepository::new("admin123");
        let mut form = CreationForm::new();
        form.set_name("john");

        let result = form.submit(&repo).await;
        assert!(matches!(result, Err(ApiError::ValidationError(ref m)) if m == MISSING_FIELDS));
        assert!(repo.calls().is_empty());
        assert_eq!(form.name(), "JOHN");
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields() {
        let repo = InMemoryCustomerRepository::new("admin123");
        repo.fail_next(ApiError::Rejected {
            status: 500,
            message: None,
        });
        let mut form = CreationForm::new();
        form.set_name("john");
        form.set_password("x");

        assert!(form.submit(&repo).await.is_err());
        assert_eq!(form.name(), "JOHN");
        assert!(form.has_password());
    }
}
