use epf_desk_api::{ApiError, ApiResult};
use reqwest::Client;
use url::Url;

/// Path prefix of every customer endpoint.
pub const EPF_API_PREFIX: &str = "api/epf";

pub struct CustomerRepositoryImpl {
    pub client: Client,
    pub base_url: Url,
}

impl CustomerRepositoryImpl {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Resolves `api/epf/{path}` against the configured origin.
    pub(super) fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(&format!("{EPF_API_PREFIX}/{path}"))
            .map_err(|e| ApiError::ConfigurationError(format!("invalid endpoint '{path}': {e}")))
    }
}
