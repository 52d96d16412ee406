use std::sync::Arc;

use epf_desk_api::{ApiError, ApiResult};
use reqwest::Client;
use tracing::info;

use crate::config::ClientConfig;
use crate::repository::customer::customer_repository::CustomerRepositoryImpl;

/// Owns the shared HTTP client and hands out repositories bound to it.
pub struct HttpRepositories {
    client: Client,
    config: ClientConfig,
}

impl HttpRepositories {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::ConfigurationError(format!("failed to build HTTP client: {e}")))?;

        info!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "EPF backend client ready");

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a customer repository sharing this client's connection pool
    pub fn create_customer_repository(&self) -> Arc<CustomerRepositoryImpl> {
        Arc::new(CustomerRepositoryImpl::new(
            self.client.clone(),
            self.config.base_url.clone(),
        ))
    }
}
