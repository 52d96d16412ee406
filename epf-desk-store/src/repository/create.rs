use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::requests::MutationAck;

/// Generic repository trait for creating a new record
///
/// # Type Parameters
/// * `R` - The creation request payload
#[async_trait]
pub trait Create<R>: Send + Sync {
    /// Create a record from the request
    ///
    /// # Arguments
    /// * `request` - The creation payload
    ///
    /// # Returns
    /// * `Ok(MutationAck)` - The backend accepted the record
    /// * `Err` - A transport error or a non-2xx response
    async fn create(&self, request: R) -> ApiResult<MutationAck>;
}
