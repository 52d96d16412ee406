use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::requests::{AdminPasswordRequest, MutationAck};

/// Repository trait for permanently removing a record
#[async_trait]
pub trait Delete: Send + Sync {
    /// Delete the record with `id`
    ///
    /// # Arguments
    /// * `id` - The id of the record to remove
    /// * `request` - The admin password, forwarded unchecked
    ///
    /// # Returns
    /// * `Ok(MutationAck)` - The record is gone from subsequent loads
    /// * `Err(ApiError::Rejected)` - Wrong password or refused by the backend
    async fn delete(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck>;
}
