use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::requests::{AdminPasswordRequest, MutationAck};

/// Repository trait for moving a completed record back to pending
#[async_trait]
pub trait Reopen: Send + Sync {
    /// Reopen the record with `id`
    ///
    /// # Arguments
    /// * `id` - The id of the completed record
    /// * `request` - The admin password, forwarded unchecked
    ///
    /// # Returns
    /// * `Ok(MutationAck)` - The record is pending again
    /// * `Err(ApiError::Rejected)` - Wrong password or refused by the backend
    async fn reopen(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck>;
}
