use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::identifiable::Identifiable;
use crate::models::requests::MutationAck;

/// Generic repository trait for confirming a record as completed
///
/// The backend validates the record and stamps the completed status and
/// confirmation date.
#[async_trait]
pub trait Confirm<T: Identifiable + Sync>: Send + Sync {
    /// Confirm `item` under `id`
    ///
    /// # Arguments
    /// * `id` - The id of the record being confirmed
    /// * `item` - The full record as edited in the confirmation form
    async fn confirm(&self, id: i64, item: &T) -> ApiResult<MutationAck>;
}
