use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::identifiable::Identifiable;
use crate::models::requests::MutationAck;

/// Generic repository trait for saving an edited record
///
/// The whole record is sent; the backend decides which fields it keeps.
#[async_trait]
pub trait Update<T: Identifiable + Sync>: Send + Sync {
    /// Save `item` under `id`
    ///
    /// # Arguments
    /// * `id` - The id of the record being edited
    /// * `item` - The full record as it should be stored
    async fn update(&self, id: i64, item: &T) -> ApiResult<MutationAck>;
}
