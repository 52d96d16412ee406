use async_trait::async_trait;
use epf_desk_api::ApiResult;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading the full collection of records
///
/// Views call this on activation and after every mutation; there is no
/// incremental fetch.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl LoadAll<CustomerModel> for CustomerRepositoryImpl {
///     async fn load_all(&self) -> ApiResult<Vec<CustomerModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadAll<T: Identifiable>: Send + Sync {
    /// Load every record regardless of status
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All records in backend order
    /// * `Err` - A transport, rejection or decode error
    async fn load_all(&self) -> ApiResult<Vec<T>>;
}
