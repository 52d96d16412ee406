use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::requests::{AdminPasswordRequest, MutationAck};
use epf_desk_store::repository::delete::Delete;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_ack, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &CustomerRepositoryImpl,
        id: i64,
        request: &AdminPasswordRequest,
    ) -> ApiResult<MutationAck> {
        let url = repo.endpoint(&format!("delete/{id}"))?;
        debug!(%url, "DELETE customer");

        let response = repo
            .client
            .delete(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await.inspect_err(|err| {
            error!(id, error = %err, "failed to delete customer");
        })
    }
}

#[async_trait]
impl Delete for CustomerRepositoryImpl {
    async fn delete(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck> {
        Self::delete_impl(self, id, request).await
    }
}
