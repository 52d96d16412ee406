use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::requests::{AdminPasswordRequest, MutationAck};
use epf_desk_store::repository::reopen::Reopen;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_ack, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn reopen_impl(
        repo: &CustomerRepositoryImpl,
        id: i64,
        request: &AdminPasswordRequest,
    ) -> ApiResult<MutationAck> {
        let url = repo.endpoint(&format!("reopen/{id}"))?;
        debug!(%url, "PUT customer reopen");

        let response = repo
            .client
            .put(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await.inspect_err(|err| {
            error!(id, error = %err, "failed to reopen customer");
        })
    }
}

#[async_trait]
impl Reopen for CustomerRepositoryImpl {
    async fn reopen(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck> {
        Self::reopen_impl(self, id, request).await
    }
}
