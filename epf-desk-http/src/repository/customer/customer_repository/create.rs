use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::requests::{CreateCustomerRequest, MutationAck};
use epf_desk_store::repository::create::Create;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_ack, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerRepositoryImpl,
        request: &CreateCustomerRequest,
    ) -> ApiResult<MutationAck> {
        let url = repo.endpoint("create")?;
        debug!(%url, name = %request.name, "POST new customer");

        let response = repo
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await.inspect_err(|err| {
            error!(error = %err, "failed to create customer");
        })
    }
}

#[async_trait]
impl Create<CreateCustomerRequest> for CustomerRepositoryImpl {
    async fn create(&self, request: CreateCustomerRequest) -> ApiResult<MutationAck> {
        Self::create_impl(self, &request).await
    }
}
