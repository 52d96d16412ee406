use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::models::requests::MutationAck;
use epf_desk_store::repository::confirm::Confirm;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_ack, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn confirm_impl(
        repo: &CustomerRepositoryImpl,
        id: i64,
        item: &CustomerModel,
    ) -> ApiResult<MutationAck> {
        let url = repo.endpoint(&format!("confirm/{id}"))?;
        debug!(%url, "PUT customer confirmation");

        let response = repo
            .client
            .put(url)
            .json(item)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await.inspect_err(|err| {
            error!(id, error = %err, "failed to confirm customer");
        })
    }
}

#[async_trait]
impl Confirm<CustomerModel> for CustomerRepositoryImpl {
    async fn confirm(&self, id: i64, item: &CustomerModel) -> ApiResult<MutationAck> {
        Self::confirm_impl(self, id, item).await
    }
}
