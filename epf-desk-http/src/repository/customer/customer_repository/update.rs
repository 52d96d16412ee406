use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::models::requests::MutationAck;
use epf_desk_store::repository::update::Update;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_ack, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerRepositoryImpl,
        id: i64,
        item: &CustomerModel,
    ) -> ApiResult<MutationAck> {
        let url = repo.endpoint(&format!("update/{id}"))?;
        debug!(%url, status = item.status_label(), "PUT customer update");

        let response = repo
            .client
            .put(url)
            .json(item)
            .send()
            .await
            .map_err(transport_error)?;

        read_ack(response).await.inspect_err(|err| {
            error!(id, error = %err, "failed to update customer");
        })
    }
}

#[async_trait]
impl Update<CustomerModel> for CustomerRepositoryImpl {
    async fn update(&self, id: i64, item: &CustomerModel) -> ApiResult<MutationAck> {
        Self::update_impl(self, id, item).await
    }
}
