use async_trait::async_trait;
use epf_desk_api::ApiResult;
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::repository::load_all::LoadAll;
use serde_json::Value;
use tracing::{debug, error};

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::{read_json, transport_error};

impl CustomerRepositoryImpl {
    pub(super) async fn load_all_impl(repo: &CustomerRepositoryImpl) -> ApiResult<Vec<CustomerModel>> {
        let url = repo.endpoint("all")?;
        debug!(%url, "GET customer records");

        let response = repo.client.get(url).send().await.map_err(transport_error)?;
        let values: Vec<Value> = read_json(response).await.inspect_err(|err| {
            error!(error = %err, "failed to load customer records");
        })?;

        let fetched = values.len();
        let records: Vec<CustomerModel> = values.into_iter().filter_map(decode_record).collect();

        debug!(count = records.len(), skipped = fetched - records.len(), "loaded customer records");
        Ok(records)
    }
}

/// One bad record is logged and left out rather than failing the listing.
fn decode_record(value: Value) -> Option<CustomerModel> {
    let id = value.get("id").map(ToString::to_string).unwrap_or_default();
    serde_json::from_value(value)
        .inspect_err(|err| error!(%id, error = %err, "skipping undecodable customer record"))
        .ok()
}

#[async_trait]
impl LoadAll<CustomerModel> for CustomerRepositoryImpl {
    async fn load_all(&self) -> ApiResult<Vec<CustomerModel>> {
        Self::load_all_impl(self).await
    }
}
