use epf_desk_api::service::search::{filter_visible, ViewScope};
use epf_desk_api::{ApiError, ApiResult};
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::repository::load_all::LoadAll;
use tracing::{debug, error};

/// The full fetched collection behind one view.
///
/// Only the source records are stored; the visible rows are recomputed from
/// `(records, scope, query)` every time they are asked for.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<CustomerModel>,
    scope: ViewScope,
    query: String,
    loading: bool,
}

impl RecordStore {
    /// An empty store that is loading until the first fetch resolves.
    pub fn new(scope: ViewScope) -> Self {
        Self {
            records: Vec::new(),
            scope,
            query: String::new(),
            loading: true,
        }
    }

    /// Fetches the whole collection and replaces the stored records.
    ///
    /// On failure the previous records are kept and the error is logged.
    pub async fn reload<R>(&mut self, repo: &R) -> ApiResult<()>
    where
        R: LoadAll<CustomerModel> + ?Sized,
    {
        self.loading = true;
        let result = repo.load_all().await;
        self.loading = false;

        match result {
            Ok(records) => {
                debug!(scope = ?self.scope, count = records.len(), "records refreshed");
                self.records = records;
                Ok(())
            }
            Err(err) => {
                error!(scope = ?self.scope, error = %err, "error fetching records");
                Err(err)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> ViewScope {
        self.scope
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Every fetched record, whatever its status.
    pub fn all(&self) -> &[CustomerModel] {
        &self.records
    }

    pub fn visible(&self) -> Vec<&CustomerModel> {
        filter_visible(&self.records, self.scope, &self.query)
    }

    /// Looks up a record this view lists, ignoring the search query.
    pub fn find(&self, id: i64) -> ApiResult<&CustomerModel> {
        self.records
            .iter()
            .find(|record| record.id == id && self.scope.admits(record.work_status.as_ref()))
            .ok_or_else(|| ApiError::NotFound(format!("customer {id} is not in this view")))
    }
}
