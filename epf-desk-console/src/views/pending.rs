use std::sync::Arc;

use epf_desk_api::service::search::ViewScope;
use epf_desk_api::{ApiError, ApiResult};
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::repository::CustomerRepository;
use tracing::{error, info};

use super::notice::Notice;
use super::record_store::RecordStore;
use crate::forms::confirmation::{ConfirmationForm, FormAction};

pub const NO_NOTES: &str = "No details available";
pub const EMPTY_MESSAGE: &str = "No Pending Customers Found";

/// The intake queue: records that are "pending" or "updated".
pub struct PendingView<R: CustomerRepository> {
    repo: Arc<R>,
    store: RecordStore,
    form: Option<ConfirmationForm>,
}

impl<R: CustomerRepository> PendingView<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            store: RecordStore::new(ViewScope::PendingQueue),
            form: None,
        }
    }

    /// Fetches the full collection. Called on activation and after every
    /// successful submit.
    pub async fn refresh(&mut self) -> ApiResult<()> {
        self.store.reload(self.repo.as_ref()).await
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.store.set_query(query);
    }

    pub fn visible(&self) -> Vec<&CustomerModel> {
        self.store.visible()
    }

    /// Opens the confirmation form on a copy of the record.
    pub fn open_confirmation(&mut self, id: i64) -> ApiResult<&mut ConfirmationForm> {
        let record = self.store.find(id)?.clone();
        Ok(self.form.insert(ConfirmationForm::new(record)))
    }

    pub fn confirmation(&self) -> Option<&ConfirmationForm> {
        self.form.as_ref()
    }

    pub fn confirmation_mut(&mut self) -> Option<&mut ConfirmationForm> {
        self.form.as_mut()
    }

    pub fn close_confirmation(&mut self) {
        self.form = None;
    }

    /// Submits the open form.
    ///
    /// On success the form closes and the view re-fetches. On failure the
    /// error is logged and the form stays open with its edits.
    pub async fn submit_confirmation(&mut self, action: FormAction) -> ApiResult<Notice> {
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| ApiError::NotFound("no record is open for confirmation".to_string()))?;
        let id = form.id();

        if let Err(err) = form.submit(self.repo.as_ref(), action).await {
            error!(id, ?action, error = %err, "confirmation form submit failed");
            return Err(err);
        }

        info!(id, ?action, "confirmation form submitted");
        self.form = None;
        // a failed re-fetch is already logged and leaves the old rows
        let _ = self.refresh().await;

        Ok(match action {
            FormAction::Update => Notice::success("Updated", "Updated (In Progress)"),
            FormAction::Confirm => Notice::success("Confirmed", "Confirmed Successfully"),
        })
    }

    /// Work notes of a listed record, or a placeholder when there are none.
    pub fn view_notes(&self, id: i64) -> ApiResult<String> {
        let record = self.store.find(id)?;
        Ok(record
            .updated_status
            .clone()
            .filter(|notes| !notes.is_empty())
            .unwrap_or_else(|| NO_NOTES.to_string()))
    }
}
