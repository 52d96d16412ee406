use std::sync::Arc;

use epf_desk_api::domain::transition::{next_status, TransitionContext, WorkflowAction};
use epf_desk_api::service::search::ViewScope;
use epf_desk_api::{ApiError, ApiResult};
use epf_desk_store::models::customer::CustomerModel;
use epf_desk_store::models::requests::{AdminPasswordRequest, MutationAck};
use epf_desk_store::repository::CustomerRepository;
use tracing::{error, info};

use super::notice::{ActionOutcome, Notice};
use super::record_store::RecordStore;
use crate::forms::creation::{CreationForm, MISSING_FIELDS};
use crate::prompt::PasswordPrompt;

pub const EMPTY_MESSAGE: &str = "No Completed Records Found";
pub const DELETE_PROMPT: &str = "Enter Admin Password";
pub const REOPEN_PROMPT: &str = "Enter Password";
const SERVER_ERROR: &str = "Server error occurred";

/// Records that reached "Completed", with the password-gated reopen and
/// delete actions and the entry point for adding new customers.
pub struct CompletedView<R: CustomerRepository> {
    repo: Arc<R>,
    store: RecordStore,
    creation: Option<CreationForm>,
}

impl<R: CustomerRepository> CompletedView<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            store: RecordStore::new(ViewScope::Completed),
            creation: None,
        }
    }

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

    /// Moves a completed record back to the pending queue.
    ///
    /// `Err` is returned only when `id` is not listed here; every outcome of
    /// the request itself is reported as a notice.
    pub async fn reopen<P>(&mut self, id: i64, prompt: &mut P) -> ApiResult<ActionOutcome>
    where
        P: PasswordPrompt + ?Sized,
    {
        let Some(request) = self.capture_password(id, WorkflowAction::Reopen, REOPEN_PROMPT, prompt)? else {
            return Ok(ActionOutcome::Cancelled);
        };

        let result = self.repo.reopen(id, &request).await;
        let notice = match self.settle(id, WorkflowAction::Reopen, result, "Failed to reopen").await {
            Ok(_) => Notice::success("Reopened!", "Customer moved back to pending list"),
            Err(notice) => notice,
        };
        Ok(ActionOutcome::Notified(notice))
    }

    /// Permanently removes a completed record.
    pub async fn delete<P>(&mut self, id: i64, prompt: &mut P) -> ApiResult<ActionOutcome>
    where
        P: PasswordPrompt + ?Sized,
    {
        let Some(request) = self.capture_password(id, WorkflowAction::Delete, DELETE_PROMPT, prompt)? else {
            return Ok(ActionOutcome::Cancelled);
        };

        let result = self.repo.delete(id, &request).await;
        let notice = match self.settle(id, WorkflowAction::Delete, result, "Invalid password").await {
            Ok(ack) => Notice::success("Deleted!", ack.message.unwrap_or_default()),
            Err(notice) => notice,
        };
        Ok(ActionOutcome::Notified(notice))
    }

    pub fn open_creation(&mut self) -> &mut CreationForm {
        self.creation.insert(CreationForm::new())
    }

    pub fn creation(&self) -> Option<&CreationForm> {
        self.creation.as_ref()
    }

    pub fn creation_mut(&mut self) -> Option<&mut CreationForm> {
        self.creation.as_mut()
    }

    pub fn close_creation(&mut self) {
        self.creation = None;
    }

    /// Submits the open creation form.
    ///
    /// Missing fields and refused requests come back as error notices with
    /// the form left open. A transport failure is returned as `Err`.
    pub async fn submit_creation(&mut self) -> ApiResult<Notice> {
        let form = self
            .creation
            .as_mut()
            .ok_or_else(|| ApiError::NotFound("the add customer form is not open".to_string()))?;

        match form.submit(self.repo.as_ref()).await {
            Ok(_) => {
                info!("customer added");
                self.creation = None;
                let _ = self.refresh().await;
                Ok(Notice::success("Customer added", "Customer added successfully"))
            }
            Err(ApiError::ValidationError(_)) => Ok(Notice::error("Missing fields", MISSING_FIELDS)),
            Err(err) if err.is_transport() => {
                error!(error = %err, "error adding customer");
                Err(err)
            }
            Err(err) => {
                error!(error = %err, "customer was not added");
                Ok(Notice::error("Error", "Failed to add customer"))
            }
        }
    }

    /// Checks the record and the transition, then asks for the password.
    ///
    /// `Ok(None)` means the prompt was cancelled or left empty.
    fn capture_password<P>(
        &self,
        id: i64,
        action: WorkflowAction,
        title: &str,
        prompt: &mut P,
    ) -> ApiResult<Option<AdminPasswordRequest>>
    where
        P: PasswordPrompt + ?Sized,
    {
        let record = self.store.find(id)?;
        let Some(password) = prompt.ask(title) else {
            return Ok(None);
        };

        let ctx = TransitionContext {
            paid_amount: None,
            admin_password: Some(password.as_str()),
        };
        match next_status(record.work_status.as_ref(), action, &ctx) {
            Ok(_) => Ok(Some(AdminPasswordRequest::new(password))),
            Err(ApiError::PreconditionFailed(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Re-fetches after a successful request, or turns a failed one into an
    /// error notice. `fallback` is shown when the backend gave no message.
    async fn settle(
        &mut self,
        id: i64,
        action: WorkflowAction,
        result: ApiResult<MutationAck>,
        fallback: &str,
    ) -> Result<MutationAck, Notice> {
        match result {
            Ok(ack) => {
                info!(id, %action, "completed record action succeeded");
                let _ = self.refresh().await;
                Ok(ack)
            }
            Err(ApiError::Rejected { status, message }) => {
                error!(id, %action, status, "completed record action rejected");
                Err(Notice::error("Error", message.unwrap_or_else(|| fallback.to_string())))
            }
            Err(err) => {
                error!(id, %action, error = %err, "completed record action failed");
                Err(Notice::error("Error", SERVER_ERROR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::notice::NoticeKind;
    use epf_desk_api::domain::work_status::WorkStatus;
    use epf_desk_store::repository::in_memory::{InMemoryCustomerRepository, RecordedCall};
    use epf_desk_store::repository::LoadAll;

    /// Answers every prompt with a fixed value and remembers the titles.
    struct ScriptedPrompt {
        answer: Option<&'static str>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn answering(answer: Option<&'static str>) -> Self {
            Self {
                answer,
                asked: Vec::new(),
            }
        }
    }

    impl PasswordPrompt for ScriptedPrompt {
        fn ask(&mut self, title: &str) -> Option<String> {
            self.asked.push(title.to_string());
            self.answer.map(str::to_string)
        }
    }

    fn record(id: i64, name: &str, status: WorkStatus) -> CustomerModel {
        let mut record = CustomerModel::empty(id);
        record.name = Some(name.to_string());
        record.work_status = Some(status);
        record
    }

    fn repo() -> Arc<InMemoryCustomerRepository> {
        Arc::new(InMemoryCustomerRepository::new("admin123").with_records(vec![
            record(1, "RAVI", WorkStatus::Pending),
            record(2, "MEERA", WorkStatus::Completed),
            record(3, "KIRAN", WorkStatus::Other("completed".to_string())),
        ]))
    }

    async fn activated(repo: &Arc<InMemoryCustomerRepository>) -> CompletedView<InMemoryCustomerRepository> {
        let mut view = CompletedView::new(repo.clone());
        view.refresh().await.unwrap();
        view
    }

    #[tokio::test]
    async fn test_lists_exactly_completed() {
        let repo = repo();
        let view = activated(&repo).await;
        let ids: Vec<i64> = view.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_delete_removes_record() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;
        let mut prompt = ScriptedPrompt::answering(Some("admin123"));

        let outcome = view.delete(2, &mut prompt).await?;
        assert_eq!(
            outcome,
            ActionOutcome::Notified(Notice::success("Deleted!", "Customer deleted successfully"))
        );
        assert_eq!(prompt.asked, vec![DELETE_PROMPT.to_string()]);
        assert!(view.visible().is_empty());
        assert!(repo.load_all().await?.iter().all(|r| r.id != 2));
        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_server_message() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;

        let outcome = view.delete(2, &mut ScriptedPrompt::answering(Some("guess"))).await?;
        assert_eq!(
            outcome,
            ActionOutcome::Notified(Notice::error("Error", "Invalid password"))
        );
        assert_eq!(view.visible().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_cancelled_or_empty_prompt_sends_nothing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;

        assert_eq!(
            view.reopen(2, &mut ScriptedPrompt::answering(None)).await?,
            ActionOutcome::Cancelled
        );
        assert_eq!(
            view.delete(2, &mut ScriptedPrompt::answering(Some(""))).await?,
            ActionOutcome::Cancelled
        );
        assert_eq!(repo.calls(), vec![RecordedCall::LoadAll]);
        Ok(())
    }

    #[tokio::test]
    async fn test_reopen_moves_record_to_pending() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;
        let mut prompt = ScriptedPrompt::answering(Some("admin123"));

        let outcome = view.reopen(2, &mut prompt).await?;
        assert_eq!(
            outcome,
            ActionOutcome::Notified(Notice::success("Reopened!", "Customer moved back to pending list"))
        );
        assert_eq!(prompt.asked, vec![REOPEN_PROMPT.to_string()]);
        assert!(view.visible().is_empty());
        assert_eq!(repo.records()[1].work_status, Some(WorkStatus::Pending));
        Ok(())
    }

    #[tokio::test]
    async fn test_reopen_failure_messages() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;
        let mut prompt = ScriptedPrompt::answering(Some("admin123"));

        repo.fail_next(ApiError::Rejected {
            status: 403,
            message: None,
        });
        assert_eq!(
            view.reopen(2, &mut prompt).await?,
            ActionOutcome::Notified(Notice::error("Error", "Failed to reopen"))
        );

        repo.fail_next(ApiError::TransportError("connection reset".to_string()));
        match view.reopen(2, &mut prompt).await? {
            ActionOutcome::Notified(notice) => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.text, "Server error occurred");
            }
            other => panic!("expected a notice, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_actions_need_a_listed_record() {
        let repo = repo();
        let mut view = activated(&repo).await;
        let mut prompt = ScriptedPrompt::answering(Some("admin123"));

        assert!(matches!(view.delete(1, &mut prompt).await, Err(ApiError::NotFound(_))));
        assert!(matches!(view.reopen(3, &mut prompt).await, Err(ApiError::NotFound(_))));
        assert!(prompt.asked.is_empty());
    }

    #[tokio::test]
    async fn test_creation_flow() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = repo();
        let mut view = activated(&repo).await;

        let form = view.open_creation();
        form.set_name("john");
        let notice = view.submit_creation().await?;
        assert_eq!(notice, Notice::error("Missing fields", MISSING_FIELDS));
        assert!(view.creation().is_some());

        view.creation_mut().ok_or("form should stay open")?.set_password("x");
        let notice = view.submit_creation().await?;
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(view.creation().is_none());

        let created = repo.records().into_iter().find(|r| r.id == 4).ok_or("record 4 missing")?;
        assert_eq!(created.name.as_deref(), Some("JOHN"));
        assert_eq!(created.work_status, Some(WorkStatus::Pending));
        // refetched, but a pending record is not listed here
        assert_eq!(view.visible().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_creation_rejected_and_transport_failure() {
        let repo = repo();
        let mut view = activated(&repo).await;
        let form = view.open_creation();
        form.set_name("john");
        form.set_password("x");

        repo.fail_next(ApiError::Rejected {
            status: 500,
            message: None,
        });
        assert_eq!(
            view.submit_creation().await.unwrap(),
            Notice::error("Error", "Failed to add customer")
        );

        repo.fail_next(ApiError::TransportError("connection refused".to_string()));
        assert!(matches!(view.submit_creation().await, Err(ApiError::TransportError(_))));
        assert_eq!(view.creation().map(CreationForm::name), Some("JOHN"));
    }
}
