//! In-memory stand-in for the EPF backend.
//!
//! Mirrors the backend's observable behaviour closely enough to drive the
//! view-models in tests: ids are assigned sequentially and never reused,
//! confirm stamps `Completed`, reopen and delete check a single admin
//! password. Every call is recorded so tests can assert on what was sent.

use async_trait::async_trait;
use chrono::Utc;
use epf_desk_api::domain::work_status::WorkStatus;
use epf_desk_api::{ApiError, ApiResult};
use parking_lot::Mutex;

use crate::models::customer::CustomerModel;
use crate::models::requests::{AdminPasswordRequest, CreateCustomerRequest, MutationAck};

use super::{Confirm, Create, Delete, LoadAll, Reopen, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    LoadAll,
    Create(CreateCustomerRequest),
    Update { id: i64, body: CustomerModel },
    Confirm { id: i64, body: CustomerModel },
    Reopen { id: i64, password: String },
    Delete { id: i64, password: String },
}

#[derive(Debug)]
struct State {
    records: Vec<CustomerModel>,
    next_id: i64,
    calls: Vec<RecordedCall>,
    fail_next: Option<ApiError>,
}

#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    admin_password: String,
    state: Mutex<State>,
}

impl InMemoryCustomerRepository {
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            state: Mutex::new(State {
                records: Vec::new(),
                next_id: 1,
                calls: Vec::new(),
                fail_next: None,
            }),
        }
    }

    /// Seeds records as if they already existed on the backend.
    pub fn with_records(self, records: Vec<CustomerModel>) -> Self {
        {
            let mut state = self.state.lock();
            let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
            state.next_id = state.next_id.max(max_id + 1);
            state.records = records;
        }
        self
    }

    /// Makes the next call fail with `error` instead of touching any record.
    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().fail_next = Some(error);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    pub fn records(&self) -> Vec<CustomerModel> {
        self.state.lock().records.clone()
    }

    fn begin(&self, call: RecordedCall) -> ApiResult<parking_lot::MutexGuard<'_, State>> {
        let mut state = self.state.lock();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }

    fn check_password(&self, request: &AdminPasswordRequest) -> ApiResult<()> {
        if request.password == self.admin_password {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: 401,
                message: Some("Invalid password".to_string()),
            })
        }
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::Rejected {
        status: 404,
        message: Some(format!("Customer {id} not found")),
    }
}

#[async_trait]
impl LoadAll<CustomerModel> for InMemoryCustomerRepository {
    async fn load_all(&self) -> ApiResult<Vec<CustomerModel>> {
        let state = self.begin(RecordedCall::LoadAll)?;
        Ok(state.records.clone())
    }
}

#[async_trait]
impl Create<CreateCustomerRequest> for InMemoryCustomerRepository {
    async fn create(&self, request: CreateCustomerRequest) -> ApiResult<MutationAck> {
        let mut state = self.begin(RecordedCall::Create(request.clone()))?;
        let id = state.next_id;
        state.next_id += 1;

        let mut record = CustomerModel::empty(id);
        record.name = Some(request.name);
        record.password = Some(request.password);
        record.work_status = Some(WorkStatus::Pending);
        record.create_date = Some(Utc::now().naive_utc());
        state.records.push(record);

        Ok(MutationAck::with_message("Customer created"))
    }
}

#[async_trait]
impl Update<CustomerModel> for InMemoryCustomerRepository {
    async fn update(&self, id: i64, item: &CustomerModel) -> ApiResult<MutationAck> {
        let mut state = self.begin(RecordedCall::Update {
            id,
            body: item.clone(),
        })?;
        let stored = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;

        let password = stored.password.take();
        *stored = item.clone();
        stored.id = id;
        stored.password = password;
        stored.update_date = Some(Utc::now().naive_utc());

        Ok(MutationAck::with_message("Customer updated"))
    }
}

#[async_trait]
impl Confirm<CustomerModel> for InMemoryCustomerRepository {
    async fn confirm(&self, id: i64, item: &CustomerModel) -> ApiResult<MutationAck> {
        let mut state = self.begin(RecordedCall::Confirm {
            id,
            body: item.clone(),
        })?;
        if !item.has_positive_paid_amount() {
            return Err(ApiError::Rejected {
                status: 400,
                message: Some("Paid amount is required".to_string()),
            });
        }
        let stored = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;

        let password = stored.password.take();
        *stored = item.clone();
        stored.id = id;
        stored.password = password;
        stored.work_status = Some(WorkStatus::Completed);
        stored.confirm_date = Some(Utc::now().naive_utc());

        Ok(MutationAck::with_message("Customer confirmed"))
    }
}

#[async_trait]
impl Reopen for InMemoryCustomerRepository {
    async fn reopen(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck> {
        let mut state = self.begin(RecordedCall::Reopen {
            id,
            password: request.password.clone(),
        })?;
        self.check_password(request)?;
        let stored = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        stored.work_status = Some(WorkStatus::Pending);

        Ok(MutationAck::with_message("Customer reopened"))
    }
}

#[async_trait]
impl Delete for InMemoryCustomerRepository {
    async fn delete(&self, id: i64, request: &AdminPasswordRequest) -> ApiResult<MutationAck> {
        let mut state = self.begin(RecordedCall::Delete {
            id,
            password: request.password.clone(),
        })?;
        self.check_password(request)?;
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        if state.records.len() == before {
            return Err(not_found(id));
        }

        Ok(MutationAck::with_message("Customer deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CustomerRepository;
    use rust_decimal::Decimal;

    fn completed(id: i64) -> CustomerModel {
        let mut record = CustomerModel::empty(id);
        record.work_status = Some(WorkStatus::Completed);
        record
    }

    async fn exercise<R: CustomerRepository>(repo: &R) -> ApiResult<Vec<CustomerModel>> {
        repo.load_all().await
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryCustomerRepository::new("admin123").with_records(vec![completed(5)]);
        repo.create(CreateCustomerRequest {
            name: "JOHN".to_string(),
            password: "x".to_string(),
        })
        .await?;

        let records = exercise(&repo).await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, 6);
        assert_eq!(records[1].work_status, Some(WorkStatus::Pending));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_checks_password() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryCustomerRepository::new("admin123").with_records(vec![completed(2)]);

        let wrong = repo.delete(2, &AdminPasswordRequest::new("nope")).await;
        assert!(matches!(wrong, Err(ApiError::Rejected { status: 401, .. })));
        assert_eq!(repo.records().len(), 1);

        repo.delete(2, &AdminPasswordRequest::new("admin123")).await?;
        assert!(repo.records().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_confirm_stamps_completed() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut pending = CustomerModel::empty(1);
        pending.work_status = Some(WorkStatus::Pending);
        pending.password = Some("secret".to_string());
        let repo = InMemoryCustomerRepository::new("admin123").with_records(vec![pending.clone()]);

        let mut body = pending.clone();
        body.password = None;
        body.paid_amount = Some(Decimal::from(10));
        repo.confirm(1, &body).await?;

        let stored = &repo.records()[0];
        assert_eq!(stored.work_status, Some(WorkStatus::Completed));
        assert_eq!(stored.password.as_deref(), Some("secret"));
        assert!(stored.confirm_date.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_fail_next_is_consumed_once() {
        let repo = InMemoryCustomerRepository::new("admin123");
        repo.fail_next(ApiError::TransportError("connection refused".to_string()));

        assert!(repo.load_all().await.is_err());
        assert!(repo.load_all().await.is_ok());
        assert_eq!(repo.calls(), vec![RecordedCall::LoadAll, RecordedCall::LoadAll]);
    }
}
