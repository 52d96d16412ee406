//! Workflow transitions for customer records.
//!
//! The legal moves are listed in [`TRANSITIONS`]; each rule names the
//! statuses it may start from, where it lands, and the guard that has to
//! hold on the client side before the request is sent. The backend remains
//! authoritative for the resulting status.

use rust_decimal::Decimal;

use super::work_status::WorkStatus;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowAction {
    /// Save work in progress from the confirmation form.
    Update,
    /// Mark the record completed once payment is recorded.
    Confirm,
    /// Move a completed record back to the pending queue.
    Reopen,
    /// Permanently remove a completed record.
    Delete,
}

impl std::fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowAction::Update => write!(f, "Update"),
            WorkflowAction::Confirm => write!(f, "Confirm"),
            WorkflowAction::Reopen => write!(f, "Reopen"),
            WorkflowAction::Delete => write!(f, "Delete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    /// Paid amount present and strictly greater than zero.
    PositivePaidAmount,
    /// A non-empty admin password was captured. It is forwarded, never checked.
    AdminPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status(WorkStatus),
    Removed,
}

#[derive(Debug)]
pub struct TransitionRule {
    pub action: WorkflowAction,
    pub from: &'static [WorkStatus],
    pub to: Outcome,
    pub guard: Guard,
}

const EDITABLE: &[WorkStatus] = &[
    WorkStatus::Pending,
    WorkStatus::Updated,
    WorkStatus::InProgress,
];

const DONE: &[WorkStatus] = &[WorkStatus::Completed];

pub const TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        action: WorkflowAction::Update,
        from: EDITABLE,
        to: Outcome::Status(WorkStatus::InProgress),
        guard: Guard::None,
    },
    TransitionRule {
        action: WorkflowAction::Confirm,
        from: EDITABLE,
        to: Outcome::Status(WorkStatus::Completed),
        guard: Guard::PositivePaidAmount,
    },
    TransitionRule {
        action: WorkflowAction::Reopen,
        from: DONE,
        to: Outcome::Status(WorkStatus::Pending),
        guard: Guard::AdminPassword,
    },
    TransitionRule {
        action: WorkflowAction::Delete,
        from: DONE,
        to: Outcome::Removed,
        guard: Guard::AdminPassword,
    },
];

/// Inputs the guards are evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionContext<'a> {
    pub paid_amount: Option<Decimal>,
    pub admin_password: Option<&'a str>,
}

impl Guard {
    pub fn holds(self, ctx: &TransitionContext<'_>) -> bool {
        match self {
            Guard::None => true,
            Guard::PositivePaidAmount => ctx.paid_amount.is_some_and(|paid| paid > Decimal::ZERO),
            Guard::AdminPassword => ctx.admin_password.is_some_and(|pw| !pw.is_empty()),
        }
    }
}

pub fn rule_for(action: WorkflowAction) -> &'static TransitionRule {
    // every action has exactly one rule
    match action {
        WorkflowAction::Update => &TRANSITIONS[0],
        WorkflowAction::Confirm => &TRANSITIONS[1],
        WorkflowAction::Reopen => &TRANSITIONS[2],
        WorkflowAction::Delete => &TRANSITIONS[3],
    }
}

/// Resolves where `action` takes a record currently in `from`.
///
/// A record with no status is treated as `Pending`, which is how it is
/// displayed.
pub fn next_status(
    from: Option<&WorkStatus>,
    action: WorkflowAction,
    ctx: &TransitionContext<'_>,
) -> ApiResult<Outcome> {
    let current = from.map(WorkStatus::canonical).unwrap_or(WorkStatus::Pending);
    let rule = rule_for(action);

    if !rule.from.contains(&current) {
        return Err(ApiError::InvalidTransition {
            action: action.to_string(),
            from: current.to_string(),
        });
    }

    if !rule.guard.holds(ctx) {
        let reason = match rule.guard {
            Guard::PositivePaidAmount => "paid amount must be greater than zero",
            Guard::AdminPassword => "an admin password is required",
            Guard::None => "guard failed",
        };
        return Err(ApiError::PreconditionFailed(reason.to_string()));
    }

    Ok(rule.to.clone())
}
