//! Status workflow engine.
//!
//! Derived-field consistency for the two status-bearing entities is not
//! enforced by the store, only here: `completed_at`/`completed_by` exist iff
//! an onboarding assignment is completed, and `approved_by`/`approved_at`
//! exist iff a time-off request has left `pending`. Handlers feed the
//! current row in and persist the returned state verbatim.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::status::{EmployeeStatus, OnboardingStatus, TimeOffKind, TimeOffStatus};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Onboarding assignments
// ---------------------------------------------------------------------------

/// The status-bearing fields of an onboarding assignment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingState {
    pub status: OnboardingStatus,
    pub completed_at: Option<Timestamp>,
    pub completed_by: Option<DbId>,
    pub notes: Option<String>,
}

/// A partial update to an onboarding assignment.
///
/// `completed_by` is only meaningful together with a transition to
/// `completed`; when absent the actor's own employee id is stamped.
#[derive(Debug, Default, Clone)]
pub struct OnboardingPatch {
    pub status: Option<OnboardingStatus>,
    pub completed_by: Option<DbId>,
    pub notes: Option<String>,
}

impl OnboardingPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.completed_by.is_none() && self.notes.is_none()
    }
}

/// Apply a patch to the current assignment state.
///
/// Rules:
/// - a patch with zero recognized fields is a [`CoreError::Validation`]
///   (silent no-op writes must not report success);
/// - `pending` → `completed` stamps `completed_at = now` and
///   `completed_by` (patch value, defaulting to the actor);
/// - `completed` → `pending` clears both stamps;
/// - re-completing an already-completed assignment keeps the original
///   stamps;
/// - a notes-only patch never touches status or stamps.
pub fn apply_onboarding_patch(
    current: &OnboardingState,
    patch: &OnboardingPatch,
    actor: DbId,
    now: Timestamp,
) -> Result<OnboardingState, CoreError> {
    if patch.is_empty() {
        return Err(CoreError::Validation(
            "Update contains no recognized fields".into(),
        ));
    }

    let mut next = current.clone();

    if let Some(notes) = &patch.notes {
        next.notes = Some(notes.clone());
    }

    match patch.status {
        None => {}
        Some(OnboardingStatus::Completed) => {
            if current.status != OnboardingStatus::Completed {
                next.status = OnboardingStatus::Completed;
                next.completed_at = Some(now);
                next.completed_by = Some(patch.completed_by.unwrap_or(actor));
            }
            // Already completed: keep the first stamps.
        }
        Some(OnboardingStatus::Pending) => {
            next.status = OnboardingStatus::Pending;
            next.completed_at = None;
            next.completed_by = None;
        }
    }

    Ok(next)
}

// ---------------------------------------------------------------------------
// Time-off requests
// ---------------------------------------------------------------------------

/// An admin's decision on a pending time-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOffDecision {
    Approve,
    Reject,
}

/// The state to persist after deciding a request, plus any cross-aggregate
/// side effect on the owning employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOffOutcome {
    pub status: TimeOffStatus,
    pub approved_by: DbId,
    pub approved_at: Timestamp,
    /// `Some` when the owning employee's status must flip (approved
    /// vacation). Persisted in the same transaction as the request update.
    pub employee_status: Option<EmployeeStatus>,
}

/// Decide a pending request.
///
/// Both terminal states stamp `approved_by`/`approved_at`; there is no
/// transition back to `pending`, so deciding an already-decided request is a
/// [`CoreError::Conflict`].
pub fn decide_time_off(
    current: TimeOffStatus,
    kind: TimeOffKind,
    decision: TimeOffDecision,
    actor: DbId,
    now: Timestamp,
) -> Result<TimeOffOutcome, CoreError> {
    if current != TimeOffStatus::Pending {
        return Err(CoreError::Conflict(format!(
            "Time-off request is already {current}"
        )));
    }

    let status = match decision {
        TimeOffDecision::Approve => TimeOffStatus::Approved,
        TimeOffDecision::Reject => TimeOffStatus::Rejected,
    };

    let employee_status = match (decision, kind) {
        (TimeOffDecision::Approve, TimeOffKind::Vacation) => Some(EmployeeStatus::Vacation),
        _ => None,
    };

    Ok(TimeOffOutcome {
        status,
        approved_by: actor,
        approved_at: now,
        employee_status,
    })
}

/// Validate the requested date range of a new time-off request.
pub fn validate_time_off_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(
            "end_date must not precede start_date".into(),
        ));
    }
    Ok(())
}
