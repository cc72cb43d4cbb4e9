//! Transition engine: `(state, event, now) -> (state', actions)`.
//!
//! Pure and deterministic. Inapplicable combinations of state and event are
//! no-ops (unchanged state, no actions); there is no error path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::calendar::{count_business_days, subtract_business_days};
use crate::event::Event;
use crate::state::DunningState;
use crate::status::Status;

/// Business days before the due date at which `Issued` becomes `DueSoon`.
pub const DUE_SOON_LEAD_DAYS: u32 = 7;

/// Outcome of processing one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub state: DunningState,
    /// Actions for the caller to execute, in order.
    pub actions: Vec<Action>,
}

/// Compute the next state and the actions the caller must execute.
///
/// Terminal statuses absorb every event.
pub fn process(state: &DunningState, event: Event, now: DateTime<Utc>) -> ProcessResult {
    if state.status.is_terminal() {
        return no_change(state, event);
    }

    let outcome = match event {
        Event::PaymentReceived => Some(settle(state, Status::Paid, now)),
        Event::InvoiceCancelled => Some(settle(state, Status::Cancelled, now)),
        Event::DunningPaused => pause(state, now),
        Event::DunningResumed => resume(state, now),
        Event::ManualAdvance => advance(state, now),
        Event::Tick => tick(state, now),
    };

    outcome.unwrap_or_else(|| no_change(state, event))
}

fn no_change(state: &DunningState, event: Event) -> ProcessResult {
    tracing::trace!(status = %state.status, event = %event, "event ignored");
    ProcessResult {
        state: state.clone(),
        actions: Vec::new(),
    }
}

fn transition_to(
    state: &DunningState,
    to: Status,
    now: DateTime<Utc>,
    extra: Vec<Action>,
) -> ProcessResult {
    let mut actions = extra;
    actions.extend(Action::entry_actions(to));

    tracing::debug!(
        from = %state.status,
        to = %to,
        actions = actions.len(),
        "dunning transition"
    );

    ProcessResult {
        state: DunningState {
            status: to,
            state_entered_at: now,
            paused_from: None,
            paused_elapsed: None,
            ..state.clone()
        },
        actions,
    }
}

/// Payment and cancellation: leave any non-terminal status immediately.
fn settle(state: &DunningState, to: Status, now: DateTime<Utc>) -> ProcessResult {
    let extra = if state.status == Status::Suspended {
        vec![Action::ResumeService]
    } else {
        Vec::new()
    };
    transition_to(state, to, now, extra)
}

fn pause(state: &DunningState, now: DateTime<Utc>) -> Option<ProcessResult> {
    if !state.status.is_pausable() {
        return None;
    }

    // Effective elapsed, including time carried over from an earlier pause.
    let elapsed = elapsed_in_status(state, now);

    tracing::debug!(from = %state.status, elapsed, "dunning paused");

    Some(ProcessResult {
        state: DunningState {
            status: Status::Paused,
            state_entered_at: now,
            paused_from: Some(state.status),
            paused_elapsed: Some(elapsed),
            ..state.clone()
        },
        actions: Vec::new(),
    })
}

fn resume(state: &DunningState, now: DateTime<Utc>) -> Option<ProcessResult> {
    if state.status != Status::Paused {
        return None;
    }
    let resumed = state.paused_from?;

    tracing::debug!(to = %resumed, "dunning resumed");

    Some(ProcessResult {
        state: DunningState {
            status: resumed,
            state_entered_at: now,
            ..state.clone()
        },
        actions: Vec::new(),
    })
}

fn advance(state: &DunningState, now: DateTime<Utc>) -> Option<ProcessResult> {
    if state.status == Status::Paused {
        return None;
    }
    let next = state.status.next_in_escalation()?;
    Some(transition_to(state, next, now, Vec::new()))
}

fn tick(state: &DunningState, now: DateTime<Utc>) -> Option<ProcessResult> {
    let holidays = state.config.holidays();

    match state.status {
        Status::Issued => {
            let due_soon_at =
                subtract_business_days(state.due_date, DUE_SOON_LEAD_DAYS, holidays);
            (now >= due_soon_at).then(|| transition_to(state, Status::DueSoon, now, Vec::new()))
        }
        Status::DueSoon => (now >= state.due_date)
            .then(|| transition_to(state, Status::Overdue, now, Vec::new())),
        Status::Paused => None,
        status => {
            let timeout = state.config.timeout_for(status)?;
            let next = status.next_in_escalation()?;
            (elapsed_in_status(state, now) >= timeout)
                .then(|| transition_to(state, next, now, Vec::new()))
        }
    }
}

/// Business days spent in the current status, including time banked before a
/// pause.
fn elapsed_in_status(state: &DunningState, now: DateTime<Utc>) -> u32 {
    count_business_days(state.state_entered_at, now, state.config.holidays())
        .saturating_add(state.paused_elapsed.unwrap_or(0))
}
