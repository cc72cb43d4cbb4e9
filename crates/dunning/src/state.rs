use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dunning_core::ValueObject;

use crate::config::DunningConfig;
use crate::status::Status;

/// Immutable dunning state of one invoice.
///
/// Every transition produces a new value. `paused_from`/`paused_elapsed` are set
/// on pause and survive a resume, since the resumed status still owes that
/// accumulated time; any ordinary transition clears them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunningState {
    pub(crate) status: Status,
    pub(crate) due_date: DateTime<Utc>,
    pub(crate) state_entered_at: DateTime<Utc>,
    pub(crate) config: DunningConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) paused_from: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) paused_elapsed: Option<u32>,
}

impl ValueObject for DunningState {}

impl DunningState {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn state_entered_at(&self) -> DateTime<Utc> {
        self.state_entered_at
    }

    pub fn config(&self) -> &DunningConfig {
        &self.config
    }

    /// Status that was active when the instance was paused.
    pub fn paused_from(&self) -> Option<Status> {
        self.paused_from
    }

    /// Business days already accumulated toward `paused_from`'s timeout.
    pub fn paused_elapsed(&self) -> Option<u32> {
        self.paused_elapsed
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Build the initial state for a freshly issued invoice.
///
/// `state_entered_at` starts at the due date as a placeholder: the `Issued`
/// exit is anchored to the due date, and the first transition overwrites it.
pub fn create_instance(due_date: DateTime<Utc>, config: Option<DunningConfig>) -> DunningState {
    DunningState {
        status: Status::Issued,
        due_date,
        state_entered_at: due_date,
        config: config.unwrap_or_default(),
        paused_from: None,
        paused_elapsed: None,
    }
}
