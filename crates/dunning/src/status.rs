use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dunning_core::DomainError;

/// Dunning status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Issued,
    DueSoon,
    Overdue,
    Grace,
    #[serde(rename = "REMINDER_1")]
    Reminder1,
    #[serde(rename = "REMINDER_2")]
    Reminder2,
    FinalNotice,
    Suspended,
    WrittenOff,
    Paid,
    Paused,
    Cancelled,
}

/// Fixed escalation order from issuance to write-off.
pub const ESCALATION: [Status; 9] = [
    Status::Issued,
    Status::DueSoon,
    Status::Overdue,
    Status::Grace,
    Status::Reminder1,
    Status::Reminder2,
    Status::FinalNotice,
    Status::Suspended,
    Status::WrittenOff,
];

/// Absorbing statuses: no event changes an instance once it lands here.
pub const TERMINAL: [Status; 3] = [Status::Paid, Status::WrittenOff, Status::Cancelled];

/// Active dunning statuses, the only ones a pause is accepted from.
pub const PAUSABLE: [Status; 6] = [
    Status::Overdue,
    Status::Grace,
    Status::Reminder1,
    Status::Reminder2,
    Status::FinalNotice,
    Status::Suspended,
];

impl Status {
    pub const ALL: [Status; 12] = [
        Status::Issued,
        Status::DueSoon,
        Status::Overdue,
        Status::Grace,
        Status::Reminder1,
        Status::Reminder2,
        Status::FinalNotice,
        Status::Suspended,
        Status::WrittenOff,
        Status::Paid,
        Status::Paused,
        Status::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Issued => "ISSUED",
            Status::DueSoon => "DUE_SOON",
            Status::Overdue => "OVERDUE",
            Status::Grace => "GRACE",
            Status::Reminder1 => "REMINDER_1",
            Status::Reminder2 => "REMINDER_2",
            Status::FinalNotice => "FINAL_NOTICE",
            Status::Suspended => "SUSPENDED",
            Status::WrittenOff => "WRITTEN_OFF",
            Status::Paid => "PAID",
            Status::Paused => "PAUSED",
            Status::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(self) -> bool {
        TERMINAL.contains(&self)
    }

    pub fn is_pausable(self) -> bool {
        PAUSABLE.contains(&self)
    }

    /// Successor in the escalation sequence, if any.
    ///
    /// `None` for `WrittenOff` (end of the sequence) and for statuses outside
    /// it (`Paid`, `Paused`, `Cancelled`).
    pub fn next_in_escalation(self) -> Option<Status> {
        let idx = ESCALATION.iter().position(|s| *s == self)?;
        ESCALATION.get(idx + 1).copied()
    }

    /// Built-in timeout in business days before escalating out of this status.
    pub fn default_timeout(self) -> Option<u32> {
        match self {
            Status::Overdue => Some(3),
            Status::Grace => Some(7),
            Status::Reminder1 => Some(14),
            Status::Reminder2 => Some(14),
            Status::FinalNotice => Some(7),
            Status::Suspended => Some(30),
            _ => None,
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::unknown_tag("status", s))
    }
}
