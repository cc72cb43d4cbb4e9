use serde::{Deserialize, Serialize};

use dunning_core::ValueObject;

use crate::status::Status;

/// Notification template referenced by a `send_email` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    DueSoonReminder,
    FirstReminder,
    SecondReminder,
    FinalWarning,
    ServiceSuspended,
    WrittenOffNotice,
}

/// Side-effect descriptor emitted by the engine and executed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SendEmail { template: EmailTemplate },
    SuspendService,
    ResumeService,
}

impl ValueObject for Action {}

impl Action {
    pub fn send_email(template: EmailTemplate) -> Self {
        Action::SendEmail { template }
    }

    /// Fixed actions emitted whenever `status` is entered.
    pub fn entry_actions(status: Status) -> Vec<Action> {
        match status {
            Status::DueSoon => vec![Action::send_email(EmailTemplate::DueSoonReminder)],
            Status::Reminder1 => vec![Action::send_email(EmailTemplate::FirstReminder)],
            Status::Reminder2 => vec![Action::send_email(EmailTemplate::SecondReminder)],
            Status::FinalNotice => vec![Action::send_email(EmailTemplate::FinalWarning)],
            Status::Suspended => vec![
                Action::SuspendService,
                Action::send_email(EmailTemplate::ServiceSuspended),
            ],
            Status::WrittenOff => vec![Action::send_email(EmailTemplate::WrittenOffNotice)],
            _ => Vec::new(),
        }
    }
}
