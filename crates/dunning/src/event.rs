use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dunning_core::DomainError;

/// Event fed into the transition engine. Tags carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Periodic re-evaluation of time-driven transitions.
    Tick,
    PaymentReceived,
    InvoiceCancelled,
    DunningPaused,
    DunningResumed,
    /// Force the next escalation step regardless of elapsed time.
    ManualAdvance,
}

impl Event {
    pub const ALL: [Event; 6] = [
        Event::Tick,
        Event::PaymentReceived,
        Event::InvoiceCancelled,
        Event::DunningPaused,
        Event::DunningResumed,
        Event::ManualAdvance,
    ];

    /// Stable tag (e.g. "payment_received").
    pub fn as_str(self) -> &'static str {
        match self {
            Event::Tick => "tick",
            Event::PaymentReceived => "payment_received",
            Event::InvoiceCancelled => "invoice_cancelled",
            Event::DunningPaused => "dunning_paused",
            Event::DunningResumed => "dunning_resumed",
            Event::ManualAdvance => "manual_advance",
        }
    }
}

impl core::fmt::Display for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Event {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| DomainError::unknown_tag("event", s))
    }
}
