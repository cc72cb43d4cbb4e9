use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dunning_engine::{Action, DunningConfig, DunningState, Event, Status, create_instance, process};

/// One timestamped event in a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub at: DateTime<Utc>,
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub config: Option<DunningConfig>,
    pub steps: Vec<Step>,
}

/// Outcome of a single replayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub at: DateTime<Utc>,
    pub event: Event,
    pub from: Status,
    pub status: Status,
    pub actions: Vec<Action>,
}

impl Scenario {
    /// Parse a scenario, validating its configuration and step ordering.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let scenario: Scenario = serde_json::from_str(raw).context("malformed scenario")?;
        if let Some(config) = &scenario.config {
            config.validate().context("invalid scenario config")?;
        }
        if let Some(pair) = scenario.steps.windows(2).find(|w| w[1].at < w[0].at) {
            bail!(
                "steps out of order: {} ({}) precedes {} ({})",
                pair[0].at,
                pair[0].event,
                pair[1].at,
                pair[1].event
            );
        }
        Ok(scenario)
    }

    /// Replay every step, returning the per-step reports and the final state.
    pub fn run(&self) -> (Vec<StepReport>, DunningState) {
        tracing::info!(due_date = %self.due_date, steps = self.steps.len(), "replaying scenario");

        let mut state = create_instance(self.due_date, self.config.clone());
        let mut reports = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let from = state.status();
            let result = process(&state, step.event, step.at);
            reports.push(StepReport {
                at: step.at,
                event: step.event,
                from,
                status: result.state.status(),
                actions: result.actions,
            });
            state = result.state;
        }

        tracing::info!(status = %state.status(), "scenario finished");
        (reports, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dunning_engine::EmailTemplate;

    const SCENARIO: &str = r#"{
        "due_date": "2025-03-12T00:00:00Z",
        "config": { "timeouts": { "OVERDUE": 1 } },
        "steps": [
            { "at": "2025-03-03T00:00:00Z", "event": { "type": "tick" } },
            { "at": "2025-03-12T00:00:00Z", "event": { "type": "tick" } },
            { "at": "2025-03-13T00:00:00Z", "event": { "type": "tick" } },
            { "at": "2025-03-14T00:00:00Z", "event": { "type": "payment_received" } },
            { "at": "2025-03-17T00:00:00Z", "event": { "type": "tick" } }
        ]
    }"#;

    #[test]
    fn replays_steps_in_order() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        let (reports, state) = scenario.run();

        let statuses: Vec<Status> = reports.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                Status::DueSoon,
                Status::Overdue,
                Status::Grace,
                Status::Paid,
                Status::Paid
            ]
        );
        assert_eq!(
            reports[0].actions,
            vec![Action::send_email(EmailTemplate::DueSoonReminder)]
        );
        assert_eq!(reports[4].from, Status::Paid);
        assert!(reports[4].actions.is_empty());
        assert_eq!(state.status(), Status::Paid);
    }

    #[test]
    fn rejects_out_of_order_steps() {
        let raw = r#"{
            "due_date": "2025-03-12T00:00:00Z",
            "steps": [
                { "at": "2025-03-05T00:00:00Z", "event": { "type": "tick" } },
                { "at": "2025-03-04T00:00:00Z", "event": { "type": "tick" } }
            ]
        }"#;
        let err = Scenario::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("out of order"), "{err}");
    }

    #[test]
    fn rejects_invalid_config() {
        let raw = r#"{
            "due_date": "2025-03-12T00:00:00Z",
            "config": { "timeouts": { "PAID": 2 } },
            "steps": []
        }"#;
        let err = Scenario::from_json(raw).unwrap_err();
        assert!(format!("{err:#}").contains("PAID"), "{err:#}");
    }
}
