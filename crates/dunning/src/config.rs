use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dunning_core::{DomainError, DomainResult, ValueObject};

use crate::status::Status;

/// Per-instance dunning configuration, fixed at creation.
///
/// Every field defaults to empty, so a partial document only overrides what it
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunningConfig {
    /// Timeout overrides in business days, keyed by the status being timed.
    #[serde(default)]
    pub timeouts: BTreeMap<Status, u32>,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl ValueObject for DunningConfig {}

impl DunningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, status: Status, business_days: u32) -> Self {
        self.timeouts.insert(status, business_days);
        self
    }

    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("invalid dunning config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject overrides for statuses whose exit is not timeout-driven.
    pub fn validate(&self) -> DomainResult<()> {
        match self
            .timeouts
            .keys()
            .find(|status| status.default_timeout().is_none())
        {
            Some(status) => Err(DomainError::validation(format!(
                "status {status} has no timeout to override"
            ))),
            None => Ok(()),
        }
    }

    /// Effective timeout for `status`: the override if present, else the default.
    pub fn timeout_for(&self, status: Status) -> Option<u32> {
        self.timeouts
            .get(&status)
            .copied()
            .or_else(|| status.default_timeout())
    }

    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_default() {
        let config = DunningConfig::new().with_timeout(Status::Grace, 2);
        assert_eq!(config.timeout_for(Status::Grace), Some(2));
        assert_eq!(config.timeout_for(Status::Overdue), Some(3));
        assert_eq!(config.timeout_for(Status::Issued), None);
    }

    #[test]
    fn partial_json_merges_over_empty_defaults() {
        let config = DunningConfig::from_json(r#"{"holidays":["2025-03-03"]}"#).unwrap();
        assert!(config.timeouts.is_empty());
        assert_eq!(
            config.holidays(),
            &[NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()]
        );

        let config = DunningConfig::from_json(r#"{"timeouts":{"REMINDER_1":10}}"#).unwrap();
        assert_eq!(config.timeout_for(Status::Reminder1), Some(10));
        assert!(config.holidays().is_empty());
    }

    #[test]
    fn rejects_override_for_untimed_status() {
        let err = DunningConfig::from_json(r#"{"timeouts":{"DUE_SOON":4}}"#).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("DUE_SOON") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(matches!(
            DunningConfig::from_json(r#"{"timeouts":{"OVERDUE":-1}}"#),
            Err(DomainError::Validation(_))
        ));
    }
}
