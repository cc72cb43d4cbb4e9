//! Scenario replay for the dunning engine.
//!
//! A scenario is a due date, an optional configuration and a list of
//! timestamped events. Replaying it threads the state through
//! [`dunning_engine::process`] and reports each step; actions are reported,
//! never executed.

pub mod scenario;

pub use scenario::{Scenario, Step, StepReport};
