//! Dunning domain module.
//!
//! This crate tracks the collection lifecycle of a single unpaid invoice,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Callers feed events in through [`process`] and execute the returned actions
//! themselves.

pub mod action;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod event;
pub mod state;
pub mod status;

pub use action::{Action, EmailTemplate};
pub use calendar::{count_business_days, subtract_business_days};
pub use config::DunningConfig;
pub use engine::{ProcessResult, process};
pub use event::Event;
pub use state::{DunningState, create_instance};
pub use status::Status;
