//! HomeHub Domain Core
//!
//! The calculation layer behind the household-management REST API:
//! recurrence dates for tasks and reminders, pocket-money payout
//! schedules, nutrition aggregation and weight-goal projection.
//!
//! The web, auth and persistence layers live elsewhere; they load rules
//! and settings from storage, call into this crate with plain dates and
//! decimals, and persist or serialize whatever comes back. Nothing here
//! performs I/O or keeps state between calls.

pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;

pub use error::{ServiceError, ServiceResult};
