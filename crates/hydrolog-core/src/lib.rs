//! # Hydrolog Core Library
//!
//! This library provides the core business logic for the Hydrolog daily
//! water-intake tracker: intake accumulation, goal validation, day rollover,
//! and history rendering. The UI layer (screens, widgets, input parsing,
//! message banners) is an external collaborator that issues commands to
//! [`TrackerService`] and displays the returned results.
//!
//! ## Architecture
//!
//! - **Tracker Service**: an owned, single-writer state object; every
//!   command completes synchronously and either succeeds or leaves state
//!   untouched
//! - **Day Log**: append-only history of finalized days, rendered on demand
//! - **Config**: TOML-based preferences (the default goal); tracker state
//!   itself is in-memory only for the lifetime of the process
//!
//! ## Key Components
//!
//! - [`TrackerService`]: command surface for the UI layer
//! - [`IntakeTracker`]: unclamped intake accumulation for the current day
//! - [`GoalManager`]: goal validation and labels
//! - [`DayLog`]: append-only daily history with render and audit passes

pub mod calendar;
pub mod config;
pub mod daylog;
pub mod error;
pub mod goal;
pub mod intake;
pub mod tracker;

pub use config::TrackerConfig;
pub use daylog::{AuditRecord, DailyEntry, DayLog};
pub use error::{ConfigError, CoreError, TrackerError};
pub use goal::{GoalManager, DEFAULT_GOAL_UNITS};
pub use intake::{IntakeReceipt, IntakeTracker, UNITS_PER_LITER};
pub use tracker::{TrackerService, TrackerSnapshot};
