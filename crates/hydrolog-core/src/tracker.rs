//! Tracker service: the command surface the UI layer talks to.
//!
//! Owns the whole tracking state (current date, today's intake, active goal,
//! history) behind a single `&mut self` object. Execution is synchronous and
//! single-writer: one command completes fully before the next starts. Embed
//! behind your own lock if calls can race.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::TrackerConfig;
use crate::daylog::{AuditRecord, DailyEntry, DayLog};
use crate::error::TrackerError;
use crate::goal::GoalManager;
use crate::intake::{IntakeReceipt, IntakeTracker};

/// Serializable view of the live tracking state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub date: NaiveDate,
    pub date_text: String,
    /// Unclamped total for the current day, in units.
    pub total_units_today: f64,
    /// Goal-clamped value for presentation.
    pub display_units: f64,
    pub goal_units: u32,
    pub goal_label: String,
    pub days_logged: usize,
}

/// Orchestrates intake tracking, goal rules, and day rollover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerService {
    date: NaiveDate,
    intake: IntakeTracker,
    goal: GoalManager,
    log: DayLog,
}

impl TrackerService {
    /// Create a tracker starting on `start_date` with an explicit goal.
    pub fn new(start_date: NaiveDate, goal_units: u32) -> Self {
        Self {
            date: start_date,
            intake: IntakeTracker::new(),
            goal: GoalManager::new(goal_units),
            log: DayLog::new(),
        }
    }

    /// Create a tracker starting today, with the configured default goal.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(chrono::Local::now().date_naive(), config.default_goal_units)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_date(&self) -> NaiveDate {
        self.date
    }

    /// Unclamped total for the current day, in units.
    pub fn total_units_today(&self) -> f64 {
        self.intake.total_units()
    }

    pub fn goal_units(&self) -> u32 {
        self.goal.goal_units()
    }

    /// Committed-goal label, e.g. `"Goal: 2.0 Liters"`.
    pub fn goal_label(&self) -> String {
        self.goal.label()
    }

    /// Format a provisional slider value without committing it.
    pub fn preview_goal(&self, slider_units: u32) -> String {
        GoalManager::preview_label(slider_units)
    }

    /// Newline-joined text of the finalized-day history.
    pub fn log_text(&self) -> String {
        self.log.render()
    }

    /// Finalized entries, oldest first.
    pub fn entries(&self) -> &[DailyEntry] {
        self.log.entries()
    }

    /// Diagnostic classification of every history entry.
    pub fn audit_report(&self) -> Vec<AuditRecord> {
        self.log.audit()
    }

    /// Full state snapshot for status display.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            date: self.date,
            date_text: calendar::date_text(self.date),
            total_units_today: self.intake.total_units(),
            display_units: self.intake.display_units(self.goal.goal_units()),
            goal_units: self.goal.goal_units(),
            goal_label: self.goal.label(),
            days_logged: self.log.len(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record an intake amount in liters for the current day.
    pub fn track_intake(&mut self, liters: f64) -> Result<IntakeReceipt, TrackerError> {
        self.intake.record_intake(liters, self.goal.goal_units())
    }

    /// Validate and commit a goal change; returns the new committed label.
    pub fn propose_goal(&mut self, slider_units: u32) -> Result<String, TrackerError> {
        self.goal
            .propose_goal(slider_units, self.intake.total_units())
    }

    /// Close the current day and open the next.
    ///
    /// Snapshot today into the history, advance the date, reset the intake
    /// total. Every sub-step is infallible, so the rollover is atomic from
    /// the caller's perspective.
    pub fn advance_day(&mut self) {
        self.log
            .append_entry(self.date, self.intake.total_units(), self.goal.goal_units());
        self.date = calendar::advance(self.date);
        self.intake.reset_for_new_day();
    }
}
