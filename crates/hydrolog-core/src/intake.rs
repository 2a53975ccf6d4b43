//! Daily intake accumulation.
//!
//! The tracker keeps the *unclamped* running total for the current day in
//! units (1 unit = 0.1 L). The goal caps only what is displayed, never what
//! is stored: overflow past the goal is still counted and ends up in the
//! day's log entry.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Fixed conversion scale: 1 liter = 10 units.
pub const UNITS_PER_LITER: f64 = 10.0;

/// Result of a successful intake submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    /// Progress value for presentation, clamped to the active goal.
    pub display_units: f64,
}

/// Accumulates today's intake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeTracker {
    /// Unclamped running total for the current day, in units.
    total_units: f64,
}

impl IntakeTracker {
    /// Create a tracker with nothing logged yet.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Unclamped total for the current day, in units.
    pub fn total_units(&self) -> f64 {
        self.total_units
    }

    /// Progress value for presentation: `min(total, goal)`.
    pub fn display_units(&self, goal_units: u32) -> f64 {
        self.total_units.min(f64::from(goal_units))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record an intake amount in liters.
    ///
    /// Rejects non-finite and non-positive amounts with
    /// [`TrackerError::InvalidInput`], leaving the total unchanged. On
    /// success the amount is converted to units and added to the unclamped
    /// total; the returned receipt carries the goal-clamped display value.
    pub fn record_intake(
        &mut self,
        amount_liters: f64,
        goal_units: u32,
    ) -> Result<IntakeReceipt, TrackerError> {
        if !amount_liters.is_finite() || amount_liters <= 0.0 {
            return Err(TrackerError::InvalidInput);
        }
        self.total_units += amount_liters * UNITS_PER_LITER;
        Ok(IntakeReceipt {
            display_units: self.display_units(goal_units),
        })
    }

    /// Zero the total for a fresh day. Always succeeds.
    pub fn reset_for_new_day(&mut self) {
        self.total_units = 0.0;
    }
}
