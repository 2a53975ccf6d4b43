//! Goal management and validation.
//!
//! A goal change is rejected whenever intake is already logged today and the
//! proposed goal sits below that logged total. Without the rule, the display
//! invariant (progress never exceeds the goal) would go stale the moment the
//! goal is lowered retroactively.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::intake::UNITS_PER_LITER;

/// Default daily goal: 20 units = 2.0 L.
pub const DEFAULT_GOAL_UNITS: u32 = 20;

/// Holds the active goal and validates proposed changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalManager {
    goal_units: u32,
}

impl Default for GoalManager {
    fn default() -> Self {
        Self {
            goal_units: DEFAULT_GOAL_UNITS,
        }
    }
}

impl GoalManager {
    /// Create a manager with an explicit starting goal, in units.
    pub fn new(goal_units: u32) -> Self {
        Self { goal_units }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Active goal in units.
    pub fn goal_units(&self) -> u32 {
        self.goal_units
    }

    /// Active goal in liters.
    pub fn goal_liters(&self) -> f64 {
        f64::from(self.goal_units) / UNITS_PER_LITER
    }

    /// Committed-goal label, e.g. `"Goal: 2.0 Liters"`.
    pub fn label(&self) -> String {
        format!("Goal: {:.1} Liters", self.goal_liters())
    }

    /// Format a provisional slider value for live display, without
    /// committing anything.
    pub fn preview_label(slider_units: u32) -> String {
        format!(
            "Selected Goal: {:.1} L",
            f64::from(slider_units) / UNITS_PER_LITER
        )
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Validate and commit a goal change.
    ///
    /// Rejects with [`TrackerError::GoalTooLow`] iff intake is already
    /// logged today (`current_total_units > 0`) and the proposed goal sits
    /// below that total; the active goal is left untouched. Otherwise the
    /// goal is committed and the new label returned.
    pub fn propose_goal(
        &mut self,
        new_goal_units: u32,
        current_total_units: f64,
    ) -> Result<String, TrackerError> {
        if current_total_units > 0.0 && f64::from(new_goal_units) < current_total_units {
            return Err(TrackerError::GoalTooLow {
                proposed_units: new_goal_units,
                logged_units: current_total_units,
            });
        }
        self.goal_units = new_goal_units;
        Ok(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_goal_is_two_liters() {
        let goal = GoalManager::default();
        assert_eq!(goal.goal_units(), 20);
        assert_eq!(goal.label(), "Goal: 2.0 Liters");
    }

    #[test]
    fn commit_updates_goal_and_label() {
        let mut goal = GoalManager::default();
        let label = goal.propose_goal(30, 0.0).unwrap();
        assert_eq!(goal.goal_units(), 30);
        assert_eq!(label, "Goal: 3.0 Liters");
    }

    #[test]
    fn rejects_goal_below_logged_total() {
        let mut goal = GoalManager::default();
        let err = goal.propose_goal(15, 25.0).unwrap_err();
        assert!(matches!(err, TrackerError::GoalTooLow { .. }));
        assert_eq!(goal.goal_units(), 20);
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut goal = GoalManager::default();
        for _ in 0..3 {
            assert!(goal.propose_goal(15, 25.0).is_err());
            assert_eq!(goal.goal_units(), 20);
        }
    }

    #[test]
    fn lowering_is_allowed_when_nothing_logged() {
        let mut goal = GoalManager::default();
        goal.propose_goal(5, 0.0).unwrap();
        assert_eq!(goal.goal_units(), 5);
    }

    #[test]
    fn goal_equal_to_total_is_accepted() {
        let mut goal = GoalManager::default();
        goal.propose_goal(15, 15.0).unwrap();
        assert_eq!(goal.goal_units(), 15);
    }

    #[test]
    fn preview_formats_without_committing() {
        let goal = GoalManager::default();
        assert_eq!(GoalManager::preview_label(35), "Selected Goal: 3.5 L");
        assert_eq!(goal.goal_units(), 20);
    }
}
