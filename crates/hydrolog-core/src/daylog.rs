//! Append-only history of finalized days.
//!
//! Entries are structured records; text formatting is a separate render
//! step. The log never reorders or removes entries, so insertion order is
//! chronological order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::intake::UNITS_PER_LITER;

/// An immutable finalized record of one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    /// True (unclamped) intake for the day, in liters.
    pub liters_logged: f64,
    /// Goal in force at logging time, in liters.
    pub goal_liters: f64,
}

impl DailyEntry {
    /// Render the entry as one log line,
    /// e.g. `"Mon Apr 21 2025 — 2.5 L / Goal: 2.0 L"`.
    pub fn render_line(&self) -> String {
        format!(
            "{} — {:.1} L / Goal: {:.1} L",
            calendar::date_text(self.date),
            self.liters_logged,
            self.goal_liters
        )
    }
}

/// One row of the audit pass over the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub entry: DailyEntry,
    /// Whether the rendered line carries the goal annotation.
    pub has_goal_annotation: bool,
}

/// Chronologically ordered, append-only hydration history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLog {
    entries: Vec<DailyEntry>,
}

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-joined text of the whole log, one line per entry in
    /// chronological order.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(DailyEntry::render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Diagnostic pass: classify whether each entry's rendered line carries
    /// the goal annotation (true by construction here).
    ///
    /// Idempotent and purely observational. Anomalies are reported through
    /// the log facade; they never block rendering or rollover.
    pub fn audit(&self) -> Vec<AuditRecord> {
        self.entries
            .iter()
            .map(|entry| {
                let has_goal_annotation = entry.render_line().contains("Goal");
                if !has_goal_annotation {
                    log::warn!(
                        "goal annotation missing in log entry for {}",
                        calendar::date_text(entry.date)
                    );
                }
                AuditRecord {
                    entry: entry.clone(),
                    has_goal_annotation,
                }
            })
            .collect()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Build an immutable entry from the day's unclamped total and active
    /// goal (both in units) and append it.
    pub fn append_entry(&mut self, date: NaiveDate, total_units: f64, goal_units: u32) {
        self.entries.push(DailyEntry {
            date,
            liters_logged: total_units / UNITS_PER_LITER,
            goal_liters: f64::from(goal_units) / UNITS_PER_LITER,
        });
    }
}
