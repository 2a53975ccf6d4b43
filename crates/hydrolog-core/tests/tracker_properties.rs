//! Property-based tests for the tracking engine.
//!
//! These tests use proptest to verify the tracker invariants hold across
//! many randomly generated command sequences.

use chrono::{Days, NaiveDate};
use hydrolog_core::{calendar, TrackerError, TrackerService};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_date()(year in 1990i32..2100, ordinal in 1u32..=365) -> NaiveDate {
        NaiveDate::from_yo_opt(year, ordinal).unwrap()
    }
}

prop_compose! {
    fn intake_amounts()(amounts in prop::collection::vec(0.1f64..5.0, 0..20)) -> Vec<f64> {
        amounts
    }
}

proptest! {
    #[test]
    fn total_is_exact_sum_of_unit_equivalents(
        start in arbitrary_date(),
        amounts in intake_amounts(),
    ) {
        let mut svc = TrackerService::new(start, 20);
        let mut expected = 0.0f64;
        for liters in &amounts {
            svc.track_intake(*liters).unwrap();
            expected += liters * 10.0;
        }
        prop_assert_eq!(svc.total_units_today(), expected);
    }

    #[test]
    fn display_never_exceeds_goal(
        start in arbitrary_date(),
        goal in 1u32..=100,
        amounts in intake_amounts(),
    ) {
        let mut svc = TrackerService::new(start, goal);
        for liters in amounts {
            let receipt = svc.track_intake(liters).unwrap();
            prop_assert!(receipt.display_units <= f64::from(goal));
            prop_assert_eq!(
                receipt.display_units,
                svc.total_units_today().min(f64::from(goal))
            );
        }
    }

    #[test]
    fn goal_rejection_changes_nothing_and_is_idempotent(
        start in arbitrary_date(),
        liters in 2.1f64..5.0,
        proposed in 0u32..=20,
    ) {
        // liters > 2.1 puts the total above 21 units, so every proposal
        // in 0..=20 must be refused.
        let mut svc = TrackerService::new(start, 100);
        svc.track_intake(liters).unwrap();
        let total = svc.total_units_today();

        for _ in 0..3 {
            let result = svc.propose_goal(proposed);
            let is_goal_too_low = matches!(result, Err(TrackerError::GoalTooLow { .. }));
            prop_assert!(is_goal_too_low);
            prop_assert_eq!(svc.goal_units(), 100);
            prop_assert_eq!(svc.total_units_today(), total);
        }
    }

    #[test]
    fn n_rollovers_yield_n_ascending_entries(
        start in arbitrary_date(),
        days in prop::collection::vec(intake_amounts(), 1..10),
    ) {
        let mut svc = TrackerService::new(start, 30);
        for amounts in &days {
            for liters in amounts {
                svc.track_intake(*liters).unwrap();
            }
            svc.advance_day();
        }

        let entries = svc.entries();
        prop_assert_eq!(entries.len(), days.len());
        for pair in entries.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        // The day after the last logged one is now active, with a clean slate.
        prop_assert_eq!(svc.current_date(), start + Days::new(days.len() as u64));
        prop_assert_eq!(svc.total_units_today(), 0.0);
    }

    #[test]
    fn logged_liters_use_the_unclamped_total(
        start in arbitrary_date(),
        amounts in intake_amounts(),
    ) {
        // Tiny goal so that almost any intake overflows the display.
        let mut svc = TrackerService::new(start, 1);
        for liters in &amounts {
            svc.track_intake(*liters).unwrap();
        }
        let total = svc.total_units_today();
        svc.advance_day();
        prop_assert_eq!(svc.entries()[0].liters_logged, total / 10.0);
    }

    #[test]
    fn advance_n_times_equals_adding_n_days(
        start in arbitrary_date(),
        n in 0u64..400,
    ) {
        let mut stepped = start;
        for _ in 0..n {
            stepped = calendar::advance(stepped);
        }
        prop_assert_eq!(stepped, start + Days::new(n));
    }

    #[test]
    fn audit_report_covers_every_entry(
        start in arbitrary_date(),
        n in 1usize..8,
    ) {
        let mut svc = TrackerService::new(start, 20);
        for _ in 0..n {
            svc.advance_day();
        }
        let report = svc.audit_report();
        prop_assert_eq!(report.len(), n);
        prop_assert!(report.iter().all(|r| r.has_goal_annotation));
    }
}
