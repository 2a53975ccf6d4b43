//! Calendar-day arithmetic and date text.
//!
//! Dates are immutable values: `advance` returns a new date instead of
//! mutating the one the tracker holds, so a date captured in a log entry
//! can never alias the live tracking date.

use chrono::NaiveDate;

/// Returns the calendar date one day after `date`.
///
/// Standard month-length and leap-year rules apply. Advancing N times is
/// equivalent to adding N days directly.
pub fn advance(date: NaiveDate) -> NaiveDate {
    // succ_opt only fails at NaiveDate::MAX, far outside any tracked day.
    date.succ_opt().unwrap_or(date)
}

/// Renders a date as `"Ddd Mmm DD YYYY"`, e.g. `"Mon Apr 21 2025"`.
///
/// This is the shape log entries and status output share.
pub fn date_text(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn advance_crosses_month_boundary() {
        assert_eq!(advance(date(2025, 4, 30)), date(2025, 5, 1));
    }

    #[test]
    fn advance_crosses_year_boundary() {
        assert_eq!(advance(date(2025, 12, 31)), date(2026, 1, 1));
    }

    #[test]
    fn advance_handles_leap_february() {
        assert_eq!(advance(date(2024, 2, 28)), date(2024, 2, 29));
        assert_eq!(advance(date(2024, 2, 29)), date(2024, 3, 1));
        assert_eq!(advance(date(2025, 2, 28)), date(2025, 3, 1));
    }

    #[test]
    fn advance_does_not_mutate_input() {
        let d = date(2025, 6, 15);
        let _ = advance(d);
        assert_eq!(d, date(2025, 6, 15));
    }

    #[test]
    fn repeated_advance_equals_adding_days() {
        for n in [0u64, 1, 30, 365] {
            let start = date(2024, 1, 31);
            let mut stepped = start;
            for _ in 0..n {
                stepped = advance(stepped);
            }
            assert_eq!(stepped, start + chrono::Days::new(n));
        }
    }

    #[test]
    fn date_text_matches_expected_shape() {
        assert_eq!(date_text(date(2025, 4, 21)), "Mon Apr 21 2025");
        assert_eq!(date_text(date(2025, 4, 1)), "Tue Apr 01 2025");
    }
}
