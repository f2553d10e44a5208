//! Completion projector

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// When a goal finishes at its suggested pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// `None` when the goal never completes at this pace
    pub months_to_complete: Option<f64>,
    /// `None` when the goal never completes at this pace
    pub estimated_completion_date: Option<NaiveDate>,
    pub on_track: bool,
}

impl Projection {
    /// The "never completes" projection
    pub fn never() -> Self {
        Self {
            months_to_complete: None,
            estimated_completion_date: None,
            on_track: false,
        }
    }
}

/// Project the completion date for a goal
///
/// The estimate rounds up to whole calendar months from `today`. A goal with
/// no contribution never completes and is never on track. Otherwise it is on
/// track when it has no deadline or finishes on or before it.
pub fn project_completion(
    remaining_amount: f64,
    suggested_monthly_amount: f64,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Projection {
    if remaining_amount <= 0.0 {
        return Projection {
            months_to_complete: Some(0.0),
            estimated_completion_date: Some(today),
            on_track: true,
        };
    }

    if suggested_monthly_amount.is_nan() || suggested_monthly_amount <= 0.0 {
        return Projection::never();
    }

    let months = remaining_amount / suggested_monthly_amount;
    // Absorb float noise so an exact pace-cap contribution is not pushed a
    // month later
    let whole_months = (months - 1e-9).ceil().max(1.0);

    let estimated_completion_date = if whole_months <= u32::MAX as f64 {
        today.checked_add_months(Months::new(whole_months as u32))
    } else {
        None
    };

    let on_track = match (estimated_completion_date, deadline) {
        (Some(done), Some(deadline)) => done <= deadline,
        (Some(_), None) => true,
        (None, _) => false,
    };

    Projection {
        months_to_complete: Some(months),
        estimated_completion_date,
        on_track,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 17)
    }

    #[test]
    fn test_zero_contribution_never_completes() {
        let projection = project_completion(1_000.0, 0.0, Some(date(2027, 1, 1)), today());
        assert_eq!(projection, Projection::never());

        let no_deadline = project_completion(1_000.0, 0.0, None, today());
        assert!(no_deadline.estimated_completion_date.is_none());
        assert!(!no_deadline.on_track);

        assert_eq!(
            project_completion(1_000.0, -5.0, None, today()),
            Projection::never()
        );
    }

    #[test]
    fn test_rounds_up_to_whole_months() {
        let projection = project_completion(1_000.0, 300.0, None, today());
        assert!((projection.months_to_complete.unwrap() - 1_000.0 / 300.0).abs() < 1e-12);
        assert_eq!(projection.estimated_completion_date, Some(date(2027, 2, 17)));
        assert!(projection.on_track);
    }

    #[test]
    fn test_exact_months_not_pushed_later() {
        let projection = project_completion(7_000.0, 875.0, None, today());
        assert_eq!(projection.months_to_complete, Some(8.0));
        assert_eq!(projection.estimated_completion_date, Some(date(2027, 6, 17)));
    }

    #[test]
    fn test_less_than_a_month_counts_as_one() {
        let projection = project_completion(50.0, 500.0, None, today());
        assert_eq!(projection.estimated_completion_date, Some(date(2026, 11, 17)));
    }

    #[test]
    fn test_on_track_against_deadline() {
        let on_time = project_completion(1_200.0, 400.0, Some(date(2027, 1, 17)), today());
        assert_eq!(on_time.estimated_completion_date, Some(date(2027, 1, 17)));
        assert!(on_time.on_track);

        let late = project_completion(1_200.0, 400.0, Some(date(2027, 1, 16)), today());
        assert!(!late.on_track);
    }

    #[test]
    fn test_month_end_clamping() {
        let projection = project_completion(100.0, 100.0, None, date(2027, 1, 31));
        assert_eq!(projection.estimated_completion_date, Some(date(2027, 2, 28)));
    }

    #[test]
    fn test_tiny_contribution_overflows_calendar() {
        let projection = project_completion(1e12, 1e-6, None, today());
        assert!(projection.months_to_complete.is_some());
        assert!(projection.estimated_completion_date.is_none());
        assert!(!projection.on_track);
    }

    #[test]
    fn test_already_complete() {
        let projection = project_completion(0.0, 0.0, Some(date(2026, 1, 1)), today());
        assert_eq!(projection.estimated_completion_date, Some(today()));
        assert!(projection.on_track);
    }
}
