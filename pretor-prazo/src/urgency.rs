//! Deadline urgency classification and notification thresholds

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days remaining until `final_date`, negative once the deadline has passed.
pub fn days_remaining(final_date: NaiveDate, today: NaiveDate) -> i64 {
    (final_date - today).num_days()
}

/// How close a computed deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The deadline has already passed
    Overdue,
    /// Three days or fewer remain
    Urgent,
    /// Seven days or fewer remain
    Upcoming,
    /// More than a week remains
    OnTrack,
}

impl Urgency {
    /// Classify a deadline against today's date.
    ///
    /// A negative remaining-day count is reported as [`Urgency::Overdue`],
    /// never folded into [`Urgency::Urgent`].
    pub fn classify(final_date: NaiveDate, today: NaiveDate) -> Self {
        let remaining = days_remaining(final_date, today);
        if remaining < 0 {
            Self::Overdue
        } else if remaining <= 3 {
            Self::Urgent
        } else if remaining <= 7 {
            Self::Upcoming
        } else {
            Self::OnTrack
        }
    }

    /// Display label for result cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Vencido",
            Self::Urgent => "Urgente",
            Self::Upcoming => "Próximo",
            Self::OnTrack => "No prazo",
        }
    }
}

/// Reminder distances, in days before the due date.
pub const NOTIFY_THRESHOLDS: [i64; 3] = [7, 3, 1];

/// Whether a reminder should fire for `due_date` today.
///
/// Returns the matched distance (7, 3 or 1 days out) or `None` on every
/// other day, so a daily sweep emits at most three reminders per deadline.
pub fn should_notify(due_date: NaiveDate, today: NaiveDate) -> Option<i64> {
    let diff = days_remaining(due_date, today);
    NOTIFY_THRESHOLDS.contains(&diff).then_some(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classification_bands() {
        let today = date(2025, 6, 2);

        assert_eq!(Urgency::classify(date(2025, 6, 1), today), Urgency::Overdue);
        assert_eq!(Urgency::classify(date(2025, 6, 2), today), Urgency::Urgent);
        assert_eq!(Urgency::classify(date(2025, 6, 5), today), Urgency::Urgent);
        assert_eq!(Urgency::classify(date(2025, 6, 6), today), Urgency::Upcoming);
        assert_eq!(Urgency::classify(date(2025, 6, 9), today), Urgency::Upcoming);
        assert_eq!(Urgency::classify(date(2025, 6, 10), today), Urgency::OnTrack);
    }

    #[test]
    fn test_overdue_is_distinct_from_urgent() {
        let today = date(2025, 6, 2);
        assert_ne!(
            Urgency::classify(date(2025, 5, 30), today),
            Urgency::Urgent
        );
    }

    #[test]
    fn test_should_notify_exact_distances_only() {
        let today = date(2025, 6, 2);

        assert_eq!(should_notify(date(2025, 6, 9), today), Some(7));
        assert_eq!(should_notify(date(2025, 6, 5), today), Some(3));
        assert_eq!(should_notify(date(2025, 6, 3), today), Some(1));

        assert_eq!(should_notify(date(2025, 6, 2), today), None);
        assert_eq!(should_notify(date(2025, 6, 4), today), None);
        assert_eq!(should_notify(date(2025, 6, 30), today), None);
        assert_eq!(should_notify(date(2025, 5, 26), today), None);
    }
}
