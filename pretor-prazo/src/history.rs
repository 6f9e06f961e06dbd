//! Recent-calculation history
//!
//! A capped, newest-first list of saved calculations. The calculator form
//! shows the last few results; where the serialized form is stored is the
//! caller's concern.

use crate::calc::{DeadlineResult, PeriodKind};
use chrono::{DateTime, NaiveDate, Utc};
use pretor_common::generate_ulid;
use serde::{Deserialize, Serialize};

/// Maximum number of saved calculations retained.
pub const MAX_SAVED: usize = 10;

/// One saved calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: String,
    pub start_date: NaiveDate,
    pub final_date: NaiveDate,
    pub effective_days: u32,
    pub period_kind: PeriodKind,
    /// State code the calculation ran against
    pub state: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedCalculation {
    /// Capture a calculation result for the history list.
    pub fn from_result(result: &DeadlineResult, state: impl Into<String>) -> Self {
        Self {
            id: generate_ulid().to_string(),
            start_date: result.start_date,
            final_date: result.final_date,
            effective_days: result.effective_days,
            period_kind: result.period_kind,
            state: state.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Newest-first history of saved calculations, capped at [`MAX_SAVED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<SavedCalculation>,
}

impl CalculationHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a calculation at the front, dropping the oldest past the cap.
    pub fn save(&mut self, calculation: SavedCalculation) {
        self.entries.insert(0, calculation);
        self.entries.truncate(MAX_SAVED);
    }

    /// Saved calculations, newest first
    pub fn entries(&self) -> &[SavedCalculation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{calculate, DeadlineRequest};
    use chrono::Datelike;

    fn sample(day: u32) -> SavedCalculation {
        let result = calculate(&DeadlineRequest::new(
            NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            5,
        ));
        SavedCalculation::from_result(&result, "GO")
    }

    #[test]
    fn test_newest_first() {
        let mut history = CalculationHistory::new();
        let first = sample(3);
        let second = sample(4);

        history.save(first.clone());
        history.save(second.clone());

        assert_eq!(history.entries()[0], second);
        assert_eq!(history.entries()[1], first);
    }

    #[test]
    fn test_capped_at_max_saved() {
        let mut history = CalculationHistory::new();
        for day in 1..=15 {
            history.save(sample(day));
        }

        assert_eq!(history.len(), MAX_SAVED);
        // The most recent save survives, the oldest ones are gone
        assert_eq!(
            history.entries()[0].start_date,
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
        assert!(history
            .entries()
            .iter()
            .all(|e| e.start_date.day() > 5));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut history = CalculationHistory::new();
        history.save(sample(10));

        let json = serde_json::to_string(&history).unwrap();
        let parsed: CalculationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }
}
