//! Deadline calculation
//!
//! The walk-forward engine behind the deadline calculator form: counts days
//! one at a time from the start date, skipping weekends and holidays for
//! business-day periods, and applies the statutory period modifiers.

use crate::holidays::find_holiday;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use pretor_common::Pretty;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How walked days count toward the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Only non-weekend, non-holiday days count ("dias úteis")
    Business,
    /// Every calendar day counts ("dias corridos")
    Calendar,
}

impl PeriodKind {
    /// Display form used on result cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "dias úteis",
            Self::Calendar => "dias corridos",
        }
    }
}

/// Why a walked day did not count toward a business-day period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Weekend,
    Holiday(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekend => write!(f, "weekend"),
            Self::Holiday(name) => write!(f, "holiday: {}", name),
        }
    }
}

/// A day skipped during a business-day walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDay {
    pub date: NaiveDate,
    pub reason: SkipReason,
}

/// Input to [`calculate`].
///
/// `requested_days >= 1` and a non-future `start_date` are the caller's
/// contract; the engine accepts any input and stays total over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Publication/service date the period runs from
    pub start_date: NaiveDate,
    /// Period length as requested, before modifiers
    pub requested_days: u32,
    pub period_kind: PeriodKind,
    /// Two-letter state code for the state holiday table
    pub state: String,
    pub consider_national_holidays: bool,
    pub consider_state_holidays: bool,
    /// Statutory doubled period (public treasury and similar parties)
    pub double_period: bool,
    /// One extra day for service through an attorney
    pub attorney_service_extension: bool,
}

impl DeadlineRequest {
    /// New business-day request with both holiday tables enabled.
    pub fn new(start_date: NaiveDate, requested_days: u32) -> Self {
        Self {
            start_date,
            requested_days,
            period_kind: PeriodKind::Business,
            state: "GO".to_string(),
            consider_national_holidays: true,
            consider_state_holidays: true,
            double_period: false,
            attorney_service_extension: false,
        }
    }

    /// Set the period kind
    pub fn with_period_kind(mut self, kind: PeriodKind) -> Self {
        self.period_kind = kind;
        self
    }

    /// Set the state whose holiday table applies
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Enable or disable the national holiday table
    pub fn with_national_holidays(mut self, consider: bool) -> Self {
        self.consider_national_holidays = consider;
        self
    }

    /// Enable or disable the state holiday table
    pub fn with_state_holidays(mut self, consider: bool) -> Self {
        self.consider_state_holidays = consider;
        self
    }

    /// Apply the statutory doubled-period rule
    pub fn with_double_period(mut self, double: bool) -> Self {
        self.double_period = double;
        self
    }

    /// Apply the attorney-service +1 day rule
    pub fn with_attorney_service_extension(mut self, extend: bool) -> Self {
        self.attorney_service_extension = extend;
        self
    }
}

/// Result of a deadline calculation. Immutable once computed; re-derived on
/// every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    pub start_date: NaiveDate,
    pub final_date: NaiveDate,
    pub requested_days: u32,
    /// Requested days after doubling and extension
    pub effective_days: u32,
    /// Days skipped during the walk, in walk order
    pub skipped_days: Vec<SkippedDay>,
    pub period_kind: PeriodKind,
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Compute the final due date for a procedural deadline.
///
/// Doubling applies before the attorney-service extension: a 10-day period
/// with both modifiers is 21 effective days, not 22. For business-day
/// periods, a candidate final date landing on a weekend or holiday is pushed
/// forward to the next countable day; that final adjustment does not record
/// skipped days - only the counting walk does.
pub fn calculate(request: &DeadlineRequest) -> DeadlineResult {
    let mut effective_days = request.requested_days;
    if request.double_period {
        effective_days *= 2;
    }
    if request.attorney_service_extension {
        effective_days += 1;
    }

    let mut current = request.start_date;
    let mut counted = 0u32;
    let mut skipped_days = Vec::new();

    while counted < effective_days {
        current = current + Days::new(1);

        let holiday = find_holiday(
            current,
            &request.state,
            request.consider_national_holidays,
            request.consider_state_holidays,
        );

        match request.period_kind {
            PeriodKind::Calendar => counted += 1,
            PeriodKind::Business => {
                if !is_weekend(current) && holiday.is_none() {
                    counted += 1;
                } else {
                    // Holiday name wins when the day is both
                    skipped_days.push(SkippedDay {
                        date: current,
                        reason: match holiday {
                            Some(name) => SkipReason::Holiday(name.to_string()),
                            None => SkipReason::Weekend,
                        },
                    });
                }
            }
        }
    }

    if request.period_kind == PeriodKind::Business {
        while is_weekend(current)
            || find_holiday(
                current,
                &request.state,
                request.consider_national_holidays,
                request.consider_state_holidays,
            )
            .is_some()
        {
            current = current + Days::new(1);
        }
    }

    let result = DeadlineResult {
        start_date: request.start_date,
        final_date: current,
        requested_days: request.requested_days,
        effective_days,
        skipped_days,
        period_kind: request.period_kind,
    };
    debug!("deadline calculated: {}", Pretty(&result));
    result
}
