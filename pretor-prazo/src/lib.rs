//! Procedural deadline calculator
//!
//! This crate computes final due dates for procedural deadlines: walk
//! forward from a publication/service date, count calendar or business
//! days, skip weekends and court holidays, and apply the statutory
//! modifiers (doubled periods, attorney-service extension). It also
//! classifies how urgent a computed deadline is and keeps a short history
//! of saved calculations.
//!
//! The calculator is a total, synchronous function over its inputs: no
//! clock access beyond what the caller passes in, no I/O, no error path.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pretor_prazo::{calculate, DeadlineRequest, PeriodKind};
//!
//! let request = DeadlineRequest::new(
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     15,
//! )
//! .with_period_kind(PeriodKind::Calendar);
//!
//! let result = calculate(&request);
//! assert_eq!(result.final_date, NaiveDate::from_ymd_opt(2025, 1, 16).unwrap());
//! ```

pub mod calc;
pub mod history;
pub mod holidays;
pub mod urgency;

pub use calc::{calculate, DeadlineRequest, DeadlineResult, PeriodKind, SkipReason, SkippedDay};
pub use history::{CalculationHistory, SavedCalculation, MAX_SAVED};
pub use holidays::{find_holiday, state_holidays, states, Holiday};
pub use urgency::{days_remaining, should_notify, Urgency, NOTIFY_THRESHOLDS};
