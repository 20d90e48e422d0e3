//! Day count conventions.
//!
//! Irregular cash flow schedules are annualised with ACT/365 Fixed: elapsed
//! calendar days divided by 365, leap years ignored.
//!
//! # Usage
//!
//! ```rust
//! use fincalc_core::daycounts::{Act365Fixed, DayCount};
//! use fincalc_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 366);
//! assert!((dc.year_fraction_f64(start, end) - 366.0 / 365.0).abs() < 1e-15);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) since valuation
/// closures run on blocking worker threads.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the exact year fraction between two dates.
    ///
    /// Negative when `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the year fraction as a float for use inside residual functions.
    fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.year_fraction(start, end).to_f64().unwrap_or(f64::NAN)
    }

    /// Counts days between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
