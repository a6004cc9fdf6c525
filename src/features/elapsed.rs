//! Months elapsed since competition opened and since Promo2 started.
//!
//! Both columns are clamped with the same rule: keep a value only when it is
//! strictly positive, otherwise write 0. A missing "since" field enters the
//! formula as NaN, which fails the comparison and ends up at 0 as well.

use crate::domain::{CalendarParts, SalesRecord};

/// `12 * (Year - CompetitionOpenSinceYear) + (Month - CompetitionOpenSinceMonth)`, clamped.
pub fn competition_open(calendar: &CalendarParts, record: &SalesRecord) -> f64 {
    let year = since(record.competition_open_since_year);
    let month = since(record.competition_open_since_month);
    clamp_positive(12.0 * (f64::from(calendar.year) - year) + (f64::from(calendar.month) - month))
}

/// `12 * (Year - Promo2SinceYear) + (WeekOfYear - Promo2SinceWeek) / 4`, clamped.
pub fn promo_open(calendar: &CalendarParts, record: &SalesRecord) -> f64 {
    let year = since(record.promo2_since_year);
    let week = since(record.promo2_since_week);
    clamp_positive(12.0 * (f64::from(calendar.year) - year) + (f64::from(calendar.week_of_year) - week) / 4.0)
}

/// Negative, zero and NaN all become 0.
pub fn clamp_positive(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

fn since(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}
