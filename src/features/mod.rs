//! Feature derivation for the sales table.
//!
//! `build_features` appends, in order:
//!
//! - `Year`, `Month`, `Day`, `DayOfWeek`, `WeekOfYear` (calendar)
//! - `CompetitionOpen`, `PromoOpen` (months elapsed, clamped at 0)
//! - `IsPromoMonth` (0/1)
//!
//! and removes `PromoInterval` and `monthStr`. An input column named like a
//! derived one is replaced by the derived value. Row count and order are
//! preserved.

pub mod elapsed;
pub mod promo;

use tracing::debug;

use crate::domain::{CalendarParts, FeaturedRecord, FeaturedTable, SalesTable, columns};
use crate::error::Result;

pub use promo::PromoMonths;

/// Columns `build_features` reads.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    columns::DATE,
    columns::COMPETITION_OPEN_SINCE_YEAR,
    columns::COMPETITION_OPEN_SINCE_MONTH,
    columns::PROMO2_SINCE_YEAR,
    columns::PROMO2_SINCE_WEEK,
    columns::PROMO_INTERVAL,
];

/// Derive calendar, competition and promotion features.
pub fn build_features(table: SalesTable) -> Result<FeaturedTable> {
    table.require(&REQUIRED_COLUMNS)?;

    let keep: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_replaced(name))
        .map(|(idx, _)| idx)
        .collect();

    let promo_months = PromoMonths::from_intervals(table.records.iter().filter_map(|r| r.promo_interval.as_deref()));
    debug!(
        rows = table.len(),
        intervals = promo_months.len(),
        dropped = table.headers.len() - keep.len(),
        "deriving features"
    );

    let records = table
        .records
        .iter()
        .map(|record| {
            let calendar = CalendarParts::from_date(record.date);
            FeaturedRecord {
                calendar,
                competition_open: elapsed::competition_open(&calendar, record),
                promo_open: elapsed::promo_open(&calendar, record),
                is_promo_month: promo_months.contains(record.promo_interval.as_deref(), calendar.month),
                fields: keep
                    .iter()
                    .map(|&idx| record.fields.get(idx).cloned().unwrap_or_default())
                    .collect(),
            }
        })
        .collect();

    Ok(FeaturedTable {
        passthrough: keep.iter().map(|&idx| table.headers[idx].clone()).collect(),
        records,
    })
}

/// Input columns that do not survive into the output.
fn is_replaced(name: &str) -> bool {
    name == columns::PROMO_INTERVAL || name == columns::MONTH_STR || columns::DERIVED.contains(&name)
}
