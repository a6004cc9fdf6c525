//! Holiday tables for use as exogenous regressors.
//!
//! The output has two columns, `ds` (date) and `holiday` (label). School
//! holidays come first, then state holidays; each block lists every distinct
//! date once, ascending.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::HolidayLabels;
use crate::domain::{HolidayKind, HolidayRow, SalesTable, columns};
use crate::error::Result;

/// Columns `build_holidays` reads.
pub const REQUIRED_COLUMNS: [&str; 3] = [columns::DATE, columns::SCHOOL_HOLIDAY, columns::STATE_HOLIDAY];

/// Build the `ds`/`holiday` table with the default labels.
pub fn build_holidays(table: &SalesTable) -> Result<Vec<HolidayRow>> {
    build_holidays_with(table, &HolidayLabels::default())
}

/// Build the `ds`/`holiday` table.
///
/// A row counts as a school holiday when `SchoolHoliday == 1`, and as a state
/// holiday when `StateHoliday` is `a`, `b` or `c`.
pub fn build_holidays_with(table: &SalesTable, labels: &HolidayLabels) -> Result<Vec<HolidayRow>> {
    table.require(&REQUIRED_COLUMNS)?;

    let mut school = BTreeSet::new();
    let mut state = BTreeSet::new();
    for record in &table.records {
        if record.school_holiday {
            school.insert(record.date);
        }
        if record.state_holiday.is_some() {
            state.insert(record.date);
        }
    }

    debug!(
        rows = table.len(),
        school = school.len(),
        state = state.len(),
        "collected holiday dates"
    );

    let mut rows = block(school, labels.label(HolidayKind::School));
    rows.extend(block(state, labels.label(HolidayKind::State)));
    Ok(rows)
}

fn block(dates: BTreeSet<NaiveDate>, label: &str) -> Vec<HolidayRow> {
    dates
        .into_iter()
        .map(|ds| HolidayRow {
            ds,
            holiday: label.to_string(),
        })
        .collect()
}
