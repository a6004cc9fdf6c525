//! CSV ingest for the sales feed.
//!
//! Turns a sales CSV into a `SalesTable` of typed rows:
//! - `Date` is required and must parse on every row
//! - the competition/Promo2 "since" fields are optional numbers
//! - `PromoInterval`, `SchoolHoliday` and `StateHoliday` are read when present
//!
//! The builders check for the other columns they need, so a table without
//! e.g. `StateHoliday` still reads and only `build_holidays` rejects it.
//! The first bad field fails the whole read.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::domain::{SalesRecord, SalesTable, StateHoliday, columns, parse_promo_interval};
use crate::error::{FeatureError, Result};

/// Date formats recognized in the `Date` column.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Read the whole sales feed.
///
/// Rows with a different number of fields than the header are a CSV error.
pub fn read_sales<R: Read>(reader: R) -> Result<SalesTable> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers)?;
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        let record = result?;
        records.push(parse_row(&record, &header_map, line)?);
    }

    debug!(columns = headers.len(), rows = records.len(), "read sales table");

    Ok(SalesTable {
        headers: headers.iter().map(normalize_header_name).collect(),
        records,
    })
}

fn build_header_map(headers: &StringRecord) -> Result<HashMap<String, usize>> {
    let mut map = HashMap::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        let name = normalize_header_name(name);
        if map.contains_key(&name) {
            return Err(FeatureError::DuplicateColumn { column: name });
        }
        map.insert(name, idx);
    }
    Ok(map)
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM,
    // which would otherwise show up as a missing `Store`/`Date` column.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<()> {
    if !header_map.contains_key(columns::DATE) {
        return Err(FeatureError::missing(columns::DATE));
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>, line: usize) -> Result<SalesRecord> {
    let raw_date = get_optional(record, header_map, columns::DATE).unwrap_or_default();
    let date = parse_date(raw_date).ok_or_else(|| FeatureError::TypeMismatch {
        column: columns::DATE.to_string(),
        line,
        expected: "date",
        found: raw_date.to_string(),
    })?;

    let school_holiday = get_optional(record, header_map, columns::SCHOOL_HOLIDAY)
        .and_then(|s| s.parse::<f64>().ok())
        .is_some_and(|v| v == 1.0);

    Ok(SalesRecord {
        date,
        competition_open_since_year: parse_opt_f64(record, header_map, columns::COMPETITION_OPEN_SINCE_YEAR, line)?,
        competition_open_since_month: parse_opt_f64(record, header_map, columns::COMPETITION_OPEN_SINCE_MONTH, line)?,
        promo2_since_year: parse_opt_f64(record, header_map, columns::PROMO2_SINCE_YEAR, line)?,
        promo2_since_week: parse_opt_f64(record, header_map, columns::PROMO2_SINCE_WEEK, line)?,
        promo_interval: get_optional(record, header_map, columns::PROMO_INTERVAL).and_then(parse_promo_interval),
        school_holiday,
        state_holiday: get_optional(record, header_map, columns::STATE_HOLIDAY).and_then(StateHoliday::parse),
        fields: record.iter().map(str::to_string).collect(),
    })
}

/// Field of `name`, or `None` when the column is absent or the field is empty.
fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = *header_map.get(name)?;
    record.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_opt_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    line: usize,
) -> Result<Option<f64>> {
    let Some(raw) = get_optional(record, header_map, name) else {
        return Ok(None);
    };
    raw.parse::<f64>().map(Some).map_err(|_| FeatureError::TypeMismatch {
        column: name.to_string(),
        line,
        expected: "number",
        found: raw.to_string(),
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
