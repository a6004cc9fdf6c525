//! Shared domain types.
//!
//! The sales feed is read into typed rows. Only the columns the builders
//! depend on are parsed; every field is also kept as raw text so that the
//! featured output carries the other columns through unchanged.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// Column names of the sales feed and of the derived features.
pub mod columns {
    pub const DATE: &str = "Date";
    pub const COMPETITION_OPEN_SINCE_YEAR: &str = "CompetitionOpenSinceYear";
    pub const COMPETITION_OPEN_SINCE_MONTH: &str = "CompetitionOpenSinceMonth";
    pub const PROMO2_SINCE_YEAR: &str = "Promo2SinceYear";
    pub const PROMO2_SINCE_WEEK: &str = "Promo2SinceWeek";
    pub const PROMO_INTERVAL: &str = "PromoInterval";
    pub const SCHOOL_HOLIDAY: &str = "SchoolHoliday";
    pub const STATE_HOLIDAY: &str = "StateHoliday";

    /// Month abbreviation helper column. Never part of an output table.
    pub const MONTH_STR: &str = "monthStr";

    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const DAY: &str = "Day";
    pub const DAY_OF_WEEK: &str = "DayOfWeek";
    pub const WEEK_OF_YEAR: &str = "WeekOfYear";
    pub const COMPETITION_OPEN: &str = "CompetitionOpen";
    pub const PROMO_OPEN: &str = "PromoOpen";
    pub const IS_PROMO_MONTH: &str = "IsPromoMonth";

    /// Derived feature columns, in output order.
    pub const DERIVED: [&str; 8] = [
        YEAR,
        MONTH,
        DAY,
        DAY_OF_WEEK,
        WEEK_OF_YEAR,
        COMPETITION_OPEN,
        PROMO_OPEN,
        IS_PROMO_MONTH,
    ];

    /// Holiday table columns.
    pub const DS: &str = "ds";
    pub const HOLIDAY: &str = "holiday";
}

/// Which holiday block a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    School,
    State,
}

/// State-holiday category of a sales row.
///
/// `a` = public holiday, `b` = Easter, `c` = Christmas. Anything else
/// (including `0`) means no state holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateHoliday {
    Public,
    Easter,
    Christmas,
}

impl StateHoliday {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "a" => Some(StateHoliday::Public),
            "b" => Some(StateHoliday::Easter),
            "c" => Some(StateHoliday::Christmas),
            _ => None,
        }
    }
}

/// Interpret a raw `PromoInterval` field.
///
/// An empty field is `None` and never matches a month. The numeric `0`
/// (written `0` or `0.0` depending on the exporter) marks a store without
/// Promo2 and becomes the empty interval.
pub fn parse_promo_interval(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.parse::<f64>().is_ok_and(|v| v == 0.0) {
        return Some(String::new());
    }
    Some(raw.to_string())
}

/// English month abbreviations as they appear in `PromoInterval`.
///
/// September is spelled `Sept` in the feed; every other month uses the
/// three-letter form.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Abbreviation for a 1-based month number.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(idx).copied()
}

/// Calendar features of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u32,
    /// ISO-8601 week number, 1..=53. Signed: the model side rejects unsigned 32-bit columns.
    pub week_of_year: i32,
}

impl CalendarParts {
    pub fn from_date(date: NaiveDate) -> Self {
        // ISO weeks never exceed 53, so the cast is lossless.
        let week_of_year = date.iso_week().week() as i32;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.weekday().num_days_from_monday(),
            week_of_year,
        }
    }
}

/// One parsed row of the sales feed.
///
/// A "since" field is `None` when its column is absent or the field is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub competition_open_since_year: Option<f64>,
    pub competition_open_since_month: Option<f64>,
    pub promo2_since_year: Option<f64>,
    pub promo2_since_week: Option<f64>,
    pub promo_interval: Option<String>,
    /// `SchoolHoliday == 1`.
    pub school_holiday: bool,
    pub state_holiday: Option<StateHoliday>,
    /// Every field as read, in `SalesTable::headers` order.
    pub fields: Vec<String>,
}

/// The sales feed: header names plus typed rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    pub headers: Vec<String>,
    pub records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Fail with `MissingColumn` on the first name not present.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(name) => Err(FeatureError::missing(*name)),
            None => Ok(()),
        }
    }
}

/// A sales row with its derived features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedRecord {
    pub calendar: CalendarParts,
    pub competition_open: f64,
    pub promo_open: f64,
    pub is_promo_month: bool,
    /// Carried-through fields, in `FeaturedTable::passthrough` order.
    pub fields: Vec<String>,
}

/// Output of `build_features`.
///
/// `passthrough` lists the input columns that survive, in input order. The
/// derived columns follow them, in `columns::DERIVED` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedTable {
    pub passthrough: Vec<String>,
    pub records: Vec<FeaturedRecord>,
}

impl FeaturedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.passthrough
            .iter()
            .map(String::as_str)
            .chain(columns::DERIVED)
            .collect()
    }

    /// Carried-through value of `column` in row `row`.
    pub fn field(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.passthrough.iter().position(|h| h == column)?;
        self.records.get(row)?.fields.get(idx).map(String::as_str)
    }
}

/// One row of the holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRow {
    pub ds: NaiveDate,
    pub holiday: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn september_uses_four_letters() {
        assert_eq!(month_abbrev(9), Some("Sept"));
        assert_eq!(month_abbrev(1), Some("Jan"));
        assert_eq!(month_abbrev(12), Some("Dec"));
        assert_eq!(month_abbrev(0), None);
        assert_eq!(month_abbrev(13), None);
    }

    #[test]
    fn iso_week_crosses_year_boundary() {
        // 2015-01-01 is a Thursday: ISO week 1 of 2015.
        let parts = CalendarParts::from_date(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(parts.week_of_year, 1);
        assert_eq!(parts.day_of_week, 3);

        // 2016-01-01 is a Friday: still week 53 of 2015.
        let parts = CalendarParts::from_date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
        assert_eq!(parts.week_of_year, 53);
        assert_eq!(parts.year, 2016);
    }

    #[test]
    fn promo_interval_sentinel_in_both_spellings() {
        assert_eq!(parse_promo_interval("0"), Some(String::new()));
        assert_eq!(parse_promo_interval("0.0"), Some(String::new()));
        assert_eq!(parse_promo_interval(""), None);
        assert_eq!(parse_promo_interval("Jan,Apr,Jul,Oct").as_deref(), Some("Jan,Apr,Jul,Oct"));
        assert_eq!(parse_promo_interval("3").as_deref(), Some("3"));
    }

    #[test]
    fn state_holiday_ignores_zero_and_unknown_letters() {
        assert_eq!(StateHoliday::parse("b"), Some(StateHoliday::Easter));
        assert_eq!(StateHoliday::parse("0"), None);
        assert_eq!(StateHoliday::parse("d"), None);
        assert_eq!(StateHoliday::parse("A"), None);
    }

    #[test]
    fn require_names_the_first_missing_column() {
        let table = SalesTable {
            headers: vec!["Date".to_string(), "SchoolHoliday".to_string()],
            records: Vec::new(),
        };
        assert!(table.require(&["Date"]).is_ok());
        match table.require(&["Date", "StateHoliday", "PromoInterval"]).unwrap_err() {
            FeatureError::MissingColumn { column } => assert_eq!(column, "StateHoliday"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
