//! Featured and holiday tables → CSV.
//!
//! Floats use `Display`, so whole values print without a fraction (`79.0` as
//! `79`). Dates are `YYYY-MM-DD`.

use std::io::Write;

use crate::domain::{FeaturedRecord, FeaturedTable, HolidayRow, columns};
use crate::error::Result;

/// Write the featured table: carried-through columns, then the derived ones.
pub fn write_features<W: Write>(table: &FeaturedTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.column_names())?;

    for record in &table.records {
        let derived = derived_fields(record);
        writer.write_record(record.fields.iter().map(String::as_str).chain(derived.iter().map(String::as_str)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the `ds`/`holiday` table. The header is written even with no rows.
pub fn write_holidays<W: Write>(rows: &[HolidayRow], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record([columns::DS, columns::HOLIDAY])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn derived_fields(record: &FeaturedRecord) -> [String; 8] {
    let c = &record.calendar;
    [
        c.year.to_string(),
        c.month.to_string(),
        c.day.to_string(),
        c.day_of_week.to_string(),
        c.week_of_year.to_string(),
        record.competition_open.to_string(),
        record.promo_open.to_string(),
        u8::from(record.is_promo_month).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::CalendarParts;

    #[test]
    fn featured_rows_append_derived_fields() {
        let table = FeaturedTable {
            passthrough: vec!["Store".to_string(), "Date".to_string()],
            records: vec![FeaturedRecord {
                calendar: CalendarParts::from_date(NaiveDate::from_ymd_opt(2015, 7, 31).unwrap()),
                competition_open: 82.0,
                promo_open: 5.25,
                is_promo_month: true,
                fields: vec!["1".to_string(), "2015-07-31".to_string()],
            }],
        };

        let mut buf = Vec::new();
        write_features(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Store,Date,Year,Month,Day,DayOfWeek,WeekOfYear,CompetitionOpen,PromoOpen,IsPromoMonth\n\
             1,2015-07-31,2015,7,31,4,31,82,5.25,1\n"
        );
    }

    #[test]
    fn empty_holiday_table_keeps_header() {
        let mut buf = Vec::new();
        write_holidays(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ds,holiday\n");

        let rows = [HolidayRow {
            ds: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            holiday: "state_holiday".to_string(),
        }];
        let mut buf = Vec::new();
        write_holidays(&rows, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ds,holiday\n2015-01-01,state_holiday\n");
    }
}
