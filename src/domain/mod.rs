//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - column names of the sales feed and the derived features (`columns`)
//! - typed sales rows and their featured form (`SalesRecord`, `FeaturedRecord`)
//! - holiday categories and rows (`HolidayKind`, `StateHoliday`, `HolidayRow`)
//! - calendar helpers (`CalendarParts`, `month_abbrev`)

pub mod types;

pub use types::*;
