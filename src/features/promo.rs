//! `IsPromoMonth`: whether the row's month is one of its Promo2 renewal months.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::domain::month_abbrev;

/// Month sets of every distinct non-empty `PromoInterval` in a table.
///
/// Each interval string is split once; rows then look up their own
/// interval's set. Unknown abbreviations simply never match.
#[derive(Debug, Default)]
pub struct PromoMonths<'a> {
    by_interval: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> PromoMonths<'a> {
    pub fn from_intervals(intervals: impl IntoIterator<Item = &'a str>) -> Self {
        let mut by_interval: HashMap<&str, HashSet<&str>> = HashMap::new();
        for interval in intervals {
            if interval.is_empty() || by_interval.contains_key(interval) {
                continue;
            }
            let months: HashSet<&str> = interval.split(',').collect();
            trace!(interval, months = months.len(), "promo interval");
            by_interval.insert(interval, months);
        }
        Self { by_interval }
    }

    /// Number of distinct non-empty intervals.
    pub fn len(&self) -> usize {
        self.by_interval.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_interval.is_empty()
    }

    /// True when `month` (1-based) is listed in `interval`.
    pub fn contains(&self, interval: Option<&str>, month: u32) -> bool {
        interval
            .and_then(|interval| self.by_interval.get(interval))
            .zip(month_abbrev(month))
            .is_some_and(|(months, abbrev)| months.contains(abbrev))
    }
}
