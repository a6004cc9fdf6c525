//! `store-sales-features` library crate.
//!
//! Feature engineering for store-sales forecasting:
//!
//! - calendar, competition and Promo2 features on the sales table (`features`)
//! - school/state holiday tables for forecasting regressors (`holidays`)
//! - RMSPE scoring, including the `log1p` training-callback form (`metrics`)
//! - scoped silencing of stdout/stderr around noisy native calls (`suppress`)

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod holidays;
pub mod io;
pub mod logging;
pub mod metrics;
#[cfg(unix)]
pub mod suppress;

pub use config::HolidayLabels;
pub use domain::{FeaturedRecord, FeaturedTable, HolidayRow, SalesRecord, SalesTable};
pub use error::{FeatureError, Result};
pub use features::build_features;
pub use holidays::{build_holidays, build_holidays_with};
pub use io::{read_sales, write_features, write_holidays};
pub use metrics::{EvalResult, Metric, Rmspe, rmspe, rmspe_for_training};
#[cfg(unix)]
pub use suppress::{OutputSuppressor, suppress_output};
