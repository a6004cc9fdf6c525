//! Input/output helpers.
//!
//! - sales CSV → typed `SalesTable` (`ingest`)
//! - featured and holiday tables → CSV (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
