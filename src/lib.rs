//! plotpad - turn a typed list of numbers into chart points and summary
//! statistics.
//!
//! - [`data::parser`]: free text to an ordered, labeled series
//! - [`processing::statistics`]: min / max / average of a series
//! - [`state`]: the playground input, its settings and project files

pub mod data;
pub mod processing;
pub mod state;

pub use data::parser::parse_series;
pub use processing::statistics::SeriesSummary;
pub use state::data_series::{ChartPoint, DataSeries};

/// Summary of `series`, or `None` when it is empty.
pub fn summarize(series: &DataSeries) -> Option<SeriesSummary> {
    series.summary()
}
