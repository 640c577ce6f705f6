//! Chart request validation and specification building.
//!
//! The dispatcher is read-only: it validates a request against the cleaned
//! table and its classification, derives the data slice the chart needs, and
//! returns a declarative [`ChartSpec`]. Rendering belongs entirely to the
//! external renderer consuming that value.

pub mod dispatch;
pub mod types;

pub use dispatch::{build_chart, HISTOGRAM_BINS, MAX_PIE_CATEGORIES};
pub use types::{
    CategoryCount, ChartData, ChartKind, ChartLabels, ChartRequest, ChartSpec, ChartStyle,
    CorrelationMatrix, HistogramBin, PieSlice,
};

#[cfg(test)]
mod tests;
