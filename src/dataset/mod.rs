//! Dataset inspection and cleaning.
//!
//! The raw uploaded table is never mutated; [`clean_df`] derives a cleaned
//! copy and [`classify`] partitions columns into numeric and categorical
//! sets. [`summarise`] restores the per-column overview the dashboard shows
//! alongside the cleaned preview.

pub mod classify;
pub mod clean;
pub mod summary;
pub mod types;

pub use classify::classify;
pub use clean::{clean_df, missing_cells, UNKNOWN_TOKEN};
pub use summary::{
    summarise, value_counts, CategoricalProfile, ColumnProfile, ColumnSummary, NumericProfile,
};
pub use types::{Classification, CleanReport, ColumnKind};

#[cfg(test)]
mod tests;
