//! Missing-value cleaning.
//!
//! The policy mirrors the dashboard's one-pass fill: numeric gaps take the
//! column mean, everything still missing after that becomes the literal text
//! `"Unknown"`. A numeric column with no values at all has no mean and falls
//! through to the text fallback, which turns its storage dtype into string.
//!
//! Cleaning is deterministic and total: identical input tables always
//! produce identical output, and the output never contains a missing cell.

use super::classify::classify;
use super::types::CleanReport;
use crate::error::Result;
use polars::prelude::*;

/// The literal substituted for any missing cell the mean rule cannot fill.
pub const UNKNOWN_TOKEN: &str = "Unknown";

/// Derives a cleaned copy of `df` plus the missing-cell diagnostic.
///
/// Row count, column count and column order are preserved; only cell values
/// differ (and, for fallback columns, the storage dtype). Columns without
/// missing cells pass through untouched, which makes cleaning a fixed point
/// on already-clean tables.
pub fn clean_df(df: &DataFrame) -> Result<(DataFrame, CleanReport)> {
    let classification = classify(df);
    let missing_before = missing_cells(df)?;

    let mut exprs = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = column.name().as_str();
        let series = column.as_materialized_series();
        let missing = missing_in_series(series)?;

        let expr = if missing == 0 {
            col(name)
        } else if classification.kind_of(name) == Some(super::ColumnKind::Numeric)
            && missing < series.len()
        {
            // Mean over the column's own non-missing values. Float NaN is
            // normalised to null first so it neither poisons the mean nor
            // survives the fill.
            let base = if series.dtype().is_float() {
                col(name).fill_nan(lit(NULL))
            } else {
                col(name)
            };
            base.clone().fill_null(base.mean())
        } else {
            // Categorical columns, and numeric columns whose mean is
            // undefined because every cell is missing.
            let base = if series.dtype().is_float() {
                col(name).fill_nan(lit(NULL))
            } else {
                col(name)
            };
            base.cast(DataType::String).fill_null(lit(UNKNOWN_TOKEN))
        };

        exprs.push(expr.alias(name));
    }

    let cleaned = df.clone().lazy().select(exprs).collect()?;
    let missing_after = missing_cells(&cleaned)?;

    Ok((
        cleaned,
        CleanReport {
            missing_before,
            missing_after,
        },
    ))
}

/// Total count of missing cells in a table.
///
/// Missing means a null cell, or a float NaN (the glossary's
/// "NaN-equivalent"; the parse boundary can produce them from literal `NaN`
/// tokens).
pub fn missing_cells(df: &DataFrame) -> Result<usize> {
    let mut total = 0;
    for column in df.get_columns() {
        total += missing_in_series(column.as_materialized_series())?;
    }
    Ok(total)
}

fn missing_in_series(series: &Series) -> Result<usize> {
    let mut missing = series.null_count();
    if series.dtype().is_float() {
        let casted = series.cast(&DataType::Float64)?;
        let ca = casted.f64()?;
        missing += ca.into_iter().flatten().filter(|v| v.is_nan()).count();
    }
    Ok(missing)
}
