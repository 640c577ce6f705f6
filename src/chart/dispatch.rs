//! Builds chart specifications from validated requests.

use super::types::{
    CategoryCount, ChartData, ChartKind, ChartLabels, ChartRequest, ChartSpec, ChartStyle,
    CorrelationMatrix, HistogramBin, PieSlice,
};
use crate::dataset::{value_counts, Classification, ColumnKind};
use crate::error::ValidationError;
use polars::prelude::*;

/// Fixed bin count for numeric bar charts.
pub const HISTOGRAM_BINS: usize = 20;

/// Distinct-value ceiling for pie charts.
pub const MAX_PIE_CATEGORIES: usize = 20;

/// Validates `request` against the cleaned table and derives the chart's
/// data payload.
///
/// Every failure is a recoverable [`ValidationError`]; the tables are never
/// touched. Column references are checked against the cleaned table's
/// current column set, so a selection left over from a previous upload
/// surfaces as [`ValidationError::UnknownColumn`] rather than a crash.
pub fn build_chart(
    request: &ChartRequest,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    match request {
        ChartRequest::Scatter { x, y } => scatter(x, y, cleaned, classification),
        ChartRequest::BarOrHistogram { column } => {
            bar_or_histogram(column, cleaned, classification)
        }
        ChartRequest::Pie { column } => pie(column, cleaned, classification),
        ChartRequest::Heatmap => heatmap(cleaned, classification),
        ChartRequest::Box { column } => box_plot(column, cleaned, classification),
        ChartRequest::Line { column } => line(column, cleaned, classification),
    }
}

fn scatter(
    x: &str,
    y: &str,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    if classification.numeric().is_empty() {
        return Err(ValidationError::NoApplicableColumns {
            required: ColumnKind::Numeric,
        });
    }
    require_kind(classification, x, ColumnKind::Numeric)?;
    require_kind(classification, y, ColumnKind::Numeric)?;

    // Cleaning already resolved every missing cell, so no pair is dropped.
    let xs = numeric_cells(cleaned, x)?;
    let ys = numeric_cells(cleaned, y)?;
    let (x_values, y_values): (Vec<f64>, Vec<f64>) = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(a, b)| Some((a?, b?)))
        .unzip();

    Ok(ChartSpec {
        kind: ChartKind::Scatter,
        labels: ChartLabels {
            title: "Scatter Plot".to_owned(),
            x: Some(x.to_owned()),
            y: Some(y.to_owned()),
        },
        style: ChartStyle::default(),
        data: ChartData::Points {
            x: x_values,
            y: y_values,
        },
    })
}

fn bar_or_histogram(
    column: &str,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    match classification.kind_of(column) {
        None => Err(unknown_column(column)),
        Some(ColumnKind::Numeric) => {
            let values: Vec<f64> = numeric_cells(cleaned, column)?
                .into_iter()
                .flatten()
                .collect();
            Ok(ChartSpec {
                kind: ChartKind::BarOrHistogram,
                labels: ChartLabels {
                    title: format!("Histogram of {column}"),
                    x: Some(column.to_owned()),
                    y: Some("Frequency".to_owned()),
                },
                style: ChartStyle::bars(),
                data: ChartData::Histogram {
                    bins: bin_values(&values, HISTOGRAM_BINS),
                },
            })
        }
        Some(ColumnKind::Categorical) => {
            let series = column_series(cleaned, column)?;
            let entries = value_counts(&series)
                .into_iter()
                .map(|(label, count)| CategoryCount { label, count })
                .collect();
            Ok(ChartSpec {
                kind: ChartKind::BarOrHistogram,
                labels: ChartLabels {
                    title: format!("Bar Chart of {column}"),
                    x: Some(column.to_owned()),
                    y: Some("Count".to_owned()),
                },
                style: ChartStyle::bars(),
                data: ChartData::Counts { entries },
            })
        }
    }
}

fn pie(
    column: &str,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    require_kind(classification, column, ColumnKind::Categorical)?;

    let series = column_series(cleaned, column)?;
    let counts = value_counts(&series);
    if counts.len() > MAX_PIE_CATEGORIES {
        return Err(ValidationError::TooManyCategories {
            column: column.to_owned(),
            distinct: counts.len(),
        });
    }

    let total = cleaned.height();
    let slices = counts
        .into_iter()
        .map(|(label, count)| PieSlice {
            label,
            count,
            pct: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Pie,
        labels: ChartLabels {
            title: format!("Pie Chart of {column}"),
            x: None,
            y: None,
        },
        style: ChartStyle::pie(),
        data: ChartData::Slices { slices },
    })
}

fn heatmap(
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    let numeric = classification.numeric();
    if numeric.is_empty() {
        return Err(ValidationError::NoApplicableColumns {
            required: ColumnKind::Numeric,
        });
    }

    Ok(ChartSpec {
        kind: ChartKind::Heatmap,
        labels: ChartLabels {
            title: "Correlation Heatmap".to_owned(),
            x: None,
            y: None,
        },
        style: ChartStyle::heatmap(),
        data: ChartData::Matrix(correlation_matrix(cleaned, numeric)),
    })
}

fn box_plot(
    column: &str,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    require_kind(classification, column, ColumnKind::Numeric)?;
    let values = numeric_cells(cleaned, column)?.into_iter().flatten().collect();

    // No aggregation here: the renderer computes quartiles itself.
    Ok(ChartSpec {
        kind: ChartKind::Box,
        labels: ChartLabels {
            title: format!("Box Plot of {column}"),
            x: Some(column.to_owned()),
            y: None,
        },
        style: ChartStyle::default(),
        data: ChartData::Series { values },
    })
}

fn line(
    column: &str,
    cleaned: &DataFrame,
    classification: &Classification,
) -> Result<ChartSpec, ValidationError> {
    require_kind(classification, column, ColumnKind::Numeric)?;
    let values = numeric_cells(cleaned, column)?.into_iter().flatten().collect();

    Ok(ChartSpec {
        kind: ChartKind::Line,
        labels: ChartLabels {
            title: format!("Line Chart of {column}"),
            x: None,
            y: Some(column.to_owned()),
        },
        style: ChartStyle::line(),
        data: ChartData::Series { values },
    })
}

fn require_kind(
    classification: &Classification,
    column: &str,
    expected: ColumnKind,
) -> Result<(), ValidationError> {
    match classification.kind_of(column) {
        None => Err(unknown_column(column)),
        Some(kind) if kind == expected => Ok(()),
        Some(_) => Err(ValidationError::ColumnKindMismatch {
            column: column.to_owned(),
            expected,
        }),
    }
}

fn unknown_column(column: &str) -> ValidationError {
    ValidationError::UnknownColumn {
        column: column.to_owned(),
    }
}

fn column_series(df: &DataFrame, column: &str) -> Result<Series, ValidationError> {
    df.column(column)
        .map(|c| c.as_materialized_series().clone())
        .map_err(|_| unknown_column(column))
}

/// A numeric column's cells as `Option<f64>`, preserving row order.
fn numeric_cells(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>, ValidationError> {
    let series = column_series(df, column)?;
    let casted = series
        .cast(&DataType::Float64)
        .map_err(|_| ValidationError::ColumnKindMismatch {
            column: column.to_owned(),
            expected: ColumnKind::Numeric,
        })?;
    let ca = casted
        .f64()
        .map_err(|_| ValidationError::ColumnKindMismatch {
            column: column.to_owned(),
            expected: ColumnKind::Numeric,
        })?;
    Ok(ca.into_iter().collect())
}

/// Splits `values` into `bin_count` equal-width bins over their full range.
///
/// A constant column (zero range) gets a unit-width range starting at the
/// value, so every cell lands in the first bin.
fn bin_values(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    let width = range / bin_count as f64;

    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let idx = ((v - min) / width) as usize;
        let idx = idx.min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min + i as f64 * width;
            // Pin the final edge to the true maximum so it never drifts.
            let upper = if i + 1 == bin_count && max > min {
                max
            } else {
                lower + width
            };
            HistogramBin {
                lower,
                upper,
                count,
            }
        })
        .collect()
}

/// Pairwise Pearson correlation over the numeric columns, in classification
/// order. Columns whose correlation is undefined (e.g. zero variance)
/// contribute 0.0, and the diagonal is exactly 1.0.
fn correlation_matrix(df: &DataFrame, numeric: &[String]) -> CorrelationMatrix {
    let mut data = Vec::with_capacity(numeric.len());
    for i in 0..numeric.len() {
        let mut row = Vec::with_capacity(numeric.len());
        for j in 0..numeric.len() {
            if i == j {
                row.push(1.0);
                continue;
            }
            let corr = pearson(df, &numeric[i], &numeric[j]);
            row.push(corr.unwrap_or(0.0));
        }
        data.push(row);
    }

    CorrelationMatrix {
        columns: numeric.to_vec(),
        data,
    }
}

fn pearson(df: &DataFrame, a: &str, b: &str) -> Option<f64> {
    let sa = df
        .column(a)
        .ok()?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .ok()?;
    let sb = df
        .column(b)
        .ok()?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .ok()?;

    match (sa.f64(), sb.f64()) {
        (Ok(ca1), Ok(ca2)) => polars::prelude::cov::pearson_corr(ca1, ca2),
        _ => None,
    }
}
