//! Per-column summaries for the dataset information panel.
//!
//! Numeric columns get the usual descriptive statistics, categorical ones a
//! distinct count and their most frequent value.

use super::types::ColumnKind;
use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub count: usize,
    pub nulls: usize,
    pub profile: ColumnProfile,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnProfile {
    Numeric(NumericProfile),
    Categorical(CategoricalProfile),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NumericProfile {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub distinct: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoricalProfile {
    pub distinct: usize,
    pub top_value: Option<(String, usize)>,
}

/// Summarises every column of `df`, in table order.
pub fn summarise(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    let row_count = df.height();
    let mut summaries = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().to_string();
        let series = column.as_materialized_series();
        let nulls = series.null_count();

        let (kind, profile) = if series.dtype().is_primitive_numeric() {
            (
                ColumnKind::Numeric,
                ColumnProfile::Numeric(profile_numeric(series)?),
            )
        } else {
            (
                ColumnKind::Categorical,
                ColumnProfile::Categorical(profile_categorical(series)),
            )
        };

        summaries.push(ColumnSummary {
            name,
            kind,
            count: row_count,
            nulls,
            profile,
        });
    }

    Ok(summaries)
}

fn profile_numeric(series: &Series) -> Result<NumericProfile> {
    let casted = series.cast(&DataType::Float64)?;
    let ca = casted.f64()?;

    Ok(NumericProfile {
        mean: ca.mean(),
        std_dev: ca.std(1),
        min: ca.min(),
        q1: ca.quantile(0.25, QuantileMethod::Linear).unwrap_or(None),
        median: ca.median(),
        q3: ca.quantile(0.75, QuantileMethod::Linear).unwrap_or(None),
        max: ca.max(),
        distinct: series.n_unique().unwrap_or(0),
    })
}

fn profile_categorical(series: &Series) -> CategoricalProfile {
    let counts = value_counts(series);
    CategoricalProfile {
        distinct: counts.len(),
        top_value: counts.into_iter().next(),
    }
}

/// Frequency of each distinct non-missing value in a column.
///
/// Ordering convention: descending count, ties broken by first occurrence in
/// row order. The convention is load-bearing for categorical bar charts, so
/// it is pinned by tests.
pub fn value_counts(series: &Series) -> Vec<(String, usize)> {
    let Ok(casted) = series.cast(&DataType::String) else {
        return Vec::new();
    };
    let Ok(ca) = casted.str() else {
        return Vec::new();
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in ca.into_iter().flatten() {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut entries: Vec<(usize, &str, usize)> = order
        .into_iter()
        .enumerate()
        .map(|(seen, value)| (seen, value, counts.get(value).copied().unwrap_or(0)))
        .collect();
    entries.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    entries
        .into_iter()
        .map(|(_, value, count)| (value.to_owned(), count))
        .collect()
}
