use super::dispatch::{build_chart, MAX_PIE_CATEGORIES};
use super::types::{ChartData, ChartKind, ChartRequest};
use crate::dataset::{classify, Classification, ColumnKind};
use crate::error::ValidationError;
use anyhow::Result;
use polars::prelude::*;

fn classified(df: &DataFrame) -> Classification {
    classify(df)
}

#[test]
fn test_scatter_pairs_two_numeric_columns() -> Result<()> {
    let df = df!(
        "a" => &[1.0f64, 2.0, 3.0],
        "b" => &[10.0f64, 20.0, 30.0],
        "label" => &["x", "y", "z"]
    )?;

    let spec = build_chart(
        &ChartRequest::Scatter {
            x: "a".to_owned(),
            y: "b".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("scatter");

    assert_eq!(spec.kind, ChartKind::Scatter);
    assert_eq!(spec.labels.x.as_deref(), Some("a"));
    assert_eq!(spec.labels.y.as_deref(), Some("b"));
    let ChartData::Points { x, y } = spec.data else {
        panic!("expected point data");
    };
    assert_eq!(x, vec![1.0, 2.0, 3.0]);
    assert_eq!(y, vec![10.0, 20.0, 30.0]);
    Ok(())
}

#[test]
fn test_scatter_without_numeric_columns_is_rejected() -> Result<()> {
    let df = df!("label" => &["x", "y"])?;

    let err = build_chart(
        &ChartRequest::Scatter {
            x: "a".to_owned(),
            y: "b".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::NoApplicableColumns {
            required: ColumnKind::Numeric
        }
    );
    Ok(())
}

#[test]
fn test_scatter_on_categorical_column_is_a_kind_mismatch() -> Result<()> {
    let df = df!(
        "a" => &[1.0f64, 2.0],
        "label" => &["x", "y"]
    )?;

    let err = build_chart(
        &ChartRequest::Scatter {
            x: "a".to_owned(),
            y: "label".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::ColumnKindMismatch {
            column: "label".to_owned(),
            expected: ColumnKind::Numeric
        }
    );
    Ok(())
}

#[test]
fn test_histogram_uses_twenty_bins_and_counts_every_row() -> Result<()> {
    let values: Vec<f64> = (0..100).map(f64::from).collect();
    let df = df!("v" => &values)?;

    let spec = build_chart(
        &ChartRequest::BarOrHistogram {
            column: "v".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("histogram");

    assert_eq!(spec.labels.title, "Histogram of v");
    assert_eq!(spec.labels.y.as_deref(), Some("Frequency"));
    let ChartData::Histogram { bins } = spec.data else {
        panic!("expected histogram data");
    };
    assert_eq!(bins.len(), 20);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
    assert_eq!(bins[0].lower, 0.0);
    assert_eq!(bins[19].upper, 99.0);
    Ok(())
}

#[test]
fn test_constant_column_histogram_lands_in_first_bin() -> Result<()> {
    let df = df!("v" => &[7.0f64, 7.0, 7.0])?;

    let spec = build_chart(
        &ChartRequest::BarOrHistogram {
            column: "v".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("histogram");

    let ChartData::Histogram { bins } = spec.data else {
        panic!("expected histogram data");
    };
    assert_eq!(bins.len(), 20);
    assert_eq!(bins[0].count, 3);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    Ok(())
}

#[test]
fn test_categorical_bar_orders_by_count_then_first_occurrence() -> Result<()> {
    let df = df!("dept" => &["sales", "eng", "eng", "hr", "sales", "eng"])?;

    let spec = build_chart(
        &ChartRequest::BarOrHistogram {
            column: "dept".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("bar");

    assert_eq!(spec.labels.title, "Bar Chart of dept");
    assert_eq!(spec.labels.y.as_deref(), Some("Count"));
    let ChartData::Counts { entries } = spec.data else {
        panic!("expected count data");
    };
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    // "sales" and "hr" differ in count; "sales" precedes "hr" by count, and
    // "eng" wins outright.
    assert_eq!(labels, ["eng", "sales", "hr"]);
    assert_eq!(entries[0].count, 3);
    Ok(())
}

#[test]
fn test_pie_counts_and_percentages() -> Result<()> {
    let df = df!("city" => &["NYC", "LA", "NYC", "SF"])?;

    let spec = build_chart(
        &ChartRequest::Pie {
            column: "city".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("pie");

    let ChartData::Slices { slices } = spec.data else {
        panic!("expected slice data");
    };
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].label, "NYC");
    assert_eq!(slices[0].count, 2);
    assert_eq!(slices[0].pct, 50.0);
    assert_eq!(slices[1].pct, 25.0);
    Ok(())
}

#[test]
fn test_pie_with_too_many_categories_is_rejected() -> Result<()> {
    let values: Vec<String> = (0..25).map(|i| format!("cat{i}")).collect();
    let df = df!("c" => &values)?;

    let err = build_chart(
        &ChartRequest::Pie {
            column: "c".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::TooManyCategories {
            column: "c".to_owned(),
            distinct: 25
        }
    );
    Ok(())
}

#[test]
fn test_pie_accepts_exactly_the_category_limit() -> Result<()> {
    let values: Vec<String> = (0..MAX_PIE_CATEGORIES).map(|i| format!("cat{i}")).collect();
    let df = df!("c" => &values)?;

    let spec = build_chart(
        &ChartRequest::Pie {
            column: "c".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("pie at the limit");
    let ChartData::Slices { slices } = spec.data else {
        panic!("expected slice data");
    };
    assert_eq!(slices.len(), MAX_PIE_CATEGORIES);
    Ok(())
}

#[test]
fn test_pie_on_numeric_column_is_a_kind_mismatch() -> Result<()> {
    let df = df!("v" => &[1.0f64, 2.0])?;

    let err = build_chart(
        &ChartRequest::Pie {
            column: "v".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::ColumnKindMismatch {
            column: "v".to_owned(),
            expected: ColumnKind::Categorical
        }
    );
    Ok(())
}

#[test]
fn test_heatmap_of_perfectly_anticorrelated_columns() -> Result<()> {
    let df = df!(
        "a" => &[1.0f64, 2.0, 3.0],
        "b" => &[3.0f64, 2.0, 1.0]
    )?;

    let spec = build_chart(&ChartRequest::Heatmap, &df, &classified(&df)).expect("heatmap");

    let ChartData::Matrix(matrix) = spec.data else {
        panic!("expected matrix data");
    };
    assert_eq!(matrix.columns, ["a".to_owned(), "b".to_owned()]);
    assert_eq!(matrix.data[0][0], 1.0);
    assert_eq!(matrix.data[1][1], 1.0);
    assert!((matrix.data[0][1] + 1.0).abs() < 1e-12);
    assert!((matrix.data[1][0] + 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_heatmap_with_single_numeric_column_is_trivial() -> Result<()> {
    let df = df!(
        "a" => &[1.0f64, 2.0],
        "label" => &["x", "y"]
    )?;

    let spec = build_chart(&ChartRequest::Heatmap, &df, &classified(&df)).expect("heatmap");
    let ChartData::Matrix(matrix) = spec.data else {
        panic!("expected matrix data");
    };
    assert_eq!(matrix.columns, ["a".to_owned()]);
    assert_eq!(matrix.data, vec![vec![1.0]]);
    Ok(())
}

#[test]
fn test_heatmap_without_numeric_columns_is_rejected() -> Result<()> {
    let df = df!("label" => &["x", "y"])?;

    let err = build_chart(&ChartRequest::Heatmap, &df, &classified(&df)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NoApplicableColumns {
            required: ColumnKind::Numeric
        }
    );
    Ok(())
}

#[test]
fn test_box_and_line_carry_the_full_series_in_row_order() -> Result<()> {
    let df = df!("v" => &[3.0f64, 1.0, 2.0])?;
    let classification = classified(&df);

    for request in [
        ChartRequest::Box {
            column: "v".to_owned(),
        },
        ChartRequest::Line {
            column: "v".to_owned(),
        },
    ] {
        let spec = build_chart(&request, &df, &classification).expect("series chart");
        let ChartData::Series { values } = spec.data else {
            panic!("expected series data");
        };
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }
    Ok(())
}

#[test]
fn test_unknown_column_is_reported_not_a_crash() -> Result<()> {
    let df = df!("v" => &[1.0f64, 2.0])?;

    let err = build_chart(
        &ChartRequest::Line {
            column: "stale".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::UnknownColumn {
            column: "stale".to_owned()
        }
    );
    Ok(())
}

#[test]
fn test_request_from_selection_strings() {
    let request = ChartRequest::from_selection("scatter", Some("a"), Some("b")).expect("scatter");
    assert_eq!(
        request,
        ChartRequest::Scatter {
            x: "a".to_owned(),
            y: "b".to_owned()
        }
    );

    let request = ChartRequest::from_selection("histogram", Some("v"), None).expect("alias");
    assert_eq!(request.kind(), ChartKind::BarOrHistogram);

    assert_eq!(
        ChartRequest::from_selection("heatmap", None, None),
        Ok(ChartRequest::Heatmap)
    );

    assert_eq!(
        ChartRequest::from_selection("pie", None, None),
        Err(ValidationError::MissingColumnSelection {
            kind: ChartKind::Pie
        })
    );

    assert_eq!(
        ChartRequest::from_selection("scatter", Some("a"), None),
        Err(ValidationError::MissingColumnSelection {
            kind: ChartKind::Scatter
        })
    );

    assert_eq!(
        ChartRequest::from_selection("sunburst", None, None),
        Err(ValidationError::UnknownChartKind {
            tag: "sunburst".to_owned()
        })
    );
}

#[test]
fn test_chart_spec_serializes_for_the_renderer() -> Result<()> {
    let df = df!("city" => &["NYC", "LA", "NYC"])?;

    let spec = build_chart(
        &ChartRequest::Pie {
            column: "city".to_owned(),
        },
        &df,
        &classified(&df),
    )
    .expect("pie");

    let json = serde_json::to_string(&spec)?;
    assert!(json.contains("\"kind\":\"pie\""));
    assert!(json.contains("\"pastel\""));
    assert!(json.contains("\"NYC\""));
    Ok(())
}
