use crate::dataset::{summarise, value_counts, ColumnKind, ColumnProfile};
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_numeric_profile_statistics() -> Result<()> {
    let df = df!("v" => &[1.0f64, 2.0, 3.0, 4.0, 5.0])?;
    let summaries = summarise(&df)?;

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.kind, ColumnKind::Numeric);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.nulls, 0);

    let ColumnProfile::Numeric(profile) = &summary.profile else {
        panic!("expected numeric profile");
    };
    assert_eq!(profile.mean, Some(3.0));
    assert_eq!(profile.min, Some(1.0));
    assert_eq!(profile.median, Some(3.0));
    assert_eq!(profile.max, Some(5.0));
    assert_eq!(profile.distinct, 5);
    Ok(())
}

#[test]
fn test_categorical_profile_top_value() -> Result<()> {
    let df = df!("dept" => &["eng", "sales", "eng", "eng", "hr"])?;
    let summaries = summarise(&df)?;

    let ColumnProfile::Categorical(profile) = &summaries[0].profile else {
        panic!("expected categorical profile");
    };
    assert_eq!(profile.distinct, 3);
    assert_eq!(profile.top_value, Some(("eng".to_owned(), 3)));
    Ok(())
}

#[test]
fn test_nulls_counted_per_column() -> Result<()> {
    let df = df!(
        "a" => &[Some(1.0f64), None, Some(3.0)],
        "b" => &[None::<&str>, Some("x"), None]
    )?;
    let summaries = summarise(&df)?;
    assert_eq!(summaries[0].nulls, 1);
    assert_eq!(summaries[1].nulls, 2);
    Ok(())
}

#[test]
fn test_value_counts_orders_by_count_then_first_occurrence() -> Result<()> {
    // "b" and "c" tie on count; "b" appears first in row order.
    let s = Series::new("v".into(), vec!["b", "a", "c", "a", "b", "c", "a"]);
    let counts = value_counts(&s);

    assert_eq!(
        counts,
        vec![
            ("a".to_owned(), 3),
            ("b".to_owned(), 2),
            ("c".to_owned(), 2),
        ]
    );
    Ok(())
}

#[test]
fn test_value_counts_skips_missing_cells() -> Result<()> {
    let s = Series::new("v".into(), vec![Some("x"), None, Some("x"), None]);
    let counts = value_counts(&s);
    assert_eq!(counts, vec![("x".to_owned(), 2)]);
    Ok(())
}
