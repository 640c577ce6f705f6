use crate::dataset::{classify, ColumnKind};
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_partition_is_disjoint_and_exhaustive() -> Result<()> {
    let df = df!(
        "age" => &[25i64, 30, 35],
        "name" => &["a", "b", "c"],
        "score" => &[1.5f64, 2.5, 3.5],
        "active" => &[true, false, true]
    )?;

    let classification = classify(&df);

    assert_eq!(classification.numeric(), ["age".to_owned(), "score".to_owned()]);
    assert_eq!(
        classification.categorical(),
        ["name".to_owned(), "active".to_owned()]
    );
    assert_eq!(classification.column_count(), df.width());

    for col in df.get_column_names() {
        assert!(
            classification.contains(col.as_str()),
            "column '{col}' unclassified"
        );
    }
    for col in classification.numeric() {
        assert!(!classification.categorical().contains(col));
    }
    Ok(())
}

#[test]
fn test_empty_table_yields_empty_sets() {
    let df = DataFrame::empty();
    let classification = classify(&df);
    assert!(classification.numeric().is_empty());
    assert!(classification.categorical().is_empty());
}

#[test]
fn test_numeric_looking_text_stays_categorical() -> Result<()> {
    let df = df!("code" => &["1", "2", "3"])?;
    let classification = classify(&df);
    assert_eq!(classification.kind_of("code"), Some(ColumnKind::Categorical));
    Ok(())
}

#[test]
fn test_all_null_float_column_is_numeric() -> Result<()> {
    let s = Series::new("score".into(), vec![None::<f64>, None]);
    let df = DataFrame::new(vec![Column::from(s)])?;
    let classification = classify(&df);
    assert_eq!(classification.kind_of("score"), Some(ColumnKind::Numeric));
    Ok(())
}

#[test]
fn test_unknown_column_has_no_kind() -> Result<()> {
    let df = df!("a" => &[1i64])?;
    assert_eq!(classify(&df).kind_of("missing"), None);
    Ok(())
}
