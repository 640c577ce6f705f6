use super::types::Classification;
use polars::prelude::*;

/// Partitions a table's columns into numeric and categorical sets.
///
/// A column is numeric when its storage dtype is a numeric primitive
/// (integer or float). Everything else, including booleans and string
/// columns that merely look numeric, is categorical. The partition is pure:
/// a table with zero columns yields two empty sets.
pub fn classify(df: &DataFrame) -> Classification {
    let mut numeric = Vec::new();
    let mut categorical = Vec::new();

    for col in df.get_columns() {
        let name = col.name().to_string();
        if col.dtype().is_primitive_numeric() {
            numeric.push(name);
        } else {
            categorical.push(name);
        }
    }

    Classification::new(numeric, categorical)
}
