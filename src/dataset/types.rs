use serde::{Deserialize, Serialize};
use std::fmt;

/// The two column kinds the dashboard distinguishes. Anything that is not a
/// numeric primitive (text, booleans, mixed content) counts as categorical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A partition of a table's column names into numeric and categorical sets.
///
/// The sets are disjoint and exhaustive over the table's columns, and each
/// preserves the table's original column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    numeric: Vec<String>,
    categorical: Vec<String>,
}

impl Classification {
    pub(crate) fn new(numeric: Vec<String>, categorical: Vec<String>) -> Self {
        Self {
            numeric,
            categorical,
        }
    }

    /// Numeric column names in original table order.
    pub fn numeric(&self) -> &[String] {
        &self.numeric
    }

    /// Categorical column names in original table order.
    pub fn categorical(&self) -> &[String] {
        &self.categorical
    }

    /// The kind of `column`, or `None` if the table has no such column.
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|c| c == column) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|c| c == column) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.kind_of(column).is_some()
    }

    pub fn column_count(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }
}

/// Diagnostic produced by cleaning: total missing cells before and after.
///
/// The fallback substitution is exhaustive, so `missing_after` is always 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub missing_before: usize,
    pub missing_after: usize,
}

impl CleanReport {
    pub fn had_missing(&self) -> bool {
        self.missing_before > 0
    }
}
