//! Centralized error handling for squeegee.
//!
//! Two layers of errors exist here:
//!
//! - [`SqueegeeError`] is the crate-wide error type. Infrastructure failures
//!   (I/O, CSV parsing, dataframe operations) land in its opaque variants.
//! - [`ValidationError`] is the recoverable, user-correctable taxonomy. Every
//!   variant corresponds to a condition the UI surfaces as an inline message
//!   next to the control that triggered it; none of them discard the loaded
//!   dataset or make the session unusable.
//!
//! `From` conversions let the `?` operator move errors between layers:
//!
//! ```
//! use squeegee::error::{Result, ValidationError};
//!
//! fn guard(loaded: bool) -> Result<()> {
//!     if !loaded {
//!         // ValidationError converts into SqueegeeError::Validation
//!         return Err(ValidationError::NoDatasetLoaded.into());
//!     }
//!     Ok(())
//! }
//! ```

use crate::chart::ChartKind;
use crate::dataset::ColumnKind;
use std::fmt;

/// Main error type for squeegee operations.
#[derive(Debug)]
pub enum SqueegeeError {
    /// I/O errors (reading or writing dataset files).
    Io(std::io::Error),

    /// Malformed upload content; the parse boundary rejected it before any
    /// table came into existence.
    Csv(String),

    /// Dataframe processing errors (Polars).
    DataProcessing(String),

    /// Configuration or serialization errors.
    Config(String),

    /// A recoverable, user-correctable validation condition.
    Validation(ValidationError),
}

impl fmt::Display for SqueegeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(msg) => write!(f, "CSV parse error: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SqueegeeError {}

impl From<std::io::Error> for SqueegeeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for SqueegeeError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for SqueegeeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<ValidationError> for SqueegeeError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl SqueegeeError {
    /// The validation condition carried by this error, if that is what it is.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for squeegee operations.
pub type Result<T> = std::result::Result<T, SqueegeeError>;

/// Recoverable validation conditions.
///
/// These are non-fatal by design: the failing operation is rejected, the
/// session keeps its raw and cleaned tables, and every other operation stays
/// available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A derived operation was requested before any upload happened.
    NoDatasetLoaded,

    /// Pie chart requested on a column with more distinct values than a pie
    /// can sensibly show.
    TooManyCategories { column: String, distinct: usize },

    /// The chart kind needs columns of a kind the dataset does not have at
    /// all (e.g. a scatter plot on a dataset with zero numeric columns).
    NoApplicableColumns { required: ColumnKind },

    /// The referenced column is absent from the current cleaned table, e.g.
    /// a selection that went stale when a new upload replaced the dataset.
    UnknownColumn { column: String },

    /// A chart-kind tag from the UI boundary did not parse.
    UnknownChartKind { tag: String },

    /// The referenced column exists but is not of the kind the chart needs.
    ColumnKindMismatch { column: String, expected: ColumnKind },

    /// The chart kind needs a column selection and none arrived.
    MissingColumnSelection { kind: ChartKind },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDatasetLoaded => {
                write!(f, "no dataset loaded; please upload a dataset first")
            }
            Self::TooManyCategories { column, distinct } => write!(
                f,
                "column '{column}' has {distinct} distinct values, too many for a pie chart; \
                 please select a column with fewer categories"
            ),
            Self::NoApplicableColumns { required } => {
                write!(f, "the dataset has no {required} columns for this chart")
            }
            Self::UnknownColumn { column } => {
                write!(f, "column '{column}' does not exist in the current dataset")
            }
            Self::UnknownChartKind { tag } => write!(f, "unknown chart kind '{tag}'"),
            Self::ColumnKindMismatch { column, expected } => {
                write!(f, "column '{column}' is not a {expected} column")
            }
            Self::MissingColumnSelection { kind } => {
                write!(f, "chart kind '{kind}' requires a column selection")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
