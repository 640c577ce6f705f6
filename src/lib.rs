//! # Squeegee - Dataset Cleaning & Chart Dispatch
//!
//! Squeegee takes an uploaded tabular dataset (CSV), automatically fills its
//! missing values, classifies its columns, and turns UI chart selections into
//! declarative [`chart::ChartSpec`] values for an external renderer. It never
//! draws anything itself.
//!
//! ## Quick Start
//!
//! ```no_run
//! use squeegee::chart::ChartRequest;
//! use squeegee::session::Session;
//!
//! # fn example() -> squeegee::error::Result<()> {
//! let bytes = std::fs::read("data.csv")?;
//!
//! let mut session = Session::new();
//! session.upload_csv(&bytes)?;
//!
//! // Cleaning and classification are derived lazily and cached until the
//! // next upload replaces the raw table.
//! let report = session.clean_report()?;
//! println!(
//!     "missing cells: {} before, {} after",
//!     report.missing_before, report.missing_after
//! );
//!
//! let spec = session.chart(&ChartRequest::Heatmap)?;
//! println!("{}", serde_json::to_string_pretty(&spec)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`dataset`]: column classification, missing-value cleaning, summaries
//! - [`chart`]: chart request validation and specification building
//! - [`session`]: the per-session raw/cleaned dataset holder
//! - [`io`]: the CSV upload/download boundary
//! - [`error`]: error types, including the recoverable validation taxonomy
//! - [`logging`]: tracing setup (console + rotating file)
//!
//! ## Key Concepts
//!
//! The raw table is immutable once uploaded; cleaning derives a second table
//! from it rather than editing it in place. A new upload replaces the raw
//! table wholesale and invalidates everything derived from it. All validation
//! failures (unknown column, too many pie categories, ...) are recoverable:
//! they never discard the dataset and the session remains usable.

#![warn(clippy::all, rust_2018_idioms)]

pub mod chart;
pub mod dataset;
pub mod error;
pub mod io;
pub mod logging;
pub mod session;
