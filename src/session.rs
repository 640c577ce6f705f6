//! The per-session dataset holder.
//!
//! One browsing session holds at most one active dataset. The raw table is
//! replaced wholesale by a new upload and never mutated in place; the
//! cleaned table, its classification and the missing-cell report are derived
//! lazily and cached against a generation counter, so they are recomputed
//! exactly when the raw table changes rather than on every interaction.

use crate::chart::{build_chart, ChartRequest, ChartSpec};
use crate::dataset::{classify, clean_df, summarise, Classification, CleanReport, ColumnSummary};
use crate::error::{Result, ValidationError};
use crate::io::{parse_csv, serialize_csv};
use polars::prelude::*;

#[derive(Default)]
pub struct Session {
    raw: Option<DataFrame>,
    generation: u64,
    derived: Option<Derived>,
}

struct Derived {
    generation: u64,
    cleaned: DataFrame,
    classification: Classification,
    report: CleanReport,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active dataset with a freshly parsed upload.
    ///
    /// A parse failure leaves the previous dataset (if any) untouched.
    pub fn upload_csv(&mut self, bytes: &[u8]) -> Result<()> {
        let df = parse_csv(bytes)?;
        self.upload(df);
        Ok(())
    }

    /// Replaces the active dataset wholesale and invalidates everything
    /// derived from the previous one.
    pub fn upload(&mut self, df: DataFrame) {
        tracing::info!(rows = df.height(), columns = df.width(), "dataset uploaded");
        self.raw = Some(df);
        self.generation = self.generation.wrapping_add(1);
        self.derived = None;
    }

    pub fn has_dataset(&self) -> bool {
        self.raw.is_some()
    }

    /// The table exactly as uploaded.
    pub fn raw(&self) -> Result<&DataFrame> {
        self.raw
            .as_ref()
            .ok_or_else(|| ValidationError::NoDatasetLoaded.into())
    }

    /// The cleaned table derived from the current upload.
    pub fn cleaned(&mut self) -> Result<&DataFrame> {
        Ok(&self.ensure_derived()?.cleaned)
    }

    /// Column classification of the cleaned table.
    pub fn classification(&mut self) -> Result<&Classification> {
        Ok(&self.ensure_derived()?.classification)
    }

    /// Missing-cell counts before and after cleaning.
    pub fn clean_report(&mut self) -> Result<CleanReport> {
        Ok(self.ensure_derived()?.report)
    }

    /// Per-column summaries of the cleaned table.
    pub fn summaries(&mut self) -> Result<Vec<ColumnSummary>> {
        summarise(&self.ensure_derived()?.cleaned)
    }

    /// First `n` rows of the raw table, for the upload preview.
    pub fn raw_head(&self, n: usize) -> Result<DataFrame> {
        Ok(self.raw()?.head(Some(n)))
    }

    /// First `n` rows of the cleaned table.
    pub fn cleaned_head(&mut self, n: usize) -> Result<DataFrame> {
        Ok(self.cleaned()?.head(Some(n)))
    }

    /// Last `n` rows of the cleaned table.
    pub fn cleaned_tail(&mut self, n: usize) -> Result<DataFrame> {
        Ok(self.cleaned()?.tail(Some(n)))
    }

    /// Builds a chart specification against the cleaned table.
    pub fn chart(&mut self, request: &ChartRequest) -> Result<ChartSpec> {
        let derived = self.ensure_derived()?;
        build_chart(request, &derived.cleaned, &derived.classification).map_err(Into::into)
    }

    /// Builds a chart from the plain strings the UI boundary sends.
    pub fn chart_from_selection(
        &mut self,
        tag: &str,
        primary: Option<&str>,
        secondary: Option<&str>,
    ) -> Result<ChartSpec> {
        let request = ChartRequest::from_selection(tag, primary, secondary)?;
        self.chart(&request)
    }

    /// Serializes the cleaned table for download.
    pub fn download_cleaned(&mut self) -> Result<Vec<u8>> {
        serialize_csv(self.cleaned()?)
    }

    fn ensure_derived(&mut self) -> Result<&Derived> {
        let Some(raw) = self.raw.as_ref() else {
            return Err(ValidationError::NoDatasetLoaded.into());
        };

        if self
            .derived
            .as_ref()
            .is_none_or(|d| d.generation != self.generation)
        {
            let (cleaned, report) = clean_df(raw)?;
            let classification = classify(&cleaned);
            tracing::debug!(
                missing_before = report.missing_before,
                missing_after = report.missing_after,
                "derived cleaned table"
            );
            self.derived = Some(Derived {
                generation: self.generation,
                cleaned,
                classification,
                report,
            });
        }

        match self.derived.as_ref() {
            Some(derived) => Ok(derived),
            None => Err(ValidationError::NoDatasetLoaded.into()),
        }
    }
}
