use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of chart kinds the dashboard offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Scatter,
    BarOrHistogram,
    Pie,
    Heatmap,
    Box,
    Line,
}

impl ChartKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::BarOrHistogram => "bar_or_histogram",
            Self::Pie => "pie",
            Self::Heatmap => "heatmap",
            Self::Box => "box",
            Self::Line => "line",
        }
    }

    /// Parses a chart-kind tag from the UI boundary. `bar` and `histogram`
    /// are accepted as aliases since the UI presents them as one control.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "scatter" => Some(Self::Scatter),
            "bar_or_histogram" | "bar" | "histogram" => Some(Self::BarOrHistogram),
            "pie" => Some(Self::Pie),
            "heatmap" => Some(Self::Heatmap),
            "box" => Some(Self::Box),
            "line" => Some(Self::Line),
            _ => None,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A validated chart selection: which chart, over which column(s).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartRequest {
    Scatter { x: String, y: String },
    BarOrHistogram { column: String },
    Pie { column: String },
    Heatmap,
    Box { column: String },
    Line { column: String },
}

impl ChartRequest {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Scatter { .. } => ChartKind::Scatter,
            Self::BarOrHistogram { .. } => ChartKind::BarOrHistogram,
            Self::Pie { .. } => ChartKind::Pie,
            Self::Heatmap => ChartKind::Heatmap,
            Self::Box { .. } => ChartKind::Box,
            Self::Line { .. } => ChartKind::Line,
        }
    }

    /// Builds a request from the plain strings the UI boundary sends: a
    /// chart-kind tag plus up to two column selections.
    ///
    /// Scatter takes `primary` as its x axis and `secondary` as its y axis;
    /// the single-column kinds take `primary`; heatmap ignores both.
    pub fn from_selection(
        tag: &str,
        primary: Option<&str>,
        secondary: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let kind = ChartKind::from_tag(tag).ok_or_else(|| ValidationError::UnknownChartKind {
            tag: tag.to_owned(),
        })?;

        let require_primary = || {
            primary
                .map(str::to_owned)
                .ok_or(ValidationError::MissingColumnSelection { kind })
        };

        match kind {
            ChartKind::Scatter => {
                let x = require_primary()?;
                let y = secondary
                    .map(str::to_owned)
                    .ok_or(ValidationError::MissingColumnSelection { kind })?;
                Ok(Self::Scatter { x, y })
            }
            ChartKind::BarOrHistogram => Ok(Self::BarOrHistogram {
                column: require_primary()?,
            }),
            ChartKind::Pie => Ok(Self::Pie {
                column: require_primary()?,
            }),
            ChartKind::Heatmap => Ok(Self::Heatmap),
            ChartKind::Box => Ok(Self::Box {
                column: require_primary()?,
            }),
            ChartKind::Line => Ok(Self::Line {
                column: require_primary()?,
            }),
        }
    }
}

/// A declarative chart description for the external renderer.
///
/// The data payload is always derived from the cleaned table, never the raw
/// one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: ChartLabels,
    pub style: ChartStyle,
    pub data: ChartData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Styling hints carried through to the renderer.
///
/// The values match the dashboard's fixed palette choices; a renderer is
/// free to ignore them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f32>,
}

impl ChartStyle {
    pub(crate) fn bars() -> Self {
        Self {
            fill: Some("skyblue".to_owned()),
            edge: Some("black".to_owned()),
            ..Self::default()
        }
    }

    pub(crate) fn pie() -> Self {
        Self {
            palette: Some("pastel".to_owned()),
            start_angle: Some(90.0),
            ..Self::default()
        }
    }

    pub(crate) fn heatmap() -> Self {
        Self {
            cmap: Some("coolwarm".to_owned()),
            ..Self::default()
        }
    }

    pub(crate) fn line() -> Self {
        Self {
            fill: Some("skyblue".to_owned()),
            line_width: Some(2.0),
            ..Self::default()
        }
    }
}

/// The per-kind data payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartData {
    /// Paired series for a scatter plot.
    Points { x: Vec<f64>, y: Vec<f64> },
    /// Binned frequencies for a numeric bar chart.
    Histogram { bins: Vec<HistogramBin> },
    /// Frequency per distinct value for a categorical bar chart.
    Counts { entries: Vec<CategoryCount> },
    /// Value counts plus percentages for a pie chart.
    Slices { slices: Vec<PieSlice> },
    /// Pairwise Pearson correlations over the numeric columns.
    Matrix(CorrelationMatrix),
    /// A single column's full value series in row order (box, line).
    Series { values: Vec<f64> },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// `count / total_rows * 100`.
    pub pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub data: Vec<Vec<f64>>,
}
