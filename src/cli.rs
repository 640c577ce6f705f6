use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use squeegee::dataset::{Classification, CleanReport, ColumnSummary};
use squeegee::io::{load_csv, save_csv};
use squeegee::session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squeegee", about = "Dataset cleaning and chart specification tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a CSV file and save the result
    Clean {
        /// Path to the CSV file to clean
        file: PathBuf,

        /// Output file path. Defaults to `cleaned_<name>.csv` next to the input.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print classification and per-column summaries as JSON
    Inspect {
        /// Path to the CSV file to inspect
        file: PathBuf,
    },
    /// Build a chart specification and emit it as JSON
    Chart {
        /// Path to the CSV file to chart
        file: PathBuf,

        /// Chart kind: scatter, bar_or_histogram, pie, heatmap, box, line
        #[arg(short, long)]
        kind: String,

        /// Column selection (bar, pie, box, line)
        #[arg(short, long)]
        column: Option<String>,

        /// X-axis column (scatter)
        #[arg(short = 'x', long)]
        x_axis: Option<String>,

        /// Y-axis column (scatter)
        #[arg(short = 'y', long)]
        y_axis: Option<String>,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Clean { file, output } => handle_clean(file, output),
        Commands::Inspect { file } => handle_inspect(file),
        Commands::Chart {
            file,
            kind,
            column,
            x_axis,
            y_axis,
            output,
        } => handle_chart(file, kind, column, x_axis, y_axis, output),
    }
}

#[derive(Serialize)]
struct InspectReport {
    rows: usize,
    columns: usize,
    classification: Classification,
    report: CleanReport,
    summary: Vec<ColumnSummary>,
}

fn handle_clean(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let output = match output {
        Some(o) => o,
        None => default_output(&file)?,
    };

    let mut session = load_session(&file)?;
    let report = session.clean_report()?;
    println!(
        "Missing values before cleaning: {}, after: {}",
        report.missing_before, report.missing_after
    );

    save_csv(session.cleaned()?, &output).context("Failed to save cleaned file")?;
    println!("Cleaned dataset written to {}", output.display());
    Ok(())
}

fn handle_inspect(file: PathBuf) -> Result<()> {
    let mut session = load_session(&file)?;

    let report = InspectReport {
        rows: session.cleaned()?.height(),
        columns: session.cleaned()?.width(),
        classification: session.classification()?.clone(),
        report: session.clean_report()?,
        summary: session.summaries()?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn handle_chart(
    file: PathBuf,
    kind: String,
    column: Option<String>,
    x_axis: Option<String>,
    y_axis: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut session = load_session(&file)?;

    // Scatter reads -x/-y; every other kind reads --column.
    let primary = x_axis.as_deref().or(column.as_deref());
    let secondary = y_axis.as_deref();
    let spec = session.chart_from_selection(&kind, primary, secondary)?;

    let json = serde_json::to_string_pretty(&spec)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json).context("Failed to write chart specification")?;
            println!("Chart specification written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_session(file: &PathBuf) -> Result<Session> {
    let df = load_csv(file).with_context(|| format!("Failed to load {}", file.display()))?;
    let mut session = Session::new();
    session.upload(df);
    Ok(session)
}

fn default_output(input: &PathBuf) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?
        .to_string_lossy();
    Ok(input.with_file_name(format!("cleaned_{stem}.csv")))
}
