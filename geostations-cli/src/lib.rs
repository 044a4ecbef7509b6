//! Command-line interface for exporting station records from shapefiles.
//!
//! One required positional argument names the `.shp` dataset; an optional
//! second token equal to `-sql` (compared case-insensitively) switches the
//! output from delimited lines to SQL INSERT statements. Any other second
//! token is ignored and delimited mode is used. Records go to stdout,
//! strictly in dataset order, one feature at a time.

#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geostations_core::{
    EncodingRepairError, FeatureSourceError, RecordError, RecordFormat, build_title, walk,
};
use geostations_data::{MandarinTransliterator, ShapefileSource};
use thiserror::Error;

const SQL_MODE_TOKEN: &str = "-sql";

/// Run the exporter with the current process arguments, writing to stdout.
///
/// # Errors
/// Returns [`CliError`] for argument, dataset, or pipeline failures; records
/// already written stay in the stream.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let config = ExportConfig::try_from(cli)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    export(&config, &mut handle)
}

/// Walk the dataset and write one record per feature into `writer`.
fn export<W: Write>(config: &ExportConfig, writer: &mut W) -> Result<(), CliError> {
    let mut source = ShapefileSource::open(config.dataset.as_std_path())?;
    let transliterator = MandarinTransliterator::to_english();
    let format = config.format;
    walk(&mut source, |feature| {
        let title = build_title(&transliterator, feature)?;
        format.write_record(writer, feature, &title)?;
        Ok(())
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "geostations",
    about = "Export station records from a point shapefile as delimited text or SQL",
    version
)]
struct Cli {
    /// Path to the .shp file to export.
    #[arg(value_name = "path")]
    dataset: Utf8PathBuf,
    /// Output mode token; `-sql` (any case) selects SQL output.
    #[arg(value_name = "mode", allow_hyphen_values = true)]
    mode: Option<String>,
}

/// Resolved export configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExportConfig {
    dataset: Utf8PathBuf,
    format: RecordFormat,
}

impl TryFrom<Cli> for ExportConfig {
    type Error = CliError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !cli.dataset.is_file() {
            return Err(CliError::MissingSourceFile { path: cli.dataset });
        }
        Ok(Self {
            dataset: cli.dataset,
            format: record_format(cli.mode.as_deref()),
        })
    }
}

/// Map the optional second argument onto an output format.
fn record_format(mode: Option<&str>) -> RecordFormat {
    match mode {
        Some(token) if token.eq_ignore_ascii_case(SQL_MODE_TOKEN) => RecordFormat::Sql,
        _ => RecordFormat::Delimited,
    }
}

/// Errors emitted by the geostations CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The dataset path does not exist or is not a file.
    #[error(
        "dataset path {path:?} does not exist or is not a file \
         (usage: geostations <dataset.shp> [-sql])"
    )]
    MissingSourceFile {
        /// The path that failed the existence check.
        path: Utf8PathBuf,
    },
    /// The dataset could not be opened or read.
    #[error("failed to read features: {0}")]
    Source(#[from] FeatureSourceError),
    /// A station name could not be repaired.
    #[error("failed to repair station name: {0}")]
    Repair(#[from] EncodingRepairError),
    /// A record could not be rendered or written.
    #[error("failed to write record: {0}")]
    Record(#[from] RecordError),
}

#[cfg(test)]
mod tests;
