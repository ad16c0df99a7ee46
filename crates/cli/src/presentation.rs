use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tree_tally_engine::{EngineError, ScanReport, ScanResult};

use crate::error::Result;
use crate::options::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    #[serde(flatten)]
    result: &'a ScanResult,
    mebibytes: u64,
    errors: Vec<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    path: Option<String>,
    message: String,
}

impl From<&EngineError> for JsonError {
    fn from(err: &EngineError) -> Self {
        Self {
            path: err.path().map(|p| p.display().to_string()),
            message: err.to_string(),
        }
    }
}

/// Write the finished report in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            let json = JsonReport {
                root: &report.root,
                result: &report.result,
                mebibytes: report.result.mebibytes(),
                errors: report.errors.iter().map(JsonError::from).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// List entries skipped under `--keep-going`.
pub fn write_skipped<W: Write>(err_out: &mut W, report: &ScanReport) -> Result<()> {
    for err in &report.errors {
        match err.path() {
            Some(path) => writeln!(err_out, "Error processing {}: {err}", path.display())?,
            None => writeln!(err_out, "Error: {err}")?,
        }
    }
    Ok(())
}
