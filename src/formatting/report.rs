use std::io::{self, Write};

use crate::client::StatusReport;
use crate::error::{StatusError, StatusResult};

/// Status code, then the body pretty-printed with two-space indentation.
pub fn render_report<W: Write>(out: &mut W, report: &StatusReport) -> io::Result<()> {
    let pretty = serde_json::to_string_pretty(&report.body).map_err(io::Error::from)?;
    writeln!(out, "Status Code: {}", report.status)?;
    writeln!(out)?;
    writeln!(out, "Response:")?;
    writeln!(out, "{}", pretty)
}

pub fn render_error<W: Write>(out: &mut W, error: &StatusError) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}

pub fn render_outcome<W: Write>(out: &mut W, outcome: &StatusResult<StatusReport>) -> io::Result<()> {
    match outcome {
        Ok(report) => render_report(out, report),
        Err(error) => render_error(out, error),
    }
}
