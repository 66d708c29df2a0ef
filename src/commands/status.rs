use std::io::Write;

use crate::cli_context::CliContext;
use crate::client::{RailwayClient, StatusReport};
use crate::error::StatusResult;
use crate::formatting::{render_error, render_outcome, render_report, render_summary};
use crate::logging::{log_error, log_info};

/// Fetch the project status once and write the raw report, or the error, to `out`.
///
/// The outcome is returned as well so callers can act on it; a failed fetch
/// has already been written by the time it comes back.
pub async fn fetch_and_print<W: Write>(
    client: &RailwayClient,
    out: &mut W,
) -> StatusResult<StatusReport> {
    let outcome = client.fetch_project_status().await;
    render_outcome(out, &outcome)?;
    outcome
}

pub async fn handle_status<W: Write>(
    context: &CliContext,
    summary: bool,
    out: &mut W,
) -> StatusResult<StatusReport> {
    if !summary {
        return fetch_and_print(context.client(), out).await;
    }

    match context.client().fetch_project_status().await {
        Ok(report) => {
            if let Err(e) = render_summary(out, &report, context.environment_id()) {
                // Fall back to the raw view when the body doesn't fit the summary shape.
                log_error(&format!("Could not summarise response: {}", e));
                render_report(out, &report)?;
            }
            log_info(&format!("Rendered summary for HTTP {}", report.status));
            Ok(report)
        }
        Err(e) => {
            render_error(out, &e)?;
            Err(e)
        }
    }
}
