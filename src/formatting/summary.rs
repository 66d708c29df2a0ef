use std::io::Write;

use colored::*;

use super::utils::*;
use crate::client::StatusReport;
use crate::error::StatusResult;
use crate::models::{GraphQLResponse, ProjectData, ProjectStatus, ServiceInstance};

/// Per-service view of the latest deployments, optionally limited to one environment.
pub fn render_summary<W: Write>(
    out: &mut W,
    report: &StatusReport,
    environment_id: Option<&str>,
) -> StatusResult<()> {
    let response: GraphQLResponse<ProjectData> = serde_json::from_value(report.body.clone())?;

    writeln!(out, "{} {}", "Status Code:".bold(), report.status)?;

    for error in response.errors.iter().flatten() {
        writeln!(out, "{} {}", "GraphQL error:".red().bold(), error.message)?;
    }

    match response.data.and_then(|data| data.project) {
        Some(project) => write_project(out, &project, environment_id)?,
        None => writeln!(out, "{}", "No project data in response.".dimmed())?,
    }

    Ok(())
}

fn write_project<W: Write>(
    out: &mut W,
    project: &ProjectStatus,
    environment_id: Option<&str>,
) -> StatusResult<()> {
    let name = project.name.as_deref().unwrap_or("Unnamed project");
    writeln!(out, "{} {}", name.bold().bright_cyan(), format!("({})", project.id).dimmed())?;
    if let Some(description) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
        writeln!(out, "{}", description)?;
    }
    if let Some(env) = environment_id {
        writeln!(out, "{} {}", "Environment:".dimmed(), env)?;
    }
    writeln!(out, "{}", "─".repeat(60).dimmed())?;

    let mut services = project.services.nodes().peekable();
    if services.peek().is_none() {
        writeln!(out, "{}", "No services found.".dimmed())?;
        return Ok(());
    }

    for service in services {
        let name = service.name.as_deref().unwrap_or(&service.id);
        writeln!(out, "{}", name.bold())?;

        let instances: Vec<&ServiceInstance> = service
            .service_instances
            .nodes()
            .filter(|instance| match environment_id {
                Some(env) => instance.environment_id.as_deref() == Some(env),
                None => true,
            })
            .collect();

        if instances.is_empty() {
            writeln!(out, "  {}", "No instances in this environment.".dimmed())?;
            continue;
        }

        for instance in instances {
            write_instance(out, instance, environment_id.is_none())?;
        }
    }

    Ok(())
}

fn write_instance<W: Write>(
    out: &mut W,
    instance: &ServiceInstance,
    show_environment: bool,
) -> StatusResult<()> {
    let environment = match (show_environment, instance.environment_id.as_deref()) {
        (true, Some(env)) => format!(" [{}]", env).dimmed().to_string(),
        _ => String::new(),
    };

    let Some(deployment) = instance.latest_deployment.as_ref() else {
        writeln!(out, "  • {}{}", "no deployments".dimmed(), environment)?;
        return Ok(());
    };

    let status = deployment.status.as_deref().unwrap_or("UNKNOWN");
    let age = deployment
        .created_at
        .as_deref()
        .map(format_relative_time)
        .unwrap_or_else(|| "unknown".to_string());

    write!(
        out,
        "  {} {:<12} {:<10}",
        get_status_icon(status),
        format_deployment_status(status),
        age
    )?;
    if let Some(url) = deployment.static_url.as_deref() {
        write!(out, " {}", format!("https://{}", url.trim_start_matches("https://")).blue())?;
    }
    writeln!(out, "{}", environment)?;

    Ok(())
}
