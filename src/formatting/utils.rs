use colored::*;
use chrono::{DateTime, Utc};

pub fn format_deployment_status(status: &str) -> ColoredString {
    match status {
        "SUCCESS" => status.green(),
        "FAILED" | "CRASHED" => status.red().bold(),
        "BUILDING" | "DEPLOYING" | "INITIALIZING" | "QUEUED" | "WAITING" => status.yellow(),
        "REMOVED" | "REMOVING" | "SKIPPED" => status.dimmed(),
        _ => status.normal(),
    }
}

pub fn get_status_icon(status: &str) -> &'static str {
    match status {
        "SUCCESS" => "✓",
        "FAILED" | "CRASHED" => "✗",
        "BUILDING" | "DEPLOYING" | "INITIALIZING" | "QUEUED" | "WAITING" => "◐",
        "REMOVED" | "REMOVING" | "SKIPPED" => "○",
        _ => "•",
    }
}

pub fn format_relative_time(timestamp: &str) -> String {
    format_relative_time_since(timestamp, Utc::now())
}

pub fn format_relative_time_since(timestamp: &str, now: DateTime<Utc>) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}
