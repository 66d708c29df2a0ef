use std::io;

use clap::{Arg, ArgAction, ArgMatches, Command};

use railway_status::cli_context::CliContext;
use railway_status::commands::handle_status;
use railway_status::config::Config;
use railway_status::formatting::render_error;
use railway_status::logging::{get_log_file_path, init_logging, log_error, log_info, log_panic_info};

fn build_cli() -> Command {
    Command::new("railway-status")
        .about("Show the services and latest deployments of a Railway project")
        .version("1.0.0")
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .help("GraphQL endpoint (default: https://backboard.railway.com/graphql/v2)")
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .help("API token, overrides RAILWAY_API_TOKEN")
        )
        .arg(
            Arg::new("project")
                .long("project")
                .short('p')
                .value_name("ID")
                .help("Project ID, overrides RAILWAY_PROJECT_ID")
        )
        .arg(
            Arg::new("environment")
                .long("environment")
                .short('e')
                .value_name("ID")
                .help("Environment ID, overrides RAILWAY_ENVIRONMENT_ID")
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .short('s')
                .help("Print a per-service summary instead of the raw response")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
        )
}

fn overrides(matches: &ArgMatches) -> Config {
    let get = |name: &str| matches.get_one::<String>(name).cloned();
    Config {
        api_url: get("url"),
        api_token: get("token"),
        project_id: get("project"),
        environment_id: get("environment"),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        eprintln!("{}", info);
        if let Some(path) = get_log_file_path() {
            eprintln!("Details were written to {}", path.display());
        }
    }));

    let matches = build_cli().get_matches();
    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout();

    // Failures are reported on stdout and the process still exits 0.
    let context = match CliContext::load(overrides(&matches)) {
        Ok(context) => context,
        Err(e) => {
            log_error(&format!("Configuration failed: {}", e));
            let _ = render_error(&mut stdout, &e);
            return;
        }
    };

    match handle_status(&context, matches.get_flag("summary"), &mut stdout).await {
        Ok(report) => log_info(&format!("Finished with HTTP {}", report.status)),
        Err(e) => log_error(&format!("Status fetch failed: {}", e)),
    }
}
