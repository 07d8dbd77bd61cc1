mod backend;
mod cards;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod report;
mod scheduler;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::dashboard_consts::OFFLINE_STATUS;
use crate::consts::dashboard_consts::refresh::interval_from_secs;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::events::Origin;
use crate::logging::get_rust_log_level;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use backend::BackendClient;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for forex trading signals and market news
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the signal backend, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,

        /// Run without the terminal UI, printing activity to the console
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch signals, news and status once and print them
    Snapshot {
        /// Base URL of the signal backend
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Print the raw data as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },
    /// Save the backend URL (and optionally the refresh interval) to the config file
    SetBackend {
        /// Base URL of the signal backend
        #[arg(long, value_name = "URL")]
        url: String,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            url,
            interval,
            headless,
            with_background,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(url.as_deref(), &config)?;
            let refresh_interval =
                interval_from_secs(interval.unwrap_or(config.refresh_interval_secs));

            let session = setup_session(environment, refresh_interval);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Snapshot { url, json } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(url.as_deref(), &config)?;
            snapshot(environment, json).await
        }
        Command::SetBackend { url, interval } => {
            let environment = parse_environment(&url)?;
            let mut config = load_config(&config_path);
            config.backend_url = Some(environment.backend_url());
            if let Some(secs) = interval {
                config.refresh_interval_secs = interval_from_secs(secs).as_secs();
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Backend saved",
                "{} (refresh every {}s)",
                environment.backend_url(),
                config.refresh_interval_secs
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "Deleting {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Reads the config file, falling back to the defaults if it is unreadable.
fn load_config(config_path: &Path) -> Config {
    match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!("Config ignored", "{}: {}", config_path.display(), e);
            Config::default()
        }
    }
}

/// Picks the backend: `--url` first, then the config file, then the local default.
fn resolve_environment(url: Option<&str>, config: &Config) -> Result<Environment, Box<dyn Error>> {
    match url.or(config.backend_url.as_deref()) {
        Some(url) => parse_environment(url),
        None => Ok(Environment::default()),
    }
}

fn parse_environment(url: &str) -> Result<Environment, Box<dyn Error>> {
    url.parse::<Environment>().map_err(|_| {
        format!(
            "Invalid backend URL: {}. It should start with http:// or https://",
            url
        )
        .into()
    })
}

/// Runs a single refresh and prints the result.
async fn snapshot(environment: Environment, json: bool) -> Result<(), Box<dyn Error>> {
    let controller = DashboardController::new(Arc::new(BackendClient::new(environment.clone())));
    let outcome = match controller.refresh(Origin::OneShot).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let details = format!("{} ({})", e, environment.backend_url());
            print_cmd_error!("Failed to fetch dashboard data", details.as_str());
            return Err(e.into());
        }
    };
    if outcome.status_fallback {
        print_cmd_warn!("Engine status unavailable", "showing {}", OFFLINE_STATUS);
    }

    let data = controller.snapshot().await;
    if json {
        println!("{}", report::render_json(&data)?);
    } else {
        println!("{}", report::render_report(&data));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_flag_overrides_config() {
        let config = Config::new(Some("http://10.0.0.5:5000".to_string()), 30);
        let env = resolve_environment(Some("http://example.com:8080/"), &config).unwrap();
        assert_eq!(env.backend_url(), "http://example.com:8080");

        let env = resolve_environment(None, &config).unwrap();
        assert_eq!(env.backend_url(), "http://10.0.0.5:5000");

        let env = resolve_environment(None, &Config::default()).unwrap();
        assert_eq!(env, Environment::Local);
    }

    #[test]
    fn rejects_urls_without_scheme() {
        assert!(resolve_environment(Some("localhost:5000"), &Config::default()).is_err());
    }
}
