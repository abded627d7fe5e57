//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use reflect_core::analysis::AnalysisClient;
use reflect_core::config::Config;
use reflect_core::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "reflect")]
#[command(version)]
#[command(about = "Share your thoughts and discover insights about your emotional state")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Analysis service base URL (overrides REFLECT_SERVICE_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    service_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Analyze a single reflection and print the result
    Analyze {
        /// Reflection text; `-` or omitted reads stdin
        #[arg(short, long)]
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Analyze { text, json }) => {
            let config = Config::load()?;
            let _log_guard = logging::init(&config.log, LogTarget::Stderr)?;
            let client = AnalysisClient::from_config(&config, cli.service_url.as_deref())?;
            tracing::debug!(endpoint = client.endpoint(), "analyze");

            let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
            rt.block_on(commands::analyze::run(&client, text, config.max_chars, json))
        }
        None => {
            let config = Config::load()?;
            let _log_guard = logging::init(&config.log, LogTarget::File)?;
            tracing::info!(max_chars = config.max_chars, "config loaded");
            let client = AnalysisClient::from_config(&config, cli.service_url.as_deref())?;

            // The form blocks this thread on terminal input; requests run on the workers.
            let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
            let _enter = rt.enter();
            reflect_tui::run_interactive_form(&config, client)
        }
    }
}
