//! Full-screen reflection form.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{analysis, form};
use reflect_core::analysis::AnalysisClient;
use reflect_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive form until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal cannot be driven.
pub fn run_interactive_form(config: &Config, client: AnalysisClient) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The reflection form requires a terminal.\n\
             Use `reflect analyze --text '...'` for non-interactive use."
        );
    }

    tracing::info!(endpoint = client.endpoint(), "starting reflection form");

    let mut runtime = TuiRuntime::new(config, client)?;
    runtime.run()?;

    tracing::info!("reflection form closed");
    Ok(())
}
