mod cli;
mod event;
mod terminal;
mod ui;

use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use kpi_dashboard::app::{open_store, App, StorageBackend};
use kpi_dashboard::config::init_app_config;
use kpi_dashboard::logging::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    if let Err(e) = init_logging(&config.log_path, config.debug) {
        eprintln!("Logging disabled: {e}");
    }
    info!(database_url = %config.database_url, export_dir = %config.export_dir.display(), "starting");

    let (store, backend) = open_store(&config.database_url).await;
    let mut app = App::new(store, config.export_dir);

    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    if backend == StorageBackend::Memory {
        app.status_message = format!("Storage: {}", backend.describe());
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    if let Err(e) = &result {
        error!(error = %e, "dashboard exited with an error");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
