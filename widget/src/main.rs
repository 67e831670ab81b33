use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tasklist_core::{TaskClient, TaskSync};
use tasklist_widget::{tui, App, Config, UreqTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let sync = TaskSync::new(
        TaskClient::new(&config.api_url),
        UreqTransport::new(config.timeout()),
    );
    let mut app = App::new();
    info!(api_url = %config.api_url, "starting task list");

    let mut terminal = ratatui::init();
    let result = tui::run(&mut terminal, &sync, &mut app);
    ratatui::restore();
    result
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
