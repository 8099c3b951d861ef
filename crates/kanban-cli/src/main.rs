mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use kanban_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        }
        Commands::Resolve { id } => handlers::resolve::handle_resolve(&id)?,
        Commands::Slug { name } => handlers::resolve::handle_slug(&name)?,
        Commands::Show => {
            let config = AppConfig::load();
            let ctx = CliContext::load(cli.input.as_deref(), &config)?;
            handlers::board::handle_show(&ctx)?;
        }
        Commands::Run { script } => {
            let config = AppConfig::load();
            let mut ctx = CliContext::load(cli.input.as_deref(), &config)?;
            handlers::script::handle_run(&mut ctx, script.as_deref())?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::debug!("Command failed: {:#}", e);
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}
