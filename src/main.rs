use agrocoop::cli::batch::LedgerFile;
use agrocoop::cli::output::{self, OutputMode};
use agrocoop::cli::prompt::TerminalPrompter;
use agrocoop::cli::{session, Cli, Commands};
use agrocoop::config::{AppConfig, LoggingConfig};
use agrocoop::cooperative::Cooperative;
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_validated(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    init_logging(&config.logging);
    cli.query.apply(&mut config.report);
    debug!(?config, "configuration loaded");

    let mut coop = Cooperative::from_config(&config.cooperative);

    match cli.command.clone().unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let mut prompter = TerminalPrompter::new()?;
            session::run(&mut prompter, &mut coop)?;
        }
        Commands::Report { input } => {
            let file = LedgerFile::load(&input)
                .with_context(|| format!("failed to read ledger file {}", input.display()))?;
            file.apply(&mut coop);
        }
    }

    let report = coop
        .report(&config.report)
        .context("failed to compute cooperative report")?;
    output::print_report(&report, OutputMode::from_json_flag(cli.json))?;

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,agrocoop={}", config.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
