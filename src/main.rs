mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;
use template_rewriter::{RunOptions, Stage};

fn main() {
    let cli = cli::Cli::parse();

    // Setup tracing; the report itself goes to stdout
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let root = commands::resolve_root(cli.root)?;
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Init => commands::init::handle(&root),
        Commands::Theme => commands::run::handle(&root, &[Stage::Theme], options),
        Commands::Brand => commands::run::handle(&root, &[Stage::Brand], options),
        Commands::Video => commands::run::handle(&root, &[Stage::Video], options),
        Commands::All => commands::run::handle(&root, &Stage::ALL, options),
    }
}
