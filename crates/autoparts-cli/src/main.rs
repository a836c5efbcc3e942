//! Autoparts CLI - Command-line interface for the parts catalog search.

use autoparts_cli::{open_catalog, run_command, Cli, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color_enabled = !cli.no_color;
    if let Err(e) = run(cli) {
        let formatter = Formatter::new(autoparts_cli::config::OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // -v wins over RUST_LOG; otherwise RUST_LOG, else warnings only
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> autoparts_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let database = cli.db.unwrap_or_else(|| config.database.clone());
    let store = open_catalog(&database)?;

    let output = run_command(cli.command, &store, &config, &formatter)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
