//! Kinfolk CLI - Keep track of your people and how they are related.

use clap::Parser;
use kinfolk_cli::commands;
use kinfolk_cli::config::OutputFormat;
use kinfolk_cli::{Cli, Command, Config, Formatter};
use kinfolk_store::SqliteStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Errors may come before the configuration is readable
    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);
    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kinfolk_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    // Config changes do not need the database
    let command = match cli.command {
        Command::Config(args) => {
            return commands::execute_config(args, &mut config, &config_path, &formatter);
        }
        command => command,
    };

    let db_path = match cli.db {
        Some(path) => path,
        None => config.database_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    tracing::debug!(database = %db_path.display(), "Opening store");
    let mut store = SqliteStore::new(&db_path)?;

    match command {
        Command::Add(args) => {
            commands::execute_add(args, &mut store, &formatter)?;
        }
        Command::List => commands::execute_list(&store, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &store, &formatter)?,
        Command::Remove(args) => {
            commands::execute_remove(args, &mut store, &formatter)?;
        }
        Command::Link(args) => commands::execute_link(args, &mut store, &formatter)?,
        Command::Unlink(args) => commands::execute_unlink(args, &mut store, &formatter)?,
        Command::Relations(args) => {
            commands::execute_relations(args, &store, &formatter)?;
        }
        Command::Edges => commands::execute_edges(&store, &formatter)?,
        Command::Relate(args) => {
            commands::execute_relate(args, &mut store, &formatter)?;
        }
        Command::Relationships => commands::execute_relationships(&store, &formatter)?,
        Command::Reminders(args) => {
            commands::execute_reminders(args, &store, &config.reminders, &formatter)?;
        }
        Command::Import(args) => {
            commands::execute_import(args, &mut store, &formatter)?;
        }
        Command::Export(args) => {
            commands::execute_export(args, &store, &formatter)?;
        }
        Command::Anomalies => {
            commands::execute_anomalies(&store, &formatter)?;
        }
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
