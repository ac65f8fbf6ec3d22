//! Shelf CLI
//!
//! Command-line interface for Shelf - a personal book catalog.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shelf_core::{Book, Catalog, CatalogError, Config};

mod commands;
mod menu;
mod output;
mod prompt;

use menu::Menu;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf - Personal library catalog")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Add a book
    Add {
        /// Book title
        title: String,
        /// Author name
        #[arg(short, long)]
        author: String,
        /// Publication year (1800-2100)
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1800..=2100))]
        year: i32,
        /// Genre
        #[arg(short, long)]
        genre: String,
        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },
    /// Remove every book with exactly this title
    #[command(alias = "rm")]
    Remove {
        /// Exact, case-sensitive title
        title: String,
    },
    /// Search titles and authors (case-insensitive)
    Search {
        /// Search query
        query: String,
    },
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Show total books and percentage read
    Stats,
    /// Show library location and counts
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, library_file, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let result = run(cli, &output);

    if let Err(ref e) = result {
        if let Some(hint) = e
            .downcast_ref::<CatalogError>()
            .and_then(CatalogError::recovery_suggestion)
        {
            output.warning(hint);
        }
    }

    result
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let config_path = cli.config.as_ref();

    // Commands that don't need the catalog
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), config_path, output);
    }

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    init_logging(&config);

    let mut catalog = Catalog::open_with_config(&config)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(&mut catalog, stdin.lock(), io::stdout()).run()
        }
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let book = Book::new(title, author, year, genre).with_read(read);
            commands::book::add(&mut catalog, book, output)
        }
        Commands::Remove { title } => commands::book::remove(&mut catalog, title, output),
        Commands::Search { query } => commands::book::search(&catalog, query, output),
        Commands::List => commands::book::list(&catalog, output),
        Commands::Stats => commands::stats::show(&catalog, output),
        Commands::Status => commands::status::show(&catalog, &config, output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize logging
///
/// Only initializes if SHELF_LOG environment variable is set.
/// Logs to file (config.log_file or default {data_dir}/shelf.log) so the
/// interactive menu is never interleaved with log lines.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("SHELF_LOG") else {
        return;
    };

    let log_path = config.log_path();

    let log_file = match File::options().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("shelf_core={},shelf_cli={}", log_level, log_level));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("Logging initialized to {:?}", log_path);
}
