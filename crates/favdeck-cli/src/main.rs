mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, export, favorites, stats, Context};
use crate::error::{exit_code_for, report_error};
use favdeck_config as config;
use favdeck_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "favdeck", version, about = "favdeck CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Fetch a fresh batch of contacts
    Fetch(contacts::FetchArgs),
    List(contacts::ListArgs),
    Show(contacts::ShowArgs),
    #[command(subcommand)]
    Favorite(favorites::FavoriteCommand),
    /// Favorites added during the last six hours
    Stats(stats::StatsArgs),
    Export(export::ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store =
        Store::open(&db_path).with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
    };

    match command {
        Command::Fetch(args) => contacts::fetch(&ctx, args),
        Command::List(args) => contacts::list_contacts(&ctx, args),
        Command::Show(args) => contacts::show_contact(&ctx, args),
        Command::Favorite(cmd) => match cmd {
            favorites::FavoriteCommand::Add(args) => favorites::add_favorite(&ctx, args),
            favorites::FavoriteCommand::Rm(args) => favorites::remove_favorite(&ctx, args),
            favorites::FavoriteCommand::Toggle(args) => favorites::toggle_favorite(&ctx, args),
            favorites::FavoriteCommand::Ls(args) => favorites::list_favorites(&ctx, args),
        },
        Command::Stats(args) => stats::stats(&ctx, args),
        Command::Export(args) => export::export(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
