//! Curves CLI - Command Line Operations for Curve Construction
//!
//! Operational entry point for validating and building curve construction
//! configurations from a reference-data store file.
//!
//! # Commands
//!
//! - `curves validate --name <cfg>` - Classify every name a configuration refers to
//! - `curves build --name <cfg>` - Build a configuration and its exogenous chain
//! - `curves batch --name <a> --name <b>` - Build independent configurations together
//! - `curves exposure --name <cfg>` - Validate an exposure function list
//! - `curves check` - Show settings and store contents
//!
//! # Architecture
//!
//! Service layer: loads settings and the store, then drives
//! `curve_validation` and `curve_builder`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use curve_core::types::VersionCorrection;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod store;

pub use error::{CliError, Result};

use crate::config::Settings;
use crate::store::StoreDocument;

/// Curve construction CLI
#[derive(Parser)]
#[command(name = "curves")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    settings: Option<String>,

    /// Reference-data store file (overrides the settings)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Resolve documents as of this instant (RFC 3339); latest when omitted
    #[arg(long, global = true)]
    as_of: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a curve construction configuration
    Validate {
        /// Configuration name
        #[arg(short, long)]
        name: String,
    },

    /// Build a configuration after its exogenous dependencies
    Build {
        /// Configuration name
        #[arg(short, long)]
        name: String,

        /// Curves to report (all when omitted)
        #[arg(short, long)]
        curve: Vec<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Build several configurations without exogenous dependencies
    Batch {
        /// Configuration names
        #[arg(short, long, required = true)]
        name: Vec<String>,
    },

    /// Validate an exposure function list
    Exposure {
        /// Exposure functions configuration name
        #[arg(short, long)]
        name: String,
    },

    /// Check settings and store contents
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(fmt::layer())
        .init();
}

fn load_store(cli_store: Option<PathBuf>, settings: &Settings) -> Result<StoreDocument> {
    let path = cli_store
        .or_else(|| settings.general.store.clone())
        .ok_or_else(|| {
            CliError::InvalidArgument(
                "no store file: pass --store or set general.store".to_string(),
            )
        })?;
    StoreDocument::load(&path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref())?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };
    init_tracing(log_level);

    let as_of = cli
        .as_of
        .map(VersionCorrection::as_of)
        .unwrap_or(VersionCorrection::LATEST);
    info!(%as_of, "resolving documents");

    let store = load_store(cli.store, &settings)?;

    match cli.command {
        Commands::Validate { name } => commands::validate::run(store, &name, as_of),
        Commands::Build {
            name,
            curve,
            format,
        } => commands::build::run(store, &name, &curve, &format, as_of),
        Commands::Batch { name } => commands::batch::run(store, &name, as_of, &settings),
        Commands::Exposure { name } => commands::exposure::run(store, &name, as_of),
        Commands::Check => commands::check::run(&store, &settings),
    }
}
