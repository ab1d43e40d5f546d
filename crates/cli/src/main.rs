//! Countertill CLI - Offline maintenance for the store file.
//!
//! These commands operate on the store file directly and must never run
//! against a live server process.
//!
//! # Usage
//!
//! ```bash
//! # Remove all records from every collection, preserving the file
//! ct-cli flush
//!
//! # Delete the store file outright
//! ct-cli delete
//!
//! # Operate on a specific file
//! ct-cli flush --db-path /var/lib/countertill/db.json
//! ```
//!
//! The store path defaults to `COUNTERTILL_DB_PATH`, falling back to
//! `db.json`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ct-cli")]
#[command(author, version, about = "Countertill maintenance tools")]
struct Cli {
    /// Path of the store file (default: $COUNTERTILL_DB_PATH or db.json)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove all records from every collection, preserving the file
    Flush,
    /// Delete the store file
    Delete,
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = cli.db_path.unwrap_or_else(default_db_path);

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Flush => commands::flush::run(&db_path).map_err(Into::into),
        Commands::Delete => commands::delete::run(&db_path).map_err(Into::into),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn default_db_path() -> PathBuf {
    std::env::var("COUNTERTILL_DB_PATH")
        .map_or_else(|_| PathBuf::from("db.json"), PathBuf::from)
}
