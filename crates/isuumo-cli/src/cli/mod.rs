use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{CatalogArg, IngestArgs, ServeArgs};

#[derive(Debug, Parser)]
#[command(name = "isuumo")]
#[command(about = "Chair and estate search service", version)]
pub struct Cli {
    /// SQLite catalog path. Overrides `ISUUMO_DB_PATH`.
    #[arg(long)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Empty both catalogs.
    Init,
    /// Bulk-load a headerless CSV into one catalog.
    Ingest(IngestArgs),
    /// Serve the HTTP API.
    Serve(ServeArgs),
}
