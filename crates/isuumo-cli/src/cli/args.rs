use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    Chairs,
    Estates,
}

impl CatalogArg {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chairs => "chairs",
            Self::Estates => "estates",
        }
    }
}

#[derive(Debug, Args)]
pub struct IngestArgs {
    #[arg(value_enum)]
    pub catalog: CatalogArg,
    /// CSV file with one row per item, no header.
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind host. Defaults to `ISUUMO_HOST` or 0.0.0.0.
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port. Defaults to `SERVER_PORT` or 1323.
    #[arg(long)]
    pub port: Option<u16>,
}
