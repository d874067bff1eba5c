use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use isuumo_core::{AppConfig, Isuumo};

use crate::cli::{CatalogArg, Commands, IngestArgs};

mod support;
mod web;

use self::support::print_json;
use self::web::{WebServeOptions, serve};

pub(crate) fn run(db_override: Option<&Path>, command: Commands) -> Result<()> {
    let config = resolve_config(AppConfig::from_env(), db_override);
    let app = Isuumo::from_config(&config).with_context(|| {
        format!(
            "failed to open catalog at {}",
            config.db_path.display()
        )
    })?;
    run_with_app(&app, &config, command)
}

fn resolve_config(mut config: AppConfig, db_override: Option<&Path>) -> AppConfig {
    if let Some(path) = db_override {
        config.db_path = path.to_path_buf();
    }
    config
}

fn run_with_app(app: &Isuumo, config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            let response = app.initialize()?;
            print_json(&response)?;
        }
        Commands::Ingest(args) => {
            let inserted = ingest(app, &args)?;
            print_json(&json!({
                "catalog": args.catalog.as_str(),
                "inserted": inserted,
            }))?;
        }
        Commands::Serve(args) => {
            let options = WebServeOptions {
                host: args.host.as_deref().unwrap_or(&config.host),
                port: args.port.unwrap_or(config.port),
            };
            info!(host = options.host, port = options.port, "starting web server");
            serve(app, options)?;
        }
    }
    Ok(())
}

fn ingest(app: &Isuumo, args: &IngestArgs) -> Result<usize> {
    let csv = fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let inserted = match args.catalog {
        CatalogArg::Chairs => app.ingest_chairs_csv(&csv)?,
        CatalogArg::Estates => app.ingest_estates_csv(&csv)?,
    };
    Ok(inserted)
}
