use std::path::PathBuf;

use super::*;
use clap::Parser;

#[test]
fn ingest_parses_catalog_and_path() {
    let cli = Cli::try_parse_from(["isuumo", "ingest", "estates", "fixtures/estate.csv"])
        .expect("parse");
    match cli.command {
        Commands::Ingest(IngestArgs { catalog, path }) => {
            assert_eq!(catalog, CatalogArg::Estates);
            assert_eq!(path, PathBuf::from("fixtures/estate.csv"));
        }
        _ => panic!("expected ingest command"),
    }
}

#[test]
fn ingest_rejects_unknown_catalog() {
    let parsed = Cli::try_parse_from(["isuumo", "ingest", "sofas", "sofa.csv"]);
    assert!(parsed.is_err(), "only chairs and estates are catalogs");
}

#[test]
fn db_override_precedes_subcommand() {
    let cli = Cli::try_parse_from(["isuumo", "--db", "/tmp/isuumo.db", "init"]).expect("parse");
    assert_eq!(cli.db, Some(PathBuf::from("/tmp/isuumo.db")));
    assert!(matches!(cli.command, Commands::Init));
}

#[test]
fn serve_bind_options_are_optional() {
    let cli = Cli::try_parse_from(["isuumo", "serve"]).expect("parse");
    match cli.command {
        Commands::Serve(ServeArgs { host, port }) => {
            assert!(host.is_none());
            assert!(port.is_none());
        }
        _ => panic!("expected serve command"),
    }

    let cli = Cli::try_parse_from(["isuumo", "serve", "--host", "127.0.0.1", "--port", "8080"])
        .expect("parse");
    match cli.command {
        Commands::Serve(ServeArgs { host, port }) => {
            assert_eq!(host.as_deref(), Some("127.0.0.1"));
            assert_eq!(port, Some(8080));
        }
        _ => panic!("expected serve command"),
    }
}
