use clap::Parser;
use comedo_check::{cli, config, error, export, loader, render};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use loader::{ReferenceSource, StoreGate};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    // RUST_LOG があればそちらを優先
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// データベースを読み込んだゲートを用意（--db → 環境変数 → 設定ファイル）
async fn open_store(db: Option<&str>, config: &Config) -> Result<StoreGate> {
    let source = match db {
        Some(db) => ReferenceSource::parse(db),
        None => config.database_source()?,
    };

    let gate = StoreGate::new();
    gate.load(&source, Duration::from_secs(config.timeout_seconds)).await?;
    Ok(gate)
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        if !path.exists() {
            return Err(error::CheckerError::FileNotFound(path.display().to_string()));
        }
        return Ok(std::fs::read_to_string(&path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    // 設定の修復に使うので、configコマンドだけは壊れた設定ファイルでも続行
    let config = match cli.command {
        Commands::Config { .. } => Config::load_or_default(),
        _ => Config::load()?,
    };
    let db = cli.db.clone();

    match cli.command {
        Commands::Check { text, file, format, strict, fail_on } => {
            let gate = open_store(db.as_deref(), &config).await?;
            let input = read_input(text, file)?;

            let mut options = config.tokenize_options();
            options.strict |= strict;

            let report = gate.check(&input, &options)?;

            match format {
                OutputFormat::Text => print!("{}", render::render_report(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            if let Some(threshold) = fail_on {
                if report.has_rating_at_least(threshold) {
                    std::process::exit(1);
                }
            }
        }

        Commands::Export { input, format, output, title } => {
            let gate = open_store(db.as_deref(), &config).await?;
            let text = read_input(None, Some(input))?;
            let report = gate.check(&text, &config.tokenize_options())?;

            let document = export::ExportDocument::new(&title, &text, report);
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            for path in export::export_report(&document, &format, &output)? {
                println!("✔ {}", path.display());
            }
        }

        Commands::Lookup { query } => {
            let gate = open_store(db.as_deref(), &config).await?;
            let store = gate.store()?;
            let hits = store.search(&query);

            if hits.is_empty() {
                println!("No ingredients matching '{}'", query);
            }
            for entry in hits {
                print!("{:>6}  {} [{}/5 {}]", entry.id.to_string(), entry.name, entry.rating, entry.severity());
                if !entry.alternate_names.is_empty() {
                    print!("  aka {}", entry.alternate_names.join(", "));
                }
                println!();
            }
        }

        Commands::Config { set_db, show } => {
            let mut config = config;

            if let Some(database) = set_db {
                config.set_database(database)?;
                println!("✔ Ingredient database set");
            }

            if show {
                println!("Config ({}):", Config::config_path()?.display());
                println!("  database: {}", config.database.as_deref().unwrap_or("(not set)"));
                println!("  timeout: {}s", config.timeout_seconds);
                println!("  strict tokenize: {}", config.strict_tokenize);
                println!("  min candidate length: {}", config.min_candidate_length);
            }
        }
    }

    Ok(())
}
