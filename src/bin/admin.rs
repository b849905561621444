//! CLI administration tool for alias-shortener.
//!
//! Works directly against PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL (alias generated when omitted)
//! cargo run --bin admin -- url save https://example.com/very/long/path --alias docs
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get docs
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! Reads the same environment variables as the server (`DATABASE_URL` or
//! `DB_*`, `ALIAS_LENGTH`, ...).

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::UrlService;
use alias_shortener::config::{self, Config, StorageBackend};
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::{PgUrlRepository, connect_pool, run_migrations};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL mapping subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL under an alias
    Save {
        /// The long URL
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Resolve an alias to its URL
    Get {
        alias: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        bail!("admin requires STORAGE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches URL mapping commands through the same service the server uses.
async fn handle_url_action(action: UrlAction, config: &Config, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let service = UrlService::new(repo)
        .with_alias_length(config.alias_length)
        .with_max_alias_attempts(config.alias_max_attempts);

    match action {
        UrlAction::Save { url, alias } => save_url(&service, url, alias).await,
        UrlAction::Get { alias } => get_url(&service, &alias).await,
    }
}

/// Validates and stores a mapping, printing the alias actually used.
async fn save_url(service: &UrlService, url: String, alias: Option<String>) -> Result<()> {
    let request = SaveRequest { url, alias };

    if let Err(errors) = request.validate() {
        bail!("Invalid request: {}", AppError::from(errors));
    }
    let url = request.normalized_url()?;

    match service.save_url(url, request.alias).await {
        Ok(mapping) => {
            println!("{}", "URL saved".green().bold());
            println!("  Alias: {}", mapping.alias.bright_yellow().bold());
            println!("  URL:   {}", mapping.url.cyan());
            println!("  ID:    {}", mapping.id.to_string().bright_black());
        }
        Err(e) if e.is_alias_exists() => bail!("Alias already exists"),
        Err(e) => bail!("Failed to save url: {}", e),
    }

    Ok(())
}

/// Resolves an alias.
async fn get_url(service: &UrlService, alias: &str) -> Result<()> {
    match service.get_url(alias).await {
        Ok(url) => println!("  {} → {}", alias.bright_yellow(), url.cyan()),
        Err(e) if e.is_not_found() => bail!("URL not found: {}", alias),
        Err(e) => bail!("Failed to get url: {}", e),
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());

            match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await
            {
                Ok(mappings) => println!(
                    "  Mappings: {}",
                    mappings.to_string().bright_green().bold()
                ),
                Err(_) => println!(
                    "  {} run {} first",
                    "url table not found,".yellow(),
                    "admin db migrate".bright_cyan()
                ),
            }
        }
        DbAction::Migrate => {
            run_migrations(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
