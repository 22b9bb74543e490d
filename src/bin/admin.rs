//! CLI administration tool for tourism-reviews.
//!
//! Provides maintenance commands that work directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show record counts
//! cargo run --bin admin -- stats
//!
//! # Rebuild every attraction rating from its reviews
//! cargo run --bin admin -- ratings recompute
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use tourism_reviews::application::services::AttractionService;
use tourism_reviews::infrastructure::persistence::PgAttractionRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tourism-reviews.
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
    /// Show record counts
    Stats,

    /// Attraction rating maintenance
    Ratings {
        #[command(subcommand)]
        action: RatingsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Rating maintenance subcommands.
#[derive(Subcommand)]
enum RatingsAction {
    /// Recompute every attraction's rating from its reviews
    Recompute {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::Stats => handle_stats(&pool).await,
        Commands::Ratings { action } => handle_ratings_action(action, &pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

/// Dispatches rating maintenance commands.
async fn handle_ratings_action(action: RatingsAction, pool: &PgPool) -> Result<()> {
    match action {
        RatingsAction::Recompute { yes } => recompute_ratings(pool, yes).await,
    }
}

/// Rewrites every cached rating as the mean of the attraction's review scores.
///
/// Runs in a single transaction; attractions without reviews end up at 0.
/// Useful after manual edits to the `reviews` table.
async fn recompute_ratings(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Recompute Ratings".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Rewrite the rating of every attraction?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = AttractionService::new(Arc::new(PgAttractionRepository::new(Arc::new(
        pool.clone(),
    ))));

    let processed = service
        .recompute_ratings()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to recompute ratings: {}", e))?;

    println!(
        "{} {} attractions updated",
        "Done:".green().bold(),
        processed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays record counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let attractions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attractions")
        .fetch_one(pool)
        .await?;

    let visitors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
        .fetch_one(pool)
        .await?;

    let reviews_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;

    println!(
        "  Attractions: {}",
        attractions_count.to_string().bright_green().bold()
    );
    println!(
        "  Visitors:    {}",
        visitors_count.to_string().bright_green().bold()
    );
    println!(
        "  Reviews:     {}",
        reviews_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            tourism_reviews::infrastructure::persistence::ping(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
