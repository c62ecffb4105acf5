//! `job-listings` CLI entry-point.
//!
//! Connects to MongoDB once at startup, then runs one repository operation:
//! - `ping`   — check the primary is reachable.
//! - `list`   — print every job listing.
//! - `get`    — print one job listing by id.
//! - `create` — insert a job listing.
//! - `update` — change only the given fields of a job listing.
//! - `delete` — remove a job listing (succeeds even if it is already gone).

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use db::models::{JobListingUpdate, NewJobListing};
use db::{DbConfig, DbError, JobRepository, MongoJobRepository};

#[derive(Parser)]
#[command(name = "job-listings", about = "CRUD over the job listings collection", version)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct StoreArgs {
    /// MongoDB connection string.
    #[arg(
        long,
        env = "MONGODB_URI",
        default_value = db::config::DEFAULT_URI,
        global = true
    )]
    mongodb_uri: String,

    #[arg(
        long,
        env = "MONGODB_DATABASE",
        default_value = db::config::DEFAULT_DATABASE,
        global = true
    )]
    database: String,

    #[arg(
        long,
        env = "MONGODB_COLLECTION",
        default_value = db::config::DEFAULT_COLLECTION,
        global = true
    )]
    collection: String,

    /// Upper bound for each call to the store, in seconds (at least 1).
    #[arg(
        long,
        env = "MONGODB_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    timeout_secs: u64,
}

impl From<StoreArgs> for DbConfig {
    fn from(args: StoreArgs) -> Self {
        Self {
            uri: args.mongodb_uri,
            database: args.database,
            collection: args.collection,
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Check that the MongoDB primary answers.
    Ping,
    /// Print every job listing.
    List,
    /// Print one job listing.
    Get { id: String },
    /// Create a job listing.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        company: String,
    },
    /// Update the given fields of a job listing; omitted fields are kept.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },
    /// Delete a job listing.
    Delete { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let not_found = err
                .downcast_ref::<DbError>()
                .is_some_and(DbError::is_not_found);
            if not_found {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DbConfig::from(cli.store);
    let pool = db::pool::create_pool(&config)
        .await
        .context("failed to connect to MongoDB")?;

    if let Command::Ping = cli.command {
        db::pool::ping(&pool, config.timeout).await?;
        info!("MongoDB primary is reachable");
        return Ok(());
    }

    let repo = MongoJobRepository::new(&pool, &config);
    execute(&repo, cli.command).await
}

async fn execute(repo: &dyn JobRepository, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Ping => Ok(()),
        Command::List => print_json(&repo.get_jobs().await?),
        Command::Get { id } => print_json(&repo.get_job(&id).await?),
        Command::Create {
            title,
            description,
            url,
            company,
        } => {
            let input = NewJobListing {
                title,
                description,
                url,
                company,
            };
            print_json(&repo.create_job_listing(input).await?)
        }
        Command::Update {
            id,
            title,
            description,
            url,
            company,
        } => {
            let input = JobListingUpdate {
                title,
                description,
                url,
                company,
            };
            print_json(&repo.update_job_listing(&id, input).await?)
        }
        Command::Delete { id } => print_json(&repo.delete_job_listing(&id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
