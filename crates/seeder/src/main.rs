use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use storage::{Database, WorkoutStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod generator;

use generator::WorkoutGenerator;

const PROGRESS_EVERY: usize = 100;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Replace the workouts table with generated workouts", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Number of workouts to generate
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Fixed RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seed={},storage={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let db = Database::new(&cli.database_url)
        .await
        .context("Failed to connect to database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let result = seed(&db, &cli).await;

    tracing::info!("Closing database connection...");
    db.close().await;

    result
}

async fn seed(db: &Database, cli: &Cli) -> anyhow::Result<()> {
    let repo = db.workouts();

    let removed = repo
        .delete_all()
        .await
        .context("Failed to delete existing workouts")?;
    tracing::info!("Deleted {} existing workouts", removed);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = WorkoutGenerator::new(rng, Utc::now());

    tracing::info!("Generating {} workouts...", cli.count);
    let mut workouts = Vec::with_capacity(cli.count);
    for i in 0..cli.count {
        workouts.push(generator.generate());
        if (i + 1) % PROGRESS_EVERY == 0 {
            tracing::info!("Generated {}/{} workouts", i + 1, cli.count);
        }
    }

    let inserted = repo
        .insert_many(&workouts)
        .await
        .context("Failed to insert workouts")?;
    tracing::info!("✓ Seeded {} workouts", inserted);

    Ok(())
}
