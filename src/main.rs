use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use metrics::{MetricsEngine, dates};
use std::path::{Path, PathBuf};
use store::{MemoryStore, Snapshot};
use uuid::Uuid;

/// The main entry point for the FarmPulse application.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Farm metrics from the command line: dashboard summaries, chart series and
/// vaccination schedules, computed from a snapshot of the farm's data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON snapshot export of the farm's tables.
    #[arg(long, global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Compute metrics as of this date instead of today (format: YYYY-MM-DD).
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Override the configured window length, in days.
    #[arg(long, global = true)]
    window_days: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview cards.
    Summary,
    /// Print the daily mortality-rate series behind the trend chart.
    Mortality,
    /// Print the daily egg and offspring series behind the production chart.
    Production,
    /// Project the vaccination schedule for every shed.
    Vaccinations,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let window_days = cli.window_days.unwrap_or(config.analytics.window_days);
    let today = cli.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let (store, owner) = load_store(&cli.snapshot)?;

    match cli.command {
        Commands::Summary => handle_summary(
            &store,
            owner,
            window_days,
            today,
            config.alerts.high_mortality_threshold,
        ),
        Commands::Mortality => handle_mortality(&store, owner, window_days, today),
        Commands::Production => handle_production(&store, owner, window_days, today),
        Commands::Vaccinations => handle_vaccinations(&store, owner, today),
    }
}

/// Loads the snapshot into an in-memory store and resolves the owner it
/// belongs to.
fn load_store(path: &Path) -> anyhow::Result<(MemoryStore, Uuid)> {
    let snapshot = Snapshot::from_file(path)?;
    let owner = snapshot.profile.user_id;
    let (store, dropped) = MemoryStore::from_snapshot(snapshot);
    if dropped > 0 {
        tracing::warn!(dropped, "snapshot contained daily log rows without dates");
    }
    Ok((store, owner))
}

/// Queries the window of observations the engine needs for a command.
fn window_observations(
    store: &MemoryStore,
    owner: Uuid,
    window_days: u32,
    today: NaiveDate,
) -> Vec<core_types::DailyObservation> {
    let (start, end) = dates::date_range_ending(today, window_days);
    store.observations_in_window(owner, start, end)
}

/// Renders the dashboard overview cards and checks the latest day's death
/// toll against the alert threshold.
fn handle_summary(
    store: &MemoryStore,
    owner: Uuid,
    window_days: u32,
    today: NaiveDate,
    alert_threshold: u32,
) -> anyhow::Result<()> {
    let profile = store
        .profile_for(owner)
        .ok_or(store::StoreError::UnknownOwner(owner))?;
    let sheds = store.sheds_for(owner);
    let observations = window_observations(store, owner, window_days, today);

    let engine = MetricsEngine::new();
    let summary = engine.summarize(
        &sheds,
        &observations,
        profile.animal_type,
        window_days,
        today,
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total Sheds".to_string(), summary.total_sheds.to_string()]);
    table.add_row(vec![
        "Total Animals".to_string(),
        summary.total_animals.to_string(),
    ]);
    table.add_row(vec![
        "Mortality Rate".to_string(),
        format!("{}%", summary.mortality_rate_pct),
    ]);
    table.add_row(vec![
        "Production Rate".to_string(),
        format!("{}%", summary.production_rate_pct),
    ]);
    println!("{table}");

    // The alert looks at the most recent day that has data, matching the
    // "deaths reported today" toast of the original dashboard.
    let buckets = engine.bucket_by_date(&observations, window_days, today);
    if let Some(latest) = buckets.last() {
        if engine.high_mortality_alert(latest.totals.dead, alert_threshold) {
            tracing::warn!(
                date = %latest.date,
                dead = latest.totals.dead,
                threshold = alert_threshold,
                "high mortality risk"
            );
        }
    }

    Ok(())
}

/// Prints the per-date mortality rate series.
fn handle_mortality(
    store: &MemoryStore,
    owner: Uuid,
    window_days: u32,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let observations = window_observations(store, owner, window_days, today);
    let series = MetricsEngine::new().mortality_series(&observations, window_days, today);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Mortality Rate (%)"]);
    for point in &series {
        table.add_row(vec![point.date.to_string(), point.rate_pct.to_string()]);
    }
    println!("{table}");

    Ok(())
}

/// Prints the per-date egg and offspring totals.
fn handle_production(
    store: &MemoryStore,
    owner: Uuid,
    window_days: u32,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let observations = window_observations(store, owner, window_days, today);
    let series = MetricsEngine::new().production_series(&observations, window_days, today);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Eggs", "Offspring"]);
    for point in &series {
        table.add_row(vec![
            point.date.to_string(),
            point.eggs.to_string(),
            point.offspring.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

/// Prints the projected vaccination schedule, one row per shed.
fn handle_vaccinations(store: &MemoryStore, owner: Uuid, today: NaiveDate) -> anyhow::Result<()> {
    let profile = store
        .profile_for(owner)
        .ok_or(store::StoreError::UnknownOwner(owner))?;
    let sheds = store.sheds_for(owner);

    let engine = MetricsEngine::new();
    let schedule = engine.vaccination_schedule(&sheds, profile.animal_type, today);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Shed", "Age (days)", "Next Vaccination", "Days Until", "Status"]);
    for (shed, projection) in sheds.iter().zip(&schedule) {
        let age = engine
            .derive_age_days(shed, today)
            .map_or_else(|| "-".to_string(), |age| age.to_string());
        table.add_row(vec![
            projection.shed_name.clone(),
            age,
            projection.next_date.to_string(),
            projection.days_until.to_string(),
            projection.status.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
