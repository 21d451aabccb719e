use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod aggregate;
mod api;
mod catalog;
mod chart;
mod dates;
mod error;
mod models;
mod session;
mod summary;

use session::{Dashboard, SelectionOutput};

#[derive(Parser)]
#[command(name = "covid-case-tracker")]
#[command(about = "Daily pandemic case tracker with monthly chart aggregation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable regions, ordered by display name
    Countries,
    /// Show current totals and the day-over-day new-case delta
    Summary {
        #[arg(long)]
        slug: String,
    },
    /// Write the monthly chart dataset as JSON
    Chart {
        #[arg(long)]
        slug: String,
        #[arg(long, default_value = "chart.json")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let api = api::CovidApi::new()?;

    match cli.command {
        Commands::Countries => {
            let countries = catalog::sort_countries(api.fetch_countries().await?);
            for country in countries {
                println!("{} ({})", country.name, country.slug);
            }
        }
        Commands::Summary { slug } => match run_selection(&api, &slug).await? {
            Some(output) => print_summary(&slug, &output),
            None => println!("Sorry, no data available for {slug}."),
        },
        Commands::Chart { slug, out } => match run_selection(&api, &slug).await? {
            Some(output) => {
                let json = serde_json::to_string_pretty(&output.dataset)?;
                std::fs::write(&out, json)?;
                println!("Chart dataset written to {}.", out.display());
            }
            None => println!("Sorry, no data available for {slug}."),
        },
    }

    Ok(())
}

/// One region selection end to end: bump the generation, fetch, apply.
/// Transport failures bubble up; core validation failures become a "no
/// data" outcome so one bad region never crashes the tool.
async fn run_selection(api: &api::CovidApi, slug: &str) -> anyhow::Result<Option<SelectionOutput>> {
    let mut dashboard = Dashboard::new();
    let generation = dashboard.begin_selection();
    let raw = api.fetch_report_series(slug).await?;

    match dashboard.apply(generation, raw) {
        Ok(()) => Ok(dashboard.current().cloned()),
        Err(err) => {
            warn!(%slug, %err, "selection failed");
            Ok(None)
        }
    }
}

fn print_summary(slug: &str, output: &SelectionOutput) {
    let today = dates::canonical_date(Utc::now().date_naive());
    let summary = &output.summary;

    println!("Report summary for {slug} as of {today}:");
    println!("- Confirmed: {}", summary.confirmed_total);
    println!("- Deaths: {}", summary.deaths_total);
    println!("- Recovered: {}", summary.recovered_total);
    println!("- Active: {}", summary.active_total);
    println!("- New confirmed since previous report: {}", summary.new_confirmed);
    println!("Months charted: {}", output.dataset.labels.join(", "));
}
