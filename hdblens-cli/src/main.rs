//! HDBLens CLI — market analytics and price prediction commands.
//!
//! Commands:
//! - `summary` — headline market metrics for the session dataset
//! - `trend` — monthly mean-price trend
//! - `towns` — mean price and transaction count per town
//! - `histogram` — equal-width histogram over a derived metric
//! - `export` — write the session dataset as CSV
//! - `predict` — request a price estimate from the model service
//!
//! This binary is the presentation layer: it validates prediction inputs
//! before they reach the client and renders typed failures as non-fatal
//! messages.

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use hdblens_core::data::{
    export_csv, CsvProvider, DatasetProvider, SyntheticProvider, DEFAULT_COUNT, DEFAULT_SEED,
};
use hdblens_core::domain::Dataset;
use hdblens_core::metrics::{
    histogram, monthly_trend, town_breakdown, MarketSummary,
};
use hdblens_core::predict::{
    FeatureRecord, HttpModelService, PredictionClient, PredictionError,
};

#[derive(Parser)]
#[command(
    name = "hdblens",
    about = "HDBLens CLI — resale market analytics and price prediction"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Session dataset selection, shared by the analytics commands.
#[derive(Args)]
struct DatasetArgs {
    /// Generation seed for the session dataset.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of synthetic transactions.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Load the dataset from a CSV export instead of generating it.
    #[arg(long)]
    input: Option<PathBuf>,
}

impl DatasetArgs {
    fn load(&self) -> Result<Dataset> {
        let provider: Box<dyn DatasetProvider> = match &self.input {
            Some(path) => Box::new(CsvProvider::new(path)),
            None => Box::new(SyntheticProvider::new(self.seed, self.count)),
        };
        let dataset = provider
            .load()
            .with_context(|| format!("failed to load dataset from {} source", provider.name()))?;
        Ok(dataset)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HistogramMetric {
    /// Resale price per record.
    Price,
    /// Price per square meter per record.
    PricePerSqm,
}

#[derive(Subcommand)]
enum Commands {
    /// Print headline market metrics for the session dataset.
    Summary {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Print the monthly mean-price trend.
    Trend {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Print mean price and transaction count per town.
    Towns {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Print an equal-width histogram over a derived metric.
    Histogram {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[arg(long, value_enum, default_value_t = HistogramMetric::PricePerSqm)]
        metric: HistogramMetric,

        #[arg(long, default_value_t = 50)]
        buckets: usize,
    },
    /// Export the session dataset as CSV.
    Export {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Output file path.
        #[arg(long)]
        out: PathBuf,
    },
    /// Request a price estimate from the model service.
    Predict {
        /// Transaction month (1-12).
        #[arg(long)]
        month: u32,

        /// Block number (1-999).
        #[arg(long)]
        block: u16,

        /// Floor area in square meters (20.0-200.0).
        #[arg(long)]
        area: f64,

        /// Lease commencement year (1960-2024).
        #[arg(long)]
        lease_year: i32,

        /// Target year for the estimate (current or next calendar year).
        #[arg(long)]
        year: i32,

        /// Base URL of the model-serving endpoint.
        #[arg(long, default_value = "http://127.0.0.1:5001")]
        model_url: String,

        /// Symbolic model name in the registry.
        #[arg(long, default_value = HttpModelService::DEFAULT_MODEL)]
        model_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { dataset } => run_summary(&dataset),
        Commands::Trend { dataset } => run_trend(&dataset),
        Commands::Towns { dataset } => run_towns(&dataset),
        Commands::Histogram {
            dataset,
            metric,
            buckets,
        } => run_histogram(&dataset, metric, buckets),
        Commands::Export { dataset, out } => run_export(&dataset, &out),
        Commands::Predict {
            month,
            block,
            area,
            lease_year,
            year,
            model_url,
            model_name,
        } => run_predict(month, block, area, lease_year, year, &model_url, &model_name),
    }
}

fn run_summary(args: &DatasetArgs) -> Result<()> {
    let dataset = args.load()?;
    let summary = MarketSummary::compute(&dataset)?;

    match &args.input {
        Some(path) => println!("Market summary ({})", path.display()),
        None => println!("Market summary (seed {}, {} records)", args.seed, args.count),
    }
    println!("  Average price:      ${:>14.2}", summary.mean_price);
    println!("  Average price/sqm:  ${:>14.2}", summary.mean_price_per_sqm);
    println!("  Average area (sqm): {:>15.1}", summary.mean_floor_area);
    println!("  Transactions:       {:>15}", summary.transaction_count);
    println!("  Fingerprint:        {}", dataset.fingerprint());
    Ok(())
}

fn run_trend(args: &DatasetArgs) -> Result<()> {
    let dataset = args.load()?;
    let trend = monthly_trend(&dataset);
    if trend.is_empty() {
        bail!("dataset is empty; nothing to aggregate");
    }

    println!("{:>7}  {:>5}  {:>14}  {:>6}", "year", "month", "mean price", "count");
    for point in &trend {
        println!(
            "{:>7}  {:>5}  {:>14.2}  {:>6}",
            point.year, point.month, point.mean_price, point.transaction_count
        );
    }
    Ok(())
}

fn run_towns(args: &DatasetArgs) -> Result<()> {
    let dataset = args.load()?;
    let breakdown = town_breakdown(&dataset);
    if breakdown.is_empty() {
        bail!("dataset is empty; nothing to aggregate");
    }

    println!("{:<12}  {:>14}  {:>6}", "town", "mean price", "count");
    for row in &breakdown {
        println!(
            "{:<12}  {:>14.2}  {:>6}",
            row.town.label(),
            row.mean_price,
            row.transaction_count
        );
    }
    Ok(())
}

fn run_histogram(args: &DatasetArgs, metric: HistogramMetric, buckets: usize) -> Result<()> {
    let dataset = args.load()?;
    let values: Vec<f64> = match metric {
        HistogramMetric::Price => dataset.iter().map(|tx| tx.resale_price).collect(),
        HistogramMetric::PricePerSqm => dataset.iter().map(|tx| tx.price_per_sqm()).collect(),
    };
    let bars = histogram(&values, buckets)?;

    let peak = bars.iter().map(|b| b.count).max().unwrap_or(1).max(1);
    for bucket in &bars {
        let width = bucket.count * 60 / peak;
        println!(
            "{:>12.2} - {:>12.2}  {:>5}  {}",
            bucket.start,
            bucket.end,
            bucket.count,
            "#".repeat(width)
        );
    }
    Ok(())
}

fn run_export(args: &DatasetArgs, out: &PathBuf) -> Result<()> {
    let dataset = args.load()?;
    let file = File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    export_csv(&dataset, file)?;
    println!("wrote {} records to {}", dataset.len(), out.display());
    Ok(())
}

fn run_predict(
    month: u32,
    block: u16,
    area: f64,
    lease_year: i32,
    year: i32,
    model_url: &str,
    model_name: &str,
) -> Result<()> {
    let record = FeatureRecord {
        month,
        block,
        floor_area_sqm: area,
        lease_commence_date: lease_year,
        year,
    };

    // Input validation belongs to the presentation layer; the client
    // forwards whatever it receives.
    let current_year = chrono::Local::now().year();
    if let Err(e) = record.validate(current_year) {
        bail!("invalid input: {e}");
    }

    let service = Arc::new(HttpModelService::new(
        model_url,
        model_name,
        HttpModelService::DEFAULT_VERSION,
    ));
    let client = PredictionClient::new(service);

    match client.predict(&record) {
        Ok(prediction) => {
            println!("Predicted price: SGD ${:.2}", prediction.price);
            println!("  Based on {area} sqm in block {block}");
            println!();
            println!("Market context");
            println!("  Price per sqm:     ${:.2}", prediction.price_per_sqm(area));
            println!("  Monthly mortgage:  ${:.2}", prediction.monthly_mortgage());
            println!("  Down payment:      ${:.2}", prediction.down_payment());
            println!("  Building age:      {} years", year - lease_year);
            println!();
            println!("Model confidence score: 85%");
            Ok(())
        }
        // Typed failures stay non-fatal: report, keep the rest of the
        // dashboard usable, and withhold the derived figures.
        Err(e @ PredictionError::ModelUnavailable { .. }) => {
            eprintln!("prediction unavailable: {e}");
            eprintln!("check that the serving endpoint at {model_url} serves '{model_name}'");
            std::process::exit(1);
        }
        Err(e @ PredictionError::InvocationFailure { .. }) => {
            eprintln!("prediction failed: {e}");
            std::process::exit(1);
        }
    }
}
