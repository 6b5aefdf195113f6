use clap::Parser;
use recomatch_core::QueryPreference;
use recomatch_engine::{CatalogIndex, RankerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Match business preferences against a marketplace service catalog
#[derive(Parser, Debug)]
#[command(name = "recomatch")]
#[command(about = "Explainable marketplace service recommendations", long_about = None)]
struct Args {
    /// Path to the service dataset CSV
    #[arg(short, long, default_value = "./service_recommendation_data.csv")]
    data: PathBuf,

    /// Your business type
    #[arg(long)]
    business_type: String,

    /// Budget category
    #[arg(long)]
    price: String,

    /// Language preference
    #[arg(long)]
    language: String,

    /// Location/area
    #[arg(long)]
    location: String,

    /// Maximum number of recommendations
    #[arg(long, default_value_t = 3)]
    limit: usize,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting recomatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let catalog = recomatch_dataset::load_catalog(&args.data)?;
    info!("Loaded {} services", catalog.len());

    let config = RankerConfig {
        limit: args.limit,
        ..RankerConfig::default()
    };
    let index = CatalogIndex::with_config(Arc::new(catalog), config);
    info!("Indexed catalog into {} feature columns", index.space().dim());

    let query = QueryPreference::new(
        args.business_type,
        args.price,
        args.language,
        args.location,
    );

    let results = index.recommend(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No services available to recommend.");
        return Ok(());
    }

    println!("Top {} recommended services:", results.len());
    for (i, rec) in results.iter().enumerate() {
        println!();
        println!("{}. {} (match: {}, score: {:.2})", i + 1, rec.item.name, rec.quality, rec.score);
        println!("   {}", rec.item.description);
        println!("   {}", rec.explanation.text);
    }

    Ok(())
}
