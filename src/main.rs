// src/main.rs - Normalize a listing file and write facets plus deduplicated groups
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use listing_dedupe_lib::aggregation::filter::{matches_category, ListingCategory, ListingFilter};
use listing_dedupe_lib::models::RawListing;
use listing_dedupe_lib::pipeline::{build_report, load_filter, load_listings, write_report, NormalizationContext};
use listing_dedupe_lib::reference::catalog::ReferenceCatalog;
use listing_dedupe_lib::rules::RuleBook;
use listing_dedupe_lib::utils::env::load_env;
use listing_dedupe_lib::utils::{EngineConfig, PipelineLogger};
use listing_dedupe_lib::resolve_model_identity;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of listing records
    #[arg(short, long)]
    input: PathBuf,

    /// Where the JSON report is written
    #[arg(short, long, default_value = "listing_report.json")]
    output: PathBuf,

    /// Master-data snapshot; overrides REFERENCE_DATA_PATH
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// JSON facet selections applied before grouping
    #[arg(long)]
    filter: Option<PathBuf>,

    /// Storefront section: special or dealer
    #[arg(long)]
    category: Option<ListingCategory>,

    /// Only keep listings resolving to this model identity
    #[arg(long)]
    model: Option<String>,

    /// Worker threads; overrides NORMALIZER_WORKERS
    #[arg(long)]
    workers: Option<usize>,

    /// Disable progress bars
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = Args::parse();
    let logger = PipelineLogger::new("DEDUPE", "🚗");
    logger.log_start("listing normalization");

    let mut config = EngineConfig::from_env();
    if let Some(workers) = args.workers {
        config.workers = workers.max(1);
    }
    if args.reference.is_some() {
        config.reference_data_path = args.reference.clone();
    }
    if args.no_progress {
        config.progress_enabled = false;
    }
    config.log_config();

    let rules = RuleBook::standard();
    let catalog = match &config.reference_data_path {
        Some(path) => ReferenceCatalog::from_path(path)
            .with_context(|| format!("Failed to load reference data from {}", path.display()))?,
        None => {
            warn!("No reference data configured; names resolve against rule tables only");
            ReferenceCatalog::default()
        }
    };
    logger.log_phase("Reference data", Some("catalog ready"));

    let mut raws: Vec<RawListing> = load_listings(&args.input)?;
    logger.log_data_loaded(raws.len(), "listings");

    if let Some(category) = args.category {
        raws.retain(|raw| matches_category(raw, category));
        info!("{} listings in category {:?}", raws.len(), category);
    }
    if let Some(model) = args.model.as_deref() {
        raws.retain(|raw| {
            resolve_model_identity(raw.brand.as_deref(), &raw.vehicle_name, &rules)
                .is_some_and(|identity| identity.model == model)
        });
        info!("{} listings resolve to '{}'", raws.len(), model);
    }

    let filter = match &args.filter {
        Some(path) => load_filter(path)?,
        None => ListingFilter::default(),
    };

    logger.log_phase("Normalization", Some("resolving identities, options and colors"));
    let ctx = NormalizationContext::new(&rules, &catalog);
    let report = build_report(&raws, ctx, &config, &filter);
    logger.log_stats(&report.stats);

    write_report(&report, &args.output)?;
    logger.log_completion(raws.len(), report.groups.len());
    Ok(())
}
