// src/bin/audit_options.rs - Report how option cells across a listing file classify
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::collections::HashMap;
use std::path::PathBuf;

use listing_dedupe_lib::classify_options;
use listing_dedupe_lib::models::OptionClass;
use listing_dedupe_lib::pipeline::load_listings;
use listing_dedupe_lib::reference::catalog::ReferenceCatalog;
use listing_dedupe_lib::rules::RuleBook;
use listing_dedupe_lib::utils::env::load_env;
use listing_dedupe_lib::utils::EngineConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of listing records
    input: PathBuf,

    /// Master-data snapshot; overrides REFERENCE_DATA_PATH
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// How many junk fragments to list
    #[arg(long, default_value_t = 20)]
    top: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = Args::parse();
    let config = EngineConfig::from_env();

    let rules = RuleBook::standard();
    let catalog = match args.reference.as_ref().or(config.reference_data_path.as_ref()) {
        Some(path) => ReferenceCatalog::from_path(path)
            .with_context(|| format!("Failed to load reference data from {}", path.display()))?,
        None => ReferenceCatalog::default(),
    };

    let raws = load_listings(&args.input)?;
    let pb = config.create_progress_bar(raws.len() as u64);

    let mut class_counts: HashMap<OptionClass, usize> = HashMap::new();
    let mut junk_counts: HashMap<String, usize> = HashMap::new();
    for raw in &raws {
        for option in classify_options(raw.options.as_deref(), &catalog, &rules) {
            *class_counts.entry(option.class).or_insert(0) += 1;
            if option.class == OptionClass::Junk {
                *junk_counts.entry(option.name).or_insert(0) += 1;
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message("Options classified");
    }
    info!("Classified options of {} listings", raws.len());

    for class in [OptionClass::Real, OptionClass::Color, OptionClass::Junk] {
        println!("{:?}: {}", class, class_counts.get(&class).copied().unwrap_or(0));
    }

    let mut junk: Vec<(String, usize)> = junk_counts.into_iter().collect();
    junk.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    println!("Top junk fragments:");
    for (name, count) in junk.into_iter().take(args.top) {
        println!("  {:>6}  {}", count, name);
    }
    Ok(())
}
