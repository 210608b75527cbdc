// src/bin/resolve_identity.rs - Resolve one raw vehicle name to its canonical identity
use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use listing_dedupe_lib::normalization::brand::Brand;
use listing_dedupe_lib::normalization::lineup::normalize_lineup;
use listing_dedupe_lib::normalization::trim::normalize_trim;
use listing_dedupe_lib::resolve_model_identity;
use listing_dedupe_lib::rules::RuleBook;
use listing_dedupe_lib::utils::env::load_env;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw vehicle name as a feed delivers it
    name: String,

    /// Declared brand; inferred from the name when omitted
    #[arg(short, long)]
    brand: Option<String>,

    /// Raw lineup to normalize against the resolved model
    #[arg(short, long)]
    lineup: Option<String>,

    /// Raw trim to normalize
    #[arg(short, long)]
    trim: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = Args::parse();
    let rules = RuleBook::standard();

    let brand = Brand::resolve(args.brand.as_deref(), &args.name);
    info!("Resolved brand {:?} for '{}'", brand, args.name);
    let Some(identity) = resolve_model_identity(args.brand.as_deref(), &args.name, &rules) else {
        bail!("No identity found for '{}' (brand: {})", args.name, brand);
    };

    println!("brand: {}", identity.brand);
    println!("model: {}", identity.model);
    if let Some(lineup) = args.lineup.as_deref() {
        println!("lineup: {}", normalize_lineup(Some(lineup), &identity.model, Some(&args.name), &rules));
    }
    if let Some(trim) = args.trim.as_deref() {
        let trim = normalize_trim(trim);
        println!("trim: {} (rank {})", trim, rules.trim_rank(&trim));
    }
    Ok(())
}
