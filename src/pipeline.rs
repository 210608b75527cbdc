// src/pipeline.rs - Batch normalization, faceting and grouping of listing records
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::thread;

use crate::aggregation::facets::{build_facets, FacetSet};
use crate::aggregation::filter::{filter_listings, ListingFilter};
use crate::aggregation::grouping::{group_listings, ListingGroup};
use crate::models::{ColorKind, NormalizationStats, NormalizedListing, RawListing};
use crate::normalization::brand::Brand;
use crate::normalization::color::resolve_color;
use crate::normalization::identity::resolve_model_identity;
use crate::normalization::lineup::normalize_lineup;
use crate::normalization::options::classify_options;
use crate::normalization::trim::normalize_trim;
use crate::reference::ReferenceLookup;
use crate::rules::RuleBook;
use crate::utils::EngineConfig;

/// Read-only tables one resolution pass runs against.
#[derive(Clone, Copy)]
pub struct NormalizationContext<'r> {
    pub rules: &'r RuleBook,
    pub reference: &'r dyn ReferenceLookup,
}

impl<'r> NormalizationContext<'r> {
    pub fn new(rules: &'r RuleBook, reference: &'r dyn ReferenceLookup) -> Self {
        Self { rules, reference }
    }
}

pub fn normalize_listing<'a>(raw: &'a RawListing, ctx: NormalizationContext<'_>) -> NormalizedListing<'a> {
    let declared = raw.brand.as_deref();
    let brand = Brand::resolve(declared, &raw.vehicle_name);
    let identity = resolve_model_identity(declared, &raw.vehicle_name, ctx.rules);
    let model = identity
        .as_ref()
        .map(|identity| identity.model.as_str())
        .unwrap_or(raw.vehicle_name.as_str());

    let lineup = normalize_lineup(raw.lineup.as_deref(), model, raw.raw_vehicle_name.as_deref(), ctx.rules);
    let trim = normalize_trim(raw.trim.as_deref().unwrap_or_default());
    let options = classify_options(raw.options.as_deref(), ctx.reference, ctx.rules);
    let exterior_color = resolve_color(
        ColorKind::Exterior,
        raw.exterior_color.as_deref(),
        brand,
        model,
        ctx.reference,
        ctx.rules,
    );
    let interior_color = resolve_color(
        ColorKind::Interior,
        raw.interior_color.as_deref(),
        brand,
        model,
        ctx.reference,
        ctx.rules,
    );

    NormalizedListing {
        raw,
        brand,
        identity,
        lineup,
        trim,
        options,
        exterior_color,
        interior_color,
    }
}

/// Normalizes every record, fanning out over scoped worker threads for large
/// batches. Output order always matches input order.
pub fn normalize_listings<'a>(
    raws: &'a [RawListing],
    ctx: NormalizationContext<'_>,
    config: &EngineConfig,
) -> Vec<NormalizedListing<'a>> {
    let pb = config.create_progress_bar(raws.len() as u64);
    if let Some(pb) = &pb {
        pb.set_message("Normalizing listings...");
    }

    let workers = config.workers.max(1);
    let normalized = if raws.is_empty() {
        Vec::new()
    } else if workers == 1 || raws.len() < config.parallel_threshold {
        debug!("Normalizing {} listings on the calling thread", raws.len());
        let out: Vec<NormalizedListing<'a>> = raws.iter().map(|raw| normalize_listing(raw, ctx)).collect();
        if let Some(pb) = &pb {
            pb.inc(raws.len() as u64);
        }
        out
    } else {
        let chunk_size = raws.len().div_ceil(workers).max(1);
        debug!(
            "Normalizing {} listings on {} workers (chunk size {})",
            raws.len(),
            workers,
            chunk_size
        );
        thread::scope(|scope| {
            let handles: Vec<_> = raws
                .chunks(chunk_size)
                .map(|chunk| {
                    let pb = pb.clone();
                    scope.spawn(move || {
                        let out: Vec<NormalizedListing<'a>> =
                            chunk.iter().map(|raw| normalize_listing(raw, ctx)).collect();
                        if let Some(pb) = pb {
                            pb.inc(chunk.len() as u64);
                        }
                        out
                    })
                })
                .collect();

            let mut out = Vec::with_capacity(raws.len());
            for handle in handles {
                match handle.join() {
                    Ok(chunk) => out.extend(chunk),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            out
        })
    };

    if let Some(pb) = pb {
        pb.finish_with_message("Normalization complete");
    }
    info!("Normalized {} listings", raws.len());
    normalized
}

/// Everything a storefront page needs for one listing set.
#[derive(Debug, Clone, Serialize)]
pub struct ListingReport<'a> {
    pub stats: NormalizationStats,
    pub facets: FacetSet,
    pub groups: Vec<ListingGroup<'a>>,
}

/// Normalizes, builds facets over the full set, then groups the listings that
/// pass `filter`.
pub fn build_report<'a>(
    raws: &'a [RawListing],
    ctx: NormalizationContext<'_>,
    config: &EngineConfig,
    filter: &ListingFilter,
) -> ListingReport<'a> {
    let normalized = normalize_listings(raws, ctx, config);
    let facets = build_facets(&normalized, ctx.rules, ctx.reference);
    let filtered = filter_listings(&normalized, filter);
    let groups = group_listings(filtered);
    let stats = NormalizationStats::collect(&normalized).with_groups(groups.len());
    ListingReport { stats, facets, groups }
}

/// Reads a JSON array of listing records.
pub fn load_listings(path: &Path) -> Result<Vec<RawListing>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing file {}", path.display()))?;
    let listings: Vec<RawListing> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse listing file {}", path.display()))?;
    info!("Loaded {} listings from {}", listings.len(), path.display());
    Ok(listings)
}

pub fn load_filter(path: &Path) -> Result<ListingFilter> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse filter file {}", path.display()))
}

pub fn write_report(report: &ListingReport<'_>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize listing report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Wrote report with {} groups to {}", report.groups.len(), path.display());
    Ok(())
}
