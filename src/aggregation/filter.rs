// src/aggregation/filter.rs - User facet selections applied before grouping
use anyhow::{bail, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use super::facets::{source_family, HYUNDAI_CAPITAL};
use crate::models::{NormalizedListing, RawListing};
use crate::normalization::key::canonical_key;

/// Facet selections. An empty selection places no constraint on its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    pub sources: Vec<String>,
    pub product_types: Vec<String>,
    pub sale_conditions: Vec<String>,
    pub lineups: Vec<String>,
    pub trims: Vec<String>,
    /// Every selected option must be present.
    pub options: Vec<String>,
    pub exterior_colors: Vec<String>,
    pub interior_colors: Vec<String>,
}

fn selected(values: &[String], value: &str) -> bool {
    values.is_empty() || values.iter().any(|v| v == value)
}

fn selected_key(keys: &HashSet<String>, label: &str) -> bool {
    keys.is_empty() || keys.contains(&canonical_key(label))
}

fn key_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| canonical_key(v)).collect()
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn matches_source(&self, source: &str) -> bool {
        self.sources.is_empty()
            || self.sources.iter().any(|selection| {
                if selection == HYUNDAI_CAPITAL {
                    source_family(source) == HYUNDAI_CAPITAL
                } else {
                    selection == source
                }
            })
    }
}

pub fn filter_listings<'b, 'a: 'b>(
    listings: &'b [NormalizedListing<'a>],
    filter: &ListingFilter,
) -> Vec<&'b NormalizedListing<'a>> {
    if filter.is_empty() {
        return listings.iter().collect();
    }

    let option_keys = key_set(&filter.options);
    let exterior_keys = key_set(&filter.exterior_colors);
    let interior_keys = key_set(&filter.interior_colors);

    let kept: Vec<&NormalizedListing<'a>> = listings
        .iter()
        .filter(|listing| {
            let raw = listing.raw;
            filter.matches_source(&raw.source)
                && selected(&filter.product_types, raw.product_type.as_deref().unwrap_or_default())
                && selected(&filter.sale_conditions, raw.sale_condition.as_deref().unwrap_or_default())
                && selected(&filter.lineups, &listing.lineup)
                && selected(&filter.trims, &listing.trim)
                && selected_key(&exterior_keys, &listing.exterior_color.display())
                && selected_key(&interior_keys, &listing.interior_color.display())
                && (option_keys.is_empty() || {
                    let present: HashSet<String> =
                        listing.real_options().map(|o| canonical_key(&o.name)).collect();
                    option_keys.is_subset(&present)
                })
        })
        .collect();
    info!("Filter kept {}/{} listings", kept.len(), listings.len());
    kept
}

/// Storefront sections. `Special` also covers uncategorized and regular stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Special,
    Dealer,
}

impl FromStr for ListingCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "special" => Ok(Self::Special),
            "dealer" => Ok(Self::Dealer),
            other => bail!("Unknown listing category '{}'", other),
        }
    }
}

pub fn matches_category(raw: &RawListing, category: ListingCategory) -> bool {
    match category {
        ListingCategory::Special => matches!(raw.category.as_deref(), None | Some("regular") | Some("special")),
        ListingCategory::Dealer => raw.category.as_deref() == Some("dealer"),
    }
}
