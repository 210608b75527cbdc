// src/aggregation/facets.rs - Sorted, deduplicated filter values per listing field
use log::{debug, info};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::models::{CanonicalColor, NormalizedListing};
use crate::normalization::key::canonical_key;
use crate::normalization::lineup::lineup_year;
use crate::reference::ReferenceLookup;
use crate::rules::RuleBook;

pub const HYUNDAI_CAPITAL: &str = "현대캐피탈";
pub const PRODUCT_TYPES: [&str; 2] = ["렌트", "리스"];

const DEFAULT_COLOR_MARKERS: [&str; 2] = ["내장기본색", "기본색"];
const OTHER_COLOR_PRIORITY: u8 = 10;

const EXTERIOR_PRIORITIES: &[(&[&str], u8)] = &[
    (&["화이트", "white", "흰", "백", "클리어", "크리미"], 0),
    (&["블랙", "black", "검정", "검은"], 1),
    (&["그레이", "grey", "gray", "회색", "실버", "silver", "은색"], 2),
];

const INTERIOR_PRIORITIES: &[(&[&str], u8)] = &[
    (&["블랙", "black", "검정", "차콜"], 0),
    (&["브라운", "brown", "갈색", "캐러멜", "피칸", "베이지", "크림"], 1),
    (&["그레이", "grey", "gray", "회색"], 2),
];

/// Filterable values shown for one set of listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetSet {
    pub sources: Vec<String>,
    pub product_types: Vec<String>,
    pub sale_conditions: Vec<String>,
    pub lineups: Vec<String>,
    pub trims: Vec<String>,
    pub options: Vec<String>,
    pub exterior_colors: Vec<String>,
    pub interior_colors: Vec<String>,
}

/// Canonical key to display label, in first-seen order. A later label with more
/// whitespace-separated tokens replaces the current one; ties keep the first.
#[derive(Debug, Default)]
struct LabelCollector {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelCollector {
    fn add(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        let key = canonical_key(label);
        match self.index.get(&key) {
            Some(&idx) => {
                let current = &self.labels[idx];
                if token_count(label) > token_count(current) {
                    debug!("Facet label '{}' replaces '{}'", label, current);
                    self.labels[idx] = label.to_string();
                }
            }
            None => {
                self.index.insert(key, self.labels.len());
                self.labels.push(label.to_string());
            }
        }
    }

    fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

fn token_count(label: &str) -> usize {
    label.split_whitespace().count()
}

/// Every 현대캐피탈 sub-channel is shown as one source.
pub fn source_family(source: &str) -> &str {
    if source.starts_with(HYUNDAI_CAPITAL) {
        HYUNDAI_CAPITAL
    } else {
        source
    }
}

/// Placeholder values that never name a color.
pub fn is_junk_color(label: &str) -> bool {
    let label = label.trim();
    label.is_empty()
        || label.chars().all(|c| c.is_ascii_digit())
        || DEFAULT_COLOR_MARKERS.contains(&label)
        || label.chars().count() <= 1
}

fn color_priority(label: &str, table: &[(&[&str], u8)]) -> u8 {
    let lower = label.to_lowercase();
    table
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| lower.contains(marker)))
        .map(|(_, priority)| *priority)
        .unwrap_or(OTHER_COLOR_PRIORITY)
}

pub fn exterior_color_priority(label: &str) -> u8 {
    color_priority(label, EXTERIOR_PRIORITIES)
}

pub fn interior_color_priority(label: &str) -> u8 {
    color_priority(label, INTERIOR_PRIORITIES)
}

fn color_label(color: &CanonicalColor) -> Option<String> {
    let label = color.display();
    (!is_junk_color(&label)).then_some(label)
}

fn sorted_strings(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    values.sort();
    values
}

pub fn build_facets<'b, 'a: 'b>(
    listings: impl IntoIterator<Item = &'b NormalizedListing<'a>>,
    rules: &RuleBook,
    reference: &dyn ReferenceLookup,
) -> FacetSet {
    let mut sources = Vec::new();
    let mut product_types = HashSet::new();
    let mut sale_conditions = Vec::new();
    let mut lineups = LabelCollector::default();
    let mut trims = LabelCollector::default();
    let mut options = LabelCollector::default();
    let mut exterior = LabelCollector::default();
    let mut interior = LabelCollector::default();
    let mut count = 0usize;

    for listing in listings {
        count += 1;
        let raw = listing.raw;
        if !raw.source.is_empty() {
            sources.push(source_family(&raw.source).to_string());
        }
        if let Some(product_type) = raw.product_type.as_deref() {
            product_types.insert(product_type.trim().to_string());
        }
        if let Some(condition) = raw.sale_condition.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            sale_conditions.push(condition.to_string());
        }
        lineups.add(&listing.lineup);
        trims.add(&listing.trim);
        for option in listing.real_options() {
            options.add(&option.name);
        }
        if let Some(label) = color_label(&listing.exterior_color) {
            exterior.add(&label);
        }
        if let Some(label) = color_label(&listing.interior_color) {
            if !reference.is_known_color_name(&label) {
                interior.add(&label);
            }
        }
    }

    let mut exterior_colors = exterior.into_labels();
    exterior_colors.sort_by(|a, b| {
        exterior_color_priority(a)
            .cmp(&exterior_color_priority(b))
            .then_with(|| a.cmp(b))
    });
    let exterior_keys: HashSet<String> = exterior_colors.iter().map(|c| canonical_key(c)).collect();

    let mut options: Vec<String> = options
        .into_labels()
        .into_iter()
        .filter(|name| !reference.is_known_color_name(name) && !exterior_keys.contains(&canonical_key(name)))
        .collect();
    options.sort();

    let mut interior_colors = interior.into_labels();
    interior_colors.sort_by(|a, b| {
        interior_color_priority(a)
            .cmp(&interior_color_priority(b))
            .then_with(|| a.cmp(b))
    });

    let mut trims = trims.into_labels();
    trims.sort_by(|a, b| rules.trim_rank(a).cmp(&rules.trim_rank(b)).then_with(|| a.cmp(b)));

    let mut lineups = lineups.into_labels();
    lineups.sort_by(|a, b| {
        let year = |label: &str| lineup_year(label).unwrap_or(u32::MAX);
        year(a).cmp(&year(b)).then_with(|| a.cmp(b))
    });

    let facets = FacetSet {
        sources: sorted_strings(sources),
        product_types: PRODUCT_TYPES
            .iter()
            .filter(|product_type| product_types.contains(**product_type))
            .map(|product_type| product_type.to_string())
            .collect(),
        sale_conditions: sorted_strings(sale_conditions),
        lineups,
        trims,
        options,
        exterior_colors,
        interior_colors,
    };
    info!(
        "Built facets over {} listings: {} lineups, {} trims, {} options, {} exterior, {} interior",
        count,
        facets.lineups.len(),
        facets.trims.len(),
        facets.options.len(),
        facets.exterior_colors.len(),
        facets.interior_colors.len()
    );
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_collector_prefers_more_tokens() {
        let mut collector = LabelCollector::default();
        collector.add("드라이브와이즈");
        collector.add("드라이브 와이즈");
        collector.add("Drive  Wise");
        collector.add("Drive Wise");
        collector.add("");
        assert_eq!(collector.into_labels(), vec!["드라이브 와이즈", "Drive  Wise"]);
    }

    #[test]
    fn test_junk_colors() {
        for junk in ["", "  ", "123", "내장기본색", "기본색", "흰"] {
            assert!(is_junk_color(junk), "{:?} should be junk", junk);
        }
        assert!(!is_junk_color("블랙"));
    }

    #[test]
    fn test_color_priorities() {
        assert_eq!(exterior_color_priority("스노우 화이트 펄"), 0);
        assert_eq!(exterior_color_priority("Diamond Black"), 1);
        assert_eq!(exterior_color_priority("실버"), 2);
        assert_eq!(exterior_color_priority("세레니티 블루"), OTHER_COLOR_PRIORITY);
        assert_eq!(interior_color_priority("다크 차콜"), 0);
        assert_eq!(interior_color_priority("코튼 베이지"), 1);
        assert_eq!(interior_color_priority("네이비"), OTHER_COLOR_PRIORITY);
    }

    #[test]
    fn test_source_family() {
        assert_eq!(source_family("현대캐피탈(특판)"), HYUNDAI_CAPITAL);
        assert_eq!(source_family("현대캐피탈"), HYUNDAI_CAPITAL);
        assert_eq!(source_family("KB캐피탈"), "KB캐피탈");
    }
}
