// src/aggregation/grouping.rs - Collapsing listings that display identically
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

use crate::models::{NormalizedListing, RawListing};
use crate::normalization::key::canonical_key;

const FIELD_SEPARATOR: &str = "|";
const OPTION_SEPARATOR: &str = ",";

/// Ordered field set whose equality defines "same displayed listing".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalTuple {
    pub source: String,
    pub product_type: String,
    pub sale_condition: String,
    pub discount: Option<i64>,
    pub vehicle_name: String,
    pub lineup: String,
    pub trim: String,
    /// Sorted, deduplicated canonical keys of the real options.
    pub options: Vec<String>,
    pub exterior_color: String,
    pub interior_color: String,
    pub price: Option<i64>,
}

fn text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

impl CanonicalTuple {
    pub fn from_listing(listing: &NormalizedListing<'_>) -> Self {
        let raw = listing.raw;
        let mut options: Vec<String> = listing
            .real_options()
            .map(|option| canonical_key(&option.name))
            .collect();
        options.sort();
        options.dedup();

        Self {
            source: raw.source.trim().to_string(),
            product_type: text(raw.product_type.as_deref()),
            sale_condition: text(raw.sale_condition.as_deref()),
            discount: raw.discount,
            vehicle_name: listing.model_name().to_string(),
            lineup: listing.lineup.clone(),
            trim: listing.trim.clone(),
            options,
            exterior_color: canonical_key(&listing.exterior_color.display()),
            interior_color: canonical_key(&listing.interior_color.display()),
            price: raw.price,
        }
    }

    pub fn key_string(&self) -> String {
        [
            self.source.clone(),
            self.product_type.clone(),
            self.sale_condition.clone(),
            number(self.discount),
            self.vehicle_name.clone(),
            self.lineup.clone(),
            self.trim.clone(),
            self.options.join(OPTION_SEPARATOR),
            self.exterior_color.clone(),
            self.interior_color.clone(),
            number(self.price),
        ]
        .join(FIELD_SEPARATOR)
    }

    /// Stable hex SHA-256 of the key string.
    pub fn group_id(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.key_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingGroup<'a> {
    pub group_id: String,
    pub key: CanonicalTuple,
    /// Most recent member; ties keep the first one seen.
    pub representative: &'a RawListing,
    pub count: usize,
    pub latest_at: DateTime<Utc>,
}

/// Groups listings by canonical tuple. Groups come back newest first; groups with
/// equal timestamps keep first-seen order.
pub fn group_listings<'b, 'a: 'b>(
    listings: impl IntoIterator<Item = &'b NormalizedListing<'a>>,
) -> Vec<ListingGroup<'a>> {
    let mut groups: Vec<ListingGroup<'a>> = Vec::new();
    let mut index: HashMap<CanonicalTuple, usize> = HashMap::new();
    let mut total = 0usize;

    for listing in listings {
        total += 1;
        let key = CanonicalTuple::from_listing(listing);
        let raw = listing.raw;
        match index.get(&key) {
            Some(&idx) => {
                let group = &mut groups[idx];
                group.count += 1;
                if raw.created_at > group.latest_at {
                    debug!(
                        "Group {} representative {} -> {}",
                        group.group_id, group.representative.id, raw.id
                    );
                    group.representative = raw;
                    group.latest_at = raw.created_at;
                }
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(ListingGroup {
                    group_id: key.group_id(),
                    key,
                    representative: raw,
                    count: 1,
                    latest_at: raw.created_at,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.latest_at.cmp(&a.latest_at));
    info!("Grouped {} listings into {} groups", total, groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CanonicalColor, CanonicalOption, ColorKind, OptionClass};
    use crate::normalization::brand::Brand;
    use chrono::TimeZone;

    fn raw(id: &str, minute: u32) -> RawListing {
        RawListing {
            id: id.to_string(),
            brand: Some("기아".to_string()),
            vehicle_name: "쏘렌토".to_string(),
            raw_vehicle_name: None,
            trim: Some("시그니처".to_string()),
            options: None,
            exterior_color: None,
            interior_color: None,
            lineup: None,
            sale_condition: Some("즉시출고".to_string()),
            product_type: Some("렌트".to_string()),
            source: "KB캐피탈".to_string(),
            price: Some(650_000),
            discount: None,
            promotion: None,
            note: None,
            category: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, minute, 0).unwrap(),
        }
    }

    fn normalized<'a>(raw: &'a RawListing, options: &[&str], exterior: &str) -> NormalizedListing<'a> {
        NormalizedListing {
            raw,
            brand: Brand::Kia,
            identity: None,
            lineup: "2025년형 가솔린 2.5T 2WD".to_string(),
            trim: "시그니처".to_string(),
            options: options
                .iter()
                .map(|name| CanonicalOption {
                    name: name.to_string(),
                    class: OptionClass::Real,
                })
                .collect(),
            exterior_color: CanonicalColor {
                kind: ColorKind::Exterior,
                name: exterior.to_string(),
                garnish: None,
            },
            interior_color: CanonicalColor::empty(ColorKind::Interior),
        }
    }

    #[test]
    fn test_equal_tuples_share_a_group() {
        let (a, b, c) = (raw("a", 0), raw("b", 5), raw("c", 3));
        let listings = vec![
            normalized(&a, &["드라이브 와이즈", "HUD"], "스노우 화이트 펄"),
            normalized(&b, &["HUD", "드라이브와이즈"], "스노우화이트펄"),
            normalized(&c, &["HUD"], "스노우 화이트 펄"),
        ];
        let groups = group_listings(&listings);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].representative.id, "b");
        assert_eq!(groups[1].representative.id, "c");
        assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), listings.len());
    }

    #[test]
    fn test_timestamp_ties_keep_first_seen() {
        let (a, b) = (raw("a", 0), raw("b", 0));
        let listings = vec![normalized(&a, &[], "블랙"), normalized(&b, &[], "블랙")];
        let groups = group_listings(&listings);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].representative.id, "a");
    }

    #[test]
    fn test_group_id_is_stable_hex() {
        let a = raw("a", 0);
        let key = CanonicalTuple::from_listing(&normalized(&a, &["HUD"], "블랙"));
        assert_eq!(key.group_id(), key.clone().group_id());
        assert_eq!(key.group_id().len(), 64);
        assert!(key.key_string().starts_with("KB캐피탈|렌트|즉시출고||쏘렌토|"));
    }
}
