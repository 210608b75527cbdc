use serde::Serialize;

use super::listing::{NormalizedListing, OptionClass};

/// Counters describing one normalization pass, reported alongside facets and groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    pub total_listings: usize,
    pub resolved_identities: usize,
    pub unresolved_identities: usize,
    pub real_options: usize,
    pub color_options: usize,
    pub junk_options: usize,
    pub listings_with_exterior_color: usize,
    pub listings_with_interior_color: usize,
    pub groups: usize,
}

impl NormalizationStats {
    pub fn collect(listings: &[NormalizedListing<'_>]) -> Self {
        let mut stats = Self {
            total_listings: listings.len(),
            ..Self::default()
        };
        for listing in listings {
            if listing.identity.is_some() {
                stats.resolved_identities += 1;
            } else {
                stats.unresolved_identities += 1;
            }
            for option in &listing.options {
                match option.class {
                    OptionClass::Real => stats.real_options += 1,
                    OptionClass::Color => stats.color_options += 1,
                    OptionClass::Junk => stats.junk_options += 1,
                }
            }
            if !listing.exterior_color.is_empty() {
                stats.listings_with_exterior_color += 1;
            }
            if !listing.interior_color.is_empty() {
                stats.listings_with_interior_color += 1;
            }
        }
        stats
    }

    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }
}
