// src/aggregation/mod.rs - Facets, filtering and grouping over normalized listings
pub mod facets;
pub mod filter;
pub mod grouping;

pub use facets::FacetSet;
pub use filter::{ListingCategory, ListingFilter};
pub use grouping::{CanonicalTuple, ListingGroup};
