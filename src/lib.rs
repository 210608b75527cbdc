pub mod aggregation;
pub mod models;
pub mod normalization;
pub mod pipeline;
pub mod reference;
pub mod rules;
pub mod utils;

pub use aggregation::facets::build_facets;
pub use aggregation::filter::{filter_listings, ListingFilter};
pub use aggregation::grouping::group_listings;
pub use normalization::color::resolve_color;
pub use normalization::identity::resolve_model_identity;
pub use normalization::key::canonical_key;
pub use normalization::lineup::normalize_lineup;
pub use normalization::options::classify_options;
pub use normalization::trim::{normalize_trim, trim_rank};
pub use pipeline::{normalize_listings, NormalizationContext};
pub use reference::catalog::ReferenceCatalog;
pub use reference::ReferenceLookup;
pub use rules::RuleBook;
pub use pipeline::{build_report, ListingReport};
