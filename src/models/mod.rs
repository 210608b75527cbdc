pub mod listing;
pub mod stats_models;

pub use listing::{
    CanonicalColor, CanonicalOption, ColorKind, ModelIdentity, NormalizedListing, OptionClass,
    RawListing,
};
pub use stats_models::NormalizationStats;
