// src/models/listing.rs - Listing records and their canonical forms
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalization::brand::Brand;

/// One externally sourced listing record, exactly as the feed delivered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub vehicle_name: String,
    #[serde(default)]
    pub raw_vehicle_name: Option<String>,
    #[serde(default)]
    pub trim: Option<String>,
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub exterior_color: Option<String>,
    #[serde(default)]
    pub interior_color: Option<String>,
    #[serde(default)]
    pub lineup: Option<String>,
    #[serde(default)]
    pub sale_condition: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub discount: Option<i64>,
    #[serde(default)]
    pub promotion: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionClass {
    Real,
    Color,
    Junk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalOption {
    pub name: String,
    pub class: OptionClass,
}

impl CanonicalOption {
    pub fn is_real(&self) -> bool {
        self.class == OptionClass::Real
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Exterior,
    Interior,
}

/// A resolved color. Interior colors of some brands carry a garnish accent,
/// displayed as `name_garnish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalColor {
    pub kind: ColorKind,
    pub name: String,
    pub garnish: Option<String>,
}

impl CanonicalColor {
    pub fn empty(kind: ColorKind) -> Self {
        Self {
            kind,
            name: String::new(),
            garnish: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.garnish.is_none()
    }

    pub fn display(&self) -> String {
        match &self.garnish {
            Some(garnish) if !self.name.is_empty() => format!("{}_{}", self.name, garnish),
            Some(garnish) => garnish.clone(),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelIdentity {
    pub brand: Brand,
    pub model: String,
}

/// Per-record output of the normalization stage, borrowing the record it came from.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedListing<'a> {
    pub raw: &'a RawListing,
    pub brand: Brand,
    pub identity: Option<ModelIdentity>,
    pub lineup: String,
    pub trim: String,
    pub options: Vec<CanonicalOption>,
    pub exterior_color: CanonicalColor,
    pub interior_color: CanonicalColor,
}

impl<'a> NormalizedListing<'a> {
    /// Canonical model name, or the raw vehicle name when no identity resolved.
    pub fn model_name(&self) -> &str {
        self.identity
            .as_ref()
            .map(|identity| identity.model.as_str())
            .unwrap_or(self.raw.vehicle_name.as_str())
    }

    pub fn real_options(&self) -> impl Iterator<Item = &CanonicalOption> {
        self.options.iter().filter(|option| option.is_real())
    }
}
