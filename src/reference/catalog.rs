// src/reference/catalog.rs - In-memory ReferenceLookup built from a master-data snapshot
use anyhow::Result;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::data::{is_comment_key, NormEntry, ReferenceData, VehicleEntry};
use super::model_colors::{interior_without_palette, match_exterior, match_garnish, match_interior, preprocess_interior};
use super::ReferenceLookup;
use crate::normalization::key::{reference_key, replace_ascii_word};

static PAINT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{1,3}$").unwrap());
static FACELIFT_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*F/L\s*$").unwrap());
static HEV_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*HEV\s*$").unwrap());
static GENERATION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(더 뉴|디 올 뉴)\s+").unwrap());

/// Misspellings feeds use for words inside official exterior color names.
const EXTERIOR_COLOR_TYPOS: &[(&str, &str)] = &[("세레이티", "세레니티")];

const HYBRID_WORD: &str = "하이브리드";

#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    options: HashMap<String, String>,
    official_options: HashSet<String>,
    ext_colors: HashMap<String, String>,
    color_keys: HashSet<String>,
    int_colors: HashMap<String, String>,
    model_ext_colors: HashMap<String, Vec<String>>,
    model_int_colors: HashMap<String, Vec<String>>,
    model_garnish: HashMap<String, Vec<String>>,
}

impl ReferenceCatalog {
    /// Loads a snapshot file or directory and builds the catalog from it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = ReferenceData::load(path)?;
        Ok(Self::build(&data))
    }

    pub fn build(data: &ReferenceData) -> Self {
        let mut catalog = Self::default();
        let vehicles = data.vehicles();

        catalog.add_option_norms(&data.option_normalizations);
        for sheet in data.brands.values() {
            catalog.add_option_norms(&sheet.option_normalizations);
        }
        for vehicle in &vehicles {
            for option in &vehicle.sheet.options {
                catalog.official_options.insert(option.clone());
                catalog
                    .options
                    .entry(reference_key(option))
                    .or_insert_with(|| option.clone());
            }
        }

        for (code, name) in &data.exterior_color_normalizations {
            if is_comment_key(code) {
                continue;
            }
            if let Value::String(name) = name {
                catalog.ext_colors.insert(reference_key(code), name.clone());
                catalog
                    .ext_colors
                    .entry(reference_key(name))
                    .or_insert_with(|| name.clone());
                catalog.color_keys.insert(reference_key(name));
            }
        }
        for vehicle in &vehicles {
            catalog.add_exterior_colors(vehicle);
        }
        catalog.add_exterior_typos();

        for (key, entry) in &data.interior_color_normalizations {
            if is_comment_key(key) {
                continue;
            }
            if let NormEntry::Detailed { official, variants } = entry {
                catalog.int_colors.insert(reference_key(official), official.clone());
                for variant in variants {
                    catalog.int_colors.insert(reference_key(variant), official.clone());
                }
            }
        }
        for vehicle in &vehicles {
            for color in &vehicle.sheet.interior_colors {
                catalog
                    .int_colors
                    .entry(reference_key(color))
                    .or_insert_with(|| color.clone());
            }
        }

        for vehicle in &vehicles {
            catalog.register_model(vehicle);
        }

        info!(
            "Reference catalog built: {} option keys, {} exterior keys, {} interior keys, {} models with colors",
            catalog.options.len(),
            catalog.ext_colors.len(),
            catalog.int_colors.len(),
            catalog.model_ext_colors.len().max(catalog.model_int_colors.len())
        );
        catalog
    }

    fn add_option_norms(&mut self, norms: &std::collections::BTreeMap<String, NormEntry>) {
        for (key, entry) in norms {
            if is_comment_key(key) {
                continue;
            }
            let official = entry.official(key).to_string();
            self.official_options.insert(official.clone());
            self.options.insert(reference_key(&official), official.clone());
            for variant in entry.variants() {
                self.options.insert(reference_key(variant), official.clone());
            }
        }
    }

    fn add_exterior_colors(&mut self, vehicle: &VehicleEntry) {
        for (code_or_name, value) in &vehicle.sheet.exterior_colors {
            let Value::String(value) = value else {
                continue;
            };
            if PAINT_CODE.is_match(code_or_name) {
                self.ext_colors.insert(reference_key(code_or_name), value.clone());
                self.color_keys.insert(reference_key(value));
                self.ext_colors.insert(reference_key(value), value.clone());
            } else {
                // Korean official name keyed to its English name.
                self.color_keys.insert(reference_key(code_or_name));
                self.ext_colors.insert(reference_key(code_or_name), code_or_name.clone());
                self.ext_colors.insert(reference_key(value), code_or_name.clone());
            }
        }
    }

    fn add_exterior_typos(&mut self) {
        let officials: HashSet<String> = self.ext_colors.values().cloned().collect();
        for (typo, correct) in EXTERIOR_COLOR_TYPOS {
            for official in officials.iter().filter(|name| name.contains(correct)) {
                let misspelled = official.replacen(correct, typo, 1);
                self.ext_colors.insert(reference_key(&misspelled), official.clone());
            }
        }
    }

    fn register_model(&mut self, vehicle: &VehicleEntry) {
        let sheet = &vehicle.sheet;
        let exterior: Vec<String> = sheet
            .exterior_colors
            .iter()
            .filter_map(|(code_or_name, value)| match value {
                Value::String(name) if PAINT_CODE.is_match(code_or_name) => Some(name.clone()),
                Value::String(_) => Some(code_or_name.clone()),
                _ => None,
            })
            .collect();

        let mut names = vec![vehicle.key.clone()];
        names.extend(sheet.official_name.iter().cloned());
        names.extend(sheet.aliases.iter().cloned());

        for name in names {
            let mut variants = vec![name.clone()];
            let as_hev = name.replace(HYBRID_WORD, "HEV");
            if as_hev != name {
                variants.push(as_hev);
            }
            let as_hybrid = replace_ascii_word(&name, "HEV", HYBRID_WORD);
            if as_hybrid != name {
                variants.push(as_hybrid);
            }
            for variant in variants {
                let key = reference_key(&variant);
                if !sheet.interior_colors.is_empty() {
                    self.model_int_colors.insert(key.clone(), sheet.interior_colors.clone());
                }
                if !exterior.is_empty() {
                    self.model_ext_colors.insert(key.clone(), exterior.clone());
                }
                if !sheet.garnish.is_empty() {
                    self.model_garnish.insert(key, sheet.garnish.clone());
                }
            }
        }
        debug!("Registered model colors for '{}'", vehicle.key);
    }

    pub fn lookup_ext_color(&self, color: &str) -> String {
        self.ext_colors
            .get(&reference_key(color))
            .cloned()
            .unwrap_or_else(|| color.to_string())
    }

    pub fn lookup_int_color(&self, color: &str) -> String {
        self.int_colors
            .get(&reference_key(color))
            .cloned()
            .unwrap_or_else(|| color.to_string())
    }

    /// Spellings under which a model may have been registered.
    fn model_candidates(model: &str) -> Vec<String> {
        let without_prefix = GENERATION_PREFIX.replace(model, "").into_owned();
        vec![
            model.to_string(),
            FACELIFT_SUFFIX.replace(model, "").trim().to_string(),
            HEV_SUFFIX.replace(model, " 하이브리드").trim().to_string(),
            HEV_SUFFIX.replace(&without_prefix, " 하이브리드").trim().to_string(),
            without_prefix,
        ]
    }

    fn model_entry<'a>(map: &'a HashMap<String, Vec<String>>, model: &str) -> Option<&'a [String]> {
        Self::model_candidates(model)
            .iter()
            .find_map(|candidate| map.get(&reference_key(candidate)))
            .map(|list| list.as_slice())
            .filter(|list| !list.is_empty())
    }
}

impl ReferenceLookup for ReferenceCatalog {
    fn lookup_option(&self, name: &str) -> String {
        self.options
            .get(&reference_key(name))
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    fn is_official_option(&self, name: &str) -> bool {
        self.official_options.contains(name)
    }

    fn lookup_ext_color_for_model(&self, color: &str, model: &str) -> String {
        let global = self.lookup_ext_color(color);
        if color.is_empty() || model.is_empty() {
            return global;
        }
        match Self::model_entry(&self.model_ext_colors, model) {
            Some(palette) => match_exterior(color, &global, palette),
            None => global,
        }
    }

    fn lookup_int_color_for_model(&self, color: &str, model: &str) -> String {
        if color.is_empty() || model.is_empty() {
            return self.lookup_int_color(color);
        }
        let c = preprocess_interior(color);
        match Self::model_entry(&self.model_int_colors, model) {
            Some(palette) => match_interior(&c, palette).unwrap_or_else(|| self.lookup_int_color(&c)),
            None => self.lookup_int_color(&interior_without_palette(&c)),
        }
    }

    fn lookup_garnish_for_model(&self, garnish: &str, model: &str) -> Option<String> {
        if garnish.is_empty() || model.is_empty() {
            return None;
        }
        Self::model_entry(&self.model_garnish, model).and_then(|list| match_garnish(garnish, list))
    }

    fn is_known_color_name(&self, name: &str) -> bool {
        self.color_keys.contains(&reference_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "option_normalizations": {
            "_comment": "shared option rules",
            "파노라마 선루프": { "official": "파노라마 선루프", "variants": ["파노라마썬루프", "파노라마 썬루프"] },
            "드라이브 와이즈": "드라이브 와이즈"
        },
        "exterior_color_normalizations": { "SWP": "스노우 화이트 펄" },
        "interior_color_normalizations": {
            "블랙 모노톤": { "official": "블랙 모노톤", "variants": ["블랙원톤"] }
        },
        "brands": {
            "kia": {
                "option_normalizations": { "빌트인 캠 2": { "official": "빌트인 캠 2", "variants": ["빌트인캠2"] } },
                "vehicles": {
                    "sedan": {
                        "K8 하이브리드": {
                            "official_name": "더 뉴 K8 하이브리드",
                            "options": ["증강현실 HUD"],
                            "exterior_colors": { "SWP": "스노우 화이트 펄", "ABP": "오로라 블랙 펄", "KLG": "세레니티 블루" },
                            "interior_colors": ["블랙 모노톤", "네이비 브라운 투톤"]
                        }
                    }
                }
            },
            "genesis": {
                "vehicles": {
                    "GV80": {
                        "exterior_colors": { "우유니 화이트": "Uyuni White" },
                        "interior_colors": ["옵시디언 블랙 모노톤"],
                        "garnish": ["리얼 알루미늄", "포지드 카본"]
                    }
                }
            }
        }
    }"#;

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::build(&ReferenceData::from_json_str(SNAPSHOT).unwrap())
    }

    #[test]
    fn test_option_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_option("파노라마썬루프"), "파노라마 선루프");
        assert_eq!(catalog.lookup_option("빌트인캠2"), "빌트인 캠 2");
        assert_eq!(catalog.lookup_option("증강현실HUD"), "증강현실 HUD");
        assert_eq!(catalog.lookup_option("알 수 없는 옵션"), "알 수 없는 옵션");
        assert!(catalog.is_official_option("드라이브 와이즈"));
        assert!(!catalog.is_official_option("드라이브와이즈"));
    }

    #[test]
    fn test_exterior_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_ext_color("SWP"), "스노우 화이트 펄");
        assert_eq!(catalog.lookup_ext_color("Uyuni White"), "우유니 화이트");
        assert_eq!(catalog.lookup_ext_color("우유니화이트"), "우유니 화이트");
        assert_eq!(catalog.lookup_ext_color("세레이티 블루"), "세레니티 블루");
        assert!(catalog.is_known_color_name("오로라블랙펄"));
        assert!(!catalog.is_known_color_name("파노라마 선루프"));
    }

    #[test]
    fn test_model_name_variants() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_ext_color_for_model("흰색", "K8 HEV"), "스노우 화이트 펄");
        assert_eq!(catalog.lookup_ext_color_for_model("흰색", "더 뉴 K8 HEV"), "스노우 화이트 펄");
        assert_eq!(catalog.lookup_ext_color_for_model("검정", "K8 하이브리드 F/L"), "오로라 블랙 펄");
        assert_eq!(catalog.lookup_ext_color_for_model("흰색", "미등록 모델"), "흰색");
    }

    #[test]
    fn test_interior_lookup_for_model() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_int_color_for_model("블랙 블랙", "K8 하이브리드"), "블랙 모노톤");
        assert_eq!(catalog.lookup_int_color_for_model("인디고 브라운", "K8 하이브리드"), "네이비 브라운 투톤");
        assert_eq!(catalog.lookup_int_color_for_model("블랙", "GV80"), "옵시디언 블랙 모노톤");
        // no palette: bare base color becomes a mono-tone and resolves globally
        assert_eq!(catalog.lookup_int_color_for_model("블랙", "미등록 모델"), "블랙 모노톤");
        assert_eq!(catalog.lookup_int_color_for_model("", "GV80"), "");
    }

    #[test]
    fn test_garnish_lookup_for_model() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_garnish_for_model("리얼알루미늄", "GV80"), Some("리얼 알루미늄".to_string()));
        assert_eq!(catalog.lookup_garnish_for_model("카본", "GV80"), Some("포지드 카본".to_string()));
        assert_eq!(catalog.lookup_garnish_for_model("카본", "K8 하이브리드"), None);
        assert_eq!(catalog.lookup_garnish_for_model("", "GV80"), None);
    }
}
