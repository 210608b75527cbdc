// src/reference/data.rs - Master-data snapshot as stored on disk
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File holding the brand-independent tables when loading a directory of sheets.
pub const MASTER_FILE_NAME: &str = "master_data.json";

/// A normalization entry: either `"official": "..."` with variants, or a bare string
/// whose key is the official name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NormEntry {
    Plain(String),
    Detailed {
        official: String,
        #[serde(default)]
        variants: Vec<String>,
    },
}

impl NormEntry {
    pub fn official<'a>(&'a self, key: &'a str) -> &'a str {
        match self {
            NormEntry::Plain(_) => key,
            NormEntry::Detailed { official, .. } => official,
        }
    }

    pub fn variants(&self) -> &[String] {
        match self {
            NormEntry::Plain(_) => &[],
            NormEntry::Detailed { variants, .. } => variants,
        }
    }
}

/// One brand's sheet: its own option rules plus a nested tree of vehicles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandSheet {
    #[serde(default)]
    pub option_normalizations: BTreeMap<String, NormEntry>,
    #[serde(default)]
    pub vehicles: Value,
}

/// Per-vehicle master data. `exterior_colors` maps either a paint code to its Korean
/// name, or a Korean name to its English name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleSheet {
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub exterior_colors: BTreeMap<String, Value>,
    #[serde(default)]
    pub interior_colors: Vec<String>,
    #[serde(default)]
    pub garnish: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct VehicleEntry {
    pub key: String,
    pub sheet: VehicleSheet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub option_normalizations: BTreeMap<String, NormEntry>,
    #[serde(default)]
    pub exterior_color_normalizations: BTreeMap<String, Value>,
    #[serde(default)]
    pub interior_color_normalizations: BTreeMap<String, NormEntry>,
    #[serde(default)]
    pub brands: BTreeMap<String, BrandSheet>,
}

/// Keys starting with "_" hold comments in the master data.
pub fn is_comment_key(key: &str) -> bool {
    key.starts_with('_')
}

impl ReferenceData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse reference data JSON")
    }

    /// Loads a combined snapshot file, or a directory holding `master_data.json`
    /// next to one sheet per brand (named after the brand).
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::from_dir(path)
        } else {
            Self::from_path(path)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference data from {}", path.display()))?;
        let data = Self::from_json_str(&json)
            .with_context(|| format!("Invalid reference data in {}", path.display()))?;
        info!(
            "Loaded reference snapshot {} ({} brand sheets)",
            path.display(),
            data.brands.len()
        );
        Ok(data)
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        let master_path = dir.join(MASTER_FILE_NAME);
        let mut data = if master_path.exists() {
            Self::from_path(&master_path)?
        } else {
            warn!("No {} in {}, loading brand sheets only", MASTER_FILE_NAME, dir.display());
            Self::default()
        };

        let mut sheet_paths: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("Failed to list reference directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "json")
                    && path.file_name().is_some_and(|name| name != MASTER_FILE_NAME)
            })
            .collect();
        sheet_paths.sort();

        for sheet_path in sheet_paths {
            let brand = sheet_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let json = fs::read_to_string(&sheet_path)
                .with_context(|| format!("Failed to read brand sheet {}", sheet_path.display()))?;
            let sheet: BrandSheet = serde_json::from_str(&json)
                .with_context(|| format!("Invalid brand sheet {}", sheet_path.display()))?;
            debug!("Loaded brand sheet '{}' from {}", brand, sheet_path.display());
            data.brands.insert(brand, sheet);
        }

        info!(
            "Loaded reference directory {} ({} brand sheets)",
            dir.display(),
            data.brands.len()
        );
        Ok(data)
    }

    /// Every vehicle across all brand sheets, in sheet order.
    pub fn vehicles(&self) -> Vec<VehicleEntry> {
        let mut out = Vec::new();
        for sheet in self.brands.values() {
            collect_vehicles(&sheet.vehicles, &mut out);
        }
        out
    }
}

fn is_vehicle_object(object: &serde_json::Map<String, Value>) -> bool {
    object.contains_key("official_name")
        || object.contains_key("interior_colors")
        || object.contains_key("exterior_colors")
}

fn collect_vehicles(tree: &Value, out: &mut Vec<VehicleEntry>) {
    let Some(object) = tree.as_object() else {
        return;
    };
    for (key, value) in object {
        if is_comment_key(key) {
            continue;
        }
        let Some(child) = value.as_object() else {
            continue;
        };
        if is_vehicle_object(child) {
            match serde_json::from_value::<VehicleSheet>(value.clone()) {
                Ok(sheet) => out.push(VehicleEntry {
                    key: key.clone(),
                    sheet,
                }),
                Err(e) => warn!("Skipping malformed vehicle entry '{}': {}", key, e),
            }
        } else {
            collect_vehicles(value, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const SNAPSHOT: &str = r#"{
        "option_normalizations": {
            "_comment": "options",
            "파노라마 선루프": { "official": "파노라마 선루프", "variants": ["파노라마썬루프"] },
            "HUD": "HUD"
        },
        "exterior_color_normalizations": { "SWP": "스노우 화이트 펄", "_note": "codes" },
        "brands": {
            "kia": {
                "vehicles": {
                    "suv": {
                        "쏘렌토": {
                            "official_name": "더 뉴 쏘렌토",
                            "exterior_colors": { "SWP": "스노우 화이트 펄" },
                            "interior_colors": ["블랙 모노톤"]
                        }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let data = ReferenceData::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(data.option_normalizations.len(), 3);
        let entry = &data.option_normalizations["파노라마 선루프"];
        assert_eq!(entry.official("파노라마 선루프"), "파노라마 선루프");
        assert_eq!(entry.variants(), ["파노라마썬루프".to_string()]);
        assert_eq!(data.option_normalizations["HUD"].official("HUD"), "HUD");
    }

    #[test]
    fn test_nested_vehicles_are_flattened() {
        let data = ReferenceData::from_json_str(SNAPSHOT).unwrap();
        let vehicles = data.vehicles();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].key, "쏘렌토");
        assert_eq!(vehicles[0].sheet.official_name.as_deref(), Some("더 뉴 쏘렌토"));
        assert_eq!(vehicles[0].sheet.interior_colors, vec!["블랙 모노톤".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let data = ReferenceData::load(file.path()).unwrap();
        assert!(data.brands.contains_key("kia"));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MASTER_FILE_NAME),
            r#"{ "exterior_color_normalizations": { "A2B": "어비스 블랙 펄" } }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("genesis.json"),
            r#"{ "vehicles": { "GV80": { "interior_colors": ["블랙 모노톤"], "garnish": ["리얼 알루미늄"] } } }"#,
        )
        .unwrap();

        let data = ReferenceData::load(dir.path()).unwrap();
        assert_eq!(data.exterior_color_normalizations.len(), 1);
        assert!(data.brands.contains_key("genesis"));
        assert_eq!(data.vehicles()[0].sheet.garnish, vec!["리얼 알루미늄".to_string()]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ReferenceData::from_json_str("{ not json").is_err());
        assert!(ReferenceData::load(Path::new("/definitely/missing.json")).is_err());
    }
}
