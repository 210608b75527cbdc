// src/normalization/identity.rs - Vehicle name to canonical (brand, model) identity
use super::brand::Brand;
use super::key::{compact_lower, is_hangul};
use crate::models::ModelIdentity;
use crate::rules::{BrandIdentityRules, RuleBook};

/// Powertrain markers matched against the lowercased, space-free name. The
/// performance "N" is handled by [`has_performance_marker`].
const POWERTRAIN_MARKERS: &[&str] = &[
    "hev", "hybrid", "하이브리드", "ev", "phev", "e-tech", "etech", "evx", "electric", "일렉트릭",
];

const POWERTRAIN_SYNONYMS: &[(&str, &str)] = &[
    ("e-tech", "hev"),
    ("etech", "hev"),
    ("hybrid", "hev"),
    ("하이브리드", "hev"),
];

/// A standalone "N", or an "N" glued to a Hangul model name or a number ("아반떼N", "5N").
fn has_performance_marker(name: &str) -> bool {
    name.to_lowercase().split_whitespace().any(|token| {
        if token == "n" {
            return true;
        }
        let Some(stem) = token.strip_suffix('n') else {
            return false;
        };
        stem.chars()
            .next_back()
            .is_some_and(|c| is_hangul(c) || c.is_ascii_digit())
    })
}

pub fn has_powertrain_marker(name: &str) -> bool {
    let compact = compact_lower(name);
    POWERTRAIN_MARKERS.iter().any(|marker| compact.contains(marker)) || has_performance_marker(name)
}

fn normalize_powertrain(s: &str) -> String {
    POWERTRAIN_SYNONYMS
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn match_keyword(compact: &str, table: &BrandIdentityRules) -> Option<&'static str> {
    table
        .keywords
        .iter()
        .find(|(keyword, _)| compact.contains(keyword))
        .map(|(_, identity)| *identity)
}

/// Powertrain variants only match identities that carry a marker themselves.
fn match_powertrain_identity(name: &str, compact: &str, table: &BrandIdentityRules) -> Option<&'static str> {
    if !has_powertrain_marker(name) {
        return None;
    }
    table
        .identities
        .iter()
        .find(|identity| has_powertrain_marker(identity) && compact.contains(&compact_lower(identity)))
        .copied()
}

fn match_phrase(compact: &str, table: &BrandIdentityRules) -> Option<&'static str> {
    for phrase in table.phrases.iter().filter(|phrase| compact.contains(*phrase)) {
        let phrase_pt = normalize_powertrain(phrase);
        let found = table.identities.iter().find(|identity| {
            let model = compact_lower(identity);
            if model.contains(phrase) || phrase.contains(model.as_str()) {
                return true;
            }
            let model_pt = normalize_powertrain(&model);
            model_pt.contains(&phrase_pt) || phrase_pt.contains(&model_pt)
        });
        if found.is_some() {
            return found.copied();
        }
    }
    None
}

fn match_substring(compact: &str, table: &BrandIdentityRules) -> Option<&'static str> {
    table
        .identities
        .iter()
        .find(|identity| compact.contains(&compact_lower(identity)))
        .copied()
}

/// Resolves a raw vehicle name. The brand is parsed from `declared_brand` or, when
/// absent, inferred from the name. `None` when the brand is unknown or nothing matches.
pub fn resolve_model_identity(
    declared_brand: Option<&str>,
    vehicle_name: &str,
    rules: &RuleBook,
) -> Option<ModelIdentity> {
    let brand = Brand::resolve(declared_brand, vehicle_name);
    let table = rules.identity_rules(brand)?;
    let compact = compact_lower(vehicle_name);
    if compact.is_empty() {
        return None;
    }

    match_keyword(&compact, table)
        .or_else(|| match_powertrain_identity(vehicle_name, &compact, table))
        .or_else(|| match_phrase(&compact, table))
        .or_else(|| match_substring(&compact, table))
        .map(|model| ModelIdentity {
            brand,
            model: model.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(brand: Option<&str>, name: &str) -> Option<String> {
        resolve_model_identity(brand, name, &RuleBook::standard()).map(|identity| identity.model)
    }

    fn custom_table() -> BrandIdentityRules {
        BrandIdentityRules {
            identities: vec!["아르카나", "아르카나 HEV", "그랑 콜레오스 E-Tech"],
            keywords: vec![],
            phrases: vec!["그랑콜레오스hybrid", "아르카나"],
        }
    }

    #[test]
    fn test_longest_keyword_wins() {
        assert_eq!(resolve(Some("기아"), "더 뉴 쏘렌토 하이브리드 1.6T").as_deref(), Some("더 뉴 쏘렌토 HEV"));
        assert_eq!(resolve(Some("기아"), "더 뉴 쏘렌토 2.5T").as_deref(), Some("더 뉴 쏘렌토"));
        assert_eq!(resolve(Some("KIA"), "The New K8 HEV").as_deref(), Some("The New K8 HEV"));
        assert_eq!(resolve(Some("현대"), "아반떼 N").as_deref(), Some("더 뉴 아반떼 N"));
        assert_eq!(resolve(Some("벤츠"), "CLE 쿠페").as_deref(), Some("The All New CLE"));
    }

    #[test]
    fn test_brand_inferred_from_name() {
        let identity = resolve_model_identity(None, "GV80 쿠페 3.5T", &RuleBook::standard()).unwrap();
        assert_eq!(identity.brand, Brand::Genesis);
        assert_eq!(identity.model, "GV80 Coupe");
    }

    #[test]
    fn test_unknown_brand_or_name() {
        assert_eq!(resolve(Some("페라리"), "로마"), None);
        assert_eq!(resolve(Some("기아"), "   "), None);
        assert_eq!(resolve(Some("기아"), "알 수 없는 모델"), None);
    }

    #[test]
    fn test_performance_marker() {
        assert!(has_powertrain_marker("아이오닉 5 N"));
        assert!(has_powertrain_marker("아반떼N"));
        assert!(has_powertrain_marker("아이오닉5n"));
        assert!(!has_powertrain_marker("더 뉴 스타리아 밴"));
        assert!(!has_powertrain_marker("Sedan"));
    }

    #[test]
    fn test_powertrain_identity_requires_marker_on_both_sides() {
        let table = custom_table();
        assert_eq!(
            match_powertrain_identity("아르카나 HEV 테크노", "아르카나hev테크노", &table),
            Some("아르카나 HEV")
        );
        assert_eq!(match_powertrain_identity("아르카나 테크노", "아르카나테크노", &table), None);
    }

    #[test]
    fn test_phrase_matching_normalizes_powertrain_synonyms() {
        let table = custom_table();
        assert_eq!(match_phrase("그랑콜레오스hybrid", &table), Some("그랑 콜레오스 E-Tech"));
        assert_eq!(match_phrase("아르카나테크노", &table), Some("아르카나"));
        assert_eq!(match_substring("뉴아르카나hev", &table), Some("아르카나"));
        assert_eq!(match_substring("sm6", &table), None);
    }
}
