// src/normalization/color.rs - Exterior and interior color resolution
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::brand::Brand;
use super::token::collapse_whitespace;
use crate::models::{CanonicalColor, ColorKind};
use crate::reference::ReferenceLookup;
use crate::rules::RuleBook;

static LEADING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[?？!]").unwrap());
static HASH_CODE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\d+\s*-\s*").unwrap());
static NUMBER_DASH_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+-").unwrap());
static NUMBER_SPACE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+([A-Z])").unwrap());
static PAREN_CODE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\([A-Z0-9]+\)\s*").unwrap());
static LETTER_CODE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,5}\s*-\s*").unwrap());
static SQUARE_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\[[^\]]*\]").unwrap());
static GLOSS_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(유광\)").unwrap());
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(([^)]*)\)").unwrap());
static TRAILING_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([A-Z][A-Z0-9]{1,3})$").unwrap());
static INTERIOR_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*인테리어\s*$").unwrap());
static CONNECTORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/+]").unwrap());

static SEAT_PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*시트)\)(.*)").unwrap());
static FIRST_PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());
static LEADING_CONNECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[/+]\s*").unwrap());

const MATTE_MARK: &str = "무광";
const TWO_TONE: &str = "투톤";
const STITCHING: &str = "스티치";
const SPORT_PREFIX: &str = "스포츠전용_";
const GARNISH_MARKER: &str = "(가니쉬)";

const INTERIOR_TYPOS: [(&str, &str); 3] = [("글레시어", "글레이셔"), ("글래이셔", "글레이셔"), ("하나바", "하바나")];

const TESLA_EXTERIOR: &[(&str, &str)] = &[
    ("화이트", "Pearl White Multi-Coat"),
    ("블랙", "Diamond Black"),
    ("그레이", "Stealth Grey"),
    ("스틸그레이", "Stealth Grey"),
];

const TESLA_INTERIOR: &[(&str, &str)] = &[("블랙", "All Black"), ("화이트", "Black & White"), ("Black", "All Black")];

fn tesla_name(table: &[(&str, &str)], name: &str) -> Option<String> {
    table
        .iter()
        .find(|(korean, _)| *korean == name)
        .map(|(_, english)| english.to_string())
}

/// Tesla sells under English names; a bare Korean word maps directly, otherwise
/// the looked-up name is translated when possible.
fn resolve_tesla(table: &[(&str, &str)], cleaned: &str, lookup: impl FnOnce() -> String) -> String {
    if let Some(english) = tesla_name(table, cleaned) {
        return english;
    }
    let name = lookup();
    tesla_name(table, &name).unwrap_or(name)
}

/// Cleanup both color kinds start from.
fn strip_common_noise(raw: &str) -> String {
    let s = raw.trim();
    let s = LEADING_PUNCTUATION.replace(s, "");
    let s = SQUARE_ANNOTATION.replace_all(&s, "");
    INTERIOR_SUFFIX.replace(&s, "").into_owned()
}

/// Drops parentheticals except a matte marker.
fn strip_parentheticals_keep_matte(s: &str) -> String {
    PARENTHETICAL
        .replace_all(s, |caps: &Captures| {
            if &caps[1] == MATTE_MARK {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Drops a trailing paint code like "W6H". A plain Latin word such as "RED" in
/// "FLAME RED" is kept.
fn strip_trailing_code(s: &str) -> String {
    let Some(caps) = TRAILING_CODE.captures(s) else {
        return s.to_string();
    };
    let Some(whole) = caps.get(0) else {
        return s.to_string();
    };
    let code = &caps[1];
    let head = &s[..whole.start()];
    let head_is_latin = head.chars().all(|c| c.is_ascii() || c.is_whitespace());
    if code.chars().any(|c| c.is_ascii_digit()) || !head_is_latin {
        head.to_string()
    } else {
        s.to_string()
    }
}

/// Splits "exterior/interior" cells where the part after the slash is a known
/// interior name. Two-tone paints are left alone.
fn split_combined_cell(s: &str, rules: &RuleBook) -> String {
    if !s.contains('/') || s.contains(TWO_TONE) {
        return s.to_string();
    }
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() == 2 {
        let after: String = parts[1].chars().filter(|c| !c.is_whitespace()).collect();
        if rules.is_known_interior_name(&after) {
            return parts[0].trim().to_string();
        }
    }
    s.to_string()
}

fn connectors_to_spaces(s: &str) -> String {
    collapse_whitespace(&CONNECTORS.replace_all(s, " "))
}

/// Official dual-tone names keep their connector.
fn clean_exterior(raw: &str, rules: &RuleBook, reference: &dyn ReferenceLookup) -> String {
    let s = raw.trim();
    let s = LEADING_PUNCTUATION.replace(s, "");
    let s = HASH_CODE_PREFIX.replace(&s, "");
    let s = NUMBER_DASH_PREFIX.replace(&s, "");
    let s = NUMBER_SPACE_PREFIX.replace(&s, "$1");
    let s = PAREN_CODE_PREFIX.replace(&s, "");
    let s = LETTER_CODE_PREFIX.replace(&s, "");
    let s = SQUARE_ANNOTATION.replace_all(&s, "");
    let s = GLOSS_MARK.replace_all(&s, "");
    let s = strip_parentheticals_keep_matte(&s);
    let s = strip_trailing_code(&s);
    let s = INTERIOR_SUFFIX.replace(&s, "");
    if CONNECTORS.is_match(&s) && reference.is_known_color_name(&s) {
        return collapse_whitespace(&s);
    }
    let s = split_combined_cell(&s, rules);
    connectors_to_spaces(&s)
}

/// Completes the first "모노" that is not already "모노톤".
fn complete_mono_tone(s: &str) -> String {
    let mut search_from = 0;
    while let Some(offset) = s[search_from..].find("모노") {
        let start = search_from + offset;
        let end = start + "모노".len();
        if !s[end..].starts_with('톤') {
            return format!("{}모노톤{}", &s[..start], &s[end..]);
        }
        search_from = end;
    }
    s.to_string()
}

fn split_segments(s: &str) -> Vec<String> {
    CONNECTORS
        .split(s)
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Removes a trailing stitching segment from a slash/plus separated color.
fn drop_stitching_segment(s: &str) -> String {
    if !CONNECTORS.is_match(s) {
        return s.to_string();
    }
    let mut parts = split_segments(s);
    if parts.len() >= 2 && parts.last().is_some_and(|last| last.contains(STITCHING)) {
        parts.pop();
        return parts.join("/");
    }
    s.to_string()
}

/// Genesis interiors carry seat colors and garnish accents in the same cell.
fn resolve_genesis_interior(cleaned: &str, model: &str, reference: &dyn ReferenceLookup) -> CanonicalColor {
    let mut s = cleaned.strip_prefix(SPORT_PREFIX).unwrap_or(cleaned).to_string();
    s = s.replace(GARNISH_MARKER, "");
    for (typo, fixed) in INTERIOR_TYPOS {
        s = s.replace(typo, fixed);
    }
    let mut garnish: Option<String> = None;

    if let Some(caps) = SEAT_PARENTHETICAL.captures(&s) {
        let seat_color = caps[1].trim_end_matches("시트").trim().to_string();
        let after_paren = caps[2].trim().to_string();
        let start = caps.get(0).map_or(s.len(), |m| m.start());
        let mut base = s[..start].trim().to_string();

        let after_clean = LEADING_CONNECTOR.replace(&after_paren, "").into_owned();
        if !after_clean.is_empty() {
            garnish = Some(
                reference
                    .lookup_garnish_for_model(&after_clean, model)
                    .unwrap_or(after_clean),
            );
        }
        if !base.contains("모노") && !base.contains(TWO_TONE) && !base.contains('/') {
            base = format!("{}/{}", base, seat_color);
        }
        s = base;
    } else {
        let paren_candidate = FIRST_PARENTHETICAL
            .captures(&s)
            .map(|caps| caps[1].trim().to_string());
        s = PARENTHETICAL.replace_all(&s, "").into_owned();

        if let Some(idx) = s.rfind('_').filter(|idx| *idx > 0) {
            let raw_garnish = s[idx + 1..].trim().to_string();
            s = drop_stitching_segment(&s[..idx]);
            garnish = Some(
                reference
                    .lookup_garnish_for_model(&raw_garnish, model)
                    .unwrap_or(raw_garnish),
            );
        } else if CONNECTORS.is_match(&s) {
            let mut parts = split_segments(&s);
            if parts.len() >= 2 {
                if let Some(last) = parts.last().cloned() {
                    if last.contains(STITCHING) {
                        parts.pop();
                        s = parts.join("/");
                    } else if let Some(found) = reference.lookup_garnish_for_model(&last, model) {
                        garnish = Some(found);
                        parts.pop();
                        s = parts.join("/");
                    }
                }
            }
        }

        if garnish.is_none() {
            if let Some(candidate) = paren_candidate.filter(|c| !c.contains(STITCHING)) {
                garnish = reference.lookup_garnish_for_model(&candidate, model);
            }
        }
    }

    let s = collapse_whitespace(&complete_mono_tone(&s));
    CanonicalColor {
        kind: ColorKind::Interior,
        name: reference.lookup_int_color_for_model(&s, model),
        garnish: garnish.filter(|g| !g.is_empty()),
    }
}

/// Resolves a raw color cell to its official name for `model`. Total: empty or
/// missing input gives an empty color.
pub fn resolve_color(
    kind: ColorKind,
    raw: Option<&str>,
    brand: Brand,
    model: &str,
    reference: &dyn ReferenceLookup,
    rules: &RuleBook,
) -> CanonicalColor {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return CanonicalColor::empty(kind);
    };

    match kind {
        ColorKind::Exterior => {
            let cleaned = clean_exterior(raw, rules, reference);
            let lookup = || reference.lookup_ext_color_for_model(&cleaned, model);
            let name = if brand == Brand::Tesla {
                resolve_tesla(TESLA_EXTERIOR, &cleaned, lookup)
            } else {
                lookup()
            };
            CanonicalColor {
                kind,
                name,
                garnish: None,
            }
        }
        ColorKind::Interior => {
            let cleaned = strip_common_noise(raw);
            if brand == Brand::Genesis {
                return resolve_genesis_interior(&cleaned, model, reference);
            }
            let s = PARENTHETICAL.replace_all(&cleaned, "");
            let s = connectors_to_spaces(&s);
            let lookup = || reference.lookup_int_color_for_model(&s, model);
            let name = if brand == Brand::Tesla {
                resolve_tesla(TESLA_INTERIOR, &s, lookup)
            } else {
                lookup()
            };
            CanonicalColor {
                kind,
                name,
                garnish: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::catalog::ReferenceCatalog;
    use crate::reference::data::ReferenceData;

    fn catalog() -> ReferenceCatalog {
        let data = ReferenceData::from_json_str(
            r#"{
                "exterior_color_normalizations": { "SWP": "스노우 화이트 펄", "W6H": "크리미 화이트 펄" },
                "brands": {
                    "genesis": {
                        "vehicles": {
                            "GV80": {
                                "exterior_colors": { "우유니 화이트": "Uyuni White", "마칼루 그레이/비크 블랙": "Makalu Gray/Vik Black" },
                                "interior_colors": ["옵시디언 블랙 모노톤", "어반 브라운/글레이셔 화이트 투톤", "바닐라 베이지/블랙"],
                                "garnish": ["리얼 알루미늄", "올리브 애쉬 우드"]
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        ReferenceCatalog::build(&data)
    }

    fn exterior(raw: &str, brand: Brand, model: &str) -> String {
        resolve_color(ColorKind::Exterior, Some(raw), brand, model, &catalog(), &RuleBook::standard()).name
    }

    fn interior(raw: &str, brand: Brand, model: &str) -> CanonicalColor {
        resolve_color(ColorKind::Interior, Some(raw), brand, model, &catalog(), &RuleBook::standard())
    }

    #[test]
    fn test_exterior_code_prefixes() {
        assert_eq!(exterior("#300 - ALPINE WHITE [BMW]", Brand::Bmw, "X5"), "ALPINE WHITE");
        assert_eq!(exterior("149-POLAR WHITE", Brand::Renault, "QM6"), "POLAR WHITE");
        assert_eq!(exterior("104 ARTICO TONKA BROWN [BENZ]", Brand::Benz, "E-Class"), "ARTICO TONKA BROWN");
        assert_eq!(exterior("(WA2) Aurora White", Brand::Polestar, "Polestar 4"), "Aurora White");
        assert_eq!(exterior("KSJX - VEGANZA BLACK", Brand::Bmw, "X5"), "VEGANZA BLACK");
        assert_eq!(exterior("?스노우화이트펄", Brand::Kia, "쏘렌토"), "스노우 화이트 펄");
    }

    #[test]
    fn test_exterior_parentheticals_and_codes() {
        assert_eq!(exterior("스노우 화이트 펄(SWP)", Brand::Kia, "쏘렌토"), "스노우 화이트 펄");
        assert_eq!(exterior("매트 그레이(무광)", Brand::Kia, "쏘렌토"), "매트 그레이(무광)");
        assert_eq!(exterior("블루(유광)", Brand::Kia, "쏘렌토"), "블루");
        assert_eq!(exterior("크리미 화이트 펄 W6H", Brand::Hyundai, "그랜저"), "크리미 화이트 펄");
        assert_eq!(exterior("FLAME RED", Brand::Chevrolet, "트래버스"), "FLAME RED");
    }

    #[test]
    fn test_exterior_combined_cell_and_dual_tone() {
        assert_eq!(exterior("스노우 화이트 펄/네이비", Brand::Kia, "쏘렌토"), "스노우 화이트 펄");
        assert_eq!(exterior("블랙/그레이", Brand::Kia, "쏘렌토"), exterior("블랙 그레이", Brand::Kia, "쏘렌토"));
        assert_eq!(exterior("블랙+화이트 투톤", Brand::Kia, "쏘렌토"), "블랙 화이트 투톤");
    }

    #[test]
    fn test_official_dual_tone_keeps_connector() {
        let once = exterior("마칼루 그레이 / 비크 블랙", Brand::Genesis, "GV80");
        assert_eq!(once, "마칼루 그레이/비크 블랙");
        assert_eq!(exterior(&once, Brand::Genesis, "GV80"), once);
        assert_eq!(exterior("블랙/그레이", Brand::Genesis, "GV80"), "블랙 그레이");
    }

    #[test]
    fn test_exterior_model_palette_and_tesla() {
        assert_eq!(exterior("Uyuni White", Brand::Genesis, "GV80"), "우유니 화이트");
        assert_eq!(exterior("흰색", Brand::Genesis, "GV80"), "우유니 화이트");
        assert_eq!(exterior("화이트", Brand::Tesla, "Model Y"), "Pearl White Multi-Coat");
    }

    #[test]
    fn test_interior_non_genesis() {
        let color = interior("블랙(가죽) 인테리어", Brand::Tesla, "Model Y");
        assert_eq!(color.name, "All Black");
        assert_eq!(interior("블랙/브라운", Brand::Kia, "쏘렌토").name, "블랙 브라운 투톤");
    }

    #[test]
    fn test_genesis_interior_garnish_suffix() {
        let color = interior("옵시디언 블랙 모노톤_리얼알루미늄", Brand::Genesis, "GV80");
        assert_eq!(color.name, "옵시디언 블랙 모노톤");
        assert_eq!(color.garnish.as_deref(), Some("리얼 알루미늄"));
        assert_eq!(color.display(), "옵시디언 블랙 모노톤_리얼 알루미늄");
    }

    #[test]
    fn test_genesis_interior_seat_parenthetical() {
        let color = interior("바닐라 베이지(블랙시트) 올리브애쉬우드", Brand::Genesis, "GV80");
        assert_eq!(color.name, "바닐라 베이지/블랙");
        assert_eq!(color.garnish.as_deref(), Some("올리브 애쉬 우드"));
    }

    #[test]
    fn test_genesis_interior_segments() {
        let color = interior("옵시디언 블랙 모노/레드 스티치", Brand::Genesis, "GV80");
        assert_eq!(color.name, "옵시디언 블랙 모노톤");
        assert_eq!(color.garnish, None);

        let color = interior("어반 브라운/글레시어 화이트 투톤/리얼 알루미늄", Brand::Genesis, "GV80");
        assert_eq!(color.name, "어반 브라운/글레이셔 화이트 투톤");
        assert_eq!(color.garnish.as_deref(), Some("리얼 알루미늄"));
    }

    #[test]
    fn test_mono_tone_completion() {
        assert_eq!(complete_mono_tone("블랙 모노"), "블랙 모노톤");
        assert_eq!(complete_mono_tone("블랙 모노톤"), "블랙 모노톤");
    }

    #[test]
    fn test_empty_and_idempotent() {
        let empty = resolve_color(ColorKind::Exterior, None, Brand::Kia, "쏘렌토", &catalog(), &RuleBook::standard());
        assert!(empty.is_empty());
        let blank = interior("   ", Brand::Genesis, "GV80");
        assert!(blank.is_empty());

        let once = exterior("크리미 화이트 펄 W6H", Brand::Hyundai, "그랜저");
        assert_eq!(exterior(&once, Brand::Hyundai, "그랜저"), once);
        let once = interior("옵시디언 블랙 모노", Brand::Genesis, "GV80").display();
        assert_eq!(interior(&once, Brand::Genesis, "GV80").display(), once);
    }
}
