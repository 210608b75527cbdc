// src/normalization/options.rs - Splitting and classifying free-text option cells
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::key::canonical_key;
use super::token::{collapse_whitespace, normalize_token, strip_square_brackets};
use crate::models::{CanonicalOption, OptionClass};
use crate::reference::ReferenceLookup;
use crate::rules::RuleBook;

const DECIMAL_SENTINEL: char = '\u{E000}';
const SLASH_SENTINEL: char = '\u{E001}';
const GARNISH_MARKER: &str = "(가니쉬)";
const NOTE_MARKER: &str = "선택 시";

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.(\d)").unwrap());
static PERIOD_BEFORE_HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(\s+[가-힣])").unwrap());
static LETTER_SLASH_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])/([A-Z])").unwrap());
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

static SIZE_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\d+(인치|")$"#).unwrap());
static SINGLE_CAPITAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]$").unwrap());
static LEADING_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(19|20)\d{2}\D").unwrap());
static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static SHORT_HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]{1,2}$").unwrap());

/// Splits a raw option cell into trimmed fragments, in input order.
pub fn split_options(cell: Option<&str>) -> Vec<String> {
    let Some(cell) = cell else {
        return Vec::new();
    };

    let mut s = strip_square_brackets(cell).replace(['\n', '\r'], "");
    s = DECIMAL
        .replace_all(&s, format!("${{1}}{}${{2}}", DECIMAL_SENTINEL).as_str())
        .into_owned();
    s = PERIOD_BEFORE_HANGUL.replace_all(&s, ",$1").into_owned();
    s = LETTER_SLASH_LETTER
        .replace_all(&s, format!("${{1}}{}${{2}}", SLASH_SENTINEL).as_str())
        .into_owned();

    s.split([',', '/'])
        .map(|fragment| {
            fragment
                .replace(DECIMAL_SENTINEL, ".")
                .replace(SLASH_SENTINEL, "/")
                .trim()
                .to_string()
        })
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// One interior color word cut from the front of `s`, keeping the spacing of what
/// follows. `None` when nothing is cut.
fn cut_interior_prefix(s: &str, rules: &RuleBook) -> Option<String> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if rules.is_color_prefixed_option(&compact) {
        return None;
    }

    let prefix = rules
        .interior_option_prefixes()
        .iter()
        .find(|prefix| compact.starts_with(*prefix) && compact.len() > prefix.len())?;
    let mut remaining = prefix.chars().peekable();
    let mut cut = s.len();
    for (idx, c) in s.char_indices() {
        if remaining.peek().is_none() {
            cut = idx;
            break;
        }
        if c.is_whitespace() {
            continue;
        }
        remaining.next();
    }
    Some(s[cut..].trim_start().to_string())
}

/// Removes interior color words stacked at the front of an option name until none
/// is left.
fn strip_interior_prefix(s: &str, rules: &RuleBook) -> String {
    let mut current = s.to_string();
    while let Some(next) = cut_interior_prefix(&current, rules) {
        if next.is_empty() || next == current {
            break;
        }
        current = next;
    }
    current
}

/// Official display name for one fragment, or "" when the fragment is dropped.
pub fn normalize_option_name(fragment: &str, reference: &dyn ReferenceLookup, rules: &RuleBook) -> String {
    let s = normalize_token(fragment);
    if s.starts_with(GARNISH_MARKER) {
        return String::new();
    }
    if reference.is_official_option(&s) {
        return s;
    }

    let s = if reference.is_known_color_name(&s) {
        s
    } else {
        strip_interior_prefix(&s, rules)
    };
    let s = PARENTHETICAL.replace_all(&s, "");
    let s = collapse_whitespace(&s);
    if s.is_empty() {
        return s;
    }
    reference.lookup_option(&s)
}

/// Fragments that never describe a selectable option.
pub fn is_junk_option(name: &str, rules: &RuleBook) -> bool {
    rules.is_denied_option(name)
        || SIZE_ONLY.is_match(name)
        || name.starts_with('*')
        || SINGLE_CAPITAL.is_match(name)
        || SHORT_HANGUL.is_match(name)
        || LEADING_YEAR.is_match(name)
        || name.contains(NOTE_MARKER)
        || DIGITS_ONLY.is_match(name)
}

pub fn classify_option(name: &str, reference: &dyn ReferenceLookup, rules: &RuleBook) -> OptionClass {
    if reference.is_known_color_name(name) {
        OptionClass::Color
    } else if is_junk_option(name, rules) {
        OptionClass::Junk
    } else {
        OptionClass::Real
    }
}

/// Splits, normalizes and classifies an option cell. Empty results are dropped and
/// a record lists each canonical option once, keeping its first spelling.
pub fn classify_options(
    cell: Option<&str>,
    reference: &dyn ReferenceLookup,
    rules: &RuleBook,
) -> Vec<CanonicalOption> {
    let mut seen = HashSet::new();
    split_options(cell)
        .iter()
        .map(|fragment| normalize_option_name(fragment, reference, rules))
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(canonical_key(name)))
        .map(|name| {
            let class = classify_option(&name, reference, rules);
            CanonicalOption { name, class }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::catalog::ReferenceCatalog;
    use crate::reference::data::ReferenceData;

    fn catalog() -> ReferenceCatalog {
        let data = ReferenceData::from_json_str(
            r#"{
                "option_normalizations": {
                    "드라이브 와이즈": { "official": "드라이브 와이즈", "variants": ["드라이브와이즈"] },
                    "블랙박스": "블랙박스",
                    "12.3인치 내비게이션": "12.3인치 내비게이션"
                },
                "exterior_color_normalizations": { "ABP": "오로라 블랙 펄" }
            }"#,
        )
        .unwrap();
        ReferenceCatalog::build(&data)
    }

    #[test]
    fn test_split_on_period_before_hangul() {
        let fragments = split_options(Some("[파츠:사이드미러] 빌트인 캠 2. 증강현실 HUD/파노라마 선루프"));
        assert_eq!(fragments, vec!["빌트인 캠 2", "증강현실 HUD", "파노라마 선루프"]);
    }

    #[test]
    fn test_split_protects_decimals_and_letter_pairs() {
        let fragments = split_options(Some("12.3인치 내비게이션, A/T, LED T.G.L\n램프"));
        assert_eq!(fragments, vec!["12.3인치 내비게이션", "A/T", "LED T.G.L램프"]);
        assert!(split_options(None).is_empty());
        assert!(split_options(Some(" , / ")).is_empty());
    }

    #[test]
    fn test_option_name_normalization() {
        let catalog = catalog();
        let rules = RuleBook::standard();
        assert_eq!(normalize_option_name("드라이브와이즈", &catalog, &rules), "드라이브 와이즈");
        assert_eq!(normalize_option_name("캐러멜 드라이브와이즈", &catalog, &rules), "드라이브 와이즈");
        assert_eq!(normalize_option_name("블랙박스", &catalog, &rules), "블랙박스");
        assert_eq!(normalize_option_name("BOSE 프리미엄 사운드(12스피커)", &catalog, &rules), "BOSE 프리미엄 사운드");
        assert_eq!(normalize_option_name("(가니쉬) 리얼 우드", &catalog, &rules), "");
        assert_eq!(normalize_option_name("기본형 파퓰러1.", &catalog, &rules), "파퓰러1");
    }

    #[test]
    fn test_interior_prefix_keeps_spacing() {
        let rules = RuleBook::standard();
        assert_eq!(strip_interior_prefix("블랙 헤드업 디스플레이", &rules), "헤드업 디스플레이");
        assert_eq!(strip_interior_prefix("블랙에디션", &rules), "블랙에디션");
        assert_eq!(strip_interior_prefix("블랙", &rules), "블랙");
    }

    #[test]
    fn test_stacked_interior_prefixes_are_all_removed() {
        let catalog = catalog();
        let rules = RuleBook::standard();
        assert_eq!(strip_interior_prefix("캐러멜 블랙 하이패스", &rules), "하이패스");
        assert_eq!(strip_interior_prefix("캐러멜 블랙박스", &rules), "블랙박스");
        assert_eq!(strip_interior_prefix("네이비 블랙", &rules), "블랙");

        for raw in ["캐러멜 블랙 하이패스", "네이비그레이 헤드업 디스플레이", "캐러멜 블랙박스"] {
            let once = normalize_option_name(raw, &catalog, &rules);
            assert_eq!(normalize_option_name(&once, &catalog, &rules), once, "{} re-normalized", raw);
        }
        assert_eq!(normalize_option_name("캐러멜 블랙 하이패스", &catalog, &rules), "하이패스");
        assert_eq!(normalize_option_name("캐러멜 블랙박스", &catalog, &rules), "블랙박스");
    }

    #[test]
    fn test_junk_rules() {
        let rules = RuleBook::standard();
        for junk in ["16인치", "18\"", "A", "2024년형 프리미엄", "1열 선택 시 적용", "12345", "*틴팅", "드", "A/T"] {
            assert!(is_junk_option(junk, &rules), "{} should be junk", junk);
        }
        for real in ["빌트인 캠 2", "HUD", "20인치 휠", "파노라마 선루프"] {
            assert!(!is_junk_option(real, &rules), "{} should be real", real);
        }
    }

    #[test]
    fn test_short_latin_options_are_real() {
        let catalog = catalog();
        let rules = RuleBook::standard();
        for name in ["EQ", "V2", "4WD"] {
            assert!(!is_junk_option(name, &rules), "{} should be real", name);
            assert_eq!(classify_option(name, &catalog, &rules), OptionClass::Real);
        }
        for fragment in ["드", "옵션"] {
            assert_eq!(classify_option(fragment, &catalog, &rules), OptionClass::Junk);
        }
    }

    #[test]
    fn test_classify_options() {
        let catalog = catalog();
        let rules = RuleBook::standard();
        let options = classify_options(
            Some("드라이브와이즈, 드라이브 와이즈, 오로라블랙펄, 16인치, 빌트인 캠 2"),
            &catalog,
            &rules,
        );
        let classes: Vec<(&str, OptionClass)> =
            options.iter().map(|o| (o.name.as_str(), o.class)).collect();
        assert_eq!(
            classes,
            vec![
                ("드라이브 와이즈", OptionClass::Real),
                ("오로라블랙펄", OptionClass::Color),
                ("16인치", OptionClass::Junk),
                ("빌트인 캠 2", OptionClass::Real),
            ]
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let catalog = catalog();
        let rules = RuleBook::standard();
        for raw in ["캐러멜 드라이브와이즈", "BOSE 프리미엄 사운드(12스피커", "실드 글라스", "블랙 헤드업 디스플레이"] {
            let once = normalize_option_name(raw, &catalog, &rules);
            assert_eq!(normalize_option_name(&once, &catalog, &rules), once);
        }
    }
}
