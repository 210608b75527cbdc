// src/reference/model_colors.rs - Matching cleaned color text against one model's palette
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalization::key::reference_key;

static TONE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(원톤|투톤|모노톤)\s*$").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const TONE_SUFFIXES: [&str; 2] = ["모노톤", "투톤"];

/// Everyday color words mapped to the keywords official names use for them.
const GENERIC_COLOR_KEYWORDS: &[(&str, &[&str])] = &[
    ("흰색", &["화이트", "white"]),
    ("순백색", &["화이트", "white"]),
    ("백색", &["화이트", "white"]),
    ("검정색", &["블랙", "black"]),
    ("검정", &["블랙", "black"]),
    ("은색", &["실버", "silver"]),
    ("회색", &["그레이", "gray", "grey"]),
    ("빨간색", &["레드", "red"]),
    ("파란색", &["블루", "blue"]),
];

/// Feed shorthand for interior base colors.
const INTERIOR_BASE_ALIASES: &[(&str, &str)] = &[
    ("다크차콜", "블랙"),
    ("다크 차콜", "블랙"),
    ("차콜", "블랙"),
    ("인디고", "네이비"),
    ("피칸 브라운", "브라운"),
    ("피칸브라운", "브라운"),
];

const BASE_COLORS: &[&str] = &[
    "블랙", "화이트", "그레이", "브라운", "베이지", "네이비", "레드", "블루", "그린", "인디고", "버건디",
    "카키", "차콜", "크림", "아이보리", "샌드", "민트", "퍼플",
];

fn generic_keywords(word: &str) -> Option<&'static [&'static str]> {
    GENERIC_COLOR_KEYWORDS
        .iter()
        .find(|(generic, _)| *generic == word)
        .map(|(_, keywords)| *keywords)
}

fn interior_alias(word: &str) -> Option<&'static str> {
    INTERIOR_BASE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .map(|(_, base)| *base)
}

fn is_base_color(word: &str) -> bool {
    BASE_COLORS.contains(&word)
}

fn has_tone_suffix(s: &str) -> bool {
    TONE_SUFFIX.is_match(s)
}

fn strip_tone(s: &str) -> String {
    TONE_SUFFIX.replace(s, "").trim().to_string()
}

/// Interior comparison key: 원톤 and 모노톤 are the same tone.
fn interior_key(s: &str) -> String {
    reference_key(s).replace("원톤", "모노톤")
}

fn unique<'a>(mut matches: impl Iterator<Item = &'a String>) -> Option<String> {
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first.clone()),
    }
}

/// Exterior match for a model. `global` is the globally resolved name of `color`.
pub(crate) fn match_exterior(color: &str, global: &str, palette: &[String]) -> String {
    let global_key = reference_key(global);
    if palette.iter().any(|official| reference_key(official) == global_key) {
        return global.to_string();
    }

    let input_key = reference_key(color);
    if let Some(keywords) = generic_keywords(color.trim()).or_else(|| generic_keywords(global)) {
        let found = unique(palette.iter().filter(|official| {
            let official_key = reference_key(official);
            keywords
                .iter()
                .any(|keyword| official_key.contains(&reference_key(keyword)))
        }));
        if let Some(found) = found {
            return found;
        }
    }

    if !input_key.is_empty() {
        if let Some(found) =
            unique(palette.iter().filter(|official| reference_key(official).contains(&input_key)))
        {
            return found;
        }
    }

    global.to_string()
}

/// Tone inference that does not need a palette: "X X" is a mono-tone X, and two
/// base colors without a tone are a two-tone.
pub(crate) fn preprocess_interior(color: &str) -> String {
    let mut c = color.to_string();

    let words: Vec<&str> = c.split_whitespace().collect();
    if words.len() == 2 && reference_key(words[0]) == reference_key(words[1]) {
        c = format!("{} 모노톤", words[0]);
    }

    let words: Vec<&str> = c.split_whitespace().collect();
    if words.len() == 2 && !has_tone_suffix(&c) && is_base_color(words[0]) && is_base_color(words[1]) {
        c = format!("{} 투톤", c);
    }
    c
}

/// Interior text to resolve globally when the model has no palette.
pub(crate) fn interior_without_palette(c: &str) -> String {
    let c = c.replace("원톤", "모노톤");
    if !has_tone_suffix(&c) && is_base_color(&c) {
        format!("{} 모노톤", c)
    } else {
        c
    }
}

fn match_interior_exact(candidate: &str, palette: &[String]) -> Option<String> {
    let candidate_key = interior_key(candidate);
    palette
        .iter()
        .find(|official| interior_key(official) == candidate_key)
        .cloned()
}

fn match_interior_base(base: &str, palette: &[String]) -> Option<String> {
    let base_key = interior_key(base);
    unique(
        palette
            .iter()
            .filter(|official| interior_key(&strip_tone(official)) == base_key),
    )
}

/// Interior match against a model palette; `None` means fall back to the global table.
pub(crate) fn match_interior(c: &str, palette: &[String]) -> Option<String> {
    if let Some(found) = match_interior_exact(c, palette) {
        return Some(found);
    }

    let toned = has_tone_suffix(c);
    if !toned {
        for suffix in TONE_SUFFIXES {
            if let Some(found) = match_interior_exact(&format!("{} {}", c, suffix), palette) {
                return Some(found);
            }
        }
    }

    let base_color = strip_tone(c);
    if !base_color.is_empty() && base_color != c {
        if let Some(found) = match_interior_base(&base_color, palette) {
            return Some(found);
        }
    }

    let effective_base = if base_color.is_empty() { c } else { base_color.as_str() };
    let compact_base = WHITESPACE.replace_all(effective_base, "").into_owned();
    if let Some(alias) = interior_alias(effective_base).or_else(|| interior_alias(&compact_base)) {
        if let Some(found) = match_interior_exact(alias, palette) {
            return Some(found);
        }
        for suffix in TONE_SUFFIXES {
            if let Some(found) = match_interior_exact(&format!("{} {}", alias, suffix), palette) {
                return Some(found);
            }
        }
        if let Some(found) = match_interior_base(alias, palette) {
            return Some(found);
        }
    }

    if let Some(first_word) = c.split_whitespace().next() {
        if let Some(alias) = interior_alias(first_word).filter(|alias| *alias != first_word) {
            let replaced = c.replacen(first_word, alias, 1);
            if let Some(found) = match_interior_exact(&replaced, palette) {
                return Some(found);
            }
            if let Some(found) = match_interior_base(&strip_tone(&replaced), palette) {
                return Some(found);
            }
        }
    }

    let input_base = if base_color.is_empty() { strip_tone(c) } else { base_color.clone() };
    if let Some(last_color_word) = input_base.split_whitespace().filter(|w| is_base_color(w)).last() {
        let word_key = interior_key(last_color_word);
        if let Some(found) = unique(
            palette
                .iter()
                .filter(|official| interior_key(&strip_tone(official)).contains(&word_key)),
        ) {
            return Some(found);
        }
    }

    if let Some(found) = unique(
        palette
            .iter()
            .filter(|official| official.contains(c) && official.as_str() != c),
    ) {
        return Some(found);
    }

    let c_key = interior_key(c);
    if c_key.chars().count() >= 3 {
        if let Some(found) =
            unique(palette.iter().filter(|official| interior_key(official).contains(&c_key)))
        {
            return Some(found);
        }
    }

    if !toned {
        for suffix in TONE_SUFFIXES {
            let suffixed_key = interior_key(&format!("{} {}", c, suffix));
            if let Some(found) = unique(
                palette
                    .iter()
                    .filter(|official| interior_key(official).contains(&suffixed_key)),
            ) {
                return Some(found);
            }
        }
    }

    if c.contains('/') {
        let parts: Vec<String> = c.split('/').map(|part| reference_key(part.trim())).collect();
        if let Some(found) = unique(palette.iter().filter(|official| {
            let official_key = reference_key(official);
            official_key.contains('/') && parts.iter().all(|part| official_key.contains(part.as_str()))
        })) {
            return Some(found);
        }
    }

    None
}

/// Garnish match: exact key, else a unique containment in either direction.
pub(crate) fn match_garnish(garnish: &str, list: &[String]) -> Option<String> {
    let garnish_key = reference_key(garnish);
    if garnish_key.is_empty() {
        return None;
    }
    if let Some(found) = list.iter().find(|official| reference_key(official) == garnish_key) {
        return Some(found.clone());
    }
    unique(list.iter().filter(|official| {
        let official_key = reference_key(official);
        official_key.contains(&garnish_key) || garnish_key.contains(&official_key)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_exterior_generic_word_resolves_to_unique_model_color() {
        let colors = palette(&["스노우 화이트 펄", "오로라 블랙 펄", "스틸 그레이"]);
        assert_eq!(match_exterior("흰색", "흰색", &colors), "스노우 화이트 펄");
        assert_eq!(match_exterior("검정", "검정", &colors), "오로라 블랙 펄");
        assert_eq!(match_exterior("오로라", "오로라", &colors), "오로라 블랙 펄");
        assert_eq!(match_exterior("레드", "레드", &colors), "레드");
    }

    #[test]
    fn test_exterior_ambiguous_generic_word_keeps_global() {
        let colors = palette(&["스노우 화이트 펄", "클리어 화이트"]);
        assert_eq!(match_exterior("흰색", "흰색", &colors), "흰색");
    }

    #[test]
    fn test_interior_preprocessing() {
        assert_eq!(preprocess_interior("블랙 블랙"), "블랙 모노톤");
        assert_eq!(preprocess_interior("인디고 브라운"), "인디고 브라운 투톤");
        assert_eq!(preprocess_interior("라이트 그레이"), "라이트 그레이");
        assert_eq!(interior_without_palette("블랙"), "블랙 모노톤");
        assert_eq!(interior_without_palette("블랙 원톤"), "블랙 모노톤");
    }

    #[test]
    fn test_interior_palette_matching() {
        let colors = palette(&["옵시디언 블랙 모노톤", "네이비 브라운 투톤", "브라운 투톤"]);
        assert_eq!(match_interior("블랙 원톤", &colors), Some("옵시디언 블랙 모노톤".to_string()));
        assert_eq!(match_interior("블랙", &colors), Some("옵시디언 블랙 모노톤".to_string()));
        assert_eq!(
            match_interior("인디고 브라운 투톤", &colors),
            Some("네이비 브라운 투톤".to_string())
        );
        assert_eq!(match_interior("옵시디언 블랙 모노톤", &colors), Some("옵시디언 블랙 모노톤".to_string()));
        assert_eq!(match_interior("퍼플", &colors), None);
    }

    #[test]
    fn test_interior_alias_resolves_base_color() {
        let colors = palette(&["블랙 모노톤", "브라운 투톤"]);
        assert_eq!(match_interior("다크차콜", &colors), Some("블랙 모노톤".to_string()));
        assert_eq!(match_interior("피칸 브라운", &colors), Some("브라운 투톤".to_string()));
    }

    #[test]
    fn test_interior_slash_dual_tone() {
        let colors = palette(&["어반 브라운/글레이셔 화이트 투톤", "옵시디언 블랙 모노톤"]);
        assert_eq!(
            match_interior("브라운/화이트", &colors),
            Some("어반 브라운/글레이셔 화이트 투톤".to_string())
        );
    }

    #[test]
    fn test_garnish_matching() {
        let list = palette(&["리얼 알루미늄", "포지드 카본", "오픈포어 애쉬 우드"]);
        assert_eq!(match_garnish("리얼알루미늄", &list), Some("리얼 알루미늄".to_string()));
        assert_eq!(match_garnish("카본", &list), Some("포지드 카본".to_string()));
        assert_eq!(match_garnish("우드", &list), Some("오픈포어 애쉬 우드".to_string()));
        assert_eq!(match_garnish("스티치", &list), None);
        assert_eq!(match_garnish("", &list), None);
    }
}
