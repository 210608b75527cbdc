// src/normalization/key.rs - Equality keys for display strings
//
// Two display strings describe the same value iff their canonical keys are equal.

const PLUS_WORD: &str = "plus";
const PLUS_WORD_KO: &str = "플러스";

pub fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Canonical comparison key used by facets, filters and grouping.
pub fn canonical_key(s: &str) -> String {
    let compact = strip_spacing_and_marks(s);
    let numbered = map_roman_numerals(&compact);
    collapse_plus_suffix(&numbered)
        .chars()
        .map(|c| match c {
            '&' | '-' => '+',
            '\u{201C}' | '\u{201D}' | '\u{2033}' => '"',
            _ => c,
        })
        .collect()
}

/// Lowercased key used to index reference tables. Unlike [`canonical_key`] it keeps
/// `&`, `-` and quote glyphs as written.
pub fn reference_key(s: &str) -> String {
    let compact = strip_spacing_and_marks(s);
    let numbered = map_roman_numerals(&compact);
    collapse_plus_suffix(&numbered).to_lowercase()
}

/// Whitespace-free, lowercased form used for containment checks.
pub fn compact_lower(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn is_ascii_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Start offsets of `word` where it is not glued to other ASCII letters or digits.
/// Hangul next to the word counts as a boundary.
fn ascii_word_positions(s: &str, word: &str) -> Vec<usize> {
    s.match_indices(word)
        .filter(|(start, _)| {
            let before = s[..*start].chars().next_back();
            let after = s[start + word.len()..].chars().next();
            !before.is_some_and(is_ascii_word_char) && !after.is_some_and(is_ascii_word_char)
        })
        .map(|(start, _)| start)
        .collect()
}

pub fn contains_ascii_word(s: &str, word: &str) -> bool {
    !ascii_word_positions(s, word).is_empty()
}

pub fn replace_ascii_word(s: &str, word: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for start in ascii_word_positions(s, word) {
        out.push_str(&s[last..start]);
        out.push_str(replacement);
        last = start + word.len();
    }
    out.push_str(&s[last..]);
    out
}

fn strip_spacing_and_marks(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '®')
        .collect()
}

fn map_roman_numerals(s: &str) -> String {
    let chars: Vec<char> = s
        .chars()
        .map(|c| match c {
            'Ⅰ' => '1',
            'Ⅱ' => '2',
            'Ⅲ' => '3',
            'Ⅳ' => '4',
            _ => c,
        })
        .collect();

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == 'I' && i > 0 && is_hangul(chars[i - 1]) {
            let run = chars[i..].iter().take(3).take_while(|&&ch| ch == 'I').count();
            match run {
                3 => {
                    out.push('3');
                    i += 3;
                    continue;
                }
                2 => {
                    out.push('2');
                    i += 2;
                    continue;
                }
                _ => {
                    let followed_by_letter =
                        chars.get(i + 1).is_some_and(|next| next.is_ascii_alphabetic());
                    if !followed_by_letter {
                        out.push('1');
                        i += 1;
                        continue;
                    }
                }
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

fn collapse_plus_suffix(s: &str) -> String {
    if let Some(stem) = s.strip_suffix(PLUS_WORD_KO) {
        return format!("{}+", stem);
    }
    let len = s.len();
    if len >= PLUS_WORD.len() && s.is_char_boundary(len - PLUS_WORD.len()) {
        let (stem, tail) = s.split_at(len - PLUS_WORD.len());
        if tail.eq_ignore_ascii_case(PLUS_WORD) {
            return format!("{}+", stem);
        }
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_insignificant() {
        assert_eq!(canonical_key("Drive Wise"), canonical_key("Drive  Wise"));
        assert_eq!(canonical_key(" 파노라마 선루프 "), "파노라마선루프");
    }

    #[test]
    fn test_roman_numerals_after_hangul() {
        assert_eq!(canonical_key("시그니처 II"), canonical_key("시그니처2"));
        assert_eq!(canonical_key("컴포트Ⅱ"), "컴포트2");
        assert_eq!(canonical_key("팩III"), "팩3");
        assert_eq!(canonical_key("팩 I"), "팩1");
        // a single I that starts a Latin word is left alone
        assert_eq!(canonical_key("팩 IX"), "팩IX");
        // not preceded by Hangul
        assert_eq!(canonical_key("Type II"), "TypeII");
    }

    #[test]
    fn test_connectors_collapse_to_plus() {
        let expected = canonical_key("A+B");
        assert_eq!(canonical_key("A & B"), expected);
        assert_eq!(canonical_key("A-B"), expected);
    }

    #[test]
    fn test_plus_suffix() {
        assert_eq!(canonical_key("스마트 센스 Plus"), "스마트센스+");
        assert_eq!(canonical_key("스마트 센스 PLUS"), "스마트센스+");
        assert_eq!(canonical_key("스마트 센스 플러스"), "스마트센스+");
    }

    #[test]
    fn test_marks_and_quotes() {
        assert_eq!(canonical_key("BOSE® 사운드"), "BOSE사운드");
        assert_eq!(canonical_key("12.3\u{2033} 디스플레이"), "12.3\"디스플레이");
        assert_eq!(canonical_key("\u{201C}휠\u{201D}"), "\"휠\"");
    }

    #[test]
    fn test_case_is_preserved_in_canonical_key() {
        assert_ne!(canonical_key("Hud"), canonical_key("HUD"));
        assert_eq!(reference_key("Hud"), reference_key("HUD"));
    }

    #[test]
    fn test_reference_key_keeps_connectors() {
        assert_eq!(reference_key("A & B"), "a&b");
        assert_eq!(reference_key("시그니처 II 플러스"), "시그니처2+");
    }

    #[test]
    fn test_ascii_word_boundaries() {
        assert!(contains_ascii_word("코나 EV 프리미엄", "EV"));
        assert!(contains_ascii_word("코나EV", "EV"));
        assert!(!contains_ascii_word("코나 HEV", "EV"));
        assert!(!contains_ascii_word("EV6", "EV"));
        assert_eq!(replace_ascii_word("쏘렌토 HEV", "HEV", "하이브리드"), "쏘렌토 하이브리드");
        assert_eq!(replace_ascii_word("PHEV", "HEV", "하이브리드"), "PHEV");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(reference_key("   "), "");
    }
}
