// src/normalization/token.rs - Cleanup of one free-text token
use once_cell::sync::Lazy;
use regex::Regex;

static SQUARE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static REGISTERED_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)&reg;").unwrap());
static FOOTNOTE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\*.*$").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const DEFAULT_GRADE_PREFIX: &str = "기본형";

const TYPO_FIXES: [(&str, &str); 3] = [
    ("실드", "쉴드"),
    ("디스 플레이", "디스플레이"),
    ("컨트럴", "컨트롤"),
];

pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

pub fn strip_square_brackets(s: &str) -> String {
    SQUARE_BRACKETS.replace_all(s, "").into_owned()
}

/// Normalizes a single token. Total: the worst case is an empty string.
pub fn normalize_token(raw: &str) -> String {
    let mut s = REGISTERED_MARK.replace_all(raw, "®").into_owned();
    s = strip_square_brackets(&s);
    s = collapse_whitespace(&s);

    while let Some(rest) = s.strip_prefix(DEFAULT_GRADE_PREFIX) {
        s = rest.trim_start().to_string();
    }

    s = FOOTNOTE_TAIL.replace(&s, "").into_owned();
    s = strip_unbalanced_brackets(&s);
    s = s
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string();
    s = s.replace("Bose", "BOSE");
    for (typo, fixed) in TYPO_FIXES {
        if s.contains(typo) {
            s = s.replace(typo, fixed);
        }
    }
    collapse_whitespace(&s)
}

/// Drops closers without an opener and truncates at the first opener that never closes.
pub fn strip_unbalanced_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open: Vec<(char, usize)> = Vec::new();

    for c in s.chars() {
        match c {
            '(' => {
                open.push((')', out.len()));
                out.push(c);
            }
            '[' => {
                open.push((']', out.len()));
                out.push(c);
            }
            ')' | ']' => {
                if open.last().map(|(closer, _)| *closer) == Some(c) {
                    open.pop();
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    if let Some((_, position)) = open.first() {
        out.truncate(*position);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_bracket_annotations() {
        assert_eq!(normalize_token("[파츠:사이드미러] 빌트인 캠 2"), "빌트인 캠 2");
        assert_eq!(normalize_token("HUD [옵션]  패키지"), "HUD 패키지");
    }

    #[test]
    fn test_strips_default_grade_prefix() {
        assert_eq!(normalize_token("기본형 스마트 센스"), "스마트 센스");
        assert_eq!(normalize_token("기본형"), "");
    }

    #[test]
    fn test_footnotes_and_trailing_period() {
        assert_eq!(normalize_token("선루프 *일부 트림 제외"), "선루프");
        assert_eq!(normalize_token("하이패스.."), "하이패스");
        assert_eq!(normalize_token("*틴팅"), "");
    }

    #[test]
    fn test_typos_and_brand_casing() {
        assert_eq!(normalize_token("Bose 프리미엄 사운드"), "BOSE 프리미엄 사운드");
        assert_eq!(normalize_token("윈드 실드 HUD"), "윈드 쉴드 HUD");
        assert_eq!(normalize_token("디스 플레이 테마"), "디스플레이 테마");
        assert_eq!(normalize_token("듀얼 컨트럴"), "듀얼 컨트롤");
        assert_eq!(normalize_token("Lexicon&reg; 사운드"), "Lexicon® 사운드");
    }

    #[test]
    fn test_unbalanced_brackets() {
        assert_eq!(normalize_token("BOSE 사운드(12스피커"), "BOSE 사운드");
        assert_eq!(normalize_token("LED T.G.L)"), "LED T.G.L");
        assert_eq!(strip_unbalanced_brackets("a (b) c ] d"), "a (b) c  d");
        assert_eq!(strip_unbalanced_brackets("a [b"), "a");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        for token in ["파노라마 선루프", "BOSE 프리미엄 사운드 (12스피커)", "헤드업 디스플레이"] {
            let once = normalize_token(token);
            assert_eq!(normalize_token(&once), once);
        }
    }
}
