// src/normalization/trim.rs - Trim cleanup and price-tier ranking
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::RuleBook;

static SEAT_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d+인승\)\s*$").unwrap());
static DRIVE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+(2WD|4WD|AWD|RWD)\s*$").unwrap());

/// Strips trailing seat-count and drivetrain markers, which belong to the lineup.
/// Stripping repeats until nothing changes, so "X (7인승) 4WD" and "X 4WD (7인승)"
/// both reduce to "X".
pub fn normalize_trim(trim: &str) -> String {
    let mut current = trim.trim().to_string();
    loop {
        let without_seats = SEAT_SUFFIX.replace(&current, "");
        let stripped = DRIVE_SUFFIX.replace(&without_seats, "").trim().to_string();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// Price tier of a trim; lower is cheaper. Unknown trims rank last.
pub fn trim_rank(trim: &str, rules: &RuleBook) -> u32 {
    rules.trim_rank(trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::trim_ranks::DEFAULT_TRIM_RANK;

    #[test]
    fn test_seat_and_drive_suffixes_are_stripped() {
        assert_eq!(normalize_trim("프레스티지 (7인승) 4WD"), "프레스티지");
        assert_eq!(normalize_trim("프레스티지 4WD (7인승)"), "프레스티지");
        assert_eq!(normalize_trim("시그니처(9인승)"), "시그니처");
        assert_eq!(normalize_trim("노블레스 AWD"), "노블레스");
    }

    #[test]
    fn test_inner_markers_are_kept() {
        assert_eq!(normalize_trim("AWD 스포츠"), "AWD 스포츠");
        assert_eq!(normalize_trim("그래비티 (7인승) 블랙"), "그래비티 (7인승) 블랙");
        assert_eq!(normalize_trim(""), "");
    }

    #[test]
    fn test_normalize_trim_is_idempotent() {
        for raw in ["프레스티지 (7인승) 4WD", "X-Line 2WD", "  익스클루시브  "] {
            let once = normalize_trim(raw);
            assert_eq!(normalize_trim(&once), once);
        }
    }

    #[test]
    fn test_rank_ordering() {
        let rules = RuleBook::standard();
        assert!(trim_rank("스마트", &rules) < trim_rank("프레스티지", &rules));
        assert!(trim_rank("시그니처", &rules) < trim_rank("시그니처 블랙", &rules));
        assert_eq!(trim_rank("처음 보는 트림", &rules), DEFAULT_TRIM_RANK);
    }
}
