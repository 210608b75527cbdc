// src/normalization/lineup.rs - Lineup parsing and completion from engine facts
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::key::contains_ascii_word;
use crate::rules::RuleBook;

static MODEL_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})년형").unwrap());
static DISPLACEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\d+)").unwrap());
static TURBO_DISPLACEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d+T").unwrap());
static SEATS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)인승").unwrap());
static TESLA_MODEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Model\s[3YSXE]").unwrap());

/// Fuel words in priority order.
const FUELS: [&str; 5] = ["하이브리드", "가솔린", "디젤", "전기", "LPG"];
const ELECTRIC_FUEL: &str = "전기";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLineup {
    pub year: Option<String>,
    pub fuel: Option<String>,
    pub displacement: Option<String>,
    pub turbo: bool,
    pub drive: Option<String>,
    pub seats: Option<String>,
}

pub fn parse_lineup(lineup: &str) -> ParsedLineup {
    let mut parsed = ParsedLineup::default();
    if lineup.is_empty() {
        return parsed;
    }

    parsed.year = MODEL_YEAR.find(lineup).map(|m| m.as_str().to_string());
    parsed.fuel = FUELS
        .iter()
        .find(|fuel| lineup.contains(*fuel))
        .map(|fuel| fuel.to_string());
    parsed.displacement = DISPLACEMENT
        .captures(lineup)
        .map(|caps| caps[1].to_string());
    parsed.turbo = lineup.contains("터보") || lineup.contains("T ") || TURBO_DISPLACEMENT.is_match(lineup);
    parsed.drive = if lineup.contains("AWD") || lineup.contains("4WD") {
        Some("AWD".to_string())
    } else if lineup.contains("2WD") {
        Some("2WD".to_string())
    } else if lineup.contains("RWD") {
        Some("RWD".to_string())
    } else {
        None
    };
    parsed.seats = SEATS.find(lineup).map(|m| m.as_str().to_string());
    parsed
}

fn is_electric(parsed: &ParsedLineup, model: &str) -> bool {
    let electric = parsed.fuel.as_deref() == Some(ELECTRIC_FUEL)
        || contains_ascii_word(model, "EV")
        || model.contains("일렉트릭")
        || model.contains("아이오닉");
    electric && !model.contains("HEV")
}

/// Normalized lineup label "year fuel displacement[T] drive seats" for `model`.
/// Missing seat counts fall back to the raw vehicle name; seats are only shown for
/// models sold in several seating layouts.
pub fn normalize_lineup(
    lineup: Option<&str>,
    model: &str,
    raw_vehicle_name: Option<&str>,
    rules: &RuleBook,
) -> String {
    let Some(lineup) = lineup.map(str::trim).filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let mut parsed = parse_lineup(lineup);
    if parsed.seats.is_none() {
        parsed.seats = raw_vehicle_name.and_then(|raw| SEATS.find(raw).map(|m| m.as_str().to_string()));
    }
    let seats = parsed.seats.clone().filter(|_| rules.has_seat_variants(model));

    if is_electric(&parsed, model) {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(parsed.year);
        parts.extend(parsed.fuel);
        if !TESLA_MODEL.is_match(model) {
            parts.extend(parsed.drive);
        }
        parts.extend(seats);
        return parts.join(" ");
    }

    if parsed.turbo && rules.is_never_turbo(model) {
        parsed.turbo = false;
    }
    if parsed.turbo {
        if let Some(displacement) = parsed.displacement.as_deref() {
            if rules.is_naturally_aspirated(model, displacement) {
                parsed.turbo = false;
            }
        }
    }
    if rules.has_single_drivetrain(model) {
        parsed.drive = None;
    }

    if let Some(spec) = rules.engine_spec(model) {
        match parsed.displacement.as_deref() {
            None if !spec.displacement.is_empty() => {
                parsed.displacement = Some(spec.displacement.to_string());
                parsed.turbo |= spec.turbo;
            }
            Some(displacement) if spec.turbo && displacement == spec.displacement => {
                parsed.turbo = true;
            }
            _ => {}
        }
    }

    let mut parts: Vec<String> = Vec::new();
    parts.extend(parsed.year);
    parts.extend(parsed.fuel);
    if let Some(displacement) = parsed.displacement {
        parts.push(if parsed.turbo {
            format!("{}T", displacement)
        } else {
            displacement
        });
    }
    parts.extend(parsed.drive);
    parts.extend(seats);
    parts.join(" ")
}

/// Model year of a normalized lineup label, used to order lineup facets.
pub fn lineup_year(label: &str) -> Option<u32> {
    MODEL_YEAR
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
}

/// True when two raw lineups normalize to the same label for `model`.
pub fn is_same_lineup(a: Option<&str>, b: Option<&str>, model: &str, rules: &RuleBook) -> bool {
    normalize_lineup(a, model, None, rules) == normalize_lineup(b, model, None, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(lineup: &str, model: &str) -> String {
        normalize_lineup(Some(lineup), model, None, &RuleBook::standard())
    }

    #[test]
    fn test_parse_lineup() {
        let parsed = parse_lineup("2025년형 가솔린 1.6 터보 4WD 7인승");
        assert_eq!(parsed.year.as_deref(), Some("2025년형"));
        assert_eq!(parsed.fuel.as_deref(), Some("가솔린"));
        assert_eq!(parsed.displacement.as_deref(), Some("1.6"));
        assert!(parsed.turbo);
        assert_eq!(parsed.drive.as_deref(), Some("AWD"));
        assert_eq!(parsed.seats.as_deref(), Some("7인승"));
        assert_eq!(parse_lineup(""), ParsedLineup::default());
    }

    #[test]
    fn test_engine_spec_fills_missing_displacement() {
        assert_eq!(normalize("2025년형 가솔린 2WD", "더 뉴 쏘렌토"), "2025년형 가솔린 2.5T 2WD");
        assert_eq!(normalize("2025년형 가솔린 2.5", "더 뉴 쏘렌토"), "2025년형 가솔린 2.5T");
        // non-turbo base engine stays unmarked
        assert_eq!(normalize("2025년형 가솔린 3.5", "더 뉴 카니발"), "2025년형 가솔린 3.5");
    }

    #[test]
    fn test_turbo_and_drive_corrections() {
        assert_eq!(normalize("2025년형 가솔린 1.0T 2WD", "더 뉴 모닝"), "2025년형 가솔린 1.0");
        assert_eq!(normalize("2026년형 가솔린 3.5T", "The New K8"), "2026년형 가솔린 3.5");
    }

    #[test]
    fn test_electric_models_drop_displacement() {
        assert_eq!(normalize("2025년형 전기 롱레인지 AWD", "더 뉴 EV6"), "2025년형 전기 AWD");
        assert_eq!(normalize("2025년형 AWD", "디 올 뉴 코나 EV"), "2025년형 AWD");
        assert_eq!(normalize("2025년형 전기 AWD", "New Model Y"), "2025년형 전기");
        // hybrids are not electric
        assert_eq!(normalize("2025년형 하이브리드 1.6T 2WD", "디 올 뉴 코나 HEV"), "2025년형 하이브리드 1.6T 2WD");
    }

    #[test]
    fn test_seats_only_for_multi_seat_models() {
        let rules = RuleBook::standard();
        assert_eq!(normalize("2025년형 디젤 2.2 9인승", "더 뉴 카니발"), "2025년형 디젤 2.2 9인승");
        assert_eq!(normalize("2025년형 가솔린 1.6T 5인승", "더 뉴 투싼"), "2025년형 가솔린 1.6T");
        assert_eq!(
            normalize_lineup(Some("2025년형 가솔린 3.5"), "더 뉴 카니발", Some("카니발 (7인승)"), &rules),
            "2025년형 가솔린 3.5 7인승"
        );
        assert_eq!(normalize_lineup(None, "더 뉴 카니발", None, &rules), "");
    }

    #[test]
    fn test_lineup_year_and_sameness() {
        let rules = RuleBook::standard();
        assert_eq!(lineup_year("2026년형 가솔린 1.6T"), Some(2026));
        assert_eq!(lineup_year("가솔린 1.6T"), None);
        assert!(is_same_lineup(Some("2025년형 가솔린 2WD"), Some("2025년형 가솔린 2.5T 2WD"), "더 뉴 쏘렌토", &rules));
    }

    #[test]
    fn test_normalize_lineup_is_idempotent() {
        let once = normalize("2025년형 가솔린 2WD", "더 뉴 쏘렌토");
        assert_eq!(normalize(&once, "더 뉴 쏘렌토"), once);
    }
}
