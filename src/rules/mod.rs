// src/rules/mod.rs - Immutable rule tables shared by every normalization pass
pub mod identity_tables;
pub mod lineup_tables;
pub mod trim_ranks;

use std::collections::{HashMap, HashSet};

use crate::normalization::brand::Brand;
use identity_tables::*;
use lineup_tables::{ENGINE_SPECS, MULTI_SEAT_KEYWORDS, NA_DISPLACEMENTS, NEVER_TURBO_MODELS, NO_DRIVE_MODELS};
use trim_ranks::{DEFAULT_TRIM_RANK, TRIM_RANKS};

/// Option names that never describe a selectable option.
const JUNK_OPTIONS: &[&str] = &[
    "A/T", "AWD", "오토",
    "무옵션", "유료내장색상", "기본",
    "서비스", "파츠 전용", "외장 앰프",
    "문엣지ppf", "LED T.G.L",
    "SDS1", "SDS2", "PLUS", "NAPPA",
    "265", "내비게이션", "모니터링", "룸미러",
    "하만", "프리미엄스피커", "크렐사운드", "프리미엄",
    "블랙박스 SF500",
    "BOSE사운드",
    "필수 선택 사양 - 265",
    "빌트인 캠2프리뷰전자제어서스펜션",
    "빌트인",
    "인치휠",
    "트인캠2",
    "컴포",
    "프리미엄사운드",
    "파츠전용",
    "버텍스 500 15%",
];

/// Interior color words some feeds glue onto the front of option names.
const INTERIOR_OPTION_PREFIXES: &[&str] = &[
    "블랙", "캐러멜", "네이비", "브라운", "그레이", "베이지", "인디고", "미드나잇그린", "라이트그레이",
];

/// Option names that legitimately start with a color word.
const COLOR_PREFIXED_OPTIONS: &[&str] = &["블랙박스", "블랙에디션", "블랙잉크", "블랙하이그로시"];

/// Interior names that show up after a slash in exterior color cells.
const KNOWN_INTERIOR_NAMES: &[&str] = &[
    "토프", "코튼베이지", "네이비그레이", "올리브브라운", "라이트카키", "피칸브라운", "인디고", "네이비",
    "브라운", "베이지", "다크그레이",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSpec {
    pub displacement: &'static str,
    pub turbo: bool,
}

/// Identity rules for one brand. Keyword and phrase lists are sorted longest first;
/// the sort is stable so equally long entries keep their declaration order.
#[derive(Debug, Clone, Default)]
pub struct BrandIdentityRules {
    pub identities: Vec<&'static str>,
    pub keywords: Vec<(&'static str, &'static str)>,
    pub phrases: Vec<&'static str>,
}

impl BrandIdentityRules {
    fn new(
        identities: &[&'static str],
        keywords: &[(&'static str, &'static str)],
        phrases: &[&'static str],
    ) -> Self {
        let mut keywords = keywords.to_vec();
        keywords.sort_by_key(|(keyword, _)| std::cmp::Reverse(keyword.chars().count()));
        let mut phrases = phrases.to_vec();
        phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));
        Self {
            identities: identities.to_vec(),
            keywords,
            phrases,
        }
    }
}

/// Every static table the engine consults. Built once, then shared by reference.
#[derive(Debug, Clone)]
pub struct RuleBook {
    identities: HashMap<Brand, BrandIdentityRules>,
    trim_ranks: HashMap<&'static str, u32>,
    trim_ranks_by_length: Vec<(&'static str, u32)>,
    junk_options: HashSet<&'static str>,
    interior_option_prefixes: Vec<&'static str>,
    color_prefixed_options: Vec<&'static str>,
    known_interior_names: HashSet<&'static str>,
    engine_specs: HashMap<&'static str, EngineSpec>,
    never_turbo_models: HashSet<&'static str>,
    no_drive_models: HashSet<&'static str>,
    na_displacements: Vec<(&'static str, &'static [&'static str])>,
    multi_seat_keywords: Vec<&'static str>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleBook {
    pub fn standard() -> Self {
        let identities = HashMap::from([
            (Brand::Hyundai, BrandIdentityRules::new(HYUNDAI_IDENTITIES, HYUNDAI_KEYWORDS, HYUNDAI_PHRASES)),
            (Brand::Kia, BrandIdentityRules::new(KIA_IDENTITIES, KIA_KEYWORDS, KIA_PHRASES)),
            (Brand::Genesis, BrandIdentityRules::new(GENESIS_IDENTITIES, GENESIS_KEYWORDS, GENESIS_PHRASES)),
            (Brand::Bmw, BrandIdentityRules::new(BMW_IDENTITIES, BMW_KEYWORDS, BMW_PHRASES)),
            (Brand::Kgm, BrandIdentityRules::new(KGM_IDENTITIES, KGM_KEYWORDS, KGM_PHRASES)),
            (Brand::Renault, BrandIdentityRules::new(RENAULT_IDENTITIES, RENAULT_KEYWORDS, RENAULT_PHRASES)),
            (
                Brand::LandRover,
                BrandIdentityRules::new(LANDROVER_IDENTITIES, LANDROVER_KEYWORDS, LANDROVER_PHRASES),
            ),
            (Brand::Benz, BrandIdentityRules::new(BENZ_IDENTITIES, BENZ_KEYWORDS, BENZ_PHRASES)),
            (
                Brand::Chevrolet,
                BrandIdentityRules::new(CHEVROLET_IDENTITIES, CHEVROLET_KEYWORDS, CHEVROLET_PHRASES),
            ),
            (Brand::Tesla, BrandIdentityRules::new(TESLA_IDENTITIES, TESLA_KEYWORDS, TESLA_PHRASES)),
            (
                Brand::Polestar,
                BrandIdentityRules::new(POLESTAR_IDENTITIES, POLESTAR_KEYWORDS, POLESTAR_PHRASES),
            ),
            (Brand::Byd, BrandIdentityRules::new(BYD_IDENTITIES, BYD_KEYWORDS, BYD_PHRASES)),
        ]);

        // First declaration wins for duplicate keys.
        let mut trim_ranks = HashMap::new();
        for (trim, rank) in TRIM_RANKS {
            trim_ranks.entry(*trim).or_insert(*rank);
        }
        let mut trim_ranks_by_length = TRIM_RANKS.to_vec();
        trim_ranks_by_length.sort_by_key(|(trim, _)| std::cmp::Reverse(trim.chars().count()));

        let engine_specs = ENGINE_SPECS
            .iter()
            .map(|(model, displacement, turbo)| {
                (
                    *model,
                    EngineSpec {
                        displacement: *displacement,
                        turbo: *turbo,
                    },
                )
            })
            .collect();

        Self {
            identities,
            trim_ranks,
            trim_ranks_by_length,
            junk_options: JUNK_OPTIONS.iter().copied().collect(),
            interior_option_prefixes: INTERIOR_OPTION_PREFIXES.to_vec(),
            color_prefixed_options: COLOR_PREFIXED_OPTIONS.to_vec(),
            known_interior_names: KNOWN_INTERIOR_NAMES.iter().copied().collect(),
            engine_specs,
            never_turbo_models: NEVER_TURBO_MODELS.iter().copied().collect(),
            no_drive_models: NO_DRIVE_MODELS.iter().copied().collect(),
            na_displacements: NA_DISPLACEMENTS.to_vec(),
            multi_seat_keywords: MULTI_SEAT_KEYWORDS.to_vec(),
        }
    }

    pub fn identity_rules(&self, brand: Brand) -> Option<&BrandIdentityRules> {
        self.identities.get(&brand)
    }

    /// Exact hit, else the longest table key contained in the trim, else the default rank.
    pub fn trim_rank(&self, trim: &str) -> u32 {
        if let Some(rank) = self.trim_ranks.get(trim) {
            return *rank;
        }
        self.trim_ranks_by_length
            .iter()
            .find(|(key, _)| trim.contains(key))
            .map(|(_, rank)| *rank)
            .unwrap_or(DEFAULT_TRIM_RANK)
    }

    pub fn is_denied_option(&self, name: &str) -> bool {
        self.junk_options.contains(name)
    }

    pub fn interior_option_prefixes(&self) -> &[&'static str] {
        &self.interior_option_prefixes
    }

    pub fn is_color_prefixed_option(&self, compact_name: &str) -> bool {
        self.color_prefixed_options
            .iter()
            .any(|option| compact_name.starts_with(option))
    }

    pub fn is_known_interior_name(&self, compact_name: &str) -> bool {
        self.known_interior_names.contains(compact_name)
    }

    pub fn engine_spec(&self, model: &str) -> Option<EngineSpec> {
        self.engine_specs.get(model).copied()
    }

    pub fn is_never_turbo(&self, model: &str) -> bool {
        self.never_turbo_models.contains(model)
    }

    pub fn has_single_drivetrain(&self, model: &str) -> bool {
        self.no_drive_models.contains(model)
    }

    /// True when `displacement` is naturally aspirated for a model matching one of the keywords.
    pub fn is_naturally_aspirated(&self, model: &str, displacement: &str) -> bool {
        self.na_displacements
            .iter()
            .find(|(keyword, _)| model.contains(keyword))
            .is_some_and(|(_, displacements)| displacements.contains(&displacement))
    }

    pub fn has_seat_variants(&self, model: &str) -> bool {
        self.multi_seat_keywords
            .iter()
            .any(|keyword| model.contains(keyword))
    }
}
