// src/normalization/brand.rs - Brand parsing and inference
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Brand {
    Hyundai,
    Kia,
    Genesis,
    Bmw,
    Benz,
    Audi,
    Volvo,
    Tesla,
    Polestar,
    Chevrolet,
    Kgm,
    Renault,
    LandRover,
    Byd,
    Unknown,
}

const BRAND_ALIASES: &[(&str, Brand)] = &[
    ("현대", Brand::Hyundai),
    ("현대자동차", Brand::Hyundai),
    ("HYUNDAI", Brand::Hyundai),
    ("Hyundai", Brand::Hyundai),
    ("기아", Brand::Kia),
    ("기아자동차", Brand::Kia),
    ("KIA", Brand::Kia),
    ("Kia", Brand::Kia),
    ("제네시스", Brand::Genesis),
    ("GENESIS", Brand::Genesis),
    ("Genesis", Brand::Genesis),
    ("BMW", Brand::Bmw),
    ("비엠더블유", Brand::Bmw),
    ("벤츠", Brand::Benz),
    ("Mercedes-Benz", Brand::Benz),
    ("Mercedes", Brand::Benz),
    ("메르세데스벤츠", Brand::Benz),
    ("아우디", Brand::Audi),
    ("Audi", Brand::Audi),
    ("AUDI", Brand::Audi),
    ("볼보", Brand::Volvo),
    ("Volvo", Brand::Volvo),
    ("VOLVO", Brand::Volvo),
    ("테슬라", Brand::Tesla),
    ("Tesla", Brand::Tesla),
    ("TESLA", Brand::Tesla),
    ("폴스타", Brand::Polestar),
    ("Polestar", Brand::Polestar),
    ("POLESTAR", Brand::Polestar),
    ("쉐보레", Brand::Chevrolet),
    ("Chevrolet", Brand::Chevrolet),
    ("CHEVROLET", Brand::Chevrolet),
    ("KG모빌리티", Brand::Kgm),
    ("KGM", Brand::Kgm),
    ("쌍용", Brand::Kgm),
    ("SsangYong", Brand::Kgm),
    ("르노코리아", Brand::Renault),
    ("르노", Brand::Renault),
    ("Renault", Brand::Renault),
    ("Renault Korea", Brand::Renault),
    ("랜드로버", Brand::LandRover),
    ("Land Rover", Brand::LandRover),
    ("LandRover", Brand::LandRover),
    ("BYD", Brand::Byd),
];

/// Model keywords used when a name carries no brand alias at all.
const BRAND_MODEL_KEYWORDS: &[(Brand, &[&str])] = &[
    (
        Brand::Hyundai,
        &[
            "아반떼", "쏘나타", "그랜저", "아이오닉", "코나", "투싼", "싼타페", "팰리세이드", "스타리아",
            "베뉴", "캐스퍼", "넥쏘",
        ],
    ),
    (
        Brand::Kia,
        &[
            "K3", "K5", "K8", "K9", "EV3", "EV4", "EV5", "EV6", "EV9", "니로", "셀토스", "쏘렌토",
            "카니발", "스포티지", "모닝", "레이", "봉고", "타스만", "Tasman", "PV5", "스팅어",
        ],
    ),
    (Brand::Genesis, &["G70", "G80", "G90", "GV60", "GV70", "GV80"]),
    (
        Brand::Bmw,
        &[
            "1시리즈", "2시리즈", "3시리즈", "4시리즈", "5시리즈", "6시리즈", "7시리즈", "8시리즈", "X1", "X2",
            "X3", "X4", "X5", "X6", "X7", "iX", "iX1", "iX3", "i4", "i5", "i7",
        ],
    ),
    (
        Brand::Benz,
        &[
            "A클래스", "B클래스", "C클래스", "E클래스", "S클래스", "GLA", "GLB", "GLC", "GLE", "GLS", "EQA",
            "EQB", "EQC", "EQE", "EQS",
        ],
    ),
    (
        Brand::Audi,
        &[
            "A3", "A4", "A5", "A6", "A7", "A8", "Q2", "Q3", "Q4", "Q5", "Q7", "Q8", "e-tron",
        ],
    ),
    (
        Brand::Volvo,
        &["S60", "S90", "V60", "V90", "XC40", "XC60", "XC90", "C40", "EX30", "EX90"],
    ),
    (
        Brand::Tesla,
        &["모델3", "모델S", "모델X", "모델Y", "Model 3", "Model S", "Model X", "Model Y"],
    ),
    (
        Brand::Polestar,
        &["폴스타2", "폴스타3", "폴스타4", "Polestar 2", "Polestar 3", "Polestar 4"],
    ),
    (
        Brand::Chevrolet,
        &["트랙스", "트레일블레이저", "이쿼녹스", "타호", "콜로라도", "볼트", "말리부"],
    ),
    (Brand::Kgm, &["티볼리", "코란도", "렉스턴", "토레스", "액티언"]),
    (
        Brand::Renault,
        &["XM3", "QM6", "아르카나", "그랑 콜레오스", "마스터", "조에"],
    ),
];

impl Brand {
    /// Exact alias match (ASCII case-insensitive). Unknown spellings map to `Unknown`.
    pub fn from_alias(alias: &str) -> Brand {
        let alias = alias.trim();
        if alias.is_empty() {
            return Brand::Unknown;
        }
        BRAND_ALIASES
            .iter()
            .find(|(known, _)| *known == alias || known.eq_ignore_ascii_case(alias))
            .map(|(_, brand)| *brand)
            .unwrap_or(Brand::Unknown)
    }

    /// Infers the brand from a vehicle name: an embedded alias first, then model keywords.
    pub fn infer_from_name(vehicle_name: &str) -> Brand {
        let name = vehicle_name.trim();
        if name.is_empty() {
            return Brand::Unknown;
        }
        if let Some((_, brand)) = BRAND_ALIASES.iter().find(|(alias, _)| name.contains(alias)) {
            return *brand;
        }
        // Longest matching keyword wins; ties keep table order.
        BRAND_MODEL_KEYWORDS
            .iter()
            .flat_map(|(brand, keywords)| keywords.iter().map(move |keyword| (*brand, *keyword)))
            .filter(|(_, keyword)| name.contains(keyword))
            .fold(None, |best: Option<(Brand, &str)>, (brand, keyword)| match best {
                Some((_, current)) if current.chars().count() >= keyword.chars().count() => best,
                _ => Some((brand, keyword)),
            })
            .map(|(brand, _)| brand)
            .unwrap_or(Brand::Unknown)
    }

    /// Declared brand when it parses, otherwise inferred from the name.
    pub fn resolve(declared: Option<&str>, vehicle_name: &str) -> Brand {
        match declared.map(Brand::from_alias) {
            Some(brand) if brand != Brand::Unknown => brand,
            _ => Brand::infer_from_name(vehicle_name),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Hyundai => "현대",
            Brand::Kia => "기아",
            Brand::Genesis => "제네시스",
            Brand::Bmw => "BMW",
            Brand::Benz => "벤츠",
            Brand::Audi => "아우디",
            Brand::Volvo => "볼보",
            Brand::Tesla => "테슬라",
            Brand::Polestar => "폴스타",
            Brand::Chevrolet => "쉐보레",
            Brand::Kgm => "KG모빌리티",
            Brand::Renault => "르노코리아",
            Brand::LandRover => "랜드로버",
            Brand::Byd => "BYD",
            Brand::Unknown => "기타",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alias() {
        assert_eq!(Brand::from_alias("현대자동차"), Brand::Hyundai);
        assert_eq!(Brand::from_alias("kia"), Brand::Kia);
        assert_eq!(Brand::from_alias(" 쌍용 "), Brand::Kgm);
        assert_eq!(Brand::from_alias("KG모빌리티"), Brand::Kgm);
        assert_eq!(Brand::from_alias("르노"), Brand::Renault);
        assert_eq!(Brand::from_alias("Mercedes-Benz"), Brand::Benz);
        assert_eq!(Brand::from_alias("람보르기니"), Brand::Unknown);
        assert_eq!(Brand::from_alias(""), Brand::Unknown);
    }

    #[test]
    fn test_infer_from_name() {
        assert_eq!(Brand::infer_from_name("제네시스 GV80 2.5T"), Brand::Genesis);
        assert_eq!(Brand::infer_from_name("디 올 뉴 그랜저 HEV"), Brand::Hyundai);
        assert_eq!(Brand::infer_from_name("더 뉴 카니발 9인승"), Brand::Kia);
        assert_eq!(Brand::infer_from_name("Model Y 롱레인지"), Brand::Tesla);
        assert_eq!(Brand::infer_from_name("알 수 없는 차"), Brand::Unknown);
    }

    #[test]
    fn test_longest_model_keyword_wins() {
        assert_eq!(Brand::infer_from_name("더 뉴 트레일블레이저"), Brand::Chevrolet);
        assert_eq!(Brand::infer_from_name("G70 슈팅브레이크"), Brand::Genesis);
        assert_eq!(Brand::infer_from_name("EX30"), Brand::Volvo);
        assert_eq!(Brand::infer_from_name("더 뉴 레이"), Brand::Kia);
        assert_eq!(Brand::resolve(None, "트레일블레이저"), Brand::Chevrolet);
    }

    #[test]
    fn test_resolve_prefers_declared_brand() {
        assert_eq!(Brand::resolve(Some("기아"), "그랜저"), Brand::Kia);
        assert_eq!(Brand::resolve(Some("???"), "그랜저"), Brand::Hyundai);
        assert_eq!(Brand::resolve(None, "토레스 EVX"), Brand::Kgm);
    }
}
