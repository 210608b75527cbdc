// src/rules/lineup_tables.rs - Engine facts used to complete lineup strings

/// Base engine per model name: (displacement, turbo). An empty displacement marks an EV.
pub const ENGINE_SPECS: &[(&str, &str, bool)] = &[
    // Kia, catalog names
    ("더 뉴 카니발", "3.5", false),
    ("더 뉴 카니발 HEV", "1.6", true),
    ("더 뉴 스포티지", "1.6", true),
    ("더 뉴 스포티지 HEV", "1.6", true),
    ("더 뉴 쏘렌토", "2.5", true),
    ("더 뉴 쏘렌토 HEV", "1.6", true),
    ("더 뉴 K5", "1.6", true),
    ("더 뉴 K5 HEV", "1.6", true),
    ("The New K8", "1.6", true),
    ("The New K8 HEV", "1.6", true),
    ("더 뉴 K9", "3.5", false),
    ("더 뉴 셀토스", "1.6", true),
    ("디 올 뉴 셀토스", "1.6", true),
    ("디 올 뉴 셀토스 HEV", "1.6", true),
    ("더 뉴 모닝", "1.0", false),
    ("더 뉴 레이 PE", "1.0", false),
    ("디 올 뉴 니로 HEV", "1.6", false),
    ("디 올 뉴 니로 EV", "", false),
    // Kia, short feed names
    ("카니발", "3.5", false),
    ("카니발 HEV", "1.6", true),
    ("스포티지", "1.6", true),
    ("스포티지 HEV", "1.6", true),
    ("쏘렌토", "2.5", true),
    ("쏘렌토 HEV", "1.6", true),
    ("K5", "1.6", true),
    ("K5 HEV", "1.6", true),
    ("K8", "1.6", true),
    ("K8 HEV", "1.6", true),
    ("셀토스", "1.6", true),
    ("셀토스 HEV", "1.6", true),
    ("모닝", "1.0", false),
    ("레이", "1.0", false),
    ("레이 EV", "", false),
    ("니로 HEV", "1.6", false),
    // Hyundai, catalog names
    ("더 뉴 아반떼", "1.6", false),
    ("더 뉴 아반떼 HEV", "1.6", false),
    ("더 뉴 아반떼 N", "2.0", true),
    ("쏘나타 디 엣지", "1.6", true),
    ("쏘나타 디 엣지 HEV", "1.6", true),
    ("디 올 뉴 그랜저", "2.5", false),
    ("디 올 뉴 그랜저 HEV", "1.6", true),
    ("더 뉴 투싼", "1.6", true),
    ("더 뉴 투싼 HEV", "1.6", true),
    ("디 올 뉴 싼타페", "2.5", true),
    ("디 올 뉴 싼타페 HEV", "1.6", true),
    ("디 올 뉴 팰리세이드", "2.5", true),
    ("디 올 뉴 팰리세이드 HEV", "2.5", true),
    ("더 뉴 캐스퍼", "1.0", false),
    ("베뉴", "1.6", false),
    ("디 올 뉴 코나", "1.6", true),
    ("디 올 뉴 코나 HEV", "1.6", false),
    ("디 올 뉴 코나 EV", "", false),
    ("더 뉴 스타리아", "2.2", false),
    ("더 뉴 스타리아 HEV", "1.6", true),
    ("스타리아", "2.2", false),
    ("스타리아 HEV", "1.6", true),
    // Hyundai, short feed names
    ("아반떼", "1.6", false),
    ("아반떼 HEV", "1.6", false),
    ("쏘나타", "2.0", false),
    ("쏘나타 HEV", "2.0", false),
    ("그랜저", "2.5", false),
    ("그랜저 HEV", "1.6", true),
    ("투싼", "1.6", true),
    ("투싼 HEV", "1.6", true),
    ("싼타페", "2.5", true),
    ("싼타페 HEV", "1.6", true),
    ("팰리세이드", "2.5", true),
    ("팰리세이드 HEV", "2.5", true),
    ("캐스퍼", "1.0", false),
    ("디 올 뉴 넥쏘", "", false),
    ("넥쏘 EV", "", false),
    ("넥쏘", "", false),
    ("포터2", "2.5", true),
    ("포터2 특장차", "2.5", true),
    ("포터2 Electric", "", false),
    ("포터", "2.5", true),
    // Genesis
    ("G80", "2.5", true),
    ("GV80", "2.5", true),
    ("더 뉴 G70", "2.0", true),
    ("G70", "2.0", true),
    ("G70 슈팅브레이크", "2.0", true),
    ("GV60 마그마", "", false),
    ("GV60 F/L", "", false),
    ("GV60", "", false),
    // Renault
    ("그랑 콜레오스 HEV", "1.5", false),
    // KGM
    ("토레스", "1.5", true),
    ("토레스 HEV", "1.5", true),
    ("티볼리", "1.5", false),
    ("액티언 HEV", "1.5", false),
    // Chevrolet
    ("트랙스 크로스오버", "1.2", true),
    ("트레일블레이저", "1.3", true),
];

/// Models sold without a turbo engine; a turbo marker on them is a data error.
pub const NEVER_TURBO_MODELS: &[&str] = &["레이", "더 뉴 레이 PE", "레이 EV", "모닝", "더 뉴 모닝"];

/// Models sold with a single drivetrain.
pub const NO_DRIVE_MODELS: &[&str] = &["레이", "더 뉴 레이 PE", "레이 EV", "모닝", "더 뉴 모닝"];

/// Naturally aspirated displacements per model keyword.
pub const NA_DISPLACEMENTS: &[(&str, &[&str])] = &[
    ("K8", &["2.5", "3.5"]),
    ("K9", &["3.5"]),
    ("그랜저", &["2.5"]),
];

/// Models offered in more than one seating layout.
pub const MULTI_SEAT_KEYWORDS: &[&str] = &[
    "카니발", "팰리세이드", "싼타페", "쏘렌토", "스타리아", "GV80", "아이오닉9", "아이오닉 9",
];
