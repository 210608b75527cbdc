// src/rules/identity_tables.rs - Canonical model names and keyword tables per brand
//
// Keywords are matched against the lowercased, whitespace-free vehicle name.

pub const HYUNDAI_IDENTITIES: &[&str] = &[
    "더 뉴 아반떼", "더 뉴 아반떼 HEV", "더 뉴 아반떼 N", "쏘나타 디 엣지", "쏘나타 디 엣지 HEV", "디 올 뉴 그랜저",
    "디 올 뉴 그랜저 HEV", "더 뉴 아이오닉6", "아이오닉 6 N", "더 뉴 아이오닉 5", "아이오닉 5 N", "베뉴", "디 올 뉴 코나",
    "디 올 뉴 코나 HEV", "디 올 뉴 코나 EV", "더 뉴 투싼", "더 뉴 투싼 HEV", "디 올 뉴 싼타페", "디 올 뉴 싼타페 HEV", "아이오닉 9",
    "디 올 뉴 팰리세이드", "디 올 뉴 팰리세이드 HEV", "더 뉴 스타리아", "더 뉴 스타리아 HEV", "스타리아", "스타리아 HEV", "더 뉴 캐스퍼",
    "캐스퍼 일렉트릭", "디 올 뉴 넥쏘", "포터2", "포터2 특장차", "포터2 Electric",
];

pub const HYUNDAI_KEYWORDS: &[(&str, &str)] = &[
    ("아반떼n", "더 뉴 아반떼 N"), ("아반떼hev", "더 뉴 아반떼 HEV"), ("아반떼hybrid", "더 뉴 아반떼 HEV"),
    ("아반떼하이브리드", "더 뉴 아반떼 HEV"), ("아반떼", "더 뉴 아반떼"), ("쏘나타hev", "쏘나타 디 엣지 HEV"),
    ("쏘나타hybrid", "쏘나타 디 엣지 HEV"), ("쏘나타하이브리드", "쏘나타 디 엣지 HEV"), ("쏘나타디엣지hev", "쏘나타 디 엣지 HEV"),
    ("쏘나타디엣지", "쏘나타 디 엣지"), ("쏘나타", "쏘나타 디 엣지"), ("그랜저hev", "디 올 뉴 그랜저 HEV"),
    ("그랜저hybrid", "디 올 뉴 그랜저 HEV"), ("그랜저하이브리드", "디 올 뉴 그랜저 HEV"), ("디올뉴그랜저hev", "디 올 뉴 그랜저 HEV"),
    ("디올뉴그랜저", "디 올 뉴 그랜저"), ("그랜저", "디 올 뉴 그랜저"), ("아이오닉6n", "아이오닉 6 N"), ("아이오닉6", "더 뉴 아이오닉6"),
    ("아이오닉5n", "아이오닉 5 N"), ("아이오닉5", "더 뉴 아이오닉 5"), ("아이오닉9", "아이오닉 9"), ("코나ev", "디 올 뉴 코나 EV"),
    ("코나electric", "디 올 뉴 코나 EV"), ("코나일렉트릭", "디 올 뉴 코나 EV"), ("코나hev", "디 올 뉴 코나 HEV"),
    ("코나hybrid", "디 올 뉴 코나 HEV"), ("코나하이브리드", "디 올 뉴 코나 HEV"), ("코나", "디 올 뉴 코나"),
    ("투싼hev", "더 뉴 투싼 HEV"), ("투싼hybrid", "더 뉴 투싼 HEV"), ("투싼하이브리드", "더 뉴 투싼 HEV"),
    ("투싼", "더 뉴 투싼"), ("싼타페hev", "디 올 뉴 싼타페 HEV"), ("싼타페hybrid", "디 올 뉴 싼타페 HEV"),
    ("싼타페하이브리드", "디 올 뉴 싼타페 HEV"), ("디올뉴싼타페hev", "디 올 뉴 싼타페 HEV"), ("디올뉴싼타페", "디 올 뉴 싼타페"),
    ("싼타페", "디 올 뉴 싼타페"), ("팰리세이드hev", "디 올 뉴 팰리세이드 HEV"), ("팰리세이드hybrid", "디 올 뉴 팰리세이드 HEV"),
    ("팰리세이드하이브리드", "디 올 뉴 팰리세이드 HEV"), ("디올뉴팰리세이드hev", "디 올 뉴 팰리세이드 HEV"),
    ("디올뉴팰리세이드", "디 올 뉴 팰리세이드"), ("팰리세이드", "디 올 뉴 팰리세이드"), ("더뉴스타리아hev", "더 뉴 스타리아 HEV"),
    ("스타리아hev", "스타리아 HEV"), ("스타리아hybrid", "스타리아 HEV"), ("더뉴스타리아", "더 뉴 스타리아"), ("스타리아", "스타리아"),
    ("캐스퍼일렉트릭", "캐스퍼 일렉트릭"), ("캐스퍼ev", "캐스퍼 일렉트릭"), ("캐스퍼electric", "캐스퍼 일렉트릭"),
    ("더뉴캐스퍼", "더 뉴 캐스퍼"), ("캐스퍼", "더 뉴 캐스퍼"), ("디올뉴넥쏘", "디 올 뉴 넥쏘"), ("넥쏘ev", "디 올 뉴 넥쏘"),
    ("넥쏘", "디 올 뉴 넥쏘"), ("포터2특장", "포터2 특장차"), ("포터특장", "포터2 특장차"),
    ("포터2electric", "포터2 Electric"), ("포터2ev", "포터2 Electric"), ("포터electric", "포터2 Electric"),
    ("포터ev", "포터2 Electric"), ("포터전기", "포터2 Electric"), ("포터2", "포터2"), ("포터", "포터2"),
    ("베뉴", "베뉴"),
];

pub const HYUNDAI_PHRASES: &[&str] = &[
    "아반떼n", "아반떼hev", "아반떼hybrid", "아반떼", "쏘나타hev", "쏘나타hybrid", "쏘나타", "그랜저hev", "그랜저hybrid",
    "그랜저", "아이오닉6n", "아이오닉6", "아이오닉5n", "아이오닉5", "아이오닉9", "코나ev", "코나electric", "코나hev",
    "코나hybrid", "코나", "투싼hev", "투싼hybrid", "투싼", "싼타페hev", "싼타페hybrid", "싼타페", "팰리세이드hev",
    "팰리세이드hybrid", "팰리세이드", "스타리아hev", "스타리아hybrid", "스타리아", "캐스퍼일렉트릭", "캐스퍼electric", "캐스퍼ev",
    "캐스퍼", "넥쏘ev", "넥쏘", "포터2특장", "포터특장", "포터2electric", "포터2ev", "포터electric", "포터ev", "포터전기",
    "포터2", "포터", "베뉴",
];

pub const KIA_IDENTITIES: &[&str] = &[
    "EV4", "더 뉴 K5", "더 뉴 K5 HEV", "The New K8", "The New K8 HEV", "더 뉴 K9", "EV3", "EV5",
    "디 올 뉴 니로 EV", "디 올 뉴 니로 HEV", "더 뉴 셀토스", "더 뉴 EV6", "더 뉴 쏘렌토", "EV9", "더 뉴 카니발", "PV5",
    "타스만", "봉고3 트럭", "봉고3 특장차", "봉고3 EV", "더 뉴 모닝", "더 뉴 레이 PE", "더 뉴 스포티지", "더 뉴 스포티지 HEV",
    "더 뉴 쏘렌토 HEV", "더 뉴 카니발 HEV", "레이 EV", "디 올 뉴 셀토스",
];

pub const KIA_KEYWORDS: &[(&str, &str)] = &[
    ("k5hev", "더 뉴 K5 HEV"), ("k5hybrid", "더 뉴 K5 HEV"), ("k5하이브리드", "더 뉴 K5 HEV"),
    ("더뉴k5hev", "더 뉴 K5 HEV"), ("더뉴k5", "더 뉴 K5"), ("k5", "더 뉴 K5"), ("k8hev", "The New K8 HEV"),
    ("k8hybrid", "The New K8 HEV"), ("k8하이브리드", "The New K8 HEV"), ("더뉴k8hev", "The New K8 HEV"),
    ("thenewk8hev", "The New K8 HEV"), ("더뉴k8", "The New K8"), ("thenewk8", "The New K8"),
    ("k8", "The New K8"), ("k9", "더 뉴 K9"), ("더뉴k9", "더 뉴 K9"), ("ev3", "EV3"), ("ev4", "EV4"),
    ("ev5", "EV5"), ("ev6", "더 뉴 EV6"), ("더뉴ev6", "더 뉴 EV6"), ("ev9", "EV9"), ("pv5", "PV5"),
    ("니로ev", "디 올 뉴 니로 EV"), ("니로electric", "디 올 뉴 니로 EV"), ("니로일렉트릭", "디 올 뉴 니로 EV"),
    ("니로hev", "디 올 뉴 니로 HEV"), ("니로hybrid", "디 올 뉴 니로 HEV"), ("니로하이브리드", "디 올 뉴 니로 HEV"),
    ("니로", "디 올 뉴 니로 HEV"), ("디올뉴셀토스hev", "디 올 뉴 셀토스"), ("디올뉴셀토스하이브리드", "디 올 뉴 셀토스"),
    ("디올뉴셀토스hybrid", "디 올 뉴 셀토스"), ("디올뉴셀토스", "디 올 뉴 셀토스"), ("셀토스hev", "디 올 뉴 셀토스"),
    ("셀토스하이브리드", "디 올 뉴 셀토스"), ("셀토스hybrid", "디 올 뉴 셀토스"), ("셀토스", "더 뉴 셀토스"),
    ("더뉴셀토스", "더 뉴 셀토스"), ("쏘렌토hev", "더 뉴 쏘렌토 HEV"), ("쏘렌토hybrid", "더 뉴 쏘렌토 HEV"),
    ("쏘렌토하이브리드", "더 뉴 쏘렌토 HEV"), ("더뉴쏘렌토hev", "더 뉴 쏘렌토 HEV"), ("더뉴쏘렌토", "더 뉴 쏘렌토"),
    ("쏘렌토", "더 뉴 쏘렌토"), ("카니발hev", "더 뉴 카니발 HEV"), ("카니발hybrid", "더 뉴 카니발 HEV"),
    ("카니발하이브리드", "더 뉴 카니발 HEV"), ("더뉴카니발hev", "더 뉴 카니발 HEV"), ("더뉴카니발", "더 뉴 카니발"),
    ("카니발", "더 뉴 카니발"), ("스포티지hev", "더 뉴 스포티지 HEV"), ("스포티지hybrid", "더 뉴 스포티지 HEV"),
    ("스포티지하이브리드", "더 뉴 스포티지 HEV"), ("더뉴스포티지hev", "더 뉴 스포티지 HEV"), ("더뉴스포티지", "더 뉴 스포티지"),
    ("스포티지", "더 뉴 스포티지"), ("모닝", "더 뉴 모닝"), ("더뉴모닝", "더 뉴 모닝"), ("레이", "더 뉴 레이 PE"),
    ("더뉴레이", "더 뉴 레이 PE"), ("레이pe", "더 뉴 레이 PE"), ("더뉴레이pe", "더 뉴 레이 PE"), ("레이ev", "레이 EV"),
    ("레이전기", "레이 EV"), ("봉고ev", "봉고3 EV"), ("봉고3ev", "봉고3 EV"), ("봉고electric", "봉고3 EV"),
    ("봉고", "봉고3 트럭"), ("봉고3", "봉고3 트럭"), ("타스만", "타스만"), ("tasman", "타스만"),
];

pub const KIA_PHRASES: &[&str] = &[
    "k5hev", "k5hybrid", "k5", "k8hev", "k8hybrid", "k8", "k9", "ev3", "ev4", "ev5", "ev6", "ev9",
    "pv5", "니로ev", "니로electric", "니로hev", "니로hybrid", "니로", "셀토스hev", "셀토스hybrid", "셀토스하이브리드",
    "셀토스", "쏘렌토hev", "쏘렌토hybrid", "쏘렌토", "카니발hev", "카니발hybrid", "카니발", "스포티지hev", "스포티지hybrid",
    "스포티지", "모닝", "레이ev", "레이전기", "레이", "봉고ev", "봉고3ev", "봉고electric", "봉고", "타스만", "tasman",
];

pub const GENESIS_IDENTITIES: &[&str] = &[
    "디 올 뉴 G80 F/L", "신형 G90", "GV70", "GV80 F/L", "GV80 Coupe", "더 뉴 G70", "G70 슈팅브레이크",
    "GV60 마그마", "GV60 F/L",
];

pub const GENESIS_KEYWORDS: &[(&str, &str)] = &[
    ("g80", "디 올 뉴 G80 F/L"), ("디올뉴g80", "디 올 뉴 G80 F/L"), ("g90", "신형 G90"), ("신형g90", "신형 G90"),
    ("gv70", "GV70"), ("gv80coupe", "GV80 Coupe"), ("gv80쿠페", "GV80 Coupe"), ("gv80", "GV80 F/L"),
    ("g70슈팅브레이크", "G70 슈팅브레이크"), ("g70shootingbrake", "G70 슈팅브레이크"), ("더뉴g70", "더 뉴 G70"),
    ("g70", "더 뉴 G70"), ("gv60마그마", "GV60 마그마"), ("gv60magma", "GV60 마그마"), ("gv60", "GV60 F/L"),
];

pub const GENESIS_PHRASES: &[&str] = &[
    "g80", "g90", "gv70", "gv80coupe", "gv80쿠페", "gv80", "g70슈팅브레이크", "g70shootingbrake", "g70",
    "gv60마그마", "gv60magma", "gv60",
];

pub const BMW_IDENTITIES: &[&str] = &[
    "New 1 Series", "New 2 Series", "New 2 Series 액티브 투어러", "The New 2 Series 그란 쿠페", "New M2",
    "3 Series F/L", "New M3", "New 4 Series F/L", "The M4 F/L", "New i4", "The New 5 Series",
    "New M5", "i5", "New 6 Series", "The New 7 Series", "The New i7", "8 Series", "M8",
    "The New Z4", "The New X1", "iX1", "New X2", "New iX2", "New X3", "New iX3", "The All New X4",
    "X4 M", "New X5", "New X5 M", "New X6", "New X6 M", "New X7", "The XM", "New iX",
];

pub const BMW_KEYWORDS: &[(&str, &str)] = &[
    ("118i", "New 1 Series"), ("120i", "New 1 Series"), ("1시리즈", "New 1 Series"),
    ("1series", "New 1 Series"), ("220i", "New 2 Series"), ("223i", "New 2 Series 액티브 투어러"),
    ("2시리즈", "New 2 Series"), ("2series", "New 2 Series"), ("m2", "New M2"),
    ("320i", "3 Series F/L"), ("330i", "3 Series F/L"), ("3시리즈", "3 Series F/L"),
    ("3series", "3 Series F/L"), ("m3", "New M3"), ("420i", "New 4 Series F/L"),
    ("430i", "New 4 Series F/L"), ("4시리즈", "New 4 Series F/L"), ("4series", "New 4 Series F/L"),
    ("m4", "The M4 F/L"), ("i4", "New i4"), ("520i", "The New 5 Series"),
    ("520d", "The New 5 Series"), ("530i", "The New 5 Series"), ("530e", "The New 5 Series"),
    ("540i", "The New 5 Series"), ("5시리즈", "The New 5 Series"), ("5series", "The New 5 Series"),
    ("m5", "New M5"), ("i5", "i5"), ("630i", "New 6 Series"), ("640i", "New 6 Series"),
    ("6시리즈", "New 6 Series"), ("6series", "New 6 Series"), ("730i", "The New 7 Series"),
    ("740i", "The New 7 Series"), ("750i", "The New 7 Series"), ("7시리즈", "The New 7 Series"),
    ("7series", "The New 7 Series"), ("i7", "The New i7"), ("840i", "8 Series"),
    ("850i", "8 Series"), ("8시리즈", "8 Series"), ("8series", "8 Series"), ("m8", "M8"),
    ("z4", "The New Z4"), ("x1", "The New X1"), ("ix1", "iX1"), ("x2", "New X2"),
    ("ix2", "New iX2"), ("x3", "New X3"), ("ix3", "New iX3"), ("x4", "The All New X4"),
    ("x4m", "X4 M"), ("x5", "New X5"), ("x5m", "New X5 M"), ("x6", "New X6"), ("x6m", "New X6 M"),
    ("x7", "New X7"), ("xm", "The XM"), ("ix", "New iX"),
];

pub const BMW_PHRASES: &[&str] = &[
    "118i", "120i", "1시리즈", "1series", "220i", "223i", "2시리즈액티브투어러", "2시리즈그란쿠페", "2시리즈",
    "2series", "m2", "320i", "330i", "3시리즈", "3series", "m3", "420i", "430i", "4시리즈", "4series",
    "m4", "i4", "520i", "520d", "530i", "530e", "540i", "5시리즈", "5series", "m5", "i5", "630i",
    "640i", "6시리즈", "6series", "730i", "740i", "750i", "7시리즈", "7series", "i7", "840i", "850i",
    "8시리즈", "8series", "m8", "z4", "ix1", "x1", "ix2", "x2", "ix3", "x3", "x4m", "x4", "x5m",
    "x5", "x6m", "x6", "x7", "xm", "ix",
];

pub const KGM_IDENTITIES: &[&str] = &[
    "더 뉴 티볼리", "더 뉴 티볼리 에어", "코란도", "액티언", "액티언 HEV", "더 뉴 토레스", "더 뉴 토레스 HEV", "토레스 EVX",
    "렉스턴 뉴 아레나", "렉스턴 써밋", "렉스턴 스포츠", "렉스턴 스포츠 칸", "무쏘 Q300", "무쏘 스포츠 Q250", "무쏘 칸 Q250", "무쏘 EV",
];

pub const KGM_KEYWORDS: &[(&str, &str)] = &[
    ("티볼리", "더 뉴 티볼리"), ("티볼리에어", "더 뉴 티볼리 에어"), ("코란도", "코란도"), ("액티언", "액티언"),
    ("액티언hev", "액티언 HEV"), ("토레스", "더 뉴 토레스"), ("토레스hev", "더 뉴 토레스 HEV"), ("토레스evx", "토레스 EVX"),
    ("렉스턴뉴아레나", "렉스턴 뉴 아레나"), ("렉스턴써밋", "렉스턴 써밋"), ("렉스턴스포츠", "렉스턴 스포츠"),
    ("렉스턴스포츠칸", "렉스턴 스포츠 칸"), ("렉스턴", "렉스턴 뉴 아레나"), ("무쏘q300", "무쏘 Q300"),
    ("무쏘스포츠q250", "무쏘 스포츠 Q250"), ("무쏘칸q250", "무쏘 칸 Q250"), ("무쏘ev", "무쏘 EV"), ("무쏘", "무쏘 Q300"),
];

pub const KGM_PHRASES: &[&str] = &[
    "티볼리에어", "티볼리", "코란도", "액티언hev", "액티언hybrid", "액티언", "토레스evx", "토레스hev", "토레스hybrid", "토레스",
    "렉스턴뉴아레나", "렉스턴써밋", "렉스턴스포츠칸", "렉스턴스포츠", "렉스턴", "무쏘ev", "무쏘q300", "무쏘스포츠", "무쏘칸", "무쏘",
];

pub const RENAULT_IDENTITIES: &[&str] = &[
    "더 뉴 SM6", "아르카나", "아르카나 E-TECH", "그랑 콜레오스", "그랑 콜레오스 E-TECH", "더 뉴 QM6", "필랑트",
    "세닉 E-테크 일렉트릭", "QM6 Quest",
];

pub const RENAULT_KEYWORDS: &[(&str, &str)] = &[
    ("sm6", "더 뉴 SM6"), ("아르카나", "아르카나"), ("아르카나e-tech", "아르카나 E-TECH"),
    ("아르카나etech", "아르카나 E-TECH"), ("아르카나hev", "아르카나 E-TECH"), ("그랑콜레오스", "그랑 콜레오스"),
    ("콜레오스", "그랑 콜레오스"), ("그랑콜레오스e-tech", "그랑 콜레오스 E-TECH"), ("그랑콜레오스etech", "그랑 콜레오스 E-TECH"),
    ("그랑콜레오스hev", "그랑 콜레오스 E-TECH"), ("qm6", "더 뉴 QM6"), ("qm6quest", "QM6 Quest"),
    ("필랑트", "필랑트"), ("세닉", "세닉 E-테크 일렉트릭"),
];

pub const RENAULT_PHRASES: &[&str] = &[
    "sm6", "아르카나e-tech", "아르카나etech", "아르카나hev", "아르카나hybrid", "아르카나", "그랑콜레오스e-tech",
    "그랑콜레오스etech", "그랑콜레오스hev", "그랑콜레오스hybrid", "그랑콜레오스", "콜레오스", "qm6quest", "qm6", "필랑트", "세닉",
];

pub const LANDROVER_IDENTITIES: &[&str] = &[
    "Range Rover Evoque", "Discovery Sport", "All New Discovery", "New Range Rover Velar",
    "The New Range Rover Sport", "The New Range Rover", "All New Defender",
];

pub const LANDROVER_KEYWORDS: &[(&str, &str)] = &[
    ("evoque", "Range Rover Evoque"), ("이보크", "Range Rover Evoque"),
    ("레인지로버이보크", "Range Rover Evoque"), ("discoverysport", "Discovery Sport"),
    ("디스커버리스포츠", "Discovery Sport"), ("discovery", "All New Discovery"),
    ("디스커버리", "All New Discovery"), ("velar", "New Range Rover Velar"),
    ("벨라", "New Range Rover Velar"), ("rangeroversport", "The New Range Rover Sport"),
    ("레인지로버스포츠", "The New Range Rover Sport"), ("rangerover", "The New Range Rover"),
    ("레인지로버", "The New Range Rover"), ("defender", "All New Defender"),
    ("디펜더", "All New Defender"),
];

pub const LANDROVER_PHRASES: &[&str] = &[
    "evoque", "이보크", "discoverysport", "디스커버리스포츠", "discovery", "디스커버리", "velar", "벨라",
    "rangeroversport", "레인지로버스포츠", "sport", "스포츠", "rangerover", "레인지로버", "defender", "디펜더",
];

pub const BENZ_IDENTITIES: &[&str] = &[
    "The New A-Class F/L", "The New C-Class", "The New CLA-Class", "The All New CLE",
    "The New E-Class", "The New S-Class", "Maybach SL", "The New Maybach S-Class",
    "The New SL-Class", "The New AMG GT", "AMG GT", "EQE", "EQS", "Maybach EQS SUV",
    "Maybach GLS-Class F/L", "The New EQA", "The New EQB", "The New EQE SUV",
    "The New EQE AMG SUV", "EQS SUV", "GLB-Class F/L", "GLA-Class F/L", "The New GLC-Class",
    "The New GLE-Class", "The New GLS-Class F/L", "EQ G-Class", "The New G-Class",
];

pub const BENZ_KEYWORDS: &[(&str, &str)] = &[
    ("a180", "The New A-Class F/L"), ("a200", "The New A-Class F/L"),
    ("a220", "The New A-Class F/L"), ("a250", "The New A-Class F/L"),
    ("a35", "The New A-Class F/L"), ("a45", "The New A-Class F/L"),
    ("a클래스", "The New A-Class F/L"), ("aclass", "The New A-Class F/L"),
    ("c180", "The New C-Class"), ("c200", "The New C-Class"), ("c220", "The New C-Class"),
    ("c300", "The New C-Class"), ("c43", "The New C-Class"), ("c63", "The New C-Class"),
    ("c클래스", "The New C-Class"), ("cclass", "The New C-Class"), ("cla180", "The New CLA-Class"),
    ("cla200", "The New CLA-Class"), ("cla220", "The New CLA-Class"),
    ("cla250", "The New CLA-Class"), ("cla35", "The New CLA-Class"),
    ("cla45", "The New CLA-Class"), ("cla클래스", "The New CLA-Class"),
    ("claclass", "The New CLA-Class"), ("cla", "The New CLA-Class"), ("cle", "The All New CLE"),
    ("e200", "The New E-Class"), ("e220", "The New E-Class"), ("e300", "The New E-Class"),
    ("e350", "The New E-Class"), ("e450", "The New E-Class"), ("e53", "The New E-Class"),
    ("e63", "The New E-Class"), ("e클래스", "The New E-Class"), ("eclass", "The New E-Class"),
    ("s350", "The New S-Class"), ("s400", "The New S-Class"), ("s450", "The New S-Class"),
    ("s500", "The New S-Class"), ("s580", "The New S-Class"), ("s63", "The New S-Class"),
    ("s클래스", "The New S-Class"), ("sclass", "The New S-Class"), ("maybachsl", "Maybach SL"),
    ("maybachs클래스", "The New Maybach S-Class"), ("maybachsclass", "The New Maybach S-Class"),
    ("sl클래스", "The New SL-Class"), ("slclass", "The New SL-Class"), ("amggt", "The New AMG GT"),
    ("eqe", "EQE"), ("eqs", "EQS"), ("maybacheqssuv", "Maybach EQS SUV"),
    ("maybachgls", "Maybach GLS-Class F/L"), ("eqa", "The New EQA"), ("eqa250", "The New EQA"),
    ("eqb", "The New EQB"), ("eqb250", "The New EQB"), ("eqb300", "The New EQB"),
    ("eqb350", "The New EQB"), ("eqesuv", "The New EQE SUV"),
    ("eqeamgsuv", "The New EQE AMG SUV"), ("eqeamg", "The New EQE AMG SUV"),
    ("eqssuv", "EQS SUV"), ("glb", "GLB-Class F/L"), ("glb180", "GLB-Class F/L"),
    ("glb200", "GLB-Class F/L"), ("glb250", "GLB-Class F/L"), ("glb35", "GLB-Class F/L"),
    ("glb클래스", "GLB-Class F/L"), ("glbclass", "GLB-Class F/L"), ("gla", "GLA-Class F/L"),
    ("gla180", "GLA-Class F/L"), ("gla200", "GLA-Class F/L"), ("gla250", "GLA-Class F/L"),
    ("gla35", "GLA-Class F/L"), ("gla45", "GLA-Class F/L"), ("gla클래스", "GLA-Class F/L"),
    ("glaclass", "GLA-Class F/L"), ("glc", "The New GLC-Class"), ("glc200", "The New GLC-Class"),
    ("glc220", "The New GLC-Class"), ("glc300", "The New GLC-Class"),
    ("glc43", "The New GLC-Class"), ("glc63", "The New GLC-Class"),
    ("glc클래스", "The New GLC-Class"), ("glcclass", "The New GLC-Class"),
    ("gle", "The New GLE-Class"), ("gle300", "The New GLE-Class"),
    ("gle350", "The New GLE-Class"), ("gle400", "The New GLE-Class"),
    ("gle450", "The New GLE-Class"), ("gle53", "The New GLE-Class"),
    ("gle63", "The New GLE-Class"), ("gle클래스", "The New GLE-Class"),
    ("gleclass", "The New GLE-Class"), ("gls", "The New GLS-Class F/L"),
    ("gls400", "The New GLS-Class F/L"), ("gls450", "The New GLS-Class F/L"),
    ("gls580", "The New GLS-Class F/L"), ("gls63", "The New GLS-Class F/L"),
    ("gls클래스", "The New GLS-Class F/L"), ("glsclass", "The New GLS-Class F/L"),
    ("eqg", "EQ G-Class"), ("g400", "The New G-Class"), ("g500", "The New G-Class"),
    ("g63", "The New G-Class"), ("g클래스", "The New G-Class"), ("gclass", "The New G-Class"),
];

pub const BENZ_PHRASES: &[&str] = &[
    "a180", "a200", "a220", "a250", "a35", "a45", "a클래스", "a-class", "aclass", "c180", "c200",
    "c220", "c300", "c43", "c63", "c클래스", "c-class", "cclass", "cla180", "cla200", "cla220",
    "cla250", "cla35", "cla45", "cla클래스", "cla-class", "claclass", "cla", "cle", "e200", "e220",
    "e300", "e350", "e450", "e53", "e63", "e클래스", "e-class", "eclass", "s350", "s400", "s450",
    "s500", "s580", "s63", "s클래스", "s-class", "sclass", "maybachsl", "maybachs클래스",
    "maybachs-class", "maybachsclass", "sl클래스", "sl-class", "slclass", "amggt", "eqesuv",
    "eqeamgsuv", "eqeamg", "eqe", "eqssuv", "eqs", "maybacheqssuv", "maybachgls", "eqa250", "eqa",
    "eqb250", "eqb300", "eqb350", "eqb", "glb180", "glb200", "glb250", "glb35", "glb클래스",
    "glb-class", "glbclass", "glb", "gla180", "gla200", "gla250", "gla35", "gla45", "gla클래스",
    "gla-class", "glaclass", "gla", "glc200", "glc220", "glc300", "glc43", "glc63", "glc클래스",
    "glc-class", "glcclass", "glc", "gle300", "gle350", "gle400", "gle450", "gle53", "gle63",
    "gle클래스", "gle-class", "gleclass", "gle", "gls400", "gls450", "gls580", "gls63", "gls클래스",
    "gls-class", "glsclass", "gls", "eqg", "eqg-class", "g400", "g500", "g63", "g클래스", "g-class",
    "gclass",
];

pub const CHEVROLET_IDENTITIES: &[&str] = &[
    "트랙스 크로스오버", "더 뉴 트레일블레이저", "올 뉴 콜로라도",
];

pub const CHEVROLET_KEYWORDS: &[(&str, &str)] = &[
    ("트랙스크로스오버", "트랙스 크로스오버"), ("traxcrossover", "트랙스 크로스오버"), ("trax", "트랙스 크로스오버"),
    ("트랙스", "트랙스 크로스오버"), ("트레일블레이저", "더 뉴 트레일블레이저"), ("trailblazer", "더 뉴 트레일블레이저"),
    ("콜로라도", "올 뉴 콜로라도"), ("colorado", "올 뉴 콜로라도"),
];

pub const CHEVROLET_PHRASES: &[&str] = &[
    "트랙스크로스오버", "traxcrossover", "trax", "트랙스", "트레일블레이저", "trailblazer", "콜로라도", "colorado",
];

pub const TESLA_IDENTITIES: &[&str] = &[
    "New Model 3", "New Model S", "New Model X", "New Model Y", "Cybertruck",
];

pub const TESLA_KEYWORDS: &[(&str, &str)] = &[
    ("model3", "New Model 3"), ("모델3", "New Model 3"), ("models", "New Model S"),
    ("모델s", "New Model S"), ("modelx", "New Model X"), ("모델x", "New Model X"),
    ("modely", "New Model Y"), ("모델y", "New Model Y"), ("cybertruck", "Cybertruck"),
    ("사이버트럭", "Cybertruck"),
];

pub const TESLA_PHRASES: &[&str] = &[
    "model3", "모델3", "models", "모델s", "modelx", "모델x", "modely", "모델y", "cybertruck", "사이버트럭",
];

pub const POLESTAR_IDENTITIES: &[&str] = &[
    "폴스타 2 F/L", "폴스타 4",
];

pub const POLESTAR_KEYWORDS: &[(&str, &str)] = &[
    ("폴스타2", "폴스타 2 F/L"), ("polestar2", "폴스타 2 F/L"), ("폴스타2f/l", "폴스타 2 F/L"),
    ("폴스타4", "폴스타 4"), ("polestar4", "폴스타 4"),
];

pub const POLESTAR_PHRASES: &[&str] = &[];

pub const BYD_IDENTITIES: &[&str] = &[
    "SEALION 7",
];

pub const BYD_KEYWORDS: &[(&str, &str)] = &[
    ("sealion7", "SEALION 7"), ("sealion", "SEALION 7"), ("씰라이온7", "SEALION 7"),
    ("씰라이온", "SEALION 7"),
];

pub const BYD_PHRASES: &[&str] = &[];

