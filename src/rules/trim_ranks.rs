// src/rules/trim_ranks.rs - Trim ordering, cheapest grade first

pub const DEFAULT_TRIM_RANK: u32 = 50;

/// Declaration order matters: it breaks ties between equally long partial matches.
pub const TRIM_RANKS: &[(&str, u32)] = &[
    // entry grades
    ("기본형", 0), ("스탠다드", 0), ("Standard", 0), ("베이직", 0), ("Basic", 0),
    ("라이트", 1), ("Light", 1), ("E-밸류+", 1),
    ("에어", 2), ("Air", 2),
    ("스마트", 3), ("Smart", 3),
    ("트렌디", 4), ("Trendy", 4),
    ("모던", 5), ("Modern", 5),
    // mid grades
    ("프리미엄", 6), ("Premium", 6),
    ("어스", 7), ("Earth", 7),
    ("익스클루시브", 8), ("Exclusive", 8),
    // upper grades
    ("프레스티지", 9), ("Prestige", 9),
    ("럭셔리", 9), ("Luxury", 9),
    ("베스트 셀렉션", 9),
    ("스포츠", 10), ("Sports", 10),
    ("노블레스 라이트", 10),
    ("노블레스", 11), ("Noblesse", 11),
    ("스포츠 플러스", 11),
    ("H-Pick", 11),
    ("인스퍼레이션", 12), ("Inspiration", 12),
    ("아너스", 12), ("Honors", 12),
    ("퍼포먼스", 12), ("Performance", 12),
    // top grades
    ("시그니처", 13), ("Signature", 13),
    ("시그니처 블랙", 14),
    ("캘리그래피", 15), ("Calligraphy", 15),
    ("그래비티", 15), ("Gravity", 15),
    ("E-라이트", 15), ("E-Lite", 15),
    // sport lines
    ("N Line", 16), ("N 라인", 16),
    ("GT-Line", 16), ("GT 라인", 16), ("GT-line", 16),
    ("X-Line", 16), ("X 라인", 16),
    ("N 퍼포먼스", 17),
    // Renault
    ("techno", 3), ("테크노", 3),
    ("iconic", 6), ("아이코닉", 6),
    ("esprit Alpine", 9), ("에스프리 알핀", 9),
    // KGM
    ("T5", 3), ("T6", 6), ("T7", 9),
    ("LX", 3), ("MX", 6), ("TX", 9),
    ("VX", 1),
    ("칸", 3), ("칸 플러스", 6), ("칸 프리미엄", 9),
    // Tasman
    ("다이내믹", 3), ("어드벤처", 6), ("익스트림", 9), ("X-Pro", 12),
];
