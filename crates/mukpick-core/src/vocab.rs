//! Fixed vocabularies used to compose local-search queries.
//!
//! Both lists are drawn from uniformly at random on every search attempt;
//! nothing here is ever cached or reordered.

/// Food categories eligible for random recommendation.
pub const FOOD_CATEGORIES: &[&str] = &[
    "한식",
    "중식",
    "일식",
    "양식",
    "분식",
    "치킨",
    "피자",
    "햄버거",
    "돈까스",
    "회",
    "초밥",
    "라면",
    "국밥",
    "찌개",
    "찜",
    "탕",
    "샐러드",
    "샌드위치",
    "카페",
    "디저트",
    "베이커리",
];

/// Search-refinement keywords appended to every composed query, chosen
/// independently of the category.
pub const SEARCH_KEYWORDS: &[&str] = &["음식", "음식점", "식당", "점심", "저녁"];
