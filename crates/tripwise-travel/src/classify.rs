//! Keyword classifiers for records, categories and destinations.
//!
//! All matching is case-insensitive substring matching against the fixed
//! tables below.

use serde_json::Value;

/// Substrings that mark a record as accommodation.
pub(crate) const HOTEL_KEYWORDS: &[&str] = &[
    "hotel",
    "lodging",
    "resort",
    "motel",
    "guest_house",
    "inn",
    "hostel",
];

/// Activity categories kept in normalized output.
pub(crate) const ALLOWED_ACTIVITY_CATEGORIES: &[&str] = &[
    "attraction",
    "tours",
    "outdoor activities",
    "sights & landmarks",
    "nature & parks",
    "museums",
    "adventure",
    "sightseeing",
    "cultural",
    "wildlife",
    "water sports",
    "amusement",
];

pub(crate) const MOUNTAIN_KEYWORDS: &[&str] = &[
    "manali",
    "shimla",
    "ladakh",
    "leh",
    "kashmir",
    "himalaya",
    "mountain",
    "hill",
    "trek",
    "darjeeling",
    "mussoorie",
    "nainital",
    "ooty",
    "munnar",
    "kasol",
    "spiti",
    "sikkim",
    "gulmarg",
    "alps",
];

pub(crate) const BEACH_KEYWORDS: &[&str] = &[
    "goa",
    "beach",
    "andaman",
    "maldives",
    "kovalam",
    "pondicherry",
    "puducherry",
    "gokarna",
    "varkala",
    "bali",
    "phuket",
    "coast",
    "island",
    "lakshadweep",
];

pub(crate) const WATER_ACTIVITY_KEYWORDS: &[&str] = &[
    "scuba",
    "snorkel",
    "diving",
    "surf",
    "parasail",
    "jet ski",
    "water sport",
    "water ski",
    "banana boat",
    "kayak",
    "sailing",
    "cruise",
    "dolphin",
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// True if `category.key`, `category.name` or `name` (checked in that order)
/// contains a hotel keyword.
#[must_use]
pub fn is_hotel_category(record: &Value) -> bool {
    let category = record.get("category");
    let candidates = [
        category.and_then(|c| c.get("key")),
        category.and_then(|c| c.get("name")),
        record.get("name"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .any(|text| contains_any(text, HOTEL_KEYWORDS))
}

#[must_use]
pub fn is_allowed_activity_category(category: &str) -> bool {
    contains_any(category, ALLOWED_ACTIVITY_CATEGORIES)
}

#[must_use]
pub fn is_mountain_destination(destination: &str) -> bool {
    contains_any(destination, MOUNTAIN_KEYWORDS)
}

/// Computed alongside [`is_mountain_destination`] but does not gate any
/// filtering yet.
#[must_use]
pub fn is_beach_destination(destination: &str) -> bool {
    contains_any(destination, BEACH_KEYWORDS)
}

#[must_use]
pub fn is_water_activity(name: &str, category: &str) -> bool {
    contains_any(name, WATER_ACTIVITY_KEYWORDS) || contains_any(category, WATER_ACTIVITY_KEYWORDS)
}
