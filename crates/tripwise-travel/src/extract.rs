//! Defensive field extraction from loosely-shaped upstream search records.
//!
//! Every extractor takes a raw `serde_json::Value` and walks an explicit,
//! ordered list of paths. A missing or malformed field is a normal outcome
//! and never an error: callers get `None`, a placeholder, or a sentinel.

use serde_json::Value;
use tripwise_core::{Coordinate, Rating};

/// Returned by [`extract_image_url`] when no usable photo URL exists.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/800x600?text=No+Image";

/// Sentinel price returned by [`extract_price`] when every branch misses.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Photo sizes in the order they are tried.
const IMAGE_SIZES: [&str; 4] = ["large", "medium", "original", "thumbnail"];

/// Bucketed display strings for TripAdvisor-style `price_level` 1..=4.
const PRICE_LEVEL_BUCKETS: [(i64, &str); 4] = [
    (1, "₹1,000-2,000"),
    (2, "₹2,000-4,000"),
    (3, "₹4,000-8,000"),
    (4, "₹8,000+"),
];

const PRICE_LEVEL_CURRENCY: &str = "INR";

/// Returns the first `photo.images.{size}.url` that is an absolute HTTP(S)
/// URL, trying sizes large, medium, original, thumbnail. Falls back to
/// [`PLACEHOLDER_IMAGE_URL`].
#[must_use]
pub fn extract_image_url(record: &Value) -> String {
    let Some(images) = record.get("photo").and_then(|p| p.get("images")) else {
        return PLACEHOLDER_IMAGE_URL.to_string();
    };

    IMAGE_SIZES
        .iter()
        .filter_map(|size| {
            images
                .get(size)
                .and_then(|image| image.get("url"))
                .and_then(non_empty_str)
        })
        .find(|url| url.starts_with("http://") || url.starts_with("https://"))
        .map_or_else(|| PLACEHOLDER_IMAGE_URL.to_string(), str::to_string)
}

/// Extracts a display price and optional currency code.
///
/// Branches, first hit wins:
/// 1. `price` (string or number) with `currency` (`{"code": ..}` or a string)
/// 2. `price_range` string, with the same currency lookup
/// 3. `price_level` 1..=4 mapped to a rupee bucket, currency forced to `INR`
/// 4. `offer_group.offer_list[0].price` / `.currency`
///
/// Returns `("Price unavailable", None)` when nothing matches.
#[must_use]
pub fn extract_price(record: &Value) -> (String, Option<String>) {
    if let Some(price) = record.get("price").and_then(value_as_string) {
        return (price, extract_currency(record.get("currency")));
    }

    if let Some(range) = record.get("price_range").and_then(non_empty_str) {
        return (range.to_string(), extract_currency(record.get("currency")));
    }

    if let Some(level) = record.get("price_level").and_then(value_as_i64) {
        let display = PRICE_LEVEL_BUCKETS
            .iter()
            .find(|(bucket, _)| *bucket == level)
            .map_or_else(|| format!("Level {level}"), |(_, label)| (*label).to_string());
        return (display, Some(PRICE_LEVEL_CURRENCY.to_string()));
    }

    let first_offer = record
        .get("offer_group")
        .and_then(|group| group.get("offer_list"))
        .and_then(Value::as_array)
        .and_then(|offers| offers.first());
    if let Some(offer) = first_offer {
        if let Some(price) = offer.get("price").and_then(value_as_string) {
            return (price, extract_currency(offer.get("currency")));
        }
    }

    (PRICE_UNAVAILABLE.to_string(), None)
}

/// Currency may be nested (`{"code": "INR"}`) or flat (`"INR"`).
fn extract_currency(value: Option<&Value>) -> Option<String> {
    let value = value?;
    value
        .get("code")
        .and_then(non_empty_str)
        .or_else(|| non_empty_str(value))
        .map(str::to_string)
}

/// Parses `latitude` / `longitude` (numbers or numeric strings) into a
/// range-checked [`Coordinate`].
#[must_use]
pub fn extract_coordinate(record: &Value) -> Option<Coordinate> {
    let lat = record.get("latitude").and_then(value_as_f64)?;
    let lng = record.get("longitude").and_then(value_as_f64)?;
    Coordinate::new(lat, lng)
}

#[must_use]
pub fn extract_rating(record: &Value) -> Rating {
    record
        .get("rating")
        .and_then(value_as_f64)
        .filter(|value| value.is_finite())
        .map_or(Rating::NotAvailable, Rating::Score)
}

/// Trimmed, non-empty `name`, if any.
#[must_use]
pub fn extract_name(record: &Value) -> Option<&str> {
    record.get("name").and_then(non_empty_str)
}

#[must_use]
pub fn extract_ranking(record: &Value) -> Option<String> {
    record.get("ranking_position").and_then(value_as_string)
}

#[must_use]
pub fn extract_duration_minutes(record: &Value) -> Option<i64> {
    record.get("duration_minutes").and_then(value_as_i64)
}

/// `booking_link`, falling back to `web_url`.
#[must_use]
pub fn extract_booking_link(record: &Value) -> Option<String> {
    record
        .get("booking_link")
        .and_then(non_empty_str)
        .or_else(|| record.get("web_url").and_then(non_empty_str))
        .map(str::to_string)
}

/// `category.name`, trimmed.
#[must_use]
pub fn extract_category_name(record: &Value) -> Option<&str> {
    record
        .get("category")
        .and_then(|category| category.get("name"))
        .and_then(non_empty_str)
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn value_as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
}

/// Integer from a JSON integer, an integral float (`2.0`), or a numeric string.
fn value_as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(integral_f64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()))
}

#[allow(clippy::cast_possible_truncation)]
fn integral_f64(n: f64) -> Option<i64> {
    // Bounds keep the cast from saturating.
    (n.fract() == 0.0 && (-9.0e18..=9.0e18).contains(&n)).then(|| n as i64)
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => non_empty_str(value).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
