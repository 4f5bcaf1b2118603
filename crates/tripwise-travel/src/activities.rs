//! Turns a raw `attractions/search` payload into a bounded list of
//! [`Activity`] records.

use serde_json::Value;
use tripwise_core::{Activity, Coordinate};

use crate::classify::{
    is_allowed_activity_category, is_beach_destination, is_mountain_destination,
    is_water_activity,
};
use crate::extract::{
    extract_booking_link, extract_category_name, extract_coordinate, extract_duration_minutes,
    extract_image_url, extract_name, extract_price, extract_rating, PRICE_UNAVAILABLE,
};
use crate::geo::within_radius;

/// Activities farther than this from the center point are dropped.
pub const ACTIVITY_RADIUS_KM: f64 = 100.0;

pub const UNKNOWN_ACTIVITY: &str = "Unknown Activity";

/// Category used when a record carries none.
pub const DEFAULT_CATEGORY: &str = "Adventure";

/// Display price for activities without any price information.
pub const FREE_PRICE: &str = "Free";

/// Attraction searches may nest fields under `result_object` or return them flat.
fn activity_record(item: &Value) -> &Value {
    item.get("result_object")
        .filter(|value| value.is_object())
        .unwrap_or(item)
}

/// Coordinate of the first item with valid coordinates, regardless of category.
#[must_use]
pub fn find_activity_center(items: &[Value]) -> Option<Coordinate> {
    items
        .iter()
        .map(activity_record)
        .find_map(extract_coordinate)
}

/// Filters and maps raw items in order, stopping once `limit` activities
/// have been collected.
///
/// `center` is the geo anchor chosen by the caller (see
/// [`find_activity_center`]); `None` disables the radius check. Water
/// activities are excluded only for mountain destinations.
#[must_use]
pub fn normalize_activities(
    items: &[Value],
    destination: &str,
    center: Option<Coordinate>,
    limit: usize,
) -> Vec<Activity> {
    let mountain = is_mountain_destination(destination);
    let beach = is_beach_destination(destination);
    tracing::debug!(destination, mountain, beach, "classified destination");

    let mut activities = Vec::with_capacity(limit.min(items.len()));
    for record in items.iter().map(activity_record) {
        if activities.len() >= limit {
            break;
        }
        if let Some(activity) = map_activity(record, center, mountain) {
            activities.push(activity);
        }
    }
    activities
}

fn map_activity(record: &Value, center: Option<Coordinate>, mountain: bool) -> Option<Activity> {
    let category = extract_category_name(record).unwrap_or(DEFAULT_CATEGORY);
    if !is_allowed_activity_category(category) {
        return None;
    }

    let coordinates = extract_coordinate(record)?;
    if let Some(center) = center {
        if !within_radius(center, coordinates, ACTIVITY_RADIUS_KM) {
            return None;
        }
    }

    let name = extract_name(record).filter(|name| *name != UNKNOWN_ACTIVITY)?;
    if mountain && is_water_activity(name, category) {
        return None;
    }

    let (price, currency) = extract_price(record);
    let price = if price == PRICE_UNAVAILABLE {
        FREE_PRICE.to_string()
    } else {
        price
    };

    Some(Activity {
        name: name.to_string(),
        image: extract_image_url(record),
        category: category.to_string(),
        duration_minutes: extract_duration_minutes(record),
        price,
        currency,
        rating: extract_rating(record),
        coordinates,
        booking_link: extract_booking_link(record),
    })
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
