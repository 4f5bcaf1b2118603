//! Turns a raw `locations/search` payload into a bounded list of [`Hotel`]s.

use serde_json::Value;
use tripwise_core::{Coordinate, Hotel};

use crate::classify::is_hotel_category;
use crate::extract::{
    extract_coordinate, extract_image_url, extract_name, extract_price, extract_rating,
    extract_ranking,
};
use crate::geo::within_radius;

/// Hotels farther than this from the center point are dropped.
pub const HOTEL_RADIUS_KM: f64 = 200.0;

/// Name the upstream uses for unnamed records; never emitted.
pub const UNKNOWN_HOTEL: &str = "Unknown Hotel";

pub const ADDRESS_NOT_AVAILABLE: &str = "Not available";

/// The `data` array of a search payload, or an empty slice.
pub(crate) fn result_items(payload: &Value) -> &[Value] {
    payload
        .get("data")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn result_object(item: &Value) -> Option<&Value> {
    item.get("result_object").filter(|value| value.is_object())
}

/// Coordinate of the first hotel-category item with valid coordinates.
#[must_use]
pub fn find_hotel_center(items: &[Value]) -> Option<Coordinate> {
    items
        .iter()
        .filter_map(result_object)
        .filter(|record| is_hotel_category(record))
        .find_map(extract_coordinate)
}

/// Filters and maps raw items in their original order, stopping once `limit`
/// hotels have been collected.
///
/// Per item: hotel category, valid coordinates, within
/// [`HOTEL_RADIUS_KM`] of the center (skipped when no center exists), and a
/// real name. Anything failing a check is dropped silently.
#[must_use]
pub fn normalize_hotels(items: &[Value], limit: usize) -> Vec<Hotel> {
    let center = find_hotel_center(items);
    if center.is_none() {
        tracing::debug!("no hotel center point found, geo filter disabled");
    }

    let mut hotels = Vec::with_capacity(limit.min(items.len()));
    for record in items.iter().filter_map(result_object) {
        if hotels.len() >= limit {
            break;
        }
        if let Some(hotel) = map_hotel(record, center) {
            hotels.push(hotel);
        }
    }
    hotels
}

fn map_hotel(record: &Value, center: Option<Coordinate>) -> Option<Hotel> {
    if !is_hotel_category(record) {
        return None;
    }

    let coordinates = extract_coordinate(record)?;
    if let Some(center) = center {
        if !within_radius(center, coordinates, HOTEL_RADIUS_KM) {
            return None;
        }
    }

    let name = extract_name(record).filter(|name| *name != UNKNOWN_HOTEL)?;
    let (price, currency) = extract_price(record);

    Some(Hotel {
        name: name.to_string(),
        rating: extract_rating(record),
        price,
        currency,
        image: extract_image_url(record),
        coordinates,
        address: record
            .get("address")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(ADDRESS_NOT_AVAILABLE)
            .to_string(),
        ranking: extract_ranking(record),
    })
}

#[cfg(test)]
#[path = "hotels_test.rs"]
mod tests;
