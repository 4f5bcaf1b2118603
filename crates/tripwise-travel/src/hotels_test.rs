use serde_json::{json, Value};
use tripwise_core::Rating;

use super::*;
use crate::geo::distance_km;

fn hotel_item(name: &str, lat: f64, lng: f64) -> Value {
    json!({
        "result_object": {
            "name": name,
            "category": { "key": "hotel", "name": "Hotel" },
            "latitude": lat.to_string(),
            "longitude": lng.to_string(),
            "rating": "4.0",
            "price_level": 2,
            "address": "Candolim, Goa",
            "ranking_position": "3",
            "photo": { "images": { "medium": { "url": "https://img.example/h.jpg" } } }
        }
    })
}

#[test]
fn result_items_handles_missing_data_key() {
    assert!(result_items(&json!({})).is_empty());
    assert!(result_items(&json!({ "data": "nope" })).is_empty());
    assert_eq!(result_items(&json!({ "data": [1, 2] })).len(), 2);
}

#[test]
fn three_item_scenario_keeps_only_the_located_hotel() {
    let items = vec![
        json!({ "result_object": {
            "name": "No Coords Inn",
            "category": { "key": "hotel" }
        }}),
        json!({ "result_object": {
            "name": "Taj Holiday Village",
            "category": { "key": "hotel", "name": "Hotel" },
            "latitude": "15.5",
            "longitude": "73.77",
            "rating": "4.0",
            "price_level": 2,
            "address": "Sinquerim, Candolim, Goa",
            "ranking_position": "3",
            "photo": { "images": { "medium": { "url": "https://img.example/taj.jpg" } } }
        }}),
        json!({ "result_object": {
            "name": "Fort Aguada",
            "category": { "key": "attraction", "name": "Attraction" },
            "latitude": "15.49",
            "longitude": "73.77"
        }}),
    ];

    let hotels = normalize_hotels(&items, 5);
    assert_eq!(hotels.len(), 1);

    let hotel = &hotels[0];
    assert_eq!(hotel.name, "Taj Holiday Village");
    assert_eq!(hotel.rating, Rating::Score(4.0));
    assert_eq!(hotel.price, "₹2,000-4,000");
    assert_eq!(hotel.currency.as_deref(), Some("INR"));
    assert_eq!(hotel.image, "https://img.example/taj.jpg");
    assert!((hotel.coordinates.lat - 15.5).abs() < 1e-9);
    assert!((hotel.coordinates.lng - 73.77).abs() < 1e-9);
    assert_eq!(hotel.address, "Sinquerim, Candolim, Goa");
    assert_eq!(hotel.ranking.as_deref(), Some("3"));
}

#[test]
fn center_is_first_hotel_with_valid_coordinates() {
    let items = vec![
        json!({ "result_object": { "name": "Cafe", "category": { "key": "restaurant" }, "latitude": 10.0, "longitude": 10.0 } }),
        json!({ "result_object": { "name": "Bad Coords Hotel", "category": { "key": "hotel" }, "latitude": "x", "longitude": "y" } }),
        json!({ "no_result_object": true }),
        hotel_item("First Real Hotel", 15.5, 73.8),
        hotel_item("Second Real Hotel", 16.0, 74.0),
    ];
    let center = find_hotel_center(&items).expect("center should be found");
    assert!((center.lat - 15.5).abs() < 1e-9);
    assert!((center.lng - 73.8).abs() < 1e-9);
}

#[test]
fn no_center_when_no_hotel_has_coordinates() {
    let items = vec![json!({ "result_object": { "name": "Hotel Without Coords", "category": { "key": "hotel" } } })];
    assert!(find_hotel_center(&items).is_none());
}

#[test]
fn hotels_beyond_radius_are_dropped() {
    // ~50km and ~330km north of the center respectively.
    let items = vec![
        hotel_item("Center Hotel", 15.5, 73.8),
        hotel_item("Nearby Hotel", 15.95, 73.8),
        hotel_item("Far Hotel", 18.5, 73.8),
    ];
    let hotels = normalize_hotels(&items, 10);
    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Center Hotel", "Nearby Hotel"]);

    let center = find_hotel_center(&items).unwrap();
    for hotel in &hotels {
        assert!(distance_km(center, hotel.coordinates) <= HOTEL_RADIUS_KM);
    }
}

#[test]
fn limit_stops_collection_in_raw_order() {
    let items = vec![
        hotel_item("A", 15.5, 73.8),
        hotel_item("B", 15.51, 73.8),
        hotel_item("C", 15.52, 73.8),
    ];
    let hotels = normalize_hotels(&items, 2);
    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn zero_limit_yields_nothing() {
    let items = vec![hotel_item("A", 15.5, 73.8)];
    assert!(normalize_hotels(&items, 0).is_empty());
}

#[test]
fn sentinel_and_missing_names_are_rejected() {
    let mut unnamed = hotel_item("placeholder", 15.5, 73.8);
    unnamed["result_object"]
        .as_object_mut()
        .unwrap()
        .remove("name");
    let items = vec![
        hotel_item("Unknown Hotel", 15.5, 73.8),
        unnamed,
        hotel_item("Named Hotel", 15.5, 73.8),
    ];
    let hotels = normalize_hotels(&items, 5);
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].name, "Named Hotel");
}

#[test]
fn missing_optional_fields_use_defaults() {
    let items = vec![json!({ "result_object": {
        "name": "Bare Lodge",
        "category": { "key": "lodging" },
        "latitude": 15.5,
        "longitude": 73.8
    }})];
    let hotels = normalize_hotels(&items, 5);
    assert_eq!(hotels.len(), 1);
    let hotel = &hotels[0];
    assert_eq!(hotel.rating, Rating::NotAvailable);
    assert_eq!(hotel.price, "Price unavailable");
    assert!(hotel.currency.is_none());
    assert_eq!(hotel.image, crate::extract::PLACEHOLDER_IMAGE_URL);
    assert_eq!(hotel.address, ADDRESS_NOT_AVAILABLE);
    assert!(hotel.ranking.is_none());
}
