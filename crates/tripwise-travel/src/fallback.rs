//! Static substitute data served when live results are unavailable.
//!
//! The tables are destination-independent; callers only control how many
//! rows come back.

use tripwise_core::{Activity, Coordinate, Hotel, Rating};

struct HotelRow {
    name: &'static str,
    rating: f64,
    price: &'static str,
    image: &'static str,
    lat: f64,
    lng: f64,
    address: &'static str,
}

struct ActivityRow {
    name: &'static str,
    rating: f64,
    category: &'static str,
    image: &'static str,
    lat: f64,
    lng: f64,
    price: &'static str,
}

const FALLBACK_CURRENCY: &str = "INR";

const HOTELS: &[HotelRow] = &[
    HotelRow {
        name: "Paradise Beach Resort",
        rating: 4.5,
        price: "₹6,000",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
        lat: 15.2993,
        lng: 74.1240,
        address: "Beach Road, North Goa",
    },
    HotelRow {
        name: "Sunset Luxury Hotel",
        rating: 4.8,
        price: "₹8,500",
        image: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=800",
        lat: 15.4909,
        lng: 73.8278,
        address: "Calangute, Goa",
    },
    HotelRow {
        name: "Ocean View Boutique",
        rating: 4.3,
        price: "₹5,200",
        image: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800",
        lat: 15.5519,
        lng: 73.7554,
        address: "Baga Beach, Goa",
    },
    HotelRow {
        name: "Tropical Garden Resort",
        rating: 4.2,
        price: "₹4,800",
        image: "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=800",
        lat: 15.5832,
        lng: 73.7414,
        address: "Anjuna, Goa",
    },
    HotelRow {
        name: "Grand Heritage Palace",
        rating: 4.7,
        price: "₹12,000",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800",
        lat: 15.4989,
        lng: 73.9128,
        address: "Panaji, Goa",
    },
];

const ACTIVITIES: &[ActivityRow] = &[
    ActivityRow {
        name: "Scuba Diving Adventure",
        rating: 4.6,
        category: "Water Sports",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
        lat: 15.2993,
        lng: 74.1240,
        price: "₹3,500",
    },
    ActivityRow {
        name: "Sunset Cruise",
        rating: 4.8,
        category: "Boat Tour",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
        lat: 15.4909,
        lng: 73.8278,
        price: "₹2,000",
    },
    ActivityRow {
        name: "Spice Plantation Tour",
        rating: 4.4,
        category: "Cultural Experience",
        image: "https://images.unsplash.com/photo-1466692476868-aef1dfb1e735?w=800",
        lat: 15.5519,
        lng: 73.7554,
        price: "₹1,500",
    },
    ActivityRow {
        name: "Parasailing Experience",
        rating: 4.7,
        category: "Adventure Sports",
        image: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800",
        lat: 15.5832,
        lng: 73.7414,
        price: "₹2,500",
    },
    ActivityRow {
        name: "Dolphin Watching Tour",
        rating: 4.5,
        category: "Wildlife",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
        lat: 15.4989,
        lng: 73.9128,
        price: "₹1,800",
    },
];

/// Number of rows in each fallback table.
pub const FALLBACK_TABLE_SIZE: usize = 5;

/// The first `min(limit, 5)` fallback hotels.
#[must_use]
pub fn fallback_hotels(limit: usize) -> Vec<Hotel> {
    HOTELS
        .iter()
        .take(limit)
        .map(|row| Hotel {
            name: row.name.to_string(),
            rating: Rating::Score(row.rating),
            price: row.price.to_string(),
            currency: Some(FALLBACK_CURRENCY.to_string()),
            image: row.image.to_string(),
            coordinates: Coordinate {
                lat: row.lat,
                lng: row.lng,
            },
            address: row.address.to_string(),
            ranking: None,
        })
        .collect()
}

/// The first `min(limit, 5)` fallback activities.
#[must_use]
pub fn fallback_activities(limit: usize) -> Vec<Activity> {
    ACTIVITIES
        .iter()
        .take(limit)
        .map(|row| Activity {
            name: row.name.to_string(),
            image: row.image.to_string(),
            category: row.category.to_string(),
            duration_minutes: None,
            price: row.price.to_string(),
            currency: Some(FALLBACK_CURRENCY.to_string()),
            rating: Rating::Score(row.rating),
            coordinates: Coordinate {
                lat: row.lat,
                lng: row.lng,
            },
            booking_link: None,
        })
        .collect()
}
