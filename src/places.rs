//! Known places with fixed display coordinates
//!
//! Lookup walks [`KNOWN_PLACES`] in order and the first key contained in the
//! query wins, so the order here is part of the resolver's behaviour.

use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownPlace {
    /// Lower-case key matched as a substring of the query
    pub key: &'static str,
    pub coordinates: Coordinates,
    pub display_name: &'static str,
    pub description: &'static str,
}

const fn place(
    key: &'static str,
    lat: f64,
    lon: f64,
    display_name: &'static str,
    description: &'static str,
) -> KnownPlace {
    KnownPlace {
        key,
        coordinates: Coordinates { lat, lon },
        display_name,
        description,
    }
}

pub const KNOWN_PLACES: [KnownPlace; 12] = [
    place(
        "delhi",
        28.6139,
        77.2090,
        "Delhi, India",
        "Capital city with diverse climate patterns",
    ),
    place(
        "mumbai",
        19.0760,
        72.8777,
        "Mumbai, Maharashtra, India",
        "Coastal metropolitan with humid climate",
    ),
    place(
        "bangalore",
        12.9716,
        77.5946,
        "Bengaluru, Karnataka, India",
        "Garden city with pleasant weather",
    ),
    place(
        "kolkata",
        22.5726,
        88.3639,
        "Kolkata, West Bengal, India",
        "Cultural hub with tropical climate",
    ),
    place(
        "chennai",
        13.0827,
        80.2707,
        "Chennai, Tamil Nadu, India",
        "Coastal city with hot summers",
    ),
    place(
        "hyderabad",
        17.3850,
        78.4867,
        "Hyderabad, Telangana, India",
        "Historic city with moderate climate",
    ),
    place(
        "tokyo",
        35.6762,
        139.6503,
        "Tokyo, Japan",
        "Metropolitan capital with seasonal climate",
    ),
    place(
        "new york",
        40.7128,
        -74.0060,
        "New York City, USA",
        "Global financial hub with continental climate",
    ),
    place(
        "london",
        51.5074,
        -0.1278,
        "London, UK",
        "Historic city with temperate maritime climate",
    ),
    place(
        "sydney",
        -33.8688,
        151.2093,
        "Sydney, Australia",
        "Coastal city with subtropical climate",
    ),
    place(
        "amazon",
        -3.4653,
        -62.2159,
        "Amazon Rainforest",
        "World's largest tropical rainforest",
    ),
    place(
        "sahara",
        25.0,
        0.0,
        "Sahara Desert",
        "World's largest hot desert",
    ),
];

/// First known place whose key occurs in an already normalized query
#[must_use]
pub fn find_known_place(normalized_query: &str) -> Option<&'static KnownPlace> {
    KNOWN_PLACES
        .iter()
        .find(|place| normalized_query.contains(place.key))
}
