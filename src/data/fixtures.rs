//! Shared test fixtures for place data

use super::{BusinessStatus, Geometry, LatLng, OpeningHours, Photo, PlaceRecord, Review};

/// A complete, valid place details response
pub const VALID_DETAILS_RESPONSE: &str = r#"{
    "html_attributions": [],
    "status": "OK",
    "result": {
        "name": "Shivansh Food Park",
        "formatted_address": "Dhamtari, Chhattisgarh 493773, India",
        "formatted_phone_number": "098270 48957",
        "international_phone_number": "+91 98270 48957",
        "rating": 3.5,
        "user_ratings_total": 21,
        "photos": [
            {
                "height": 2296,
                "width": 4080,
                "html_attributions": ["<a href=\"https://maps.google.com/maps/contrib/1\">A Visitor</a>"],
                "photo_reference": "ref123"
            },
            {
                "height": 1080,
                "width": 1920,
                "html_attributions": [],
                "photo_reference": "ref456"
            }
        ],
        "reviews": [
            {
                "author_name": "John Doe",
                "author_url": "https://maps.google.com/contrib/123",
                "rating": 5,
                "relative_time_description": "a month ago",
                "text": "Great!",
                "profile_photo_url": "https://example.com/photo.jpg",
                "time": 1756989690,
                "language": "en"
            }
        ],
        "opening_hours": {
            "open_now": true,
            "weekday_text": [
                "Monday: 10:00 AM – 10:00 PM",
                "Tuesday: 10:00 AM – 10:00 PM",
                "Wednesday: 10:00 AM – 10:00 PM",
                "Thursday: 10:00 AM – 10:00 PM",
                "Friday: 10:00 AM – 10:00 PM",
                "Saturday: 10:00 AM – 11:00 PM",
                "Sunday: 10:00 AM – 11:00 PM"
            ],
            "periods": [
                { "open": { "day": 1, "time": "1000" }, "close": { "day": 1, "time": "2200" } }
            ]
        },
        "geometry": {
            "location": { "lat": 20.7144585, "lng": 81.5326135 },
            "viewport": {
                "northeast": { "lat": 20.7158, "lng": 81.5339 },
                "southwest": { "lat": 20.7131, "lng": 81.5312 }
            }
        },
        "url": "https://maps.google.com/?cid=123",
        "business_status": "OPERATIONAL",
        "dine_in": true,
        "types": ["restaurant", "food"]
    }
}"#;

/// A rejection as the provider sends it for an unknown place
pub const ZERO_RESULTS_RESPONSE: &str = r#"{"status": "ZERO_RESULTS", "result": {}}"#;

/// A small valid record with the given name and rating
pub fn sample_record(name: &str, rating: f64) -> PlaceRecord {
    PlaceRecord {
        place_id: "place-1".to_string(),
        name: name.to_string(),
        formatted_address: "Dhamtari, India".to_string(),
        formatted_phone_number: "098270 48957".to_string(),
        international_phone_number: "+91 98270 48957".to_string(),
        rating,
        user_ratings_total: 21,
        photos: vec![Photo {
            width: 4080,
            height: 2296,
            photo_reference: "ref123".to_string(),
            html_attributions: vec![],
        }],
        reviews: vec![Review {
            author_name: "John Doe".to_string(),
            author_url: "https://maps.google.com/contrib/123".to_string(),
            rating: 5,
            relative_time_description: "a month ago".to_string(),
            text: "Great!".to_string(),
            profile_photo_url: "https://example.com/photo.jpg".to_string(),
            time: 1756989690,
            language: None,
        }],
        opening_hours: Some(OpeningHours {
            open_now: true,
            weekday_text: vec!["Monday: 10:00 AM – 10:00 PM".to_string()],
            periods: None,
        }),
        geometry: Geometry {
            location: LatLng {
                lat: 20.7144585,
                lng: 81.5326135,
            },
            viewport: None,
        },
        url: "https://maps.google.com/?cid=123".to_string(),
        business_status: BusinessStatus::Operational,
        dine_in: Some(true),
        takeout: Some(false),
        types: vec!["restaurant".to_string()],
    }
}
