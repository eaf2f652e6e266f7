//! Core data models for the restaurant site
//!
//! This module contains the place types produced by the Places fetcher and
//! consumed by the cache, the JSON API and the rendered page.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod photo;
pub mod places;

pub use photo::{
    build_photo_url, build_photo_url_with_base, page_photo_width, DEFAULT_PHOTO_WIDTH,
    MAX_PAGE_PHOTOS,
};
pub use places::{PlaceSource, PlacesClient, PlacesError};

use serde::{Deserialize, Serialize};

/// A validated place record for the restaurant
///
/// Only built by the fetcher after the provider response has passed every
/// shape, type and range check, so a `PlaceRecord` is never partially valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Provider place identifier this record was fetched for
    pub place_id: String,
    /// Business name
    pub name: String,
    /// Full postal address as formatted by the provider
    pub formatted_address: String,
    /// Phone number in local format
    pub formatted_phone_number: String,
    /// Phone number in international format
    pub international_phone_number: String,
    /// Average rating (0.0 - 5.0)
    pub rating: f64,
    /// Number of ratings the average is computed from
    pub user_ratings_total: u32,
    /// Photos in provider order
    pub photos: Vec<Photo>,
    /// Reviews in provider order
    pub reviews: Vec<Review>,
    /// Opening hours, if the provider has them
    pub opening_hours: Option<OpeningHours>,
    /// Location and optional viewport
    pub geometry: Geometry,
    /// Provider page for the place
    pub url: String,
    /// Operational status
    pub business_status: BusinessStatus,
    pub dine_in: Option<bool>,
    pub takeout: Option<bool>,
    /// Category tags (e.g. "restaurant", "food")
    pub types: Vec<String>,
}

/// A photo reference attached to a place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub width: u32,
    pub height: u32,
    /// Opaque reference passed to the photo endpoint
    pub photo_reference: String,
    /// HTML attribution snippets that must be shown with the photo
    pub html_attributions: Vec<String>,
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author_name: String,
    pub author_url: String,
    /// Star rating (1 - 5)
    pub rating: u8,
    pub relative_time_description: String,
    pub text: String,
    pub profile_photo_url: String,
    /// UNIX timestamp in seconds
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Opening hours as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Whether the place is open at fetch time
    pub open_now: bool,
    /// One human-readable line per weekday, Monday first
    pub weekday_text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<Period>>,
}

/// An open/close pair within a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<PeriodPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<PeriodPoint>,
}

/// A point in the week: day 0 is Sunday, time is "HHMM"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPoint {
    pub day: u8,
    pub time: String,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Bounding box recommended for displaying the place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Location of the place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

/// Operational status of the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
}

impl BusinessStatus {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            BusinessStatus::Operational => "Open for business",
            BusinessStatus::ClosedTemporarily => "Temporarily closed",
            BusinessStatus::ClosedPermanently => "Permanently closed",
        }
    }
}
