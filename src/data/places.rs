//! Google Places "place details" client
//!
//! Fetches the restaurant's details from the Places API, validates the
//! response against the expected schema and converts it into a `PlaceRecord`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use super::{BusinessStatus, Geometry, OpeningHours, Photo, PlaceRecord, Review};

/// Base URL for the Places API
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from the place details endpoint
pub const DETAILS_FIELDS: &[&str] = &[
    "name",
    "formatted_address",
    "formatted_phone_number",
    "international_phone_number",
    "rating",
    "user_ratings_total",
    "photos",
    "reviews",
    "opening_hours",
    "geometry",
    "url",
    "business_status",
    "dine_in",
    "takeout",
    "types",
];

/// Errors that can occur when fetching place details
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacesError {
    /// Network failure or non-2xx HTTP response
    #[error("Google Places API error: {0}")]
    Transport(String),

    /// The provider answered but its embedded status was not "OK"
    #[error("Google Places API returned status: {0}")]
    ProviderRejected(String),

    /// The response body did not match the expected schema
    #[error("Invalid Google Places response: {0}")]
    Validation(String),
}

/// Something that can produce a fresh `PlaceRecord`
///
/// The cache controller only talks to this trait, so tests and alternative
/// providers can stand in for the HTTP client.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Identifier of the place this source fetches
    fn place_id(&self) -> &str;

    /// Performs a single fetch attempt
    async fn fetch_place(&self) -> Result<PlaceRecord, PlacesError>;
}

/// Client for the Places details endpoint
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http_client: Client,
    place_id: String,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    /// Creates a client for the given place using the public API endpoint
    pub fn new(place_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            place_id: place_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (local stubs, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the details request URL with the fixed field list
    pub fn details_url(&self) -> Result<Url, PlacesError> {
        let endpoint = format!(
            "{}/place/details/json",
            self.base_url.trim_end_matches('/')
        );
        let fields = DETAILS_FIELDS.join(",");

        Url::parse_with_params(
            &endpoint,
            &[
                ("place_id", self.place_id.as_str()),
                ("key", self.api_key.as_str()),
                ("fields", fields.as_str()),
            ],
        )
        .map_err(|e| PlacesError::Transport(format!("invalid endpoint {}: {}", endpoint, e)))
    }
}

#[async_trait]
impl PlaceSource for PlacesClient {
    fn place_id(&self) -> &str {
        &self.place_id
    }

    async fn fetch_place(&self) -> Result<PlaceRecord, PlacesError> {
        let url = self.details_url()?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PlacesError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(PlacesError::Transport(status_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Transport(e.to_string()))?;

        parse_details_response(&self.place_id, &body)
    }
}

/// Parses and validates a place details response body
///
/// The embedded status is checked before the result, so a rejection with
/// an empty `result` object reports `ProviderRejected`.
pub fn parse_details_response(place_id: &str, body: &str) -> Result<PlaceRecord, PlacesError> {
    let envelope: DetailsEnvelope = serde_json::from_str(body)
        .map_err(|e| PlacesError::Validation(format!("malformed response body: {}", e)))?;

    if envelope.status != "OK" {
        return Err(PlacesError::ProviderRejected(envelope.status));
    }

    let result = envelope
        .result
        .ok_or_else(|| PlacesError::Validation("missing field `result`".to_string()))?;

    let details: PlaceDetails =
        serde_json::from_value(result).map_err(|e| PlacesError::Validation(e.to_string()))?;
    details.validate()?;

    Ok(details.into_record(place_id))
}

/// Top-level details response
#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    status: String,
    result: Option<serde_json::Value>,
    #[allow(dead_code)]
    #[serde(default)]
    html_attributions: Option<Vec<String>>,
}

/// The `result` object of a details response
#[derive(Debug, Deserialize)]
struct PlaceDetails {
    name: String,
    formatted_address: String,
    formatted_phone_number: String,
    international_phone_number: String,
    rating: f64,
    user_ratings_total: u32,
    photos: Vec<Photo>,
    reviews: Vec<Review>,
    opening_hours: Option<OpeningHours>,
    geometry: Geometry,
    url: String,
    business_status: BusinessStatus,
    dine_in: Option<bool>,
    takeout: Option<bool>,
    types: Vec<String>,
}

impl PlaceDetails {
    /// Range and format checks serde cannot express
    fn validate(&self) -> Result<(), PlacesError> {
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(PlacesError::Validation(format!(
                "rating must be between 0 and 5, got {}",
                self.rating
            )));
        }

        check_url("url", &self.url)?;

        for (i, review) in self.reviews.iter().enumerate() {
            if !(1..=5).contains(&review.rating) {
                return Err(PlacesError::Validation(format!(
                    "reviews[{}].rating must be between 1 and 5, got {}",
                    i, review.rating
                )));
            }
            check_url(&format!("reviews[{}].author_url", i), &review.author_url)?;
            check_url(
                &format!("reviews[{}].profile_photo_url", i),
                &review.profile_photo_url,
            )?;
        }

        Ok(())
    }

    fn into_record(self, place_id: &str) -> PlaceRecord {
        PlaceRecord {
            place_id: place_id.to_string(),
            name: self.name,
            formatted_address: self.formatted_address,
            formatted_phone_number: self.formatted_phone_number,
            international_phone_number: self.international_phone_number,
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            photos: self.photos,
            reviews: self.reviews,
            opening_hours: self.opening_hours,
            geometry: self.geometry,
            url: self.url,
            business_status: self.business_status,
            dine_in: self.dine_in,
            takeout: self.takeout,
            types: self.types,
        }
    }
}

/// Accepts absolute http(s) URLs only; these end up in page links
fn check_url(field: &str, value: &str) -> Result<(), PlacesError> {
    let url = Url::parse(value)
        .map_err(|e| PlacesError::Validation(format!("{} is not a valid URL: {}", field, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(PlacesError::Validation(format!(
            "{} must be an http(s) URL, got scheme {}",
            field, scheme
        ))),
    }
}
