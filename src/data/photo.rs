//! Photo URL building for the Places photo endpoint

use reqwest::Url;
use tracing::warn;

use super::places::DEFAULT_PLACES_BASE_URL;

/// Width used when the caller does not ask for a specific one
pub const DEFAULT_PHOTO_WIDTH: u32 = 800;

/// Maximum number of photos the page resolves URLs for
pub const MAX_PAGE_PHOTOS: usize = 9;

/// Builds a fully-qualified photo URL
///
/// Returns an empty string when no API key is configured, so templates can
/// fall back to a placeholder instead of emitting a broken request.
pub fn build_photo_url(photo_reference: &str, max_width: u32, api_key: Option<&str>) -> String {
    build_photo_url_with_base(DEFAULT_PLACES_BASE_URL, photo_reference, max_width, api_key)
}

/// Same as [`build_photo_url`] against a custom API base
pub fn build_photo_url_with_base(
    base_url: &str,
    photo_reference: &str,
    max_width: u32,
    api_key: Option<&str>,
) -> String {
    let key = match api_key {
        Some(key) if !key.is_empty() => key,
        _ => return String::new(),
    };

    let endpoint = format!("{}/place/photo", base_url.trim_end_matches('/'));
    let width = max_width.to_string();

    match Url::parse_with_params(
        &endpoint,
        &[
            ("maxwidth", width.as_str()),
            ("photo_reference", photo_reference),
            ("key", key),
        ],
    ) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(%endpoint, error = %e, "cannot build photo URL");
            String::new()
        }
    }
}

/// Width to request for the photo at `index` on the home page
///
/// The hero image is the largest paint on the page, the about image is
/// medium, and gallery thumbnails stay small.
pub fn page_photo_width(index: usize) -> u32 {
    match index {
        0 => 1200,
        1 => DEFAULT_PHOTO_WIDTH,
        _ => 500,
    }
}
