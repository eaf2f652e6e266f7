//! Display helpers for restaurant data
//!
//! Small pure functions used by the page renderer to turn place data into
//! labels and links.

use chrono::Weekday;

use crate::data::Review;

/// Shown when there is no line for today
const UNKNOWN_HOURS: &str = "Check hours";
const ALWAYS_OPEN: &str = "Open 24 hours";

/// Returns the opening-hours line for `weekday`
///
/// `weekday_text` is in provider order, Monday first.
pub fn format_opening_hours(weekday_text: &[String], weekday: Weekday) -> String {
    if weekday_text.iter().any(|line| line == ALWAYS_OPEN) {
        return ALWAYS_OPEN.to_string();
    }

    weekday_text
        .get(weekday.num_days_from_monday() as usize)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_HOURS.to_string())
}

pub fn format_phone_number(phone: &str) -> String {
    phone.trim().to_string()
}

pub fn format_address(address: &str) -> String {
    address.trim().to_string()
}

/// Fill level of each of the five rating stars: 1.0 full, 0.5 half, 0.0 empty
pub fn star_rating(rating: f64) -> [f32; 5] {
    let mut stars = [0.0; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        let position = i as f64;
        *star = if position < rating.floor() {
            1.0
        } else if position < rating {
            0.5
        } else {
            0.0
        };
    }
    stars
}

/// Formats a UNIX timestamp relative to `now_secs` ("3 days ago")
pub fn relative_time(timestamp_secs: i64, now_secs: i64) -> String {
    let seconds = (now_secs - timestamp_secs) as f64;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let months = days / 30.0;
    let years = months / 12.0;

    if years > 1.0 {
        format!("{} years ago", years.floor())
    } else if months > 1.0 {
        format!("{} months ago", months.floor())
    } else if days > 1.0 {
        format!("{} days ago", days.floor())
    } else if hours > 1.0 {
        format!("{} hours ago", hours.floor())
    } else if minutes > 1.0 {
        format!("{} minutes ago", minutes.floor())
    } else {
        "just now".to_string()
    }
}

/// Google Maps directions link to the given coordinates
pub fn directions_url(lat: f64, lng: f64) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        lat, lng
    )
}

pub fn whatsapp_url(phone: &str) -> String {
    format!("https://wa.me/{}", digits(phone))
}

pub fn phone_url(phone: &str) -> String {
    format!("tel:+{}", digits(phone))
}

fn digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of reviews per star rating, highest first: `[(5, n), (4, n), .., (1, n)]`
pub fn rating_distribution(reviews: &[Review]) -> [(u8, usize); 5] {
    let mut distribution = [(5, 0), (4, 0), (3, 0), (2, 0), (1, 0)];
    for (stars, count) in distribution.iter_mut() {
        *count = reviews.iter().filter(|r| r.rating == *stars).count();
    }
    distribution
}
