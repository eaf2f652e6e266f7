//! Server-side HTML rendering for the restaurant site
//!
//! Builds the home page from a `PlaceRecord` and the degraded page shown
//! when no place data could be loaded.

pub mod home;
pub mod notice;

pub use home::render as render_home;
pub use notice::{render_contact_outcome, render_degraded};

use chrono::Weekday;

use crate::data::{build_photo_url_with_base, page_photo_width, Photo};
use crate::format::star_rating;

/// Request-independent inputs the renderer needs besides the place itself
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Places API base used for photo URLs
    pub api_base_url: &'a str,
    /// Credential appended to photo URLs; photos are omitted without it
    pub api_key: Option<&'a str>,
    /// Day used to pick today's opening hours
    pub today: Weekday,
    /// Current UNIX time in seconds, for review ages
    pub now_secs: i64,
}

impl PageContext<'_> {
    /// URL for the photo shown at `index` on the page
    pub fn photo_url(&self, photo: &Photo, index: usize) -> String {
        build_photo_url_with_base(
            self.api_base_url,
            &photo.photo_reference,
            page_photo_width(index),
            self.api_key,
        )
    }
}

/// Wraps a page body in the document shell
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

/// Escapes text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Drops markup from provider HTML snippets, keeping the text
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// Five star glyphs for a rating
fn stars(rating: f64) -> String {
    let glyphs: String = star_rating(rating)
        .iter()
        .map(|fill| {
            if *fill >= 1.0 {
                r#"<span class="star full">★</span>"#
            } else if *fill > 0.0 {
                r#"<span class="star half">★</span>"#
            } else {
                r#"<span class="star empty">☆</span>"#
            }
        })
        .collect();
    format!(
        r#"<span class="stars" aria-label="{:.1} out of 5">{}</span>"#,
        rating, glyphs
    )
}
