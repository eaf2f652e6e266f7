//! Home page: hero, about, gallery, reviews and contact sections

use super::{escape, layout, stars, strip_tags, PageContext};
use crate::data::{BusinessStatus, PlaceRecord, MAX_PAGE_PHOTOS};
use crate::format::{
    directions_url, format_address, format_opening_hours, format_phone_number, phone_url,
    rating_distribution, relative_time, whatsapp_url,
};

/// Photos shown in the gallery grid
const GALLERY_PHOTOS: usize = 6;

/// Reviews shown before the "read all" link
const SHOWN_REVIEWS: usize = 3;

/// Renders the full home page for a place
pub fn render(place: &PlaceRecord, ctx: &PageContext<'_>) -> String {
    let photo_urls: Vec<String> = place
        .photos
        .iter()
        .take(MAX_PAGE_PHOTOS)
        .enumerate()
        .map(|(i, photo)| ctx.photo_url(photo, i))
        .collect();

    let body = [
        hero(place, &photo_urls),
        about(place, ctx, &photo_urls),
        gallery(place, &photo_urls),
        reviews(place, ctx),
        contact(place),
    ]
    .join("\n");

    layout(&place.name, &body)
}

fn hero(place: &PlaceRecord, photo_urls: &[String]) -> String {
    let image = match photo_urls.first() {
        Some(url) if !url.is_empty() => format!(
            r#"<img class="hero-image" src="{}" alt="{}">"#,
            escape(url),
            escape(&place.name)
        ),
        _ => String::new(),
    };

    let open_badge = match &place.opening_hours {
        Some(hours) if hours.open_now => r#"<span class="badge open">Open now</span>"#,
        Some(_) => r#"<span class="badge closed">Closed now</span>"#,
        None => "",
    };

    let status = if place.business_status == BusinessStatus::Operational {
        String::new()
    } else {
        format!(
            r#"<p class="business-status">{}</p>"#,
            place.business_status.label()
        )
    };

    format!(
        r#"<section id="hero">
{image}
<h1>{name}</h1>
<p class="rating">{stars} {rating:.1} ({total} reviews)</p>
<p class="address">{address}</p>
{open_badge}
{status}
</section>"#,
        image = image,
        name = escape(&place.name),
        stars = stars(place.rating),
        rating = place.rating,
        total = place.user_ratings_total,
        address = escape(&format_address(&place.formatted_address)),
        open_badge = open_badge,
        status = status,
    )
}

fn about(place: &PlaceRecord, ctx: &PageContext<'_>, photo_urls: &[String]) -> String {
    // Prefer the second photo so the hero image is not repeated
    let image = photo_urls
        .get(1)
        .or_else(|| photo_urls.first())
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                r#"<img class="about-image" src="{}" alt="Inside {}">"#,
                escape(url),
                escape(&place.name)
            )
        })
        .unwrap_or_default();

    let hours = match &place.opening_hours {
        Some(hours) => {
            let week: String = hours
                .weekday_text
                .iter()
                .map(|line| format!("<li>{}</li>", escape(line)))
                .collect();
            format!(
                r#"<p class="today">{}</p>
<ul class="weekday-hours">{}</ul>"#,
                escape(&format_opening_hours(&hours.weekday_text, ctx.today)),
                week
            )
        }
        None => r#"<p class="today">Check hours</p>"#.to_string(),
    };

    let mut services = Vec::new();
    if place.dine_in == Some(true) {
        services.push("Dine-in");
    }
    if place.takeout == Some(true) {
        services.push("Takeout");
    }
    let services = if services.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="services">{}</p>"#, services.join(" · "))
    };

    let tags: String = place
        .types
        .iter()
        .map(|t| format!(r#"<li class="tag">{}</li>"#, escape(&t.replace('_', " "))))
        .collect();

    format!(
        r#"<section id="about">
<h2>About {name}</h2>
{image}
<p>Located at {address}.</p>
{hours}
{services}
<ul class="tags">{tags}</ul>
</section>"#,
        name = escape(&place.name),
        image = image,
        address = escape(&format_address(&place.formatted_address)),
        hours = hours,
        services = services,
        tags = tags,
    )
}

fn gallery(place: &PlaceRecord, photo_urls: &[String]) -> String {
    let items: String = place
        .photos
        .iter()
        .zip(photo_urls)
        .take(GALLERY_PHOTOS)
        .filter(|(_, url)| !url.is_empty())
        .enumerate()
        .map(|(i, (photo, url))| {
            let credit: Vec<String> = photo
                .html_attributions
                .iter()
                .map(|a| escape(&strip_tags(a)))
                .collect();
            format!(
                r#"<figure><img src="{}" alt="{} photo {}" width="{}" height="{}"><figcaption>{}</figcaption></figure>"#,
                escape(url),
                escape(&place.name),
                i + 1,
                photo.width,
                photo.height,
                credit.join(", ")
            )
        })
        .collect();

    if items.is_empty() {
        return r#"<section id="gallery"><h2>Gallery</h2><p>No photos yet.</p></section>"#
            .to_string();
    }

    format!(
        r#"<section id="gallery">
<h2>Gallery</h2>
<div class="grid">{}</div>
</section>"#,
        items
    )
}

fn reviews(place: &PlaceRecord, ctx: &PageContext<'_>) -> String {
    let distribution: String = rating_distribution(&place.reviews)
        .iter()
        .map(|(stars, count)| format!("<li>{} ★: {}</li>", stars, count))
        .collect();

    let cards: String = place
        .reviews
        .iter()
        .take(SHOWN_REVIEWS)
        .map(|review| {
            format!(
                r#"<article class="review">
<img class="avatar" src="{photo}" alt="{author}">
<a href="{author_url}">{author}</a>
{stars}
<time>{age}</time>
<p>{text}</p>
</article>"#,
                photo = escape(&review.profile_photo_url),
                author = escape(&review.author_name),
                author_url = escape(&review.author_url),
                stars = stars(f64::from(review.rating)),
                age = relative_time(review.time, ctx.now_secs),
                text = escape(&review.text),
            )
        })
        .collect();

    format!(
        r#"<section id="reviews">
<h2>Customer Reviews</h2>
<div class="summary">
{stars}
<p class="average">{rating:.1}</p>
<p>{total} reviews</p>
<ul class="distribution">{distribution}</ul>
</div>
{cards}
<a class="all-reviews" href="{url}">Read all reviews on Google</a>
</section>"#,
        stars = stars(place.rating),
        rating = place.rating,
        total = place.user_ratings_total,
        distribution = distribution,
        cards = cards,
        url = escape(&place.url),
    )
}

fn contact(place: &PlaceRecord) -> String {
    let phone = format_phone_number(&place.international_phone_number);
    let location = place.geometry.location;

    format!(
        r#"<section id="contact">
<h2>Contact Us</h2>
<p class="phone"><a href="{tel}">{local}</a></p>
<p><a href="{whatsapp}">Message us on WhatsApp</a></p>
<p><a href="{directions}">Get directions</a></p>
<form method="post" action="/contact">
<label>Name <input name="name" required minlength="2"></label>
<label>Email <input name="email" type="email" required></label>
<label>Message <textarea name="message" required minlength="10"></textarea></label>
<button type="submit">Send message</button>
</form>
</section>"#,
        tel = escape(&phone_url(&phone)),
        local = escape(&format_phone_number(&place.formatted_phone_number)),
        whatsapp = escape(&whatsapp_url(&phone)),
        directions = escape(&directions_url(location.lat, location.lng)),
    )
}
