//! Short single-message pages: the degraded home page and form results

use super::{escape, layout};
use crate::contact::SubmitOutcome;

/// Renders the page shown when no place data could be loaded
pub fn render_degraded(restaurant_name: &str, message: &str) -> String {
    let body = format!(
        r#"<main class="degraded">
<h1>{name}</h1>
<p class="error">{message}</p>
<p class="hint">Make sure your Google Maps API key and place id are configured.</p>
</main>"#,
        name = escape(restaurant_name),
        message = escape(message)
    );

    layout(restaurant_name, &body)
}

/// Renders the response to a contact form post
pub fn render_contact_outcome(restaurant_name: &str, outcome: &SubmitOutcome) -> String {
    let (class, heading) = if outcome.success {
        ("success", "Message Sent")
    } else {
        ("error", "Error")
    };

    let body = format!(
        r#"<main class="contact-result {class}">
<h1>{heading}</h1>
<p>{message}</p>
<p><a href="/#contact">Back to {name}</a></p>
</main>"#,
        class = class,
        heading = heading,
        message = escape(&outcome.message),
        name = escape(restaurant_name)
    );

    layout(restaurant_name, &body)
}
