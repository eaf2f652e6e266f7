//! HTTP server for the restaurant site
//!
//! Routes:
//! - `GET /` server-rendered home page (degraded page when no data is available)
//! - `GET /api/place` cached place record as JSON
//! - `GET /api/photo-url` photo URL for a reference and width
//! - `POST /contact` contact form (browser form post)
//! - `POST|GET|DELETE /api/contact` contact submissions (development only)
//! - `POST /api/cache/clear` drop the cached place record
//! - `GET /health` liveness and cache state

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod error;
pub mod routes;
pub mod state;

use routes::{
    clear_cache_handler, clear_contacts_handler, contact_api_handler, contact_form_handler,
    health_handler, home_handler, list_contacts_handler, photo_url_handler, place_handler,
};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/place", get(place_handler))
        .route("/api/photo-url", get(photo_url_handler))
        .route("/contact", post(contact_form_handler))
        .route(
            "/api/contact",
            post(contact_api_handler)
                .get(list_contacts_handler)
                .delete(clear_contacts_handler),
        )
        .route("/api/cache/clear", post(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PlaceCache;
    use crate::config::Config;
    use crate::contact::InMemoryContactStore;
    use crate::data::fixtures::sample_record;
    use crate::data::{PlaceRecord, PlaceSource, PlacesError};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    /// Always answers with the same result
    struct FixedSource {
        result: Result<PlaceRecord, PlacesError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaceSource for FixedSource {
        fn place_id(&self) -> &str {
            "place-1"
        }

        async fn fetch_place(&self) -> Result<PlaceRecord, PlacesError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn test_config() -> Config {
        Config {
            place_id: "place-1".to_string(),
            api_key: "K".to_string(),
            cache_ttl: Duration::from_secs(3600),
            port: 0,
            bind_addr: "127.0.0.1".to_string(),
            api_base_url: "https://maps.googleapis.com/maps/api".to_string(),
            site_name: "Shivansh Food Park".to_string(),
            utc_offset: None,
        }
    }

    fn test_state(result: Result<PlaceRecord, PlacesError>) -> (AppState, Arc<FixedSource>) {
        let source = Arc::new(FixedSource {
            result,
            calls: AtomicUsize::new(0),
        });
        let cache = PlaceCache::new(source.clone(), Duration::from_secs(3600));
        let state = AppState::with_parts(test_config(), cache, Arc::new(InMemoryContactStore::new()));
        (state, source)
    }

    fn ok_state() -> (AppState, Arc<FixedSource>) {
        test_state(Ok(sample_record("Shivansh Food Park", 3.5)))
    }

    fn failing_state() -> (AppState, Arc<FixedSource>) {
        test_state(Err(PlacesError::Transport("Unauthorized".to_string())))
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, String) {
        let response = router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_place() {
        let (state, _) = ok_state();

        let (status, body) = send(state, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Shivansh Food Park</h1>"));
        assert!(body.contains(r#"<section id="reviews">"#));
    }

    #[tokio::test]
    async fn test_home_renders_degraded_page_on_first_failure() {
        let (state, _) = failing_state();

        let (status, body) = send(state, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<main class="degraded">"#));
        assert!(body.contains("Failed to fetch restaurant details"));
    }

    #[tokio::test]
    async fn test_place_api_returns_json_and_caches() {
        let (state, source) = ok_state();

        let (status, body) = send(state.clone(), get_request("/api/place")).await;
        assert_eq!(status, StatusCode::OK);
        let place: PlaceRecord = serde_json::from_str(&body).unwrap();
        assert_eq!(place.name, "Shivansh Food Park");

        send(state, get_request("/api/place")).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_place_api_failure_is_bad_gateway() {
        let (state, _) = failing_state();

        let (status, body) = send(state, get_request("/api/place")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Please try again later"));
    }

    #[tokio::test]
    async fn test_photo_url_endpoint() {
        let (state, _) = ok_state();

        let (status, body) = send(state, get_request("/api/photo-url?reference=ref123&width=1200")).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let url = json["url"].as_str().unwrap();
        assert!(url.contains("ref123"));
        assert!(url.contains("maxwidth=1200"));
        assert!(url.contains("key=K"));
    }

    #[tokio::test]
    async fn test_photo_url_defaults_width() {
        let (state, _) = ok_state();

        let (_, body) = send(state, get_request("/api/photo-url?reference=ref123")).await;

        assert!(body.contains("maxwidth=800"));
    }

    #[tokio::test]
    async fn test_photo_url_reference_cannot_add_parameters() {
        let (state, _) = ok_state();

        let (status, body) = send(
            state,
            get_request("/api/photo-url?reference=abc%26maxwidth%3D9999%26key%3DEVIL"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let url = json["url"].as_str().unwrap();
        assert!(url.contains("maxwidth=800&"));
        assert!(!url.contains("maxwidth=9999"));
        assert!(!url.contains("key=EVIL"));
        assert_eq!(url.matches("key=").count(), 1);
        assert!(url.ends_with("&key=K"));
    }

    #[tokio::test]
    async fn test_contact_api_wrong_typed_field_keeps_outcome_shape() {
        let (state, _) = ok_state();
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name": 12, "email": "asha@example.com", "message": "Table for six on Friday?"}"#,
            ))
            .unwrap();

        let (status, body) = send(state.clone(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("name"));
        assert!(state.contacts.list().is_empty());
    }

    #[tokio::test]
    async fn test_contact_api_malformed_body_keeps_outcome_shape() {
        let (state, _) = ok_state();
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let (status, body) = send(state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(!json["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_form_without_form_content_type_renders_error_page() {
        let (state, _) = ok_state();
        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();

        let (status, body) = send(state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<h1>Error</h1>"));
    }

    #[tokio::test]
    async fn test_contact_form_post() {
        let (state, _) = ok_state();
        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "name=Asha&email=asha%40example.com&message=Do+you+take+group+bookings%3F",
            ))
            .unwrap();

        let (status, body) = send(state.clone(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Message Sent"));
        assert_eq!(state.contacts.list().len(), 1);
        assert_eq!(state.contacts.list()[0].email, "asha@example.com");
    }

    #[tokio::test]
    async fn test_contact_api_rejects_invalid_submission() {
        let (state, _) = ok_state();
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name": "Asha", "email": "asha@example.com", "message": "Hi"}"#,
            ))
            .unwrap();

        let (status, body) = send(state.clone(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Message must be at least 10 characters");
        assert!(state.contacts.list().is_empty());
    }

    #[tokio::test]
    async fn test_contact_list_and_clear() {
        let (state, _) = ok_state();
        let submit = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"name": "Asha", "email": "asha@example.com", "message": "Table for six on Friday?"}"#,
            ))
            .unwrap();
        let (status, _) = send(state.clone(), submit).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(state.clone(), get_request("/api/contact")).await;
        let listed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let clear = Request::builder()
            .method("DELETE")
            .uri("/api/contact")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(state.clone(), clear).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.contacts.list().is_empty());
    }

    #[tokio::test]
    async fn test_clear_cache_endpoint_forces_refetch() {
        let (state, source) = ok_state();
        send(state.clone(), get_request("/api/place")).await;

        let clear = Request::builder()
            .method("POST")
            .uri("/api/cache/clear")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(state.clone(), clear).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        send(state, get_request("/api/place")).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_health_reports_cache_state() {
        let (state, _) = ok_state();

        let (_, body) = send(state.clone(), get_request("/health")).await;
        assert_eq!(body, r#"{"status":"ok","cache":"empty"}"#);

        send(state.clone(), get_request("/api/place")).await;
        let (_, body) = send(state, get_request("/health")).await;
        assert_eq!(body, r#"{"status":"ok","cache":"fresh"}"#);
    }
}
