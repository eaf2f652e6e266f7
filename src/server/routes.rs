use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::{error::AppError, state::AppState};
use crate::cache::CacheState;
use crate::contact::{submit_contact, ContactForm, ContactSubmission, SubmitOutcome};
use crate::data::{build_photo_url_with_base, PlaceRecord, DEFAULT_PHOTO_WIDTH};
use crate::site::{render_contact_outcome, render_degraded, render_home, PageContext};

pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    match state.cache.read().await {
        Ok(place) => {
            let now = Utc::now();
            let ctx = PageContext {
                api_base_url: &state.config.api_base_url,
                api_key: Some(&state.config.api_key),
                today: state.config.weekday_at(now),
                now_secs: now.timestamp(),
            };
            Html(render_home(&place, &ctx))
        }
        Err(e) => {
            error!(error = ?e, "Error loading restaurant");
            Html(render_degraded(&state.config.site_name, &e.to_string()))
        }
    }
}

pub async fn place_handler(State(state): State<AppState>) -> Result<Json<PlaceRecord>, AppError> {
    Ok(Json(state.cache.read().await?))
}

#[derive(Deserialize)]
pub struct PhotoQuery {
    reference: String,
    width: Option<u32>,
}

#[derive(Serialize)]
pub struct PhotoUrl {
    url: String,
}

pub async fn photo_url_handler(
    State(state): State<AppState>,
    Query(query): Query<PhotoQuery>,
) -> Json<PhotoUrl> {
    let url = build_photo_url_with_base(
        &state.config.api_base_url,
        &query.reference,
        query.width.unwrap_or(DEFAULT_PHOTO_WIDTH),
        Some(&state.config.api_key),
    );

    Json(PhotoUrl { url })
}

pub async fn contact_form_handler(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> impl IntoResponse {
    let outcome = match form {
        Ok(Form(form)) => submit_contact(state.contacts.as_ref(), form),
        Err(rejection) => unreadable_submission(rejection.body_text()),
    };
    let status = outcome_status(&outcome);

    (
        status,
        Html(render_contact_outcome(&state.config.site_name, &outcome)),
    )
}

pub async fn contact_api_handler(
    State(state): State<AppState>,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> impl IntoResponse {
    let outcome = match form {
        Ok(Json(form)) => submit_contact(state.contacts.as_ref(), form),
        Err(rejection) => unreadable_submission(rejection.body_text()),
    };

    (outcome_status(&outcome), Json(outcome))
}

/// A body that could not be decoded still answers with a `SubmitOutcome`
fn unreadable_submission(reason: String) -> SubmitOutcome {
    warn!(%reason, "unreadable contact submission");
    SubmitOutcome::failure(reason)
}

fn outcome_status(outcome: &SubmitOutcome) -> StatusCode {
    if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

pub async fn list_contacts_handler(State(state): State<AppState>) -> Json<Vec<ContactSubmission>> {
    Json(state.contacts.list())
}

pub async fn clear_contacts_handler(State(state): State<AppState>) -> StatusCode {
    state.contacts.clear();
    StatusCode::NO_CONTENT
}

pub async fn clear_cache_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    cache: CacheState,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        cache: state.cache.state(),
    })
}
