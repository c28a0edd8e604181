use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use super::aggregate::ScoreEntityData;
use super::domain::{Locale, Tier};
use super::measurements::MeasurementSet;
use super::service::ScoringService;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub(crate) locale: Option<Locale>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FeedbackQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub(crate) locale: Option<Locale>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub(crate) limit: Option<usize>,
}

/// `?locale=` with no value falls back to the service default.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Response> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| bad_request(rejection.body_text()))
}

/// Router builder exposing scoring, feedback and catalog endpoints.
pub fn scoring_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/api/v1/swing/scores", post(score_handler))
        .route("/api/v1/swing/scores/entity", post(entity_handler))
        .route("/api/v1/swing/feedback", post(feedback_handler))
        .route(
            "/api/v1/swing/feedback/entity",
            post(entity_feedback_handler),
        )
        .route("/api/v1/swing/comments/:phase", get(phase_comments_handler))
        .route(
            "/api/v1/swing/comments/:phase/:item/:tier",
            get(comment_handler),
        )
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<ScoringService>>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
    Json(measurements): Json<MeasurementSet>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let result = service.score(&measurements, query.locale);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn entity_handler(
    State(service): State<Arc<ScoringService>>,
    Json(measurements): Json<MeasurementSet>,
) -> Response {
    let record = service.entity(&measurements);
    (StatusCode::OK, Json(record)).into_response()
}

pub(crate) async fn feedback_handler(
    State(service): State<Arc<ScoringService>>,
    query: Result<Query<FeedbackQuery>, QueryRejection>,
    Json(measurements): Json<MeasurementSet>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let feedback = service.feedback(&measurements, query.locale, query.limit);
    (StatusCode::OK, Json(feedback)).into_response()
}

pub(crate) async fn entity_feedback_handler(
    State(service): State<Arc<ScoringService>>,
    query: Result<Query<FeedbackQuery>, QueryRejection>,
    Json(record): Json<ScoreEntityData>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let feedback = service.feedback_from_entity(&record, query.locale, query.limit);
    (StatusCode::OK, Json(feedback)).into_response()
}

pub(crate) async fn phase_comments_handler(
    State(service): State<Arc<ScoringService>>,
    Path(phase): Path<String>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let comments = service.phase_comments(&phase, query.locale);
    (StatusCode::OK, Json(comments)).into_response()
}

pub(crate) async fn comment_handler(
    State(service): State<Arc<ScoringService>>,
    Path((phase, item, tier)): Path<(String, String, u8)>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> Response {
    let query = match query_params(query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let tier = match Tier::try_from(tier) {
        Ok(tier) => tier,
        Err(error) => return bad_request(error.to_string()),
    };

    let comment = service.comment(&phase, &item, tier, query.locale);
    let payload = json!({
        "phase": phase,
        "item": item,
        "tier": tier,
        "comment": comment,
    });
    (StatusCode::OK, Json(payload)).into_response()
}
