use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::error;

use services::QuestionsPayload;
use trivia_core::model::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for `/fetch-questions`.
#[derive(Debug, Deserialize)]
pub struct FetchQuestionsQuery {
    user: String,
}

/// Build the application router: the question endpoint, the fixed pages,
/// and static assets out of the configured public directory.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    let public = state.config.public_dir.clone();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/fetch-questions", get(fetch_questions))
        .route_service("/", ServeFile::new(public.join("index.html")))
        .route_service("/user1", ServeFile::new(public.join("user1.html")))
        .route_service("/user2", ServeFile::new(public.join("user2.html")))
        .route_service("/scorecard", ServeFile::new(public.join("scorecard.html")))
        .fallback_service(ServeDir::new(public))
        .layer(cors)
        .with_state(state)
}

/// Fetch one user's question batch from the upstream provider and relay it.
async fn fetch_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FetchQuestionsQuery>,
) -> Result<Json<QuestionsPayload>, ApiError> {
    let user: UserId = query.user.parse()?;

    let batch = state.source.fetch_batch(user).await.map_err(|err| {
        error!("fetching questions for {user} failed: {err}");
        err
    })?;

    Ok(Json(QuestionsPayload {
        results: batch.into_questions(),
    }))
}
