//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::recommendation::engine::{recommend, RecommendRequest, RecommendationResult};
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Next courses, interest-ranked electives, and advisory text for one student.
/// A failing advisory generator degrades the text; it never fails the request.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendationResult>, AppError> {
    let result = recommend(
        &state.catalog,
        state.generator.as_ref(),
        state.config.advisory_timeout,
        &request,
    )
    .await?;

    Ok(Json(result))
}
