pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::recommendation::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation_handlers::handle_recommend),
        )
        // Catalog API (read-only)
        .route(
            "/api/v1/curricula",
            get(catalog_handlers::handle_list_curricula),
        )
        .route(
            "/api/v1/curricula/:id",
            get(catalog_handlers::handle_get_curriculum),
        )
        .route("/api/v1/courses", get(catalog_handlers::handle_list_courses))
        .with_state(state)
}
