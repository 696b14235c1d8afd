use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::{Course, Curriculum};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumSummary {
    pub id: String,
    pub name: String,
    pub rank: u32,
    pub required_count: usize,
    pub elective_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDetail {
    #[serde(flatten)]
    pub curriculum: Curriculum,
    /// Required courses resolved against the catalog, in catalog order.
    pub required: Vec<Course>,
    /// Elective options resolved against the catalog, in catalog order.
    pub electives: Vec<Course>,
}

/// GET /api/v1/curricula
pub async fn handle_list_curricula(State(state): State<AppState>) -> Json<Vec<CurriculumSummary>> {
    let mut summaries: Vec<CurriculumSummary> = state
        .catalog
        .curricula()
        .iter()
        .map(|c| CurriculumSummary {
            id: c.id.clone(),
            name: c.name.clone(),
            rank: c.rank,
            required_count: c.required_courses.len(),
            elective_count: c.elective_options.len(),
        })
        .collect();
    summaries.sort_by_key(|s| s.rank);
    Json(summaries)
}

/// GET /api/v1/curricula/:id
pub async fn handle_get_curriculum(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CurriculumDetail>, AppError> {
    let curriculum = state
        .catalog
        .curriculum(&id)
        .ok_or_else(|| AppError::NotFound(format!("Curriculum '{id}' not found")))?;

    let courses = state.catalog.courses();
    let required = courses
        .iter()
        .filter(|c| curriculum.requires(&c.id))
        .cloned()
        .collect();
    let electives = courses
        .iter()
        .filter(|c| curriculum.offers_elective(&c.id))
        .cloned()
        .collect();

    Ok(Json(CurriculumDetail {
        curriculum: curriculum.clone(),
        required,
        electives,
    }))
}

/// GET /api/v1/courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses().to_vec())
}
