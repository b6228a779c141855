use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::career::timeline::{experiences_in_year, TimelineMatch};
use crate::career::view::{build_profile_view, ProfileView};
use crate::errors::AppError;
use crate::models::{CareerData, EducationPatch, ExperiencePatch, PersonalInfoPatch};
use crate::state::AppState;
use crate::summary::{score_categories, CategoryScore};

#[derive(Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub expanded: bool,
}

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<CareerData> {
    Json(state.provider.snapshot())
}

/// GET /api/v1/profile/view
pub async fn handle_get_view(
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> Json<ProfileView> {
    Json(build_profile_view(state.provider.snapshot(), params.expanded))
}

/// GET /api/v1/profile/summary
pub async fn handle_get_summary(State(state): State<AppState>) -> Json<Vec<CategoryScore>> {
    let data = state.provider.snapshot();
    Json(score_categories(
        &data.experiences,
        &data.skills,
        &data.certifications,
    ))
}

/// GET /api/v1/profile/timeline
pub async fn handle_get_timeline(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> Result<Json<Vec<TimelineMatch>>, AppError> {
    if !(1900..=9999).contains(&params.year) {
        return Err(AppError::Validation(format!(
            "year {} is out of range",
            params.year
        )));
    }
    let data = state.provider.snapshot();
    Ok(Json(experiences_in_year(&data.experiences, params.year)))
}

/// PATCH /api/v1/profile/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> StatusCode {
    state.provider.update_personal_info(patch);
    StatusCode::NO_CONTENT
}

/// PATCH /api/v1/profile/experiences/:index
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<StatusCode, AppError> {
    state.provider.update_experience(index, patch)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/profile/education/:index
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<EducationPatch>,
) -> Result<StatusCode, AppError> {
    state.provider.update_education(index, patch)?;
    Ok(StatusCode::NO_CONTENT)
}
