pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::career::handlers as career;
use crate::export::handlers as export;
use crate::relay::handlers as relay;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route("/api/v1/profile", get(career::handle_get_profile))
        .route("/api/v1/profile/view", get(career::handle_get_view))
        .route("/api/v1/profile/summary", get(career::handle_get_summary))
        .route("/api/v1/profile/timeline", get(career::handle_get_timeline))
        .route(
            "/api/v1/profile/personal-info",
            patch(career::handle_update_personal_info),
        )
        .route(
            "/api/v1/profile/experiences/:index",
            patch(career::handle_update_experience),
        )
        .route(
            "/api/v1/profile/education/:index",
            patch(career::handle_update_education),
        )
        // Exports
        .route("/api/v1/export/cv.csv", get(export::handle_export_cv_csv))
        .route(
            "/api/v1/export/timeline.csv",
            get(export::handle_export_timeline_csv),
        )
        .route("/api/v1/export/cv.pdf", get(export::handle_export_cv_pdf))
        .route(
            "/api/v1/export/timeline.pdf",
            get(export::handle_export_timeline_pdf),
        )
        .route(
            "/api/v1/export/cover-letter.pdf",
            get(export::handle_export_cover_letter_pdf),
        )
        // Contact
        .route("/api/v1/contact", post(relay::handle_contact))
        .with_state(state)
}
