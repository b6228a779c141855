use axum::extract::State;

use crate::errors::AppError;
use crate::export::{csv, ExportArtifact, PrintDocument};
use crate::state::AppState;

/// GET /api/v1/export/cv.csv
pub async fn handle_export_cv_csv(State(state): State<AppState>) -> ExportArtifact {
    csv::export_cv_data(&state.provider.snapshot())
}

/// GET /api/v1/export/timeline.csv
pub async fn handle_export_timeline_csv(State(state): State<AppState>) -> ExportArtifact {
    csv::export_timeline(&state.provider.snapshot())
}

/// GET /api/v1/export/cv.pdf
pub async fn handle_export_cv_pdf(
    State(state): State<AppState>,
) -> Result<ExportArtifact, AppError> {
    export_pdf(&state, PrintDocument::Cv).await
}

/// GET /api/v1/export/timeline.pdf
pub async fn handle_export_timeline_pdf(
    State(state): State<AppState>,
) -> Result<ExportArtifact, AppError> {
    export_pdf(&state, PrintDocument::Timeline).await
}

/// GET /api/v1/export/cover-letter.pdf
pub async fn handle_export_cover_letter_pdf(
    State(state): State<AppState>,
) -> Result<ExportArtifact, AppError> {
    export_pdf(&state, PrintDocument::CoverLetter).await
}

async fn export_pdf(state: &AppState, document: PrintDocument) -> Result<ExportArtifact, AppError> {
    let data = state.provider.snapshot();
    Ok(state.exporter.export(document, data).await?)
}
