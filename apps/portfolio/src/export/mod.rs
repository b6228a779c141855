// Export pipeline: delimited-text downloads and printable PDF documents.
// PDF capture + encode is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod capture;
pub mod csv;
pub mod font_metrics;
pub mod gate;
pub mod handlers;
pub mod pdf;

use std::fmt;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gate::ExportGate;
pub use pdf::PdfExporter;

/// A printable region of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrintDocument {
    /// One-page CV: header, skills, education, recent experience, key certifications.
    Cv,
    /// Every experience entry with its responsibilities.
    Timeline,
    /// One-page letter built from the profile and the latest roles.
    CoverLetter,
}

impl PrintDocument {
    /// Download name. Fixed per document and profile name.
    pub fn file_name(self, profile_name: &str) -> String {
        let slug = profile_name.split_whitespace().collect::<Vec<_>>().join("-");
        match self {
            PrintDocument::Cv => format!("CV-{slug}.pdf"),
            PrintDocument::Timeline => format!("Experience-Timeline-{slug}.pdf"),
            PrintDocument::CoverLetter => format!("Cover-Letter-{slug}.pdf"),
        }
    }
}

impl fmt::Display for PrintDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintDocument::Cv => f.write_str("CV"),
            PrintDocument::Timeline => f.write_str("experience timeline"),
            PrintDocument::CoverLetter => f.write_str("cover letter"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export of the {0} is already in progress")]
    InProgress(PrintDocument),

    #[error("document generation failed: {0}")]
    Document(String),

    #[error("export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A generated file, served as an attachment download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl IntoResponse for ExportArtifact {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.file_name);
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_fixed_per_profile() {
        assert_eq!(
            PrintDocument::Cv.file_name("Nils Johansson"),
            "CV-Nils-Johansson.pdf"
        );
        assert_eq!(
            PrintDocument::Timeline.file_name("Nils  Johansson"),
            "Experience-Timeline-Nils-Johansson.pdf"
        );
        assert_eq!(
            PrintDocument::CoverLetter.file_name("Nils Johansson"),
            "Cover-Letter-Nils-Johansson.pdf"
        );
        assert_eq!(PrintDocument::CoverLetter.to_string(), "cover letter");
    }

    #[test]
    fn test_artifact_response_is_attachment() {
        let artifact = ExportArtifact {
            file_name: "cv_data.csv".to_string(),
            content_type: "text/csv; charset=utf-8",
            bytes: b"\"# Skills\"".to_vec(),
        };
        let response = artifact.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"cv_data.csv\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
    }
}
