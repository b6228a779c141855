//! Career data provider: the single owner of the in-memory profile record.
//!
//! Constructed once in `main` and shared through `AppState`. Nothing is persisted:
//! updates live until the process exits.

use std::path::Path;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::models::{
    CareerData, EducationPatch, ExperiencePatch, PersonalInfoPatch,
};

/// Data set compiled into the binary, used unless `CAREER_DATA_PATH` points elsewhere.
const BUILTIN_CAREER_JSON: &str = include_str!("../../data/career.json");

#[derive(Debug, Error, PartialEq)]
pub enum ProviderError {
    #[error("experience index {index} out of range (len {len})")]
    ExperienceOutOfRange { index: usize, len: usize },

    #[error("education index {index} out of range (len {len})")]
    EducationOutOfRange { index: usize, len: usize },
}

pub struct CareerProvider {
    data: RwLock<CareerData>,
}

impl CareerProvider {
    pub fn new(data: CareerData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Builds a provider from the compiled-in data set.
    pub fn builtin() -> Result<Self> {
        let data: CareerData = serde_json::from_str(BUILTIN_CAREER_JSON)
            .context("built-in career data is not valid JSON")?;
        Ok(Self::new(data))
    }

    /// Builds a provider from a JSON file with the same shape as the built-in data set.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read career data from {}", path.display()))?;
        let data: CareerData = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse career data in {}", path.display()))?;
        info!(
            "Loaded career data from {} ({} experiences)",
            path.display(),
            data.experiences.len()
        );
        Ok(Self::new(data))
    }

    /// Returns a copy of the whole record. Readers never hold the lock across awaits.
    pub fn snapshot(&self) -> CareerData {
        self.data.read().clone()
    }

    pub fn update_personal_info(&self, patch: PersonalInfoPatch) {
        patch.apply(&mut self.data.write().personal_info);
    }

    pub fn update_experience(
        &self,
        index: usize,
        patch: ExperiencePatch,
    ) -> Result<(), ProviderError> {
        let mut data = self.data.write();
        let len = data.experiences.len();
        let experience = data
            .experiences
            .get_mut(index)
            .ok_or(ProviderError::ExperienceOutOfRange { index, len })?;
        patch.apply(experience);
        Ok(())
    }

    pub fn update_education(
        &self,
        index: usize,
        patch: EducationPatch,
    ) -> Result<(), ProviderError> {
        let mut data = self.data.write();
        let len = data.education.len();
        let education = data
            .education
            .get_mut(index)
            .ok_or(ProviderError::EducationOutOfRange { index, len })?;
        patch.apply(education);
        Ok(())
    }
}
