use std::sync::Arc;

use crate::career::CareerProvider;
use crate::export::PdfExporter;
use crate::relay::{ContactSettings, RelayService};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<CareerProvider>,
    /// Owns the per-document in-flight gate, so there must be exactly one.
    pub exporter: Arc<PdfExporter>,
    /// Pluggable relay. Default: EmailJsRelay.
    pub relay: Arc<dyn RelayService>,
    pub contact: ContactSettings,
}
