//! Printable document export.
//!
//! The capture (see `capture.rs`) is scaled to the A4 page width and tiled into
//! consecutive A4 pages. A line whose glyph box would cross a page boundary moves to the
//! top of the next page, and everything below it moves with it.

use std::sync::Arc;
use std::time::Instant;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

use crate::export::capture::{capture_document, Capture};
use crate::export::font_metrics::FontWeight;
use crate::export::{ExportArtifact, ExportError, ExportGate, PrintDocument};
use crate::models::CareerData;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
const MM_PER_PT: f32 = 25.4 / 72.0;
/// Portion of the font size below the baseline.
const DESCENT: f32 = 0.25;
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A text run placed on a page, in PDF coordinates (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub pages: usize,
    pub runs: Vec<PlacedRun>,
}

/// Scales a capture onto A4 paper and splits it into pages.
pub fn paginate(capture: &Capture) -> PageLayout {
    if capture.width <= 0.0 {
        return PageLayout {
            pages: 1,
            runs: Vec::new(),
        };
    }
    let mm_per_px = A4_WIDTH_MM / capture.width;

    let mut offset_mm = 0.0_f32;
    let mut runs = Vec::with_capacity(capture.runs.len());
    let mut last_page = 0;

    for run in &capture.runs {
        let size_mm = run.size * mm_per_px;
        let mut baseline_mm = run.baseline * mm_per_px + offset_mm;
        let top_mm = baseline_mm - size_mm;
        let bottom_mm = baseline_mm + size_mm * DESCENT;

        let page = (top_mm.max(0.0) / A4_HEIGHT_MM).floor() as usize;
        let page_end = (page + 1) as f32 * A4_HEIGHT_MM;
        let page = if bottom_mm > page_end {
            let shift = page_end - top_mm;
            offset_mm += shift;
            baseline_mm += shift;
            page + 1
        } else {
            page
        };
        last_page = last_page.max(page);

        runs.push(PlacedRun {
            page,
            x_mm: run.x * mm_per_px,
            y_mm: A4_HEIGHT_MM - (baseline_mm - page as f32 * A4_HEIGHT_MM),
            size_pt: size_mm / MM_PER_PT,
            weight: run.weight,
            text: run.text.clone(),
        });
    }

    let height_mm = capture.height * mm_per_px + offset_mm;
    let tiled = (height_mm / A4_HEIGHT_MM).ceil() as usize;
    let pages = tiled.max(last_page + 1).max(1);

    PageLayout { pages, runs }
}

/// Builtin PDF fonts only cover a single-byte encoding. Typographic punctuation is
/// folded to ASCII; any other character above U+00FF prints as `?`.
fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '•' | '–' | '—' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            c if (c as u32) > 0xFF => '?',
            c => c,
        })
        .collect()
}

/// Encodes a page layout as a PDF with builtin Helvetica fonts.
pub fn encode_pdf(title: &str, layout: &PageLayout) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Document(e.to_string()))?;

    let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
    for _ in 1..layout.pages {
        let (page, layer) = doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for run in &layout.runs {
        let layer = layers.get(run.page).ok_or_else(|| {
            ExportError::Document(format!(
                "run placed on page {} of {}",
                run.page + 1,
                layout.pages
            ))
        })?;
        let font = match run.weight {
            FontWeight::Regular => &regular,
            FontWeight::Bold => &bold,
        };
        layer.use_text(pdf_text(&run.text), run.size_pt, Mm(run.x_mm), Mm(run.y_mm), font);
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Document(e.to_string()))
}

fn render(document: PrintDocument, data: &CareerData) -> Result<(usize, Vec<u8>), ExportError> {
    let capture = capture_document(document, data);
    let layout = paginate(&capture);
    let title = format!("{} - {}", data.personal_info.name, document);
    let bytes = encode_pdf(&title, &layout)?;
    Ok((layout.pages, bytes))
}

/// Runs `job` on the blocking pool while `document` is marked in flight.
///
/// The in-flight guard moves into the blocking task, so the gate stays closed until the
/// job has actually finished, even if the caller stops waiting.
async fn run_gated<T, F>(
    gate: &Arc<ExportGate>,
    document: PrintDocument,
    job: F,
) -> Result<T, ExportError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ExportError> + Send + 'static,
{
    let in_flight = gate.try_acquire(document)?;
    tokio::task::spawn_blocking(move || {
        let _in_flight = in_flight;
        job()
    })
    .await?
}

/// Runs PDF exports off the async runtime, one at a time per document.
#[derive(Debug, Default)]
pub struct PdfExporter {
    gate: Arc<ExportGate>,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &Arc<ExportGate> {
        &self.gate
    }

    /// Captures, paginates and encodes `document`. Refuses with
    /// `ExportError::InProgress` while the same document is already exporting.
    /// Failures are returned to the caller, which reports them.
    pub async fn export(
        &self,
        document: PrintDocument,
        data: CareerData,
    ) -> Result<ExportArtifact, ExportError> {
        let file_name = document.file_name(&data.personal_info.name);
        let started = Instant::now();

        let (pages, bytes) =
            run_gated(&self.gate, document, move || render(document, &data)).await?;

        info!(
            "Exported {document} as {file_name}: {pages} page(s), {} bytes in {}ms",
            bytes.len(),
            started.elapsed().as_millis()
        );
        Ok(ExportArtifact {
            file_name,
            content_type: PDF_CONTENT_TYPE,
            bytes,
        })
    }
}
