//! Document capture: lays a printable region out into a display list.
//!
//! The region is 794 CSS px wide (A4 at 96 dpi) and captured at a fixed upscale
//! factor of 2, so every coordinate in a `Capture` is in capture pixels
//! (1588 px across). Placement onto paper happens later in `pdf.rs`; nothing here
//! knows about millimetres or pages.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::career::view::COLLAPSED_EXPERIENCES;
use crate::export::font_metrics::{FontMetricTable, FontWeight, HELVETICA};
use crate::export::PrintDocument;
use crate::models::CareerData;
use crate::summary::score_categories;

/// Upscale factor applied to the CSS-pixel layout.
pub const CAPTURE_SCALE: f32 = 2.0;
/// Region width in CSS pixels.
pub const REGION_WIDTH_CSS_PX: f32 = 794.0;

const PADDING_CSS_PX: f32 = 32.0;
const LINE_HEIGHT: f32 = 1.5;
/// Certifications listed on the printable CV.
const KEY_CERTIFICATIONS: usize = 4;
const LETTER_DATE_FORMAT: &str = "%B %-d, %Y";
const LETTER_OPENING: &str =
    "I am writing to express my interest in bringing my engineering expertise to your organization.";
const LETTER_CLOSING: &str = "I would welcome the opportunity to discuss how my skills and \
     experience align with your organization's needs.";

// CSS pixel font sizes
const NAME_SIZE: f32 = 30.0;
const PRIMARY_TITLE_SIZE: f32 = 18.0;
const SECTION_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 14.0;

/// A single line of text at an absolute position in the capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Left edge, capture px.
    pub x: f32,
    /// Baseline, capture px from the top of the region.
    pub baseline: f32,
    /// Font size, capture px.
    pub size: f32,
    pub weight: FontWeight,
}

/// The captured region: its size plus every text run, ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    pub width: f32,
    pub height: f32,
    pub runs: Vec<TextRun>,
}

/// Captures the given printable document from the career data.
pub fn capture_document(document: PrintDocument, data: &CareerData) -> Capture {
    capture_document_on(document, data, Utc::now().date_naive())
}

/// `today` is the date printed on the cover letter.
fn capture_document_on(document: PrintDocument, data: &CareerData, today: NaiveDate) -> Capture {
    let mut composer = Composer::new(&HELVETICA);
    match document {
        PrintDocument::Cv => compose_cv(&mut composer, data),
        PrintDocument::Timeline => compose_timeline(&mut composer, data),
        PrintDocument::CoverLetter => compose_cover_letter(&mut composer, data, today),
    }
    composer.finish()
}

fn compose_cv(c: &mut Composer, data: &CareerData) {
    let info = &data.personal_info;

    c.line(&info.name, NAME_SIZE, FontWeight::Bold);
    c.line(&info.title.primary, PRIMARY_TITLE_SIZE, FontWeight::Regular);
    c.line(&info.title.secondary, BODY_SIZE, FontWeight::Regular);
    c.line(&info.title.tertiary, BODY_SIZE, FontWeight::Regular);
    c.line(&info.contact.location, BODY_SIZE, FontWeight::Regular);
    c.gap(16.0);

    c.paragraph(&info.summary, BODY_SIZE, FontWeight::Regular);
    c.gap(16.0);

    c.line("Skills", SECTION_SIZE, FontWeight::Bold);
    c.paragraph(
        &format!("Technical: {}", data.skills.technical.join(", ")),
        BODY_SIZE,
        FontWeight::Regular,
    );
    c.paragraph(
        &format!("Operational: {}", data.skills.operational.join(", ")),
        BODY_SIZE,
        FontWeight::Regular,
    );
    c.gap(16.0);

    c.line("Education", SECTION_SIZE, FontWeight::Bold);
    for edu in &data.education {
        c.split_row(&format!("{} • {}", edu.degree, edu.school), &edu.period);
        if let Some(detail) = edu.details.first() {
            c.paragraph(detail, BODY_SIZE, FontWeight::Regular);
        }
        c.gap(8.0);
    }
    c.gap(8.0);

    c.line("Recent Experience", SECTION_SIZE, FontWeight::Bold);
    for exp in data.experiences.iter().take(COLLAPSED_EXPERIENCES) {
        c.split_row(&format!("{} • {}", exp.title, exp.company), exp.primary_period());
        c.line(&exp.location, BODY_SIZE, FontWeight::Regular);
        if let Some(description) = &exp.description {
            c.paragraph(description, BODY_SIZE, FontWeight::Regular);
        }
        c.gap(12.0);
    }
    c.gap(4.0);

    c.line("Key Certifications", SECTION_SIZE, FontWeight::Bold);
    for cert in data.certifications.iter().take(KEY_CERTIFICATIONS) {
        c.paragraph(&format!("• {cert}"), BODY_SIZE, FontWeight::Regular);
    }
}

fn compose_timeline(c: &mut Composer, data: &CareerData) {
    c.line("Professional Experience Timeline", SECTION_SIZE, FontWeight::Bold);
    c.line(&data.personal_info.name, BODY_SIZE, FontWeight::Regular);
    c.gap(16.0);

    for exp in &data.experiences {
        c.split_row(&format!("{} • {}", exp.title, exp.company), exp.primary_period());
        c.line(&exp.location, BODY_SIZE, FontWeight::Regular);
        let responsibilities = exp.responsibilities();
        if !responsibilities.is_empty() {
            c.paragraph(&responsibilities.join(" • "), BODY_SIZE, FontWeight::Regular);
        }
        c.gap(12.0);
    }
}

fn compose_cover_letter(c: &mut Composer, data: &CareerData, today: NaiveDate) {
    let info = &data.personal_info;

    c.line(&info.name, NAME_SIZE, FontWeight::Bold);
    c.line(&info.title.primary, PRIMARY_TITLE_SIZE, FontWeight::Regular);
    c.line(&info.contact.location, BODY_SIZE, FontWeight::Regular);
    c.gap(24.0);

    c.line(&today.format(LETTER_DATE_FORMAT).to_string(), BODY_SIZE, FontWeight::Regular);
    c.gap(16.0);
    c.line("Dear Hiring Manager,", BODY_SIZE, FontWeight::Regular);
    c.gap(12.0);

    for body in letter_paragraphs(data) {
        c.paragraph(&body, BODY_SIZE, FontWeight::Regular);
        c.gap(10.0);
    }

    let expertise = expertise_areas(data);
    if !expertise.is_empty() {
        c.paragraph("My technical expertise includes:", BODY_SIZE, FontWeight::Regular);
        for area in &expertise {
            c.paragraph(&format!("• {area}"), BODY_SIZE, FontWeight::Regular);
        }
        c.gap(10.0);
    }

    c.paragraph(LETTER_CLOSING, BODY_SIZE, FontWeight::Regular);
    c.gap(16.0);
    c.line("Best regards,", BODY_SIZE, FontWeight::Regular);
    c.line(&info.name, BODY_SIZE, FontWeight::Bold);
}

/// Opening built from the profile summary, then the current role and the most
/// recent earlier role at a key technical employer.
fn letter_paragraphs(data: &CareerData) -> Vec<String> {
    let summary = data.personal_info.summary.trim();
    let mut paragraphs = vec![if summary.is_empty() {
        LETTER_OPENING.to_string()
    } else {
        format!("{LETTER_OPENING} {summary}")
    }];

    let Some(current) = data.experiences.first() else {
        return paragraphs;
    };
    let mut roles = format!(
        "In my current role I work as {} at {}.",
        current.title, current.company
    );
    if let Some(description) = current.description.as_deref().map(str::trim) {
        if !description.is_empty() {
            roles.push(' ');
            roles.push_str(description);
        }
    }
    let previous = data
        .experiences
        .iter()
        .skip(1)
        .find(|e| e.employer.is_key_technical() && e.company != current.company);
    if let Some(previous) = previous {
        roles.push_str(&format!(
            " Previously, I worked as {} at {} ({}).",
            previous.title,
            previous.company,
            previous.primary_period()
        ));
    }
    paragraphs.push(roles);
    paragraphs
}

/// Labels of the ranked summary categories that scored at all.
fn expertise_areas(data: &CareerData) -> Vec<String> {
    score_categories(&data.experiences, &data.skills, &data.certifications)
        .into_iter()
        .filter(|s| s.score > 0.0)
        .map(|s| s.label)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

/// Flows text top to bottom inside the padded region. Inputs are CSS px; output is
/// scaled by `CAPTURE_SCALE`.
struct Composer<'a> {
    metrics: &'a FontMetricTable,
    /// Top of the next line, CSS px.
    cursor: f32,
    runs: Vec<TextRun>,
}

impl<'a> Composer<'a> {
    fn new(metrics: &'a FontMetricTable) -> Self {
        Self {
            metrics,
            cursor: PADDING_CSS_PX,
            runs: Vec::new(),
        }
    }

    fn content_width() -> f32 {
        REGION_WIDTH_CSS_PX - 2.0 * PADDING_CSS_PX
    }

    fn push_run(&mut self, text: &str, x: f32, size: f32, weight: FontWeight) {
        // baseline sits ~80% down a line box
        let baseline = self.cursor + size * LINE_HEIGHT * 0.8;
        self.runs.push(TextRun {
            text: text.to_string(),
            x: x * CAPTURE_SCALE,
            baseline: baseline * CAPTURE_SCALE,
            size: size * CAPTURE_SCALE,
            weight,
        });
    }

    /// A short line such as a name or a title. Wraps like a paragraph, but empty text
    /// still takes up one line.
    fn line(&mut self, text: &str, size: f32, weight: FontWeight) {
        if text.trim().is_empty() {
            self.cursor += size * LINE_HEIGHT;
        } else {
            self.paragraph(text, size, weight);
        }
    }

    /// Word-wrapped block at full content width.
    fn paragraph(&mut self, text: &str, size: f32, weight: FontWeight) {
        let max_em = Self::content_width() / size;
        for line in self.metrics.wrap(text, max_em, weight) {
            self.push_run(&line, PADDING_CSS_PX, size, weight);
            self.cursor += size * LINE_HEIGHT;
        }
    }

    /// Bold heading on the left, right-aligned note (a period) on the same line.
    fn split_row(&mut self, left: &str, right: &str) {
        let size = BODY_SIZE;
        let right_width = self.metrics.measure_str(right, FontWeight::Regular) * size;
        if right_width > Self::content_width() / 2.0 {
            // too wide to share the line
            self.line(left, size, FontWeight::Bold);
            self.paragraph(right, size, FontWeight::Regular);
            return;
        }
        let right_x = REGION_WIDTH_CSS_PX - PADDING_CSS_PX - right_width;
        let left_max_em = (right_x - PADDING_CSS_PX - size) / size;

        let mut left_lines = self.metrics.wrap(left, left_max_em.max(1.0), FontWeight::Bold);
        if left_lines.is_empty() {
            left_lines.push(String::new());
        }

        if !right.is_empty() {
            self.push_run(right, right_x, size, FontWeight::Regular);
        }
        for line in left_lines {
            if !line.is_empty() {
                self.push_run(&line, PADDING_CSS_PX, size, FontWeight::Bold);
            }
            self.cursor += size * LINE_HEIGHT;
        }
    }

    fn gap(&mut self, px: f32) {
        self.cursor += px;
    }

    fn finish(self) -> Capture {
        Capture {
            width: REGION_WIDTH_CSS_PX * CAPTURE_SCALE,
            height: (self.cursor + PADDING_CSS_PX) * CAPTURE_SCALE,
            runs: self.runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::provider::CareerProvider;

    fn sample() -> CareerData {
        CareerProvider::builtin().unwrap().snapshot()
    }

    #[test]
    fn test_capture_is_upscaled() {
        let capture = capture_document(PrintDocument::Cv, &sample());
        assert_eq!(capture.width, REGION_WIDTH_CSS_PX * CAPTURE_SCALE);
        assert_eq!(capture.runs[0].text, "Nils Johansson");
        assert_eq!(capture.runs[0].size, NAME_SIZE * CAPTURE_SCALE);
        assert_eq!(capture.runs[0].x, PADDING_CSS_PX * CAPTURE_SCALE);
    }

    fn assert_inside_region(capture: &Capture) {
        for run in &capture.runs {
            let width = HELVETICA.measure_str(&run.text, run.weight) * run.size;
            assert!(run.x >= 0.0);
            assert!(
                run.x + width <= capture.width + 0.5,
                "run overflows: right edge {}px > {}px: {}",
                run.x + width,
                capture.width,
                run.text
            );
            assert!(run.baseline < capture.height);
        }
    }

    fn joined_text(capture: &Capture) -> String {
        capture
            .runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn letter_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_runs_stay_inside_region() {
        for doc in [
            PrintDocument::Cv,
            PrintDocument::Timeline,
            PrintDocument::CoverLetter,
        ] {
            assert_inside_region(&capture_document(doc, &sample()));
        }
    }

    #[test]
    fn test_long_header_values_wrap_inside_region() {
        let mut data = sample();
        data.personal_info.title.secondary = "Specialized in Calibration, Installation, \
             Automation, Commissioning, Gas Turbines, Marine Propulsion, Load Cells, \
             IQOQ Validation and Client Training across Europe and Asia"
            .to_string();
        data.personal_info.name = "Nils Johansson Andersson Karlsson Nilsson Eriksson Larsson"
            .to_string();
        data.experiences[0].location = "Örebro ".repeat(40);
        data.experiences[1].periods[0].value =
            "January 2023 • December 2023 (contract, extended twice, remote and on site)"
                .to_string();

        for doc in [
            PrintDocument::Cv,
            PrintDocument::Timeline,
            PrintDocument::CoverLetter,
        ] {
            let capture = capture_document(doc, &data);
            assert_inside_region(&capture);
        }

        let cv = capture_document(PrintDocument::Cv, &data);
        assert!(joined_text(&cv).contains("IQOQ Validation and Client Training"));
    }

    #[test]
    fn test_unbroken_value_is_split_inside_region() {
        let mut data = sample();
        data.personal_info.title.secondary = "X".repeat(200);
        let capture = capture_document(PrintDocument::Cv, &data);
        assert_inside_region(&capture);
        let xs: usize = capture
            .runs
            .iter()
            .filter(|r| r.text.chars().all(|c| c == 'X'))
            .map(|r| r.text.len())
            .sum();
        assert_eq!(xs, 200);
    }

    #[test]
    fn test_cover_letter_sections_in_order() {
        let data = sample();
        let capture = capture_document_on(PrintDocument::CoverLetter, &data, letter_date());
        let texts: Vec<&str> = capture.runs.iter().map(|r| r.text.as_str()).collect();

        let at = |needle: &str| {
            texts
                .iter()
                .position(|t| *t == needle)
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        assert_eq!(texts[0], "Nils Johansson");
        assert!(at("October 16, 2026") < at("Dear Hiring Manager,"));
        assert!(at("Dear Hiring Manager,") < at("My technical expertise includes:"));
        assert!(at("My technical expertise includes:") < at("Best regards,"));

        let last = capture.runs.last().unwrap();
        assert_eq!(last.text, "Nils Johansson");
        assert_eq!(last.weight, FontWeight::Bold);
    }

    #[test]
    fn test_cover_letter_mentions_latest_roles() {
        let data = sample();
        let text = joined_text(&capture_document_on(
            PrintDocument::CoverLetter,
            &data,
            letter_date(),
        ));
        assert!(text.contains("In my current role I work as Field Service Engineer at Instron."));
        assert!(text.contains("Previously, I worked as Automation Engineer at AH Automation"));
        assert!(text.contains(data.personal_info.summary.split_whitespace().next().unwrap()));
    }

    #[test]
    fn test_cover_letter_lists_scored_expertise() {
        let data = sample();
        let capture = capture_document_on(PrintDocument::CoverLetter, &data, letter_date());
        let bullets = capture.runs.iter().filter(|r| r.text.starts_with("• ")).count();
        let scored = score_categories(&data.experiences, &data.skills, &data.certifications)
            .iter()
            .filter(|s| s.score > 0.0)
            .count();
        assert!(scored > 0);
        assert_eq!(bullets, scored);
    }

    #[test]
    fn test_cover_letter_without_experiences() {
        let mut data = sample();
        data.experiences.clear();
        let text = joined_text(&capture_document_on(
            PrintDocument::CoverLetter,
            &data,
            letter_date(),
        ));
        assert!(!text.contains("In my current role"));
        assert!(text.contains("Best regards,"));
    }

    #[test]
    fn test_baselines_never_decrease_for_left_column() {
        let capture = capture_document(PrintDocument::Timeline, &sample());
        let left: Vec<f32> = capture
            .runs
            .iter()
            .filter(|r| r.x == PADDING_CSS_PX * CAPTURE_SCALE)
            .map(|r| r.baseline)
            .collect();
        assert!(left.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_cv_lists_only_recent_experiences_and_key_certs() {
        let data = sample();
        let capture = capture_document(PrintDocument::Cv, &data);

        let mentions = |needle: &str| capture.runs.iter().any(|r| r.text.contains(needle));
        assert!(mentions("Field Service Engineer • Instron"));
        assert!(mentions("Commissioning Engineer • Siemens Energy"));
        assert!(!mentions("Inspection Engineer • DEKRA Industrial"));
        assert!(mentions("IQOQ Validation Specialist"));
        assert!(!mentions("Advanced Firefighting"));
    }

    #[test]
    fn test_timeline_is_taller_than_cv() {
        let data = sample();
        let cv = capture_document(PrintDocument::Cv, &data);
        let timeline = capture_document(PrintDocument::Timeline, &data);
        assert!(timeline.height > cv.height);
    }

    #[test]
    fn test_empty_experiences_still_captures_header() {
        let mut data = sample();
        data.experiences.clear();
        let capture = capture_document(PrintDocument::Timeline, &data);
        assert_eq!(capture.runs.len(), 2);
        assert!(capture.height > 0.0);
    }
}
