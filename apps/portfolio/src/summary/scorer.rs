//! Skill summary scorer: ranks thematic categories for the profile summary widget.
//!
//! Pure keyword matching over skills, responsibilities, positions and certifications.
//! Algorithm, per category:
//! 1. `keyword_matches`  = skill/responsibility strings containing any category keyword
//! 2. `position_matches` = Σ over matching experiences of 2 (key technical employer) or 1
//! 3. `cert_matches`     = 2 × certifications containing any category keyword
//! 4. `score = (keyword_matches + 3 × position_matches + 2 × cert_matches) × base_weight`
//!
//! Matching is case-insensitive substring containment.

use serde::{Deserialize, Serialize};

use crate::models::{Experience, IconKind, Skills};

/// Number of categories the widget displays.
pub const TOP_CATEGORIES: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Testing,
    Systems,
    Automation,
    Service,
    Quality,
}

impl SkillCategory {
    /// Enumeration order. Ties in the ranking keep this order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Testing,
        SkillCategory::Systems,
        SkillCategory::Automation,
        SkillCategory::Service,
        SkillCategory::Quality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Testing => "Testing",
            SkillCategory::Systems => "Systems",
            SkillCategory::Automation => "Automation",
            SkillCategory::Service => "Service",
            SkillCategory::Quality => "Quality",
        }
    }

    pub fn base_weight(self) -> f64 {
        match self {
            SkillCategory::Testing => 3.0,
            SkillCategory::Systems => 2.5,
            SkillCategory::Automation => 2.0,
            SkillCategory::Service => 2.5,
            SkillCategory::Quality => 2.0,
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            SkillCategory::Testing => IconKind::Gauge,
            SkillCategory::Systems => IconKind::Settings,
            SkillCategory::Automation => IconKind::Cpu,
            SkillCategory::Service => IconKind::Wrench,
            SkillCategory::Quality => IconKind::Shield,
        }
    }

    /// Lowercase keywords matched as substrings.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Testing => &[
                "testing systems",
                "calibration",
                "iqoq",
                "quality control",
                "validation",
                "equipment assessment",
                "testing methods",
                "bluehill software",
                "load cell",
                "precision",
                "field service",
                "installation",
            ],
            SkillCategory::Systems => &[
                "marine engineering",
                "gas turbine",
                "engine operations",
                "technical systems",
                "mechanical systems",
                "electrical systems",
                "equipment",
                "installation",
                "commissioning",
                "system integration",
                "technical operations",
            ],
            SkillCategory::Automation => &[
                "plc programming",
                "automation",
                "hmi development",
                "control systems",
                "software configuration",
                "programming",
                "system integration",
                "process control",
                "technical design",
            ],
            SkillCategory::Service => &[
                "field service",
                "client training",
                "technical support",
                "installation",
                "commissioning",
                "maintenance",
                "equipment optimization",
                "global support",
                "client relations",
                "technical documentation",
            ],
            SkillCategory::Quality => &[
                "quality assurance",
                "safety standards",
                "risk management",
                "compliance",
                "regulatory standards",
                "documentation",
                "validation",
                "emergency systems",
                "safety protocols",
                "maritime safety",
            ],
        }
    }

    fn matches(self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords().iter().any(|kw| text.contains(kw))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Breakdown of one category's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub label: String,
    pub icon: IconKind,
    pub keyword_matches: u32,
    pub position_matches: u32,
    pub cert_matches: u32,
    pub score: f64,
    /// Percentage of the summed score of the displayed categories (0 when that sum is 0).
    pub share: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores every category and returns the top `TOP_CATEGORIES` by descending score.
pub fn score_categories(
    experiences: &[Experience],
    skills: &Skills,
    certifications: &[String],
) -> Vec<CategoryScore> {
    let keyword_pool: Vec<&str> = skills
        .technical
        .iter()
        .chain(skills.operational.iter())
        .chain(experiences.iter().flat_map(|e| e.responsibilities().iter()))
        .map(String::as_str)
        .collect();

    let mut scores: Vec<CategoryScore> = SkillCategory::ALL
        .iter()
        .map(|&category| score_category(category, &keyword_pool, experiences, certifications))
        .collect();

    // sort_by is stable: equal scores keep enumeration order.
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores.truncate(TOP_CATEGORIES);

    let total: f64 = scores.iter().map(|s| s.score).sum();
    for s in &mut scores {
        s.share = if total > 0.0 {
            s.score / total * 100.0
        } else {
            0.0
        };
    }

    scores
}

fn score_category(
    category: SkillCategory,
    keyword_pool: &[&str],
    experiences: &[Experience],
    certifications: &[String],
) -> CategoryScore {
    let keyword_matches = keyword_pool
        .iter()
        .filter(|text| category.matches(text))
        .count() as u32;

    let position_matches: u32 = experiences
        .iter()
        .filter(|exp| experience_matches(category, exp))
        .map(|exp| if exp.employer.is_key_technical() { 2 } else { 1 })
        .sum();

    let cert_matches = certifications
        .iter()
        .filter(|cert| category.matches(cert))
        .count() as u32
        * 2;

    let raw = keyword_matches + 3 * position_matches + 2 * cert_matches;

    CategoryScore {
        category,
        label: category.label().to_string(),
        icon: category.icon(),
        keyword_matches,
        position_matches,
        cert_matches,
        score: raw as f64 * category.base_weight(),
        share: 0.0,
    }
}

fn experience_matches(category: SkillCategory, exp: &Experience) -> bool {
    category.matches(&exp.title)
        || category.matches(&exp.company)
        || exp.responsibilities().iter().any(|r| category.matches(r))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
