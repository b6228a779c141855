use serde::{Deserialize, Serialize};

use crate::models::tags::EmployerTag;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub location: String,
    pub email: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: Title,
    pub summary: String,
    pub contact: Contact,
    pub languages: Vec<Language>,
}

/// How a period string should be displayed. `Detailed` periods carry day-level ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    #[default]
    Simple,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(rename = "type", default)]
    pub kind: PeriodKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub periods: Vec<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default)]
    pub employer: EmployerTag,
}

impl Experience {
    /// The period shown in lists and exports. Empty when no period was recorded.
    pub fn primary_period(&self) -> &str {
        self.periods.first().map(|p| p.value.as_str()).unwrap_or("")
    }

    pub fn responsibilities(&self) -> &[String] {
        self.responsibilities.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub operational: Vec<String>,
}

/// The whole data set rendered by the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerData {
    #[serde(rename = "personalInfo")]
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub certifications: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates (shallow merge; a `None` field keeps the current value)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<Title>,
    pub summary: Option<String>,
    pub contact: Option<Contact>,
    pub languages: Option<Vec<Language>>,
}

impl PersonalInfoPatch {
    pub fn apply(self, target: &mut PersonalInfo) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(summary) = self.summary {
            target.summary = summary;
        }
        if let Some(contact) = self.contact {
            target.contact = contact;
        }
        if let Some(languages) = self.languages {
            target.languages = languages;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub periods: Option<Vec<Period>>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub employer: Option<EmployerTag>,
}

impl ExperiencePatch {
    pub fn apply(self, target: &mut Experience) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(company) = self.company {
            target.company = company;
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(periods) = self.periods {
            target.periods = periods;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
        if let Some(responsibilities) = self.responsibilities {
            target.responsibilities = Some(responsibilities);
        }
        if let Some(employer) = self.employer {
            target.employer = employer;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub details: Option<Vec<String>>,
}

impl EducationPatch {
    pub fn apply(self, target: &mut Education) {
        if let Some(degree) = self.degree {
            target.degree = degree;
        }
        if let Some(school) = self.school {
            target.school = school;
        }
        if let Some(period) = self.period {
            target.period = period;
        }
        if let Some(location) = self.location {
            target.location = location;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
        if let Some(details) = self.details {
            target.details = details;
        }
    }
}
