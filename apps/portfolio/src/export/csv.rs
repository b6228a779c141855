//! Delimited-text exports.
//!
//! Every field is wrapped in double quotes and embedded quotes are doubled. Nothing
//! else is escaped. Rows are joined with `\n`.

use crate::export::ExportArtifact;
use crate::models::CareerData;

pub const CV_DATA_FILE_NAME: &str = "cv_data.csv";
pub const TIMELINE_FILE_NAME: &str = "experience-timeline.csv";
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const EDUCATION_HEADERS: [&str; 5] = ["Degree", "School", "Period", "Location", "Details"];
const EXPERIENCE_HEADERS: [&str; 6] = [
    "Title",
    "Company",
    "Location",
    "Period",
    "Description",
    "Responsibilities",
];
const TIMELINE_HEADERS: [&str; 6] = [
    "Period",
    "Role",
    "Company",
    "Location",
    "Description",
    "Responsibilities",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn quoted_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Full data export: one `# Section` block per part of the profile, blank line after each.
pub fn export_cv_data(data: &CareerData) -> ExportArtifact {
    ExportArtifact {
        file_name: CV_DATA_FILE_NAME.to_string(),
        content_type: CSV_CONTENT_TYPE,
        bytes: render_cv_data(data).into_bytes(),
    }
}

/// Experience-only export with an unquoted header row.
pub fn export_timeline(data: &CareerData) -> ExportArtifact {
    ExportArtifact {
        file_name: TIMELINE_FILE_NAME.to_string(),
        content_type: CSV_CONTENT_TYPE,
        bytes: render_timeline(data).into_bytes(),
    }
}

pub fn render_cv_data(data: &CareerData) -> String {
    let info = &data.personal_info;
    let languages = info
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.language, l.proficiency))
        .collect::<Vec<_>>()
        .join(", ");

    let mut rows: Vec<String> = Vec::new();

    rows.push(quoted_row(&["# Personal Information"]));
    for (key, value) in [
        ("Name", info.name.as_str()),
        ("Primary Title", info.title.primary.as_str()),
        ("Secondary Title", info.title.secondary.as_str()),
        ("Tertiary Title", info.title.tertiary.as_str()),
        ("Summary", info.summary.as_str()),
        ("Location", info.contact.location.as_str()),
        ("Email", info.contact.email.as_str()),
        ("LinkedIn", info.contact.linked_in.as_str()),
        ("Languages", languages.as_str()),
    ] {
        rows.push(quoted_row(&[key, value]));
    }
    rows.push(String::new());

    rows.push(quoted_row(&["# Skills"]));
    rows.push(quoted_row(&["Technical", data.skills.technical.join(", ").as_str()]));
    rows.push(quoted_row(&["Operational", data.skills.operational.join(", ").as_str()]));
    rows.push(String::new());

    rows.push(quoted_row(&["# Education"]));
    rows.push(quoted_row(&EDUCATION_HEADERS));
    for edu in &data.education {
        rows.push(quoted_row(&[
            edu.degree.as_str(),
            edu.school.as_str(),
            edu.period.as_str(),
            edu.location.as_str(),
            edu.details.join("; ").as_str(),
        ]));
    }
    rows.push(String::new());

    rows.push(quoted_row(&["# Experience"]));
    rows.push(quoted_row(&EXPERIENCE_HEADERS));
    for exp in &data.experiences {
        rows.push(quoted_row(&[
            exp.title.as_str(),
            exp.company.as_str(),
            exp.location.as_str(),
            exp.primary_period(),
            exp.description.as_deref().unwrap_or(""),
            exp.responsibilities().join("; ").as_str(),
        ]));
    }
    rows.push(String::new());

    rows.push(quoted_row(&["# Certifications"]));
    for cert in &data.certifications {
        rows.push(quoted_row(&[cert]));
    }
    rows.push(String::new());

    rows.join("\n")
}

pub fn render_timeline(data: &CareerData) -> String {
    let mut rows = vec![TIMELINE_HEADERS.join(",")];
    for exp in &data.experiences {
        rows.push(quoted_row(&[
            exp.primary_period(),
            exp.title.as_str(),
            exp.company.as_str(),
            exp.location.as_str(),
            exp.description.as_deref().unwrap_or(""),
            exp.responsibilities().join("; ").as_str(),
        ]));
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::provider::CareerProvider;

    /// Minimal RFC 4180 reader: quoted or bare fields, `""` inside quotes, `\n` rows.
    fn parse_csv(input: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    _ => field.push(c),
                }
                continue;
            }
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
        row.push(field);
        rows.push(row);
        rows
    }

    fn sample() -> CareerData {
        CareerProvider::builtin().unwrap().snapshot()
    }

    #[test]
    fn test_quote_doubles_embedded_quotes() {
        assert_eq!(quote(r#"the "best" engineer"#), r#""the ""best"" engineer""#);
        assert_eq!(quote("a,b\nc"), "\"a,b\nc\"");
    }

    #[test]
    fn test_cv_data_section_order() {
        let out = render_cv_data(&sample());
        let headers: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("\"# "))
            .collect();
        assert_eq!(
            headers,
            vec![
                "\"# Personal Information\"",
                "\"# Skills\"",
                "\"# Education\"",
                "\"# Experience\"",
                "\"# Certifications\"",
            ]
        );
    }

    #[test]
    fn test_cv_data_round_trips_fields_with_quotes() {
        let mut data = sample();
        data.experiences[0].description = Some(r#"Said "calibrate", then left"#.to_string());
        data.certifications[0] = r#"The "IQOQ" course"#.to_string();

        let rows = parse_csv(&render_cv_data(&data));

        let exp_header = rows
            .iter()
            .position(|r| r == &vec!["# Experience".to_string()])
            .unwrap();
        let first_exp = &rows[exp_header + 2];
        assert_eq!(first_exp[0], "Field Service Engineer");
        assert_eq!(first_exp[3], "January 2024 • Present");
        assert_eq!(first_exp[4], r#"Said "calibrate", then left"#);

        let cert_header = rows
            .iter()
            .position(|r| r == &vec!["# Certifications".to_string()])
            .unwrap();
        assert_eq!(rows[cert_header + 1], vec![r#"The "IQOQ" course"#.to_string()]);
    }

    #[test]
    fn test_cv_data_personal_rows() {
        let rows = parse_csv(&render_cv_data(&sample()));
        assert_eq!(rows[1], vec!["Name".to_string(), "Nils Johansson".to_string()]);
        let languages = rows.iter().find(|r| r[0] == "Languages").unwrap();
        assert_eq!(languages[1], "Swedish (Native), English (Fluent)");
    }

    #[test]
    fn test_cv_data_empty_experiences_keeps_header_rows() {
        let mut data = sample();
        data.experiences.clear();

        let rows = parse_csv(&render_cv_data(&data));
        let exp_header = rows
            .iter()
            .position(|r| r == &vec!["# Experience".to_string()])
            .unwrap();
        assert_eq!(rows[exp_header + 1], EXPERIENCE_HEADERS.map(String::from).to_vec());
        // blank separator follows the header row directly
        assert_eq!(rows[exp_header + 2], vec![String::new()]);
    }

    #[test]
    fn test_timeline_empty_is_header_only() {
        let mut data = sample();
        data.experiences.clear();
        assert_eq!(
            render_timeline(&data),
            "Period,Role,Company,Location,Description,Responsibilities"
        );
    }

    #[test]
    fn test_timeline_rows_round_trip() {
        let data = sample();
        let rows = parse_csv(&render_timeline(&data));
        assert_eq!(rows.len(), data.experiences.len() + 1);
        assert_eq!(rows[1][0], "January 2024 • Present");
        assert_eq!(rows[1][1], "Field Service Engineer");
        assert_eq!(
            rows[1][5],
            data.experiences[0].responsibilities().join("; ")
        );
    }

    #[test]
    fn test_export_artifact_names() {
        let data = sample();
        assert_eq!(export_cv_data(&data).file_name, "cv_data.csv");
        assert_eq!(export_timeline(&data).file_name, "experience-timeline.csv");
    }
}
