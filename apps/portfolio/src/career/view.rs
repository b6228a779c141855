//! Profile view assembly: everything the profile page renders, in one response.

use serde::Serialize;

use crate::models::{
    CareerData, Education, Experience, IconKind, PersonalInfo, ResponsibilityKind,
    ResponsibilityTag, SkillGroup, Skills,
};
use crate::summary::{score_categories, CategoryScore};

/// Experiences shown before the timeline is expanded. Also the printable CV's "recent" cut.
pub const COLLAPSED_EXPERIENCES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroupView {
    pub group: SkillGroup,
    pub label: &'static str,
    pub icon: IconKind,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponsibilityView {
    pub label: String,
    /// Display group; `None` for labels outside the tag vocabulary.
    pub kind: Option<ResponsibilityKind>,
    pub icon: Option<IconKind>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntryView {
    pub index: usize,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: Option<String>,
    pub icon: IconKind,
    pub responsibilities: Vec<ResponsibilityView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub personal_info: PersonalInfo,
    pub skill_groups: Vec<SkillGroupView>,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub timeline: Vec<TimelineEntryView>,
    pub total_experiences: usize,
    pub expanded: bool,
    pub summary: Vec<CategoryScore>,
    pub certifications: Vec<String>,
}

pub fn build_profile_view(data: CareerData, expanded: bool) -> ProfileView {
    let summary = score_categories(&data.experiences, &data.skills, &data.certifications);
    let total_experiences = data.experiences.len();
    let shown = if expanded {
        total_experiences
    } else {
        COLLAPSED_EXPERIENCES
    };

    let timeline = data
        .experiences
        .iter()
        .enumerate()
        .take(shown)
        .map(|(index, exp)| timeline_entry(index, exp))
        .collect();

    let skill_groups = SkillGroup::ALL
        .iter()
        .map(|&group| SkillGroupView {
            group,
            label: group.label(),
            icon: group.icon(),
            skills: group.members(),
        })
        .collect();

    ProfileView {
        personal_info: data.personal_info,
        skill_groups,
        skills: data.skills,
        education: data.education,
        timeline,
        total_experiences,
        expanded,
        summary,
        certifications: data.certifications,
    }
}

fn timeline_entry(index: usize, exp: &Experience) -> TimelineEntryView {
    TimelineEntryView {
        index,
        title: exp.title.clone(),
        company: exp.company.clone(),
        location: exp.location.clone(),
        period: exp.primary_period().to_string(),
        description: exp.description.clone(),
        icon: exp.employer.icon(),
        responsibilities: exp
            .responsibilities()
            .iter()
            .map(|r| {
                let tag = ResponsibilityTag::classify(r);
                ResponsibilityView {
                    label: r.clone(),
                    kind: tag.map(|t| t.kind),
                    icon: tag.map(|t| t.icon),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::provider::CareerProvider;

    #[test]
    fn test_collapsed_view_shows_three_entries() {
        let data = CareerProvider::builtin().unwrap().snapshot();
        let view = build_profile_view(data, false);
        assert_eq!(view.timeline.len(), COLLAPSED_EXPERIENCES);
        assert_eq!(view.total_experiences, 24);
        assert_eq!(view.summary.len(), 5);
    }

    #[test]
    fn test_expanded_view_shows_everything() {
        let data = CareerProvider::builtin().unwrap().snapshot();
        let view = build_profile_view(data, true);
        assert_eq!(view.timeline.len(), 24);
        assert_eq!(view.timeline[23].index, 23);
    }

    #[test]
    fn test_timeline_icons_resolve_from_tags() {
        let data = CareerProvider::builtin().unwrap().snapshot();
        let view = build_profile_view(data, true);

        let instron = &view.timeline[0];
        assert_eq!(instron.icon, IconKind::Car);
        assert_eq!(instron.period, "January 2024 • Present");

        let bluehill = instron
            .responsibilities
            .iter()
            .find(|r| r.label == "Bluehill Software")
            .unwrap();
        assert_eq!(bluehill.icon, Some(IconKind::Code));
        assert_eq!(bluehill.kind, Some(ResponsibilityKind::SoftwareProgramming));
    }

    #[test]
    fn test_untagged_responsibility_has_no_kind() {
        let data = CareerProvider::builtin().unwrap().snapshot();
        let mut exp = data.experiences[0].clone();
        exp.responsibilities = Some(vec!["Knitting".to_string()]);
        let untagged = timeline_entry(0, &exp);

        assert_eq!(untagged.responsibilities[0].label, "Knitting");
        assert_eq!(untagged.responsibilities[0].kind, None);
        assert_eq!(untagged.responsibilities[0].icon, None);
    }

    #[test]
    fn test_collapsed_view_with_short_list() {
        let mut data = CareerProvider::builtin().unwrap().snapshot();
        data.experiences.truncate(1);
        let view = build_profile_view(data, false);
        assert_eq!(view.timeline.len(), 1);
    }
}
