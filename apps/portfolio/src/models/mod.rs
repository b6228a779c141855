pub mod career;
pub mod tags;

pub use career::{
    CareerData, Education, EducationPatch, Experience, ExperiencePatch, PersonalInfo,
    PersonalInfoPatch, Skills,
};
pub use tags::{EmployerTag, IconKind, ResponsibilityKind, ResponsibilityTag, SkillGroup};
