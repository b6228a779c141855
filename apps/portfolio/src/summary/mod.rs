// Skill summary widget: keyword scoring over the career record.

pub mod scorer;

pub use scorer::{score_categories, CategoryScore, SkillCategory};
