//! Dimension scorers: one small pure unit per scored aspect of a candidate

pub mod certification;
pub mod experience;
pub mod gpa;
pub mod major;
pub mod projects;
pub mod skills;

use crate::processing::dimension::Dimension;
use crate::profile::{CandidateProfile, RequirementProfile};

pub use certification::{CertificationScorer, UnmetCertifications};
pub use experience::ExperienceScorer;
pub use gpa::GpaScorer;
pub use major::MajorScorer;
pub use projects::ProjectScorer;
pub use skills::{SkillEvaluation, SkillScorer};

/// Score on a 0-100 scale plus a one-line explanation
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub score: f64,
    pub rationale: String,
}

impl DimensionScore {
    pub fn new(score: f64, rationale: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            rationale: rationale.into(),
        }
    }
}

/// Common interface of the six dimension scorers
pub trait DimensionScorer: Send + Sync {
    fn dimension(&self) -> Dimension;

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore;
}
