//! Project relevance scorer

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::processing::lexical::LexicalMatcher;
use crate::profile::{CandidateProfile, Project, RequirementProfile};
use log::debug;

#[derive(Debug, Default)]
pub struct ProjectScorer;

impl ProjectScorer {
    pub fn new() -> Self {
        Self
    }

    /// Relevant when a technology is a required skill, or a required skill is
    /// mentioned in the project's name or description
    fn is_relevant(project: &Project, required: &LexicalMatcher) -> bool {
        if project.technologies.iter().any(|tech| required.contains(tech)) {
            return true;
        }

        let project_text = format!("{} {}", project.name, project.description);
        required.found_in(&project_text)
    }

    fn tier(count: usize) -> f64 {
        match count {
            0 => 40.0,
            1 => 70.0,
            _ => 100.0,
        }
    }

    /// Number of projects relevant to the requirement's skills
    pub fn relevant_count(candidate: &CandidateProfile, requirement: &RequirementProfile) -> usize {
        let required = LexicalMatcher::new(&requirement.skills_required);
        candidate
            .projects
            .iter()
            .filter(|project| Self::is_relevant(project, &required))
            .count()
    }
}

impl DimensionScorer for ProjectScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Projects
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        let required = LexicalMatcher::new(&requirement.skills_required);
        let total = candidate.projects.len();

        if required.is_empty() {
            return DimensionScore::new(
                Self::tier(total),
                format!("{} projects, no required skills to compare", total),
            );
        }

        if total == 0 {
            return DimensionScore::new(30.0, "No projects on record");
        }

        let relevant = candidate
            .projects
            .iter()
            .filter(|project| Self::is_relevant(project, &required))
            .count();

        debug!("Relevant projects: {}/{}", relevant, total);

        DimensionScore::new(
            Self::tier(relevant),
            format!("{}/{} projects use required skills", relevant, total),
        )
    }
}
