//! Certification scorer

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::processing::text::{normalize, normalize_unique, unique_preserving_case};
use crate::profile::{CandidateProfile, RequirementProfile};
use log::debug;

/// Required and preferred certifications the candidate does not hold, in original spelling
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnmetCertifications {
    pub required: Vec<String>,
    pub preferred: Vec<String>,
}

impl UnmetCertifications {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.preferred.is_empty()
    }

    /// Required first, then preferred, without repeats
    pub fn all(&self) -> Vec<String> {
        unique_preserving_case(self.required.iter().chain(self.preferred.iter()))
    }
}

#[derive(Debug, Default)]
pub struct CertificationScorer;

impl CertificationScorer {
    pub fn new() -> Self {
        Self
    }

    fn held_names(candidate: &CandidateProfile) -> Vec<String> {
        normalize_unique(candidate.certifications.iter().map(|c| c.name.as_str()))
    }

    /// A wanted certification is held when its name occurs inside a held certification's name
    fn is_held(wanted: &str, held: &[String]) -> bool {
        let wanted = normalize(wanted);
        !wanted.is_empty() && held.iter().any(|name| name.contains(&wanted))
    }

    pub fn unmet(candidate: &CandidateProfile, requirement: &RequirementProfile) -> UnmetCertifications {
        let held = Self::held_names(candidate);
        let missing = |wanted: &[String]| {
            unique_preserving_case(wanted)
                .into_iter()
                .filter(|cert| !Self::is_held(cert, &held))
                .collect::<Vec<_>>()
        };

        UnmetCertifications {
            required: missing(requirement.required_certifications.as_slice()),
            preferred: missing(requirement.preferred_certifications.as_slice()),
        }
    }
}

impl DimensionScorer for CertificationScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Certification
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        if !requirement.has_certification_constraint() {
            return DimensionScore::new(100.0, "No certification requirement");
        }

        let held = Self::held_names(candidate);
        let required = normalize_unique(&requirement.required_certifications);
        let preferred = normalize_unique(&requirement.preferred_certifications);

        if !required.is_empty() {
            if let Some(found) = required.iter().find(|cert| Self::is_held(cert, &held)) {
                debug!("Has required cert: {}", found);
                return DimensionScore::new(100.0, format!("Holds required certification '{}'", found));
            }
            if held.is_empty() {
                debug!("Required cert missing, no certifications held");
                return DimensionScore::new(0.0, "Required certification missing");
            }
        }

        if let Some(found) = preferred.iter().find(|cert| Self::is_held(cert, &held)) {
            debug!("Has preferred cert: {}", found);
            return DimensionScore::new(70.0, format!("Holds preferred certification '{}'", found));
        }

        if !held.is_empty() {
            debug!("Has other certs: {}", held.join(", "));
            return DimensionScore::new(40.0, format!("{} unrelated certifications", held.len()));
        }

        DimensionScore::new(50.0, "No certifications, preferred ones missing")
    }
}
