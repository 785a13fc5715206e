//! GPA scorer: banded grade point average with a minimum-GPA floor

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::profile::lenient::sanitize_gpa;
use crate::profile::{CandidateProfile, RequirementProfile};

/// Score for a GPA below the requirement's minimum, and for the lowest band
pub const LOW_GPA_SCORE: f64 = 30.0;

const GPA_BANDS: &[(f64, f64)] = &[(3.5, 100.0), (3.0, 85.0), (2.75, 70.0), (2.5, 50.0)];

#[derive(Debug, Default)]
pub struct GpaScorer;

impl GpaScorer {
    pub fn new() -> Self {
        Self
    }

    fn band(gpa: f64) -> f64 {
        GPA_BANDS
            .iter()
            .find(|(floor, _)| gpa >= *floor)
            .map(|(_, score)| *score)
            .unwrap_or(LOW_GPA_SCORE)
    }
}

impl DimensionScorer for GpaScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Gpa
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        let gpa = sanitize_gpa(candidate.education.gpa);
        let minimum = sanitize_gpa(requirement.min_gpa);

        if minimum > 0.0 && gpa < minimum {
            return DimensionScore::new(
                LOW_GPA_SCORE,
                format!("GPA {:.2} is below the {:.2} minimum", gpa, minimum),
            );
        }

        DimensionScore::new(Self::band(gpa), format!("GPA {:.2}", gpa))
    }
}
