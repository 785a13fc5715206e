//! Experience scorer: tiered mapping of months against the required minimum

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::profile::{CandidateProfile, RequirementProfile};
use log::debug;

/// Floor applied when the candidate is below the required minimum
pub const BELOW_MINIMUM_FLOOR: f64 = 30.0;

#[derive(Debug, Default)]
pub struct ExperienceScorer;

impl ExperienceScorer {
    pub fn new() -> Self {
        Self
    }

    /// No minimum demanded; extra experience still earns credit
    fn unconstrained(months: u32) -> f64 {
        match months {
            12.. => 100.0,
            6..=11 => 90.0,
            3..=5 => 80.0,
            1..=2 => 70.0,
            0 => 60.0,
        }
    }

    /// Minimum demanded and met
    fn meets_minimum(months: u32) -> f64 {
        match months {
            12.. => 100.0,
            6..=11 => 85.0,
            3..=5 => 70.0,
            _ => 50.0,
        }
    }

    /// Partial credit proportional to the shortfall, never below the floor
    fn below_minimum(months: u32, minimum: u32) -> f64 {
        let ratio = months as f64 / minimum as f64;
        (ratio * 70.0).max(BELOW_MINIMUM_FLOOR)
    }
}

impl DimensionScorer for ExperienceScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Experience
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        let months = candidate.experience_months;
        let minimum = requirement.min_experience_months;

        if minimum == 0 {
            return DimensionScore::new(
                Self::unconstrained(months),
                format!("{} months of experience, none required", months),
            );
        }

        if months >= minimum {
            return DimensionScore::new(
                Self::meets_minimum(months),
                format!("{} months of experience meets the {}-month minimum", months, minimum),
            );
        }

        let score = Self::below_minimum(months, minimum);
        debug!("Below requirement: {}/{} months = {:.1}%", months, minimum, score);
        DimensionScore::new(
            score,
            format!("{} months of experience, {} required", months, minimum),
        )
    }
}
