//! Job requirement profile as published by the job-posting side

use super::lenient;
use serde::{Deserialize, Serialize};

/// Requirement fields of one internship posting.
///
/// Empty lists, an empty major, `min_gpa == 0.0` and `min_experience_months == 0`
/// all mean "no constraint" for the corresponding dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementProfile {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(deserialize_with = "lenient::string_list")]
    pub skills_required: Vec<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub major_required: String,

    #[serde(deserialize_with = "lenient::gpa")]
    pub min_gpa: f64,

    #[serde(deserialize_with = "lenient::months")]
    pub min_experience_months: u32,

    #[serde(deserialize_with = "lenient::string_list")]
    pub required_certifications: Vec<String>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub preferred_certifications: Vec<String>,
}

impl RequirementProfile {
    pub fn has_major_constraint(&self) -> bool {
        !self.major_required.trim().is_empty()
    }

    /// At least one non-blank required or preferred certification
    pub fn has_certification_constraint(&self) -> bool {
        self.required_certifications
            .iter()
            .chain(self.preferred_certifications.iter())
            .any(|cert| !cert.trim().is_empty())
    }
}
