//! Gap analysis: which dimensions fall short and what to do about it

use crate::processing::dimension::{Breakdown, Dimension};
use crate::processing::engine::{MatchResult, MatchingEngine};
use crate::processing::lexical::LexicalMatcher;
use crate::processing::scorers::CertificationScorer;
use crate::processing::text::unique_preserving_case;
use crate::processing::zone::Zone;
use crate::profile::{CandidateProfile, RequirementProfile};
use log::debug;
use serde::{Deserialize, Serialize};

/// Missing skills listed in a gap
pub const MAX_MISSING_SKILLS: usize = 5;
/// Missing skills named in the "Learn" recommendation
pub const MAX_SUGGESTED_SKILLS: usize = 3;

/// A dimension is flagged when its score is strictly below its threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapThresholds {
    pub skills: f64,
    pub major: f64,
    pub experience: f64,
    pub projects: f64,
    pub certification: f64,
    pub gpa: f64,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            skills: 70.0,
            major: 80.0,
            experience: 70.0,
            projects: 70.0,
            certification: 70.0,
            gpa: 70.0,
        }
    }
}

impl GapThresholds {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Major => self.major,
            Dimension::Experience => self.experience,
            Dimension::Projects => self.projects,
            Dimension::Certification => self.certification,
            Dimension::Gpa => self.gpa,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub dimension: Dimension,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub overall_score: f64,
    pub zone: Zone,
    pub breakdown: Breakdown,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<String>,
}

impl GapReport {
    pub fn gap(&self, dimension: Dimension) -> Option<&Gap> {
        self.gaps.iter().find(|g| g.dimension == dimension)
    }
}

pub struct GapAnalyzer {
    engine: MatchingEngine,
    thresholds: GapThresholds,
}

impl GapAnalyzer {
    pub fn new(engine: MatchingEngine, thresholds: GapThresholds) -> Self {
        Self { engine, thresholds }
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn thresholds(&self) -> &GapThresholds {
        &self.thresholds
    }

    /// Score the pair and report its gaps
    pub fn analyze(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> GapReport {
        let result = self.engine.score(candidate, requirement);
        self.report(&result, candidate, requirement)
    }

    /// Gap report for an already computed match result of the same pair
    pub fn report(
        &self,
        result: &MatchResult,
        candidate: &CandidateProfile,
        requirement: &RequirementProfile,
    ) -> GapReport {
        let mut gaps = Vec::new();
        let mut recommendations = Vec::new();

        for (dimension, score) in result.breakdown.iter() {
            if score >= self.thresholds.get(dimension) {
                continue;
            }

            debug!("Gap in {}: {:.2} < {:.2}", dimension, score, self.thresholds.get(dimension));

            let mut gap = Gap {
                dimension,
                score,
                missing: None,
                note: None,
            };

            match dimension {
                Dimension::Skills => {
                    let missing = missing_skills(candidate, requirement);
                    if missing.is_empty() {
                        gap.note = Some("Required skills only partially evidenced".to_string());
                    } else {
                        let suggested: Vec<&str> =
                            missing.iter().take(MAX_SUGGESTED_SKILLS).map(String::as_str).collect();
                        recommendations.push(format!("Learn: {}", suggested.join(", ")));
                        gap.note = Some("Missing required skills".to_string());
                        gap.missing = Some(missing.into_iter().take(MAX_MISSING_SKILLS).collect());
                    }
                }
                Dimension::Major => {
                    gap.note = Some("Different field of study".to_string());
                    recommendations.push("Consider taking courses in the required field".to_string());
                }
                Dimension::Experience => {
                    gap.note = Some("Need more hands-on experience".to_string());
                    recommendations.push("Gain internship or project experience".to_string());
                }
                Dimension::Projects => {
                    gap.note = Some("Need more relevant projects".to_string());
                    recommendations.push("Build projects using required technologies".to_string());
                }
                Dimension::Certification => {
                    let unmet = CertificationScorer::unmet(candidate, requirement);
                    if let Some(cert) = unmet.required.first() {
                        recommendations.push(format!("Get certified: {}", cert));
                    } else if let Some(cert) = unmet.preferred.first() {
                        recommendations.push(format!("Consider earning: {}", cert));
                    }
                    gap.missing = Some(unmet.all());
                }
                Dimension::Gpa => {
                    gap.note = Some("GPA below preferred threshold".to_string());
                }
            }

            gaps.push(gap);
        }

        GapReport {
            overall_score: result.overall_score,
            zone: result.zone,
            breakdown: result.breakdown,
            gaps,
            recommendations,
        }
    }
}

/// Required skills the candidate does not list, in the requirement's spelling and order
fn missing_skills(candidate: &CandidateProfile, requirement: &RequirementProfile) -> Vec<String> {
    let held = LexicalMatcher::new(candidate.skills.all());
    unique_preserving_case(&requirement.skills_required)
        .into_iter()
        .filter(|skill| !held.contains(skill))
        .collect()
}
