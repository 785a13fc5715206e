//! Report envelope handed to the formatters

use crate::processing::dimension::Dimension;
use crate::processing::engine::MatchResult;
use crate::processing::gaps::GapReport;
use crate::processing::zone::{GREEN_THRESHOLD, IMPROVE_BELOW};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A match result, its optional gap analysis and run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub result: MatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaps: Option<GapReport>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the screener used
    pub screener_version: String,

    /// Embedding model behind semantic skill matching, if any
    pub embedding_model: Option<String>,

    /// Candidate record scored
    pub candidate_file: String,

    /// Requirement record scored against
    pub job_file: String,

    pub job_title: String,
}

impl ReportMetadata {
    pub fn new(candidate_file: &str, job_file: &str, job_title: &str, embedding_model: Option<&str>) -> Self {
        Self {
            generated_at: Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            embedding_model: embedding_model.map(str::to_string),
            candidate_file: candidate_file.to_string(),
            job_file: job_file.to_string(),
            job_title: job_title.to_string(),
        }
    }

    pub fn matching_mode(&self) -> String {
        match &self.embedding_model {
            Some(model) => format!("exact + semantic ({})", model),
            None => "exact only".to_string(),
        }
    }
}

impl ScreeningReport {
    pub fn new(result: MatchResult, gaps: Option<GapReport>, metadata: ReportMetadata) -> Self {
        Self { result, gaps, metadata }
    }

    /// Dimensions at or above the green threshold
    pub fn strengths(&self) -> Vec<Dimension> {
        self.result
            .breakdown
            .iter()
            .filter(|(_, score)| *score >= GREEN_THRESHOLD)
            .map(|(d, _)| d)
            .collect()
    }

    /// Dimensions below the "improve" threshold
    pub fn improvement_areas(&self) -> Vec<Dimension> {
        self.result.breakdown.below(IMPROVE_BELOW)
    }

    /// Rows of (dimension, score, weight in percent, rationale) in canonical order
    pub fn rows(&self) -> Vec<(Dimension, f64, f64, &str)> {
        self.result
            .breakdown
            .iter()
            .map(|(d, score)| {
                (
                    d,
                    score,
                    self.result.weights.get(d) * 100.0,
                    self.result.note(d).unwrap_or(""),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::engine::{EngineConfig, MatchingEngine};
    use crate::profile::{CandidateProfile, RequirementProfile};

    #[test]
    fn test_strengths_and_improvement_areas() {
        let engine = MatchingEngine::new(EngineConfig::default()).unwrap();
        let result = engine.score(&CandidateProfile::default(), &RequirementProfile::default());
        let report = ScreeningReport::new(result, None, ReportMetadata::new("a.json", "b.toml", "", None));

        // default candidate: gpa 0 -> 30, projects 0 -> 40, experience 0 -> 60
        assert_eq!(
            report.strengths(),
            vec![Dimension::Skills, Dimension::Major, Dimension::Certification]
        );
        assert_eq!(report.improvement_areas(), vec![Dimension::Projects, Dimension::Gpa]);
        assert_eq!(report.rows().len(), 6);
        assert_eq!(report.metadata.matching_mode(), "exact only");
    }
}
