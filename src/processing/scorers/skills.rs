//! Skill scorer: exact set containment blended with embedding similarity

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::processing::embeddings::{row_maxima, SimilarityAdapter};
use crate::processing::lexical::LexicalMatcher;
use crate::processing::weights::SkillBlend;
use crate::profile::{CandidateProfile, RequirementProfile};
use log::{debug, warn};

/// Detailed outcome of skill matching
#[derive(Debug, Clone, PartialEq)]
pub struct SkillEvaluation {
    pub score: f64,
    pub exact_score: f64,
    pub semantic_score: f64,
    /// False when the semantic half fell back to the exact score
    pub semantic_used: bool,
    /// Normalized required skills found verbatim in the candidate's skills
    pub matched: Vec<String>,
    /// Normalized required skills absent from the candidate's skills
    pub missing: Vec<String>,
}

pub struct SkillScorer {
    blend: SkillBlend,
    adapter: Option<SimilarityAdapter>,
}

impl SkillScorer {
    pub fn new(blend: SkillBlend) -> Self {
        Self { blend, adapter: None }
    }

    pub fn with_adapter(mut self, adapter: SimilarityAdapter) -> Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn evaluate(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> SkillEvaluation {
        let required = LexicalMatcher::new(&requirement.skills_required);
        let held = LexicalMatcher::new(candidate.skills.all());

        if required.is_empty() {
            return SkillEvaluation {
                score: 100.0,
                exact_score: 100.0,
                semantic_score: 100.0,
                semantic_used: false,
                matched: Vec::new(),
                missing: Vec::new(),
            };
        }

        if held.is_empty() {
            return SkillEvaluation {
                score: 0.0,
                exact_score: 0.0,
                semantic_score: 0.0,
                semantic_used: false,
                matched: Vec::new(),
                missing: required.terms().to_vec(),
            };
        }

        let matched = required.overlap(&held);
        let missing = required.difference(&held);
        let exact_score = 100.0 * matched.len() as f64 / required.len() as f64;

        let semantic = self.semantic_score(required.terms(), held.terms());
        let semantic_used = semantic.is_some();
        let semantic_score = semantic.unwrap_or(exact_score);

        let score = self.blend.exact_weight * exact_score + self.blend.semantic_weight * semantic_score;

        debug!(
            "Skills score: {:.1}% (exact: {:.1}%, semantic: {:.1}%, {}/{} exact matches)",
            score,
            exact_score,
            semantic_score,
            matched.len(),
            required.len()
        );

        SkillEvaluation {
            score,
            exact_score,
            semantic_score,
            semantic_used,
            matched,
            missing,
        }
    }

    /// `None` when no adapter is configured or the adapter failed
    fn semantic_score(&self, required: &[String], held: &[String]) -> Option<f64> {
        let adapter = self.adapter.as_ref()?;

        match adapter.similarity(required, held) {
            Ok(matrix) => {
                let threshold = self.blend.semantic_threshold;
                let semantic_matches = row_maxima(&matrix)
                    .into_iter()
                    .filter(|similarity| *similarity > threshold)
                    .count();

                debug!(
                    "Semantic matches (threshold {}): {}/{}",
                    threshold,
                    semantic_matches,
                    required.len()
                );

                Some(100.0 * semantic_matches as f64 / required.len() as f64)
            }
            Err(e) => {
                warn!("Semantic skill matching failed, using exact score: {}", e);
                None
            }
        }
    }
}

impl DimensionScorer for SkillScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Skills
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        let evaluation = self.evaluate(candidate, requirement);
        let total = evaluation.matched.len() + evaluation.missing.len();

        let rationale = if total == 0 {
            "No required skills".to_string()
        } else if evaluation.semantic_used {
            format!(
                "{}/{} required skills matched exactly; semantic coverage {:.0}%",
                evaluation.matched.len(),
                total,
                evaluation.semantic_score
            )
        } else {
            format!("{}/{} required skills matched exactly", evaluation.matched.len(), total)
        };

        DimensionScore::new(evaluation.score, rationale)
    }
}
