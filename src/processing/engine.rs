//! Scoring orchestrator: runs the six dimension scorers and combines them

use crate::error::Result;
use crate::processing::dimension::{round2, Breakdown, Dimension};
use crate::processing::embeddings::{SimilarityAdapter, TextEmbedder};
use crate::processing::scorers::{
    CertificationScorer, DimensionScorer, ExperienceScorer, GpaScorer, MajorScorer, ProjectScorer,
    SkillScorer,
};
use crate::processing::weights::{ScoringWeights, SkillBlend};
use crate::processing::zone::{narrate, Zone};
use crate::profile::{CandidateProfile, RequirementProfile};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tunable scoring parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub skill_blend: SkillBlend,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.skill_blend.validate()
    }
}

/// One dimension's explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionNote {
    pub dimension: Dimension,
    pub detail: String,
}

/// Outcome of scoring one candidate against one requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted sum of the breakdown, 0-100, two decimals
    pub overall_score: f64,
    pub breakdown: Breakdown,
    pub zone: Zone,
    pub weights: ScoringWeights,
    pub recommendation: String,
    /// One note per dimension, canonical order
    pub rationale: Vec<DimensionNote>,
}

impl MatchResult {
    pub fn note(&self, dimension: Dimension) -> Option<&str> {
        self.rationale
            .iter()
            .find(|n| n.dimension == dimension)
            .map(|n| n.detail.as_str())
    }
}

/// Stateless matching engine; safe to share between threads behind an `Arc`
pub struct MatchingEngine {
    config: EngineConfig,
    scorers: Vec<Box<dyn DimensionScorer>>,
    embedding_model: Option<String>,
}

impl MatchingEngine {
    /// Exact-match-only engine
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Engine whose skill scorer blends in embedding similarity
    pub fn with_embedder(config: EngineConfig, embedder: Arc<dyn TextEmbedder>) -> Result<Self> {
        Self::build(config, Some(embedder))
    }

    fn build(config: EngineConfig, embedder: Option<Arc<dyn TextEmbedder>>) -> Result<Self> {
        config.validate()?;

        let (skills, embedding_model) = match embedder {
            Some(embedder) => {
                let adapter = SimilarityAdapter::new(embedder);
                let name = adapter.model_name().to_string();
                (SkillScorer::new(config.skill_blend).with_adapter(adapter), Some(name))
            }
            None => (SkillScorer::new(config.skill_blend), None),
        };

        match &embedding_model {
            Some(model) => info!("Matching engine ready (semantic skills via {})", model),
            None => info!("Matching engine ready (exact skill matching only)"),
        }

        let scorers: Vec<Box<dyn DimensionScorer>> = vec![
            Box::new(skills),
            Box::new(MajorScorer::new()),
            Box::new(ExperienceScorer::new()),
            Box::new(ProjectScorer::new()),
            Box::new(CertificationScorer::new()),
            Box::new(GpaScorer::new()),
        ];

        Ok(Self {
            config,
            scorers,
            embedding_model,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.config.weights
    }

    pub fn semantic_enabled(&self) -> bool {
        self.embedding_model.is_some()
    }

    pub fn embedding_model(&self) -> Option<&str> {
        self.embedding_model.as_deref()
    }

    /// Score a candidate against a requirement. Missing data lowers scores, it never fails.
    pub fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> MatchResult {
        let mut breakdown = Breakdown::default();
        let mut rationale = Vec::with_capacity(self.scorers.len());

        for scorer in &self.scorers {
            let dimension = scorer.dimension();
            let result = scorer.score(candidate, requirement);
            let score = round2(result.score);

            debug!("{} score: {:.2}% ({})", dimension.label(), score, result.rationale);

            breakdown.set(dimension, score);
            rationale.push(DimensionNote {
                dimension,
                detail: result.rationale,
            });
        }

        let weights = self.config.weights;
        let overall_score = round2(breakdown.iter().map(|(d, s)| s * weights.get(d)).sum());
        let zone = Zone::from_score(overall_score);
        let recommendation = narrate(overall_score, zone, &breakdown);

        info!(
            "Match score for '{}': {:.2}% ({})",
            requirement.title, overall_score, zone
        );

        MatchResult {
            overall_score,
            breakdown,
            zone,
            weights,
            recommendation,
            rationale,
        }
    }
}
