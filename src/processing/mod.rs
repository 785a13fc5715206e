//! Matching and gap-analysis engine

pub mod dimension;
pub mod embeddings;
pub mod engine;
pub mod gaps;
pub mod lexical;
pub mod scorers;
pub mod text;
pub mod weights;
pub mod zone;

pub use dimension::{Breakdown, Dimension, FEATURE_NAMES};
pub use embeddings::{SimilarityAdapter, TextEmbedder};
pub use engine::{DimensionNote, EngineConfig, MatchResult, MatchingEngine};
pub use gaps::{Gap, GapAnalyzer, GapReport, GapThresholds};
pub use weights::{ScoringWeights, SkillBlend};
pub use zone::Zone;
