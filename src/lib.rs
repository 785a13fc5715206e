//! Intern screener library
//!
//! Scores a candidate profile against a job's requirements across six dimensions
//! (skills, major, experience, projects, certification, GPA), classifies the weighted
//! result into a green/yellow/red zone and reports actionable gaps.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod profile;

pub use config::Config;
pub use error::{Result, ScreenerError};
pub use processing::{
    Breakdown, Dimension, EngineConfig, Gap, GapAnalyzer, GapReport, GapThresholds, MatchResult,
    MatchingEngine, ScoringWeights, SkillBlend, TextEmbedder, Zone, FEATURE_NAMES,
};
pub use profile::{CandidateProfile, RequirementProfile};
