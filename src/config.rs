//! Configuration management for the intern screener

use crate::error::{Result, ScreenerError};
use crate::processing::engine::EngineConfig;
use crate::processing::gaps::GapThresholds;
use crate::processing::weights::{ScoringWeights, SkillBlend};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_EMBEDDING_MODEL: &str = "minishlab/potion-base-8M";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub models: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub skill_blend: SkillBlend,
    pub gap_thresholds: GapThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// HuggingFace repo ID or local folder of a Model2Vec model
    pub embedding_model: String,
    pub enable_embeddings: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            enable_embeddings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                warn!("Could not write default config to {}: {}", config_path.display(), e);
            } else {
                info!("Created default config at {}", config_path.display());
            }
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("intern-screener")
            .join("config.toml")
    }

    /// Scoring parameters for [`crate::MatchingEngine`]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            weights: self.scoring.weights,
            skill_blend: self.scoring.skill_blend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[models]
enable_embeddings = false

[scoring.gap_thresholds]
major = 60.0

[output]
format = "markdown"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.models.enable_embeddings);
        assert_eq!(config.models.embedding_model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(config.scoring.gap_thresholds.major, 60.0);
        assert_eq!(config.scoring.gap_thresholds.skills, 70.0);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.scoring.weights, ScoringWeights::default());
    }

    #[test]
    fn test_unbalanced_weights_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[scoring.weights]
skills = 0.5
major = 0.5
experience = 0.5
projects = 0.0
certification = 0.0
gpa = 0.0
"#,
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ScreenerError::Configuration(_)));
        assert!(err.to_string().contains("sum to 1.0"));
    }
}
