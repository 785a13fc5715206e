//! Dimension weights and skill-blend parameters

use crate::error::{Result, ScreenerError};
use crate::processing::dimension::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Allowed deviation of a weight table's sum from 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weight of each dimension in the overall score.
///
/// Deserializes from a name-keyed table and is validated on the way in, so a
/// config file with a missing, unknown or unbalanced entry is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>")]
pub struct ScoringWeights {
    pub skills: f64,
    pub major: f64,
    pub experience: f64,
    pub projects: f64,
    pub certification: f64,
    pub gpa: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.30,
            major: 0.25,
            experience: 0.15,
            projects: 0.15,
            certification: 0.10,
            gpa: 0.05,
        }
    }
}

impl ScoringWeights {
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

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }

    /// Every weight finite and non-negative, total within [`WEIGHT_TOLERANCE`] of 1.0
    pub fn validate(&self) -> Result<()> {
        for dimension in Dimension::ALL {
            let weight = self.get(dimension);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScreenerError::InvalidWeights(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    dimension, weight
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ScreenerError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.6}",
                sum
            )));
        }

        Ok(())
    }

    /// Build from a name-keyed mapping; every dimension must be present exactly once
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self> {
        let mut values: HashMap<Dimension, f64> = HashMap::new();

        for (name, weight) in map {
            let dimension: Dimension = name
                .parse()
                .map_err(|e: String| ScreenerError::InvalidWeights(e))?;
            if values.insert(dimension, *weight).is_some() {
                return Err(ScreenerError::InvalidWeights(format!(
                    "dimension '{}' given more than once",
                    dimension
                )));
            }
        }

        let lookup = |dimension: Dimension| {
            values.get(&dimension).copied().ok_or_else(|| {
                ScreenerError::InvalidWeights(format!("missing weight for '{}'", dimension))
            })
        };

        let weights = Self {
            skills: lookup(Dimension::Skills)?,
            major: lookup(Dimension::Major)?,
            experience: lookup(Dimension::Experience)?,
            projects: lookup(Dimension::Projects)?,
            certification: lookup(Dimension::Certification)?,
            gpa: lookup(Dimension::Gpa)?,
        };

        weights.validate()?;
        Ok(weights)
    }
}

impl TryFrom<HashMap<String, f64>> for ScoringWeights {
    type Error = ScreenerError;

    fn try_from(map: HashMap<String, f64>) -> Result<Self> {
        Self::from_map(&map)
    }
}

/// Blend of exact and semantic skill matching
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillBlend {
    pub exact_weight: f64,
    pub semantic_weight: f64,
    /// A required skill counts as semantically matched above this cosine similarity
    pub semantic_threshold: f32,
}

impl Default for SkillBlend {
    fn default() -> Self {
        Self {
            exact_weight: 0.6,
            semantic_weight: 0.4,
            semantic_threshold: 0.5,
        }
    }
}

impl SkillBlend {
    pub fn validate(&self) -> Result<()> {
        let finite = self.exact_weight.is_finite() && self.semantic_weight.is_finite();
        if !finite || self.exact_weight < 0.0 || self.semantic_weight < 0.0 {
            return Err(ScreenerError::InvalidWeights(
                "skill blend weights must be non-negative numbers".to_string(),
            ));
        }

        let sum = self.exact_weight + self.semantic_weight;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ScreenerError::InvalidWeights(format!(
                "skill blend weights must sum to 1.0, got {:.6}",
                sum
            )));
        }

        if !(-1.0..=1.0).contains(&self.semantic_threshold) {
            return Err(ScreenerError::InvalidWeights(format!(
                "semantic threshold must be within [-1, 1], got {}",
                self.semantic_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < WEIGHT_TOLERANCE);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let weights = ScoringWeights {
            gpa: 0.10,
            ..ScoringWeights::default()
        };
        assert!(matches!(weights.validate(), Err(ScreenerError::InvalidWeights(_))));

        let negative = ScoringWeights {
            skills: 0.40,
            gpa: -0.05,
            ..ScoringWeights::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_from_map() {
        let map = weight_map(&[
            ("skills", 0.5),
            ("major", 0.1),
            ("experience", 0.1),
            ("projects", 0.1),
            ("certification", 0.1),
            ("gpa", 0.1),
        ]);
        let weights = ScoringWeights::from_map(&map).unwrap();
        assert_eq!(weights.skills, 0.5);

        let missing = weight_map(&[("skills", 0.5), ("major", 0.5)]);
        assert!(matches!(ScoringWeights::from_map(&missing), Err(ScreenerError::InvalidWeights(_))));

        let mut unknown = map.clone();
        unknown.insert("salary".to_string(), 0.0);
        assert!(ScoringWeights::from_map(&unknown).is_err());
    }

    #[test]
    fn test_weights_toml_validation() {
        let valid: ScoringWeights = toml::from_str(
            "skills = 0.3\nmajor = 0.25\nexperience = 0.15\nprojects = 0.15\ncertification = 0.1\ngpa = 0.05",
        )
        .unwrap();
        assert_eq!(valid, ScoringWeights::default());

        let omitted = toml::from_str::<ScoringWeights>("skills = 1.0");
        assert!(omitted.is_err());
    }

    #[test]
    fn test_skill_blend_validation() {
        assert!(SkillBlend::default().validate().is_ok());

        let lopsided = SkillBlend {
            exact_weight: 0.7,
            ..SkillBlend::default()
        };
        assert!(lopsided.validate().is_err());

        let threshold = SkillBlend {
            semantic_threshold: 1.5,
            ..SkillBlend::default()
        };
        assert!(threshold.validate().is_err());
    }
}
