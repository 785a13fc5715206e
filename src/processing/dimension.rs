//! The six scored dimensions and the per-dimension breakdown

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feature names in the order the acceptance classifier expects them
pub const FEATURE_NAMES: [&str; 6] = ["skills", "major", "experience", "projects", "certification", "gpa"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Skills,
    Major,
    Experience,
    Projects,
    Certification,
    Gpa,
}

impl Dimension {
    /// Canonical order
    pub const ALL: [Dimension; 6] = [
        Dimension::Skills,
        Dimension::Major,
        Dimension::Experience,
        Dimension::Projects,
        Dimension::Certification,
        Dimension::Gpa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Skills => "skills",
            Dimension::Major => "major",
            Dimension::Experience => "experience",
            Dimension::Projects => "projects",
            Dimension::Certification => "certification",
            Dimension::Gpa => "gpa",
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Skills => "Skills",
            Dimension::Major => "Major",
            Dimension::Experience => "Experience",
            Dimension::Projects => "Projects",
            Dimension::Certification => "Certification",
            Dimension::Gpa => "GPA",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| format!("Unknown dimension: {}", s))
    }
}

/// Round to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-dimension scores on a 0-100 scale.
///
/// Field names are the stable feature names consumed downstream; do not rename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub skills: f64,
    pub major: f64,
    pub experience: f64,
    pub projects: f64,
    pub certification: f64,
    pub gpa: f64,
}

impl Breakdown {
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

    pub fn set(&mut self, dimension: Dimension, score: f64) {
        match dimension {
            Dimension::Skills => self.skills = score,
            Dimension::Major => self.major = score,
            Dimension::Experience => self.experience = score,
            Dimension::Projects => self.projects = score,
            Dimension::Certification => self.certification = score,
            Dimension::Gpa => self.gpa = score,
        }
    }

    /// `(dimension, score)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Scores ordered as [`FEATURE_NAMES`]
    pub fn feature_vector(&self) -> [f64; 6] {
        Dimension::ALL.map(|d| self.get(d))
    }

    /// Dimensions scoring strictly below `limit`, in canonical order
    pub fn below(&self, limit: f64) -> Vec<Dimension> {
        self.iter().filter(|(_, s)| *s < limit).map(|(d, _)| d).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_names_match_dimension_order() {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn test_breakdown_serializes_stable_names() {
        let breakdown = Breakdown {
            skills: 60.0,
            major: 80.0,
            experience: 90.0,
            projects: 70.0,
            certification: 100.0,
            gpa: 50.0,
        };

        let value = serde_json::to_value(breakdown).unwrap();
        for name in FEATURE_NAMES {
            assert!(value.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(breakdown.feature_vector(), [60.0, 80.0, 90.0, 70.0, 100.0, 50.0]);
        assert_eq!(breakdown.below(60.0), vec![Dimension::Gpa]);
    }

    #[test]
    fn test_dimension_from_str() {
        assert_eq!("GPA".parse::<Dimension>().unwrap(), Dimension::Gpa);
        assert!("salary".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(74.499999), 74.5);
        assert_eq!(round2(23.333333), 23.33);
    }
}
