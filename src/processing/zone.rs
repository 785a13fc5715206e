//! Traffic-light classification of the overall score and the recommendation sentence

use crate::processing::dimension::{Breakdown, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const GREEN_THRESHOLD: f64 = 80.0;
pub const YELLOW_THRESHOLD: f64 = 50.0;

/// Dimensions below this are named as areas to improve in the yellow zone
pub const IMPROVE_BELOW: f64 = 60.0;
/// Dimensions below this are named as critical gaps in the red zone
pub const CRITICAL_BELOW: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Green,
    Yellow,
    Red,
}

impl Zone {
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= GREEN_THRESHOLD {
            Zone::Green
        } else if overall_score >= YELLOW_THRESHOLD {
            Zone::Yellow
        } else {
            Zone::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn join(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recommendation sentence for a scored match
pub fn narrate(overall_score: f64, zone: Zone, breakdown: &Breakdown) -> String {
    match zone {
        Zone::Green => format!("Highly recommended - Strong match ({:.1}%)", overall_score),
        Zone::Yellow => {
            let weak = breakdown.below(IMPROVE_BELOW);
            if weak.is_empty() {
                format!("Consider for interview - Moderate match ({:.1}%)", overall_score)
            } else {
                format!("Consider for interview - Improve {} ({:.1}%)", join(&weak), overall_score)
            }
        }
        Zone::Red => {
            let critical = breakdown.below(CRITICAL_BELOW);
            if critical.is_empty() {
                format!("Not recommended - Overall mismatch ({:.1}%)", overall_score)
            } else {
                format!(
                    "Not recommended - Significant gaps in {} ({:.1}%)",
                    join(&critical),
                    overall_score
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(Zone::from_score(100.0), Zone::Green);
        assert_eq!(Zone::from_score(80.0), Zone::Green);
        assert_eq!(Zone::from_score(79.99), Zone::Yellow);
        assert_eq!(Zone::from_score(50.0), Zone::Yellow);
        assert_eq!(Zone::from_score(49.99), Zone::Red);
        assert_eq!(Zone::from_score(0.0), Zone::Red);
    }

    #[test]
    fn test_zone_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Zone::Yellow).unwrap(), "\"yellow\"");
        assert_eq!(serde_json::from_str::<Zone>("\"red\"").unwrap(), Zone::Red);
    }

    #[test]
    fn test_narration() {
        let breakdown = Breakdown {
            skills: 55.0,
            major: 80.0,
            experience: 90.0,
            projects: 100.0,
            certification: 100.0,
            gpa: 35.0,
        };

        assert_eq!(
            narrate(85.0, Zone::Green, &breakdown),
            "Highly recommended - Strong match (85.0%)"
        );
        assert_eq!(
            narrate(72.34, Zone::Yellow, &breakdown),
            "Consider for interview - Improve skills, gpa (72.3%)"
        );
        assert_eq!(
            narrate(45.0, Zone::Red, &breakdown),
            "Not recommended - Significant gaps in gpa (45.0%)"
        );

        let even = Breakdown {
            skills: 65.0,
            major: 65.0,
            experience: 65.0,
            projects: 65.0,
            certification: 65.0,
            gpa: 65.0,
        };
        assert_eq!(
            narrate(65.0, Zone::Yellow, &even),
            "Consider for interview - Moderate match (65.0%)"
        );
        assert_eq!(
            narrate(45.0, Zone::Red, &even),
            "Not recommended - Overall mismatch (45.0%)"
        );
    }
}
