//! Education/major scorer: exact, related-field, keyword, unrelated tiers

use super::{DimensionScore, DimensionScorer};
use crate::processing::dimension::Dimension;
use crate::processing::text::{contains_alias, normalize};
use crate::profile::{CandidateProfile, RequirementProfile};
use log::debug;

pub const EXACT_MAJOR_SCORE: f64 = 100.0;
pub const RELATED_MAJOR_SCORE: f64 = 80.0;
pub const KEYWORD_MAJOR_SCORE: f64 = 50.0;
pub const UNRELATED_MAJOR_SCORE: f64 = 30.0;

/// Curated groups of mutually similar fields of study
struct FieldGroup {
    name: &'static str,
    aliases: &'static [&'static str],
}

const RELATED_FIELDS: &[FieldGroup] = &[
    FieldGroup {
        name: "computing",
        aliases: &[
            "computer science",
            "cs",
            "วิทยาการคอมพิวเตอร์",
            "information technology",
            "it",
            "เทคโนโลยีสารสนเทศ",
            "software engineering",
            "se",
            "วิศวกรรมซอฟต์แวร์",
            "computer engineering",
            "ce",
            "วิศวกรรมคอมพิวเตอร์",
            "data science",
            "ds",
            "วิทยาศาสตร์ข้อมูล",
        ],
    },
    FieldGroup {
        name: "electrical",
        aliases: &[
            "electrical engineering",
            "electronics engineering",
            "electronic engineering",
            "ee",
            "วิศวกรรมไฟฟ้า",
        ],
    },
    FieldGroup {
        name: "business",
        aliases: &[
            "business administration",
            "business",
            "management",
            "marketing",
            "accounting",
            "finance",
            "bba",
            "บริหารธุรกิจ",
        ],
    },
    FieldGroup {
        name: "mathematics",
        aliases: &[
            "mathematics",
            "applied mathematics",
            "statistics",
            "math",
            "คณิตศาสตร์",
            "สถิติ",
        ],
    },
];

const RELATED_KEYWORDS: &[&str] = &["computer", "engineering", "technology", "software", "data", "digital"];

#[derive(Debug, Default)]
pub struct MajorScorer;

impl MajorScorer {
    pub fn new() -> Self {
        Self
    }

    fn shared_group(candidate_major: &str, required_major: &str) -> Option<&'static str> {
        RELATED_FIELDS
            .iter()
            .find(|group| {
                let in_group = |major: &str| group.aliases.iter().any(|alias| contains_alias(major, alias));
                in_group(candidate_major) && in_group(required_major)
            })
            .map(|group| group.name)
    }

    fn has_related_keyword(major: &str) -> bool {
        RELATED_KEYWORDS.iter().any(|kw| major.contains(kw))
    }
}

impl DimensionScorer for MajorScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Major
    }

    fn score(&self, candidate: &CandidateProfile, requirement: &RequirementProfile) -> DimensionScore {
        if !requirement.has_major_constraint() {
            return DimensionScore::new(EXACT_MAJOR_SCORE, "No major requirement");
        }

        let required_major = normalize(&requirement.major_required);
        let candidate_major = normalize(&candidate.education.major);

        if candidate_major.is_empty() {
            return DimensionScore::new(UNRELATED_MAJOR_SCORE, "No major on record");
        }

        if candidate_major == required_major
            || candidate_major.contains(&required_major)
            || required_major.contains(&candidate_major)
        {
            debug!("Exact major match: {}", candidate_major);
            return DimensionScore::new(EXACT_MAJOR_SCORE, format!("Major matches '{}'", requirement.major_required.trim()));
        }

        if let Some(group) = Self::shared_group(&candidate_major, &required_major) {
            debug!("Similar major match: {} ≈ {} ({})", candidate_major, required_major, group);
            return DimensionScore::new(
                RELATED_MAJOR_SCORE,
                format!("'{}' is a related field ({})", candidate.education.major.trim(), group),
            );
        }

        if Self::has_related_keyword(&candidate_major) && Self::has_related_keyword(&required_major) {
            debug!("Related major: {}", candidate_major);
            return DimensionScore::new(
                KEYWORD_MAJOR_SCORE,
                format!("'{}' is loosely related", candidate.education.major.trim()),
            );
        }

        debug!("Different major: {} vs {}", candidate_major, required_major);
        DimensionScore::new(
            UNRELATED_MAJOR_SCORE,
            format!("'{}' differs from '{}'", candidate.education.major.trim(), requirement.major_required.trim()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major_score(candidate_major: &str, required_major: &str) -> f64 {
        let mut candidate = CandidateProfile::default();
        candidate.education.major = candidate_major.to_string();
        let requirement = RequirementProfile {
            major_required: required_major.to_string(),
            ..RequirementProfile::default()
        };
        MajorScorer::new().score(&candidate, &requirement).score
    }

    #[test]
    fn test_major_tiers() {
        let cases = [
            ("Computer Science", "computer science", 100.0),
            ("Bachelor of Computer Science", "Computer Science", 100.0),
            ("Information Technology", "Computer Science", 80.0),
            ("Data Science", "Software Engineering", 80.0),
            ("B.Sc. (CS)", "Information Technology", 80.0),
            ("Digital Media", "Computer Science", 50.0),
            ("Mechanical Engineering", "Computer Engineering", 50.0),
            ("Fine Arts", "Computer Science", 30.0),
            ("Marketing", "Business Administration", 80.0),
        ];

        for (candidate_major, required_major, expected) in cases {
            assert_eq!(
                major_score(candidate_major, required_major),
                expected,
                "{} vs {}",
                candidate_major,
                required_major
            );
        }
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(major_score("Fine Arts", ""), 100.0);
        assert_eq!(major_score("Fine Arts", "  "), 100.0);
        assert_eq!(major_score("", "Computer Science"), 30.0);
        assert_eq!(major_score("   ", "Computer Science"), 30.0);
    }

    #[test]
    fn test_short_alias_needs_whole_word() {
        // "digital" contains "it" but is not Information Technology
        assert!(MajorScorer::shared_group("digital arts", "computer science").is_none());
    }
}
