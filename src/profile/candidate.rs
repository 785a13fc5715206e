//! Candidate profile as produced by the résumé feature extractor

use super::lenient;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Structured résumé features for one candidate.
///
/// Every field is optional on the wire; absent or `null` values coalesce to the
/// defaults below, which the scorers treat as weak-but-valid evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "lenient::nullable")]
    pub education: Education,

    #[serde(deserialize_with = "lenient::nullable")]
    pub skills: Skills,

    #[serde(deserialize_with = "lenient::nullable_list")]
    pub projects: Vec<Project>,

    #[serde(deserialize_with = "lenient::months")]
    pub experience_months: u32,

    #[serde(deserialize_with = "lenient::nullable_list")]
    pub certifications: Vec<Certification>,

    /// Spoken languages; carried through but not scored
    #[serde(deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub major: String,

    #[serde(deserialize_with = "lenient::gpa")]
    pub gpa: f64,

    #[serde(alias = "university", deserialize_with = "lenient::text")]
    pub institution: String,

    #[serde(deserialize_with = "education_level")]
    pub level: EducationLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(alias = "technical_skills", deserialize_with = "lenient::string_list")]
    pub technical: Vec<String>,

    #[serde(alias = "soft_skills", deserialize_with = "lenient::string_list")]
    pub soft: Vec<String>,
}

impl Skills {
    /// Technical skills followed by soft skills, in declaration order
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.technical.iter().chain(self.soft.iter())
    }
}

/// A candidate project. Accepts either an object or a bare project name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProjectRepr")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl Project {
    pub fn new(name: &str, description: &str, technologies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A certification held by the candidate. Accepts either an object or a bare name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CertificationRepr")]
pub struct Certification {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Certification {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectRepr {
    Name(String),
    Full(ProjectFields),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ProjectFields {
    #[serde(deserialize_with = "lenient::text")]
    name: String,
    #[serde(deserialize_with = "lenient::text")]
    description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    technologies: Vec<String>,
}

impl From<ProjectRepr> for Project {
    fn from(repr: ProjectRepr) -> Self {
        match repr {
            ProjectRepr::Name(name) => Project {
                name,
                ..Project::default()
            },
            ProjectRepr::Full(fields) => Project {
                name: fields.name,
                description: fields.description,
                technologies: fields.technologies,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CertificationRepr {
    Name(String),
    Full(CertificationFields),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CertificationFields {
    #[serde(deserialize_with = "lenient::text")]
    name: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    issuer: Option<String>,
    #[serde(alias = "issue_date", deserialize_with = "lenient::optional_text")]
    date: Option<String>,
}

impl From<CertificationRepr> for Certification {
    fn from(repr: CertificationRepr) -> Self {
        match repr {
            CertificationRepr::Name(name) => Certification {
                name,
                issuer: None,
                date: None,
            },
            CertificationRepr::Full(fields) => Certification {
                name: fields.name,
                issuer: fields.issuer,
                date: fields.date,
            },
        }
    }
}

/// Highest education level on record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    #[default]
    Unspecified,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

fn level_patterns() -> &'static [(Regex, EducationLevel)] {
    static PATTERNS: OnceLock<Vec<(Regex, EducationLevel)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            (
                Regex::new(r"(?i)(\bph\.?\s?d\b|\bdoctor|\bd\.?phil\b|ปริญญาเอก)").expect("Invalid doctorate regex"),
                EducationLevel::Doctorate,
            ),
            (
                Regex::new(r"(?i)(\bmaster|\bm\.?\s?sc\b|\bm\.?\s?eng\b|\bmba\b|ปริญญาโท)").expect("Invalid master regex"),
                EducationLevel::Master,
            ),
            (
                Regex::new(r"(?i)(\bbachelor|\bb\.?\s?sc\b|\bb\.?\s?eng\b|\bb\.?\s?a\b|\bundergraduate\b|ปริญญาตรี)")
                    .expect("Invalid bachelor regex"),
                EducationLevel::Bachelor,
            ),
            (
                Regex::new(r"(?i)(\bdiploma\b|\bassociate\b|\bvocational\b|ปวส)").expect("Invalid diploma regex"),
                EducationLevel::Diploma,
            ),
        ]
    })
}

impl EducationLevel {
    /// Parse a free-text education level ("Bachelor", "B.Sc.", "PhD", ...)
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return EducationLevel::Unspecified;
        }

        level_patterns()
            .iter()
            .find(|(pattern, _)| pattern.is_match(trimmed))
            .map(|(_, level)| *level)
            .unwrap_or(EducationLevel::Unspecified)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::Unspecified => "Unspecified",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::Doctorate => "Doctorate",
        };
        write!(f, "{}", label)
    }
}

fn education_level<'de, D>(deserializer: D) -> Result<EducationLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient::text(deserializer)?;
    Ok(EducationLevel::parse(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_shape_deserializes() {
        let json = r#"{
            "education": {"major": "Information Technology", "gpa": 2.59, "university": "RMUTT", "level": "Bachelor"},
            "skills": {"technical_skills": ["Python", "MySQL"], "soft_skills": ["Teamwork"]},
            "projects": [{"name": "Backend API", "description": "REST API", "technologies": ["Node.js"]}, null],
            "experience_months": 8,
            "languages": ["Thai", "English"],
            "certifications": ["AWS Certified Cloud Practitioner", {"name": "CCNA", "issuer": "Cisco", "issue_date": 2023}]
        }"#;

        let candidate: CandidateProfile = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.education.institution, "RMUTT");
        assert_eq!(candidate.education.level, EducationLevel::Bachelor);
        assert_eq!(candidate.skills.technical, vec!["Python", "MySQL"]);
        assert_eq!(candidate.skills.soft, vec!["Teamwork"]);
        assert_eq!(candidate.projects.len(), 1);
        assert_eq!(candidate.certifications.len(), 2);
        assert_eq!(candidate.certifications[0].name, "AWS Certified Cloud Practitioner");
        assert_eq!(candidate.certifications[1].date.as_deref(), Some("2023"));
    }

    #[test]
    fn test_empty_and_null_records() {
        let empty: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CandidateProfile::default());

        let nulls: CandidateProfile = serde_json::from_str(
            r#"{"education": null, "skills": null, "projects": null, "experience_months": null, "certifications": null}"#,
        )
        .unwrap();
        assert_eq!(nulls, CandidateProfile::default());
    }

    #[test]
    fn test_wrongly_typed_entries_are_coalesced() {
        let candidate: CandidateProfile = serde_json::from_str(
            r#"{
                "education": "Bachelor of IT",
                "skills": 5,
                "projects": ["Portfolio website", 42, {"name": "Chat bot", "technologies": "Python, Redis"}],
                "certifications": [2023, "CCNA", false],
                "experience_months": 3
            }"#,
        )
        .unwrap();

        assert_eq!(candidate.education, Education::default());
        assert_eq!(candidate.skills, Skills::default());
        assert_eq!(candidate.projects.len(), 2);
        assert_eq!(candidate.projects[0], Project::new("Portfolio website", "", &[]));
        assert_eq!(candidate.projects[1].technologies, vec!["Python", " Redis"]);
        assert_eq!(candidate.certifications, vec![Certification::named("CCNA")]);
        assert_eq!(candidate.experience_months, 3);

        let scalar_lists: CandidateProfile =
            serde_json::from_str(r#"{"projects": "none", "certifications": {"name": "CCNA"}}"#).unwrap();
        assert!(scalar_lists.projects.is_empty());
        assert!(scalar_lists.certifications.is_empty());
    }

    #[test]
    fn test_education_level_parsing() {
        assert_eq!(EducationLevel::parse("Bachelor of Science"), EducationLevel::Bachelor);
        assert_eq!(EducationLevel::parse("B.Sc."), EducationLevel::Bachelor);
        assert_eq!(EducationLevel::parse("master's degree"), EducationLevel::Master);
        assert_eq!(EducationLevel::parse("PhD"), EducationLevel::Doctorate);
        assert_eq!(EducationLevel::parse("ปริญญาตรี"), EducationLevel::Bachelor);
        assert_eq!(EducationLevel::parse("High Diploma"), EducationLevel::Diploma);
        assert_eq!(EducationLevel::parse(""), EducationLevel::Unspecified);
        assert_eq!(EducationLevel::parse("Bootcamp"), EducationLevel::Unspecified);
    }

    #[test]
    fn test_all_skills_order() {
        let skills = Skills {
            technical: vec!["Rust".into()],
            soft: vec!["Communication".into()],
        };
        let all: Vec<&String> = skills.all().collect();
        assert_eq!(all, vec!["Rust", "Communication"]);
    }
}
