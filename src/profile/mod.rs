//! Candidate and requirement records handed to the matching engine

pub mod candidate;
pub mod lenient;
pub mod requirement;

pub use candidate::{CandidateProfile, Certification, Education, EducationLevel, Project, Skills};
pub use requirement::RequirementProfile;
