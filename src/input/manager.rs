//! Loading candidate and requirement records from disk

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::profile::{CandidateProfile, RequirementProfile};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// Async record loader with an optional per-path content cache
pub struct ProfileLoader {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_candidate(&mut self, path: &Path) -> Result<CandidateProfile> {
        self.load(path).await
    }

    pub async fn load_requirement(&mut self, path: &Path) -> Result<RequirementProfile> {
        self.load(path).await
    }

    /// Read and deserialize a `.json` or `.toml` record
    pub async fn load<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let file_type = FileType::from_path(path);
        if file_type == FileType::Unknown {
            return Err(ScreenerError::UnsupportedFormat(format!(
                "Expected a .json or .toml record: {}",
                path.display()
            )));
        }

        let content = self.read(path).await?;
        Self::parse_record(&content, file_type)
    }

    async fn read(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                debug!("Using cached record for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading record: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    pub fn parse_record<T: DeserializeOwned>(content: &str, file_type: FileType) -> Result<T> {
        match file_type {
            FileType::Json => Ok(serde_json::from_str(content)?),
            FileType::Toml => Ok(toml::from_str(content)?),
            FileType::Unknown => Err(ScreenerError::UnsupportedFormat(
                "Unknown record format".to_string(),
            )),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_json_and_toml() {
        let dir = TempDir::new().unwrap();
        let candidate_path = dir.path().join("candidate.json");
        let job_path = dir.path().join("job.toml");

        std::fs::write(
            &candidate_path,
            r#"{"education": {"major": "Computer Science", "gpa": "3.4"}, "experience_months": 6}"#,
        )
        .unwrap();
        std::fs::write(
            &job_path,
            "title = \"Backend Intern\"\nskills_required = [\"Rust\", \"SQL\"]\n",
        )
        .unwrap();

        let mut loader = ProfileLoader::new();
        let candidate = loader.load_candidate(&candidate_path).await.unwrap();
        let requirement = loader.load_requirement(&job_path).await.unwrap();

        assert_eq!(candidate.education.gpa, 3.4);
        assert_eq!(candidate.experience_months, 6);
        assert_eq!(requirement.title, "Backend Intern");
        assert_eq!(requirement.skills_required, vec!["Rust", "SQL"]);
        assert_eq!(loader.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_rejects_unknown_extension_and_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut loader = ProfileLoader::new().with_cache(false);

        let pdf = dir.path().join("resume.pdf");
        std::fs::write(&pdf, "%PDF").unwrap();
        assert!(matches!(
            loader.load_candidate(&pdf).await,
            Err(ScreenerError::UnsupportedFormat(_))
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            loader.load_candidate(&missing).await,
            Err(ScreenerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<CandidateProfile> = ProfileLoader::parse_record("{not json", FileType::Json);
        assert!(matches!(result, Err(ScreenerError::Serialization(_))));
    }
}
