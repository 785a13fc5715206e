//! Embedding similarity adapter for semantic skill matching

use crate::config::ModelConfig;
use crate::error::{Result, ScreenerError};
use log::{info, warn};
use ndarray::Array2;
use std::sync::Arc;

/// Text-to-vector capability backing semantic skill matching.
///
/// Implementations must be read-only after construction; one instance is shared by
/// every concurrent scoring call.
pub trait TextEmbedder: Send + Sync {
    /// Embed every text, returning one vector per input in the same order
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    fn model_name(&self) -> &str;
}

/// Calculate cosine similarity between two embeddings
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ScreenerError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Err(ScreenerError::Embedding("Empty embedding vector".to_string()));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

/// Rows × columns cosine-similarity matrix
pub fn similarity_matrix(rows: &[Vec<f32>], columns: &[Vec<f32>]) -> Result<Array2<f32>> {
    let mut matrix = Array2::<f32>::zeros((rows.len(), columns.len()));

    for (i, row) in rows.iter().enumerate() {
        for (j, column) in columns.iter().enumerate() {
            let score = cosine_similarity(row, column)?;
            if !score.is_finite() {
                return Err(ScreenerError::Embedding(format!(
                    "Non-finite similarity at ({}, {})",
                    i, j
                )));
            }
            matrix[[i, j]] = score;
        }
    }

    Ok(matrix)
}

/// Best similarity per row; rows without columns score `f32::NEG_INFINITY`
pub fn row_maxima(matrix: &Array2<f32>) -> Vec<f32> {
    matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().fold(f32::NEG_INFINITY, f32::max))
        .collect()
}

/// Wraps a [`TextEmbedder`] and turns two string lists into a similarity matrix
#[derive(Clone)]
pub struct SimilarityAdapter {
    embedder: Arc<dyn TextEmbedder>,
}

impl SimilarityAdapter {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }

    /// Required × candidate similarity matrix.
    ///
    /// Both lists go through a single `embed` call.
    pub fn similarity(&self, required: &[String], candidate: &[String]) -> Result<Array2<f32>> {
        let texts: Vec<String> = required.iter().chain(candidate.iter()).cloned().collect();
        let embeddings = self.embedder.embed(&texts)?;

        if embeddings.len() != texts.len() {
            return Err(ScreenerError::Embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }

        let (required_vectors, candidate_vectors) = embeddings.split_at(required.len());
        similarity_matrix(required_vectors, candidate_vectors)
    }
}

/// Model2Vec static embeddings (default `minishlab/potion-base-8M`)
#[cfg(feature = "embeddings")]
pub struct Model2VecEmbedder {
    model: model2vec_rs::model::StaticModel,
    model_name: String,
}

#[cfg(feature = "embeddings")]
impl Model2VecEmbedder {
    /// Load from a local model folder or a HuggingFace repo ID
    pub fn load(repo_or_path: &str) -> Result<Self> {
        let start_time = std::time::Instant::now();
        info!("Loading Model2Vec embedding model: {}", repo_or_path);

        let model = model2vec_rs::model::StaticModel::from_pretrained(
            repo_or_path,
            None, // token
            None, // normalize
            None, // subfolder
        )?;

        info!("Model loaded successfully in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: repo_or_path.to_string(),
        })
    }
}

#[cfg(feature = "embeddings")]
impl TextEmbedder for Model2VecEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.model.encode(texts))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Load the configured embedder, or `None` when disabled or unavailable.
///
/// A load failure is not an error: the engine runs in exact-match-only mode.
pub fn load_embedder(config: &ModelConfig) -> Option<Arc<dyn TextEmbedder>> {
    if !config.enable_embeddings {
        info!("Embeddings disabled, using exact skill matching only");
        return None;
    }

    #[cfg(feature = "embeddings")]
    {
        match Model2VecEmbedder::load(&config.embedding_model) {
            Ok(embedder) => Some(Arc::new(embedder)),
            Err(e) => {
                warn!("Could not load embedding model '{}': {}", config.embedding_model, e);
                warn!("Falling back to exact skill matching only");
                None
            }
        }
    }

    #[cfg(not(feature = "embeddings"))]
    {
        warn!(
            "Built without the `embeddings` feature; '{}' not loaded, using exact skill matching only",
            config.embedding_model
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEmbedder;

    impl TextEmbedder for FixedEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| if t.starts_with('j') { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
                .collect())
        }

        fn model_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).unwrap(), 0.0);
        assert!(cosine_similarity(&[1.0], &[1.0, 0.0]).is_err());
        assert!(matches!(cosine_similarity(&[], &[]), Err(ScreenerError::Embedding(_))));
    }

    #[test]
    fn test_similarity_matrix_shape_and_maxima() {
        let adapter = SimilarityAdapter::new(Arc::new(FixedEmbedder));
        let required = vec!["js".to_string(), "sql".to_string(), "java".to_string()];
        let candidate = vec!["javascript".to_string()];

        let matrix = adapter.similarity(&required, &candidate).unwrap();
        assert_eq!(matrix.dim(), (3, 1));

        let maxima = row_maxima(&matrix);
        assert!((maxima[0] - 1.0).abs() < 1e-6);
        assert!(maxima[1].abs() < 1e-6);
        assert!((maxima[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_embedder_disabled() {
        let config = ModelConfig {
            embedding_model: "unused".to_string(),
            enable_embeddings: false,
        };
        assert!(load_embedder(&config).is_none());
    }
}
