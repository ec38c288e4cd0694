use std::path::PathBuf;

/// Filesystem locations of the pre-trained model artifacts.
///
/// The comparison pipelines themselves take no tunables; the only
/// configuration is where model weights live on disk.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    /// OCR text-detection model (RTen format)
    pub detection_model: PathBuf,
    /// OCR text-recognition model (RTen format)
    pub recognition_model: PathBuf,
    /// Sentence-embedding model (ONNX format)
    pub embedding_model: PathBuf,
    /// Tokenizer definition for the embedding model
    pub tokenizer: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::with_dir(PathBuf::from("models"))
    }
}

impl ModelConfig {
    /// Points all model paths at the standard filenames under `dir`.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            detection_model: dir.join("text-detection.rten"),
            recognition_model: dir.join("text-recognition.rten"),
            embedding_model: dir.join("sentence-embedding.onnx"),
            tokenizer: dir.join("tokenizer.json"),
        }
    }

    /// Builds a configuration from the environment.
    ///
    /// `IMAGESIM_MODELS_DIR` relocates the whole model directory;
    /// `IMAGESIM_DETECTION_MODEL`, `IMAGESIM_RECOGNITION_MODEL`,
    /// `IMAGESIM_EMBEDDING_MODEL` and `IMAGESIM_TOKENIZER` override
    /// individual files.
    pub fn from_env() -> Self {
        let mut config = match std::env::var_os("IMAGESIM_MODELS_DIR") {
            Some(dir) => Self::with_dir(PathBuf::from(dir)),
            None => Self::default(),
        };

        if let Some(path) = std::env::var_os("IMAGESIM_DETECTION_MODEL") {
            config.detection_model = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os("IMAGESIM_RECOGNITION_MODEL") {
            config.recognition_model = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os("IMAGESIM_EMBEDDING_MODEL") {
            config.embedding_model = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os("IMAGESIM_TOKENIZER") {
            config.tokenizer = PathBuf::from(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ModelConfig::default();
        assert_eq!(
            config.detection_model,
            PathBuf::from("models/text-detection.rten")
        );
        assert_eq!(config.tokenizer, PathBuf::from("models/tokenizer.json"));
    }

    #[test]
    fn test_with_dir() {
        let config = ModelConfig::with_dir(PathBuf::from("/opt/weights"));
        assert_eq!(
            config.embedding_model,
            PathBuf::from("/opt/weights/sentence-embedding.onnx")
        );
    }
}
