//! Error types for breedscope.

/// Result type alias for breedscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for breedscope.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No valid image files found.
    #[error("no valid image files found in the provided paths")]
    NoValidImageFiles,

    /// Input image could not be decoded or has no pixels.
    #[error("invalid image '{name}': {reason}")]
    InvalidImage {
        /// File name or other identifier of the image.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Model weights are missing or do not match the expected label set.
    #[error("model unavailable at '{path}': {reason}")]
    ModelUnavailable {
        /// Path the model was expected at.
        path: std::path::PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Some images in a batch could not be classified.
    #[error("{failed} of {total} image(s) could not be classified")]
    ClassificationFailed {
        /// Number of failed images.
        failed: usize,
        /// Number of images attempted.
        total: usize,
    },

    /// Inference failed on a loaded model.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// A knowledge-base attribute holds no numeric token.
    #[error("no numeric value in attribute text '{text}'")]
    UnparsableAttribute {
        /// The offending attribute text.
        text: String,
    },

    /// An aggregation was requested over an empty set.
    #[error("no data available for {statistic}")]
    NoData {
        /// Name of the statistic that could not be computed.
        statistic: &'static str,
    },

    /// Failed to parse breed knowledge data.
    #[error("failed to parse breed knowledge data")]
    KnowledgeBaseParse {
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// The same breed name appears twice in the knowledge data.
    #[error("duplicate breed record '{name}'")]
    DuplicateBreed {
        /// The repeated breed name.
        name: String,
    },

    /// Breed explicitly requested by name has no record.
    #[error("breed '{name}' not found in knowledge base")]
    BreedNotFound {
        /// Requested breed name.
        name: String,
    },

    /// Failed to serialize JSON output.
    #[error("failed to write JSON output")]
    JsonWrite {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Stable `snake_case` code for JSON error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::ConfigDirNotFound
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigValidation { .. }
            | Self::ConfigWrite { .. }
            | Self::ConfigSerialize { .. } => "config",
            Self::NoValidImageFiles => "no_valid_image_files",
            Self::InvalidImage { .. } => "invalid_image",
            Self::ModelUnavailable { .. } => "model_unavailable",
            Self::ClassificationFailed { .. } => "classification_failed",
            Self::Inference { .. } => "inference",
            Self::UnparsableAttribute { .. } => "unparsable_attribute",
            Self::NoData { .. } => "no_data",
            Self::KnowledgeBaseParse { .. } | Self::DuplicateBreed { .. } => "knowledge_base",
            Self::BreedNotFound { .. } => "breed_not_found",
            Self::JsonWrite { .. } => "json_write",
            Self::Internal { .. } => "internal",
        }
    }
}
