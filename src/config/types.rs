//! Configuration type definitions.

use crate::constants::analytics::{DEFAULT_PEER_LIMIT, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model file locations.
    #[serde(default)]
    pub models: ModelPathsConfig,

    /// Inference settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the two classifier models.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPathsConfig {
    /// Path to the species (Buffalo/Cow/None) ONNX model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<PathBuf>,

    /// Path to the breed ONNX model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<PathBuf>,
}

/// Inference device configuration.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InferenceDevice {
    /// Automatically select (GPU if available, else CPU).
    #[default]
    Auto,
    /// Prefer GPU (CUDA), warn when falling back to CPU.
    Gpu,
    /// Force CPU inference.
    Cpu,
}

impl std::fmt::Display for InferenceDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gpu => write!(f, "gpu"),
            Self::Cpu => write!(f, "cpu"),
        }
    }
}

/// Inference settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Device to use for inference.
    pub device: InferenceDevice,
}

/// How results are written to stdout.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON envelope per result.
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output mode.
    pub mode: OutputMode,

    /// Number of breeds in the milk yield ranking.
    pub top_n: usize,

    /// Number of breeds in a peer comparison.
    pub peer_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Human,
            top_n: DEFAULT_TOP_N,
            peer_limit: DEFAULT_PEER_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("json".parse::<OutputMode>().ok(), Some(OutputMode::Json));
        assert_eq!("Human".parse::<OutputMode>().ok(), Some(OutputMode::Human));
        assert_eq!("text".parse::<OutputMode>().ok(), Some(OutputMode::Human));
        assert!("xml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_output_config_default_values() {
        let output = OutputConfig::default();
        assert_eq!(output.top_n, 10);
        assert_eq!(output.peer_limit, 5);
        assert_eq!(output.mode, OutputMode::Human);
    }

    #[test]
    fn test_device_display() {
        assert_eq!(InferenceDevice::Auto.to_string(), "auto");
        assert_eq!(InferenceDevice::Cpu.to_string(), "cpu");
    }
}
