//! JSON envelope types for CLI output.
//!
//! Every JSON document breedscope prints is wrapped in a [`JsonEnvelope`],
//! so a frontend can dispatch on `event` and `result_type`.

use crate::analytics::AnalyticsSnapshot;
use crate::knowledge::{BreedRecord, BreedType};
use crate::pipeline::{BreedInsight, ImageReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Version of the JSON envelope format.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Classification batch starting.
    PipelineStarted,
    /// One image finished, successfully or not.
    FileCompleted,
    /// All images processed.
    PipelineCompleted,
    /// Final result of a command.
    Result,
    /// Error occurred.
    Error,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Breed listing.
    BreedList,
    /// Details for one breed.
    BreedInfo,
    /// Knowledge-base summary.
    Stats,
    /// Configuration display.
    Config,
    /// Model availability check.
    ModelCheck,
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// Fatal error - command cannot continue.
    Fatal,
    /// Warning - operation continues but with issues.
    Warning,
}

/// Error payload for error events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Error code (`snake_case` identifier).
    pub code: String,
    /// Error severity.
    pub severity: ErrorSeverity,
    /// Human-readable error message.
    pub message: String,
    /// Suggested action to resolve the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// File processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Image was classified.
    Processed,
    /// Image could not be classified.
    Failed,
}

// ============================================================================
// Pipeline Event Payloads
// ============================================================================

/// Payload for `pipeline_started` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStartedPayload {
    /// Total number of images to process.
    pub total_files: usize,
}

/// Payload for `file_completed` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCompletedPayload {
    /// Image path.
    pub file: PathBuf,
    /// Outcome.
    pub status: FileStatus,
    /// Cascade report (if processed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ImageReport>,
    /// Error details (if failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FileErrorInfo>,
}

/// Error information for a failed image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileErrorInfo {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

/// Payload for `pipeline_completed` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineCompletedPayload {
    /// Overall status.
    pub status: PipelineStatus,
    /// Images classified.
    pub files_processed: usize,
    /// Images that failed.
    pub files_failed: usize,
    /// Total wall time in milliseconds.
    pub duration_ms: u64,
}

/// Overall pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Every image was classified.
    Success,
    /// Some images failed.
    PartialSuccess,
    /// No image was classified.
    Failed,
}

// ============================================================================
// Result Payloads for Commands
// ============================================================================

/// Payload for `breeds list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedListPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Number of listed breeds.
    pub count: usize,
    /// Listed breeds in knowledge-base order.
    pub breeds: Vec<BreedSummary>,
}

/// One row of a breed listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedSummary {
    /// Breed label.
    pub name: String,
    /// Label with spaces.
    pub display_name: String,
    /// Cow or buffalo.
    pub breed_type: BreedType,
    /// Origin text.
    pub origin: String,
    /// Milk yield text.
    pub milk_yield: String,
}

impl From<&BreedRecord> for BreedSummary {
    fn from(record: &BreedRecord) -> Self {
        Self {
            name: record.name.clone(),
            display_name: crate::knowledge::display_name(&record.name),
            breed_type: record.breed_type,
            origin: record.origin.clone(),
            milk_yield: record.milk_yield.clone(),
        }
    }
}

/// Payload for `breeds info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedInfoPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Record, peers, advisories and economics.
    pub breed: BreedInsight,
}

/// Payload for `stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Knowledge-base summary.
    pub stats: AnalyticsSnapshot,
}

/// Payload for `config show`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Path to config file.
    pub config_path: PathBuf,
    /// Configuration values.
    pub config: serde_json::Value,
}

/// Payload for `models check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCheckPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// One entry per model.
    pub models: Vec<ModelStatus>,
}

/// Load status of one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    /// `species` or `breed`.
    pub role: String,
    /// Weights path.
    pub path: PathBuf,
    /// Number of labels the model must produce.
    pub labels: usize,
    /// Whether the model loaded and passed the output check.
    pub ok: bool,
    /// Failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
