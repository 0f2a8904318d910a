//! Result reporting for batch classification.
//!
//! Human mode prints a text card per image; JSON mode collects envelope
//! events and prints them as one array when the batch completes.

use crate::config::OutputMode;
use crate::output::human::format_report;
use crate::output::json_envelope::{
    ErrorPayload, ErrorSeverity, EventType, FileCompletedPayload, FileErrorInfo, FileStatus,
    JsonEnvelope, PipelineCompletedPayload, PipelineStartedPayload, PipelineStatus,
};
use crate::pipeline::ImageReport;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Trait for reporting progress and results during classification.
pub trait ProgressReporter: Send + Sync {
    /// Report batch start.
    fn pipeline_started(&self, total_files: usize);

    /// Report a classified image.
    fn file_completed_success(&self, file: &Path, report: &ImageReport);

    /// Report an image that could not be classified.
    fn file_completed_failure(&self, file: &Path, error_code: &str, error_message: &str);

    /// Report batch completion.
    fn pipeline_completed(&self, summary: &PipelineSummary);

    /// Report an error not tied to a single image.
    fn error(&self, code: &str, severity: ErrorSeverity, message: &str, suggestion: Option<&str>);
}

/// Summary of a classification batch.
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    /// Images classified.
    pub files_processed: usize,
    /// Images that failed.
    pub files_failed: usize,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

impl PipelineSummary {
    fn status(&self) -> PipelineStatus {
        if self.files_failed == 0 {
            PipelineStatus::Success
        } else if self.files_processed > 0 {
            PipelineStatus::PartialSuccess
        } else {
            PipelineStatus::Failed
        }
    }
}

/// Text reporter for terminals.
pub struct HumanReporter {
    writer: Mutex<Box<dyn Write + Send>>,
    progress: Option<ProgressBar>,
}

impl HumanReporter {
    /// Reporter writing to stdout, printing above `progress` when given.
    pub fn new(progress: Option<ProgressBar>) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            progress,
        }
    }

    /// Create a reporter with a custom writer (for testing).
    #[cfg(test)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            progress: None,
        }
    }

    fn print(&self, text: &str) {
        let write = || {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{text}");
                let _ = writer.flush();
            }
        };
        match &self.progress {
            Some(pb) => pb.suspend(write),
            None => write(),
        }
    }
}

impl ProgressReporter for HumanReporter {
    fn pipeline_started(&self, _total_files: usize) {}

    fn file_completed_success(&self, _file: &Path, report: &ImageReport) {
        self.print(&format_report(report));
    }

    fn file_completed_failure(&self, file: &Path, _error_code: &str, error_message: &str) {
        self.print(&format!("{}: failed: {error_message}\n", file.display()));
    }

    fn pipeline_completed(&self, summary: &PipelineSummary) {
        self.print(&format!(
            "Classified {} image(s), {} failed",
            summary.files_processed, summary.files_failed
        ));
    }

    // The message itself reaches stderr through the returned error.
    fn error(
        &self,
        _code: &str,
        _severity: ErrorSeverity,
        _message: &str,
        suggestion: Option<&str>,
    ) {
        if let Some(hint) = suggestion {
            self.print(&format!("hint: {hint}"));
        }
    }
}

/// JSON reporter implementation.
pub struct JsonProgressReporter {
    /// Writer for output (typically stdout).
    writer: Mutex<Box<dyn Write + Send>>,
    /// Events collected until the batch completes.
    json_buffer: Mutex<Vec<String>>,
}

impl JsonProgressReporter {
    /// Create a new JSON reporter writing to stdout.
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            json_buffer: Mutex::new(Vec::new()),
        }
    }

    /// Create a reporter with a custom writer (for testing).
    #[cfg(test)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            json_buffer: Mutex::new(Vec::new()),
        }
    }

    fn emit<T: serde::Serialize>(&self, event: EventType, payload: T) {
        let envelope = JsonEnvelope::new(event, payload);
        if let Ok(json) = serde_json::to_string(&envelope)
            && let Ok(mut buffer) = self.json_buffer.lock()
        {
            buffer.push(json);
        }
    }

    /// Write buffered events as a JSON array.
    pub fn flush(&self) {
        if let Ok(mut buffer) = self.json_buffer.lock()
            && let Ok(mut writer) = self.writer.lock()
        {
            let _ = writeln!(writer, "[");
            for (i, json) in buffer.iter().enumerate() {
                if i > 0 {
                    let _ = writeln!(writer, ",");
                }
                let _ = write!(writer, "  {json}");
            }
            let _ = writeln!(writer);
            let _ = writeln!(writer, "]");
            let _ = writer.flush();
            buffer.clear();
        }
    }
}

impl Default for JsonProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for JsonProgressReporter {
    fn pipeline_started(&self, total_files: usize) {
        self.emit(
            EventType::PipelineStarted,
            PipelineStartedPayload { total_files },
        );
    }

    fn file_completed_success(&self, file: &Path, report: &ImageReport) {
        self.emit(
            EventType::FileCompleted,
            FileCompletedPayload {
                file: file.to_path_buf(),
                status: FileStatus::Processed,
                report: Some(report.clone()),
                error: None,
            },
        );
    }

    fn file_completed_failure(&self, file: &Path, error_code: &str, error_message: &str) {
        self.emit(
            EventType::FileCompleted,
            FileCompletedPayload {
                file: file.to_path_buf(),
                status: FileStatus::Failed,
                report: None,
                error: Some(FileErrorInfo {
                    code: error_code.to_string(),
                    message: error_message.to_string(),
                }),
            },
        );
    }

    fn pipeline_completed(&self, summary: &PipelineSummary) {
        self.emit(
            EventType::PipelineCompleted,
            PipelineCompletedPayload {
                status: summary.status(),
                files_processed: summary.files_processed,
                files_failed: summary.files_failed,
                duration_ms: summary.duration_ms,
            },
        );
        self.flush();
    }

    fn error(&self, code: &str, severity: ErrorSeverity, message: &str, suggestion: Option<&str>) {
        self.emit(
            EventType::Error,
            ErrorPayload {
                code: code.to_string(),
                severity,
                message: message.to_string(),
                suggestion: suggestion.map(ToString::to_string),
            },
        );
        if severity == ErrorSeverity::Fatal {
            self.flush();
        }
    }
}

/// Create a reporter based on output mode.
pub fn create_reporter(
    mode: OutputMode,
    progress: Option<ProgressBar>,
) -> Box<dyn ProgressReporter> {
    match mode {
        OutputMode::Human => Box::new(HumanReporter::new(progress)),
        OutputMode::Json => Box::new(JsonProgressReporter::new()),
    }
}

/// Emit a JSON result event to stdout.
///
/// Used by command handlers to print structured results in JSON mode.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    let envelope = JsonEnvelope::new(EventType::Result, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // stderr keeps the JSON stream on stdout parseable
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}

/// Emit a fatal error event to stdout.
pub fn emit_json_error(code: &str, message: &str) {
    let envelope = JsonEnvelope::new(
        EventType::Error,
        ErrorPayload {
            code: code.to_string(),
            severity: ErrorSeverity::Fatal,
            message: message.to_string(),
            suggestion: None,
        },
    );
    if let Ok(json) = serde_json::to_string(&envelope) {
        println!("{json}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{
        ClassificationResult, ConfidenceLevel, GateDecision, GateReason, SpeciesPrediction,
    };
    use crate::pipeline::CascadeResult;
    use crate::vision::ImageMetadata;
    use std::sync::Arc;

    fn stopped_report() -> ImageReport {
        ImageReport {
            image: ImageMetadata {
                name: "goat.jpg".to_string(),
                byte_size: 1024,
                width: 640,
                height: 480,
                color_mode: "Rgb8".to_string(),
            },
            result: CascadeResult {
                species: SpeciesPrediction {
                    result: ClassificationResult {
                        label: "None".to_string(),
                        confidence: 0.91,
                    },
                    level: ConfidenceLevel::High,
                    probabilities: Vec::new(),
                },
                gate: GateDecision {
                    proceed: false,
                    reason: Some(GateReason::NotCattle),
                },
                breed_label: None,
                breed: None,
                analytics: None,
                recommendations: None,
            },
            duration_secs: 0.05,
        }
    }

    #[test]
    fn test_json_reporter_flushes_array_on_completion() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let reporter = JsonProgressReporter::with_writer(TestWriter {
            buffer: buffer.clone(),
        });

        reporter.pipeline_started(1);
        reporter.file_completed_success(Path::new("goat.jpg"), &stopped_report());
        assert!(buffer.lock().expect("lock").is_empty());

        reporter.pipeline_completed(&PipelineSummary {
            files_processed: 1,
            files_failed: 0,
            duration_ms: 50,
        });

        let output = String::from_utf8(buffer.lock().expect("lock").clone()).expect("utf8");
        let events: serde_json::Value = serde_json::from_str(&output).expect("valid JSON array");
        assert_eq!(events.as_array().expect("array").len(), 3);
        assert_eq!(events[1]["payload"]["report"]["result"]["gate"]["reason"], "not_cattle");
        assert_eq!(events[2]["payload"]["status"], "success");
    }

    #[test]
    fn test_json_reporter_records_failures() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let reporter = JsonProgressReporter::with_writer(TestWriter {
            buffer: buffer.clone(),
        });

        reporter.file_completed_failure(Path::new("x.jpg"), "invalid_image", "bad header");
        reporter.pipeline_completed(&PipelineSummary {
            files_processed: 0,
            files_failed: 1,
            duration_ms: 1,
        });

        let output = String::from_utf8_lossy(&buffer.lock().expect("lock")).to_string();
        assert!(output.contains("\"code\":\"invalid_image\""));
        assert!(output.contains("\"status\":\"failed\""));
    }

    #[test]
    fn test_human_reporter_prints_card() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let reporter = HumanReporter::with_writer(TestWriter {
            buffer: buffer.clone(),
        });

        reporter.file_completed_success(Path::new("goat.jpg"), &stopped_report());

        let output = String::from_utf8_lossy(&buffer.lock().expect("lock")).to_string();
        assert!(output.contains("goat.jpg (640x480, 1024 bytes)"));
        assert!(output.contains("No cattle or buffalo detected"));
    }

    #[test]
    fn test_summary_status() {
        let partial = PipelineSummary {
            files_processed: 2,
            files_failed: 1,
            duration_ms: 0,
        };
        assert_eq!(partial.status(), PipelineStatus::PartialSuccess);
    }

    #[test]
    fn test_reporter_handles_write_errors() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let reporter = JsonProgressReporter::with_writer(FailingWriter);
        reporter.pipeline_started(1);
        reporter.pipeline_completed(&PipelineSummary {
            files_processed: 1,
            files_failed: 0,
            duration_ms: 0,
        });
    }

    /// Test writer that captures output.
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
