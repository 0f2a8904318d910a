//! Output formatting and reporting.

pub mod human;
pub mod json_envelope;
pub mod progress;
pub mod reporter;

pub use reporter::{
    HumanReporter, JsonProgressReporter, PipelineSummary, ProgressReporter, create_reporter,
    emit_json_error, emit_json_result,
};
