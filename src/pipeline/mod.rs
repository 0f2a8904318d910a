//! Classification pipeline components.

mod cascade;
mod coordinator;
mod insight;
mod processor;

pub use cascade::{Cascade, CascadeOptions, CascadeResult};
pub use coordinator::collect_input_files;
pub use insight::{BreedDetails, BreedInsight, Placeholder};
pub use processor::{ImageReport, process_file};
