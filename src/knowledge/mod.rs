//! Breed knowledge base: curated records keyed by classifier label.

mod base;
mod record;

pub use base::{KnowledgeBase, display_name};
pub use record::{BreedRecord, BreedType, Origin};
