//! CLI argument parsing and command handling.

mod args;
pub mod help;

pub use args::{BreedsAction, Cli, ClassifyArgs, Command, ConfigAction, ModelsAction};
