//! CLI argument definitions.

use crate::config::OutputMode;
use crate::knowledge::{BreedType, Origin};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cattle and buffalo breed identification from photos.
#[derive(Debug, Parser)]
#[command(name = "breedscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Images or directories to classify.
    pub inputs: Vec<PathBuf>,

    /// Options for classification.
    #[command(flatten)]
    pub classify: ClassifyArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the breed knowledge base.
    Breeds {
        /// Breeds action to perform.
        #[command(subcommand)]
        action: BreedsAction,
    },
    /// Summarize the breed knowledge base.
    Stats {
        /// Number of breeds in the yield ranking.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        top: Option<u64>,
    },
    /// Manage models.
    Models {
        /// Models action to perform.
        #[command(subcommand)]
        action: ModelsAction,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Breeds subcommand actions.
#[derive(Debug, Clone, Subcommand)]
pub enum BreedsAction {
    /// List breeds, optionally filtered.
    List {
        /// Only breeds of this type.
        #[arg(long = "type", value_enum)]
        breed_type: Option<BreedType>,
        /// Only Indian or only international breeds.
        #[arg(long, value_enum)]
        origin: Option<Origin>,
    },
    /// Show details, peers and recommendations for one breed.
    Info {
        /// Breed label, e.g. `Holstein_Friesian` (spaces are accepted).
        name: String,
    },
}

/// Models subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ModelsAction {
    /// Verify both model files load and match the label sets.
    Check,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for classification and shared output options.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClassifyArgs {
    /// Path to the species classifier ONNX file (overrides config).
    #[arg(long, global = true, env = "BREEDSCOPE_SPECIES_MODEL")]
    pub species_model: Option<PathBuf>,

    /// Path to the breed classifier ONNX file (overrides config).
    #[arg(long, global = true, env = "BREEDSCOPE_BREED_MODEL")]
    pub breed_model: Option<PathBuf>,

    /// Output mode.
    #[arg(long, value_enum, global = true, env = "BREEDSCOPE_OUTPUT_MODE")]
    pub output_mode: Option<OutputMode>,

    /// Number of breeds compared against the identified breed.
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "BREEDSCOPE_PEER_LIMIT"
    )]
    pub peer_limit: Option<u64>,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace+ORT info, -vvv: trace+ORT debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use CUDA GPU acceleration.
    #[arg(long, global = true, conflicts_with = "cpu")]
    pub gpu: bool,

    /// Force CPU inference.
    #[arg(long, global = true, conflicts_with = "gpu")]
    pub cpu: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_images() {
        let cli = Cli::try_parse_from(["breedscope", "cow.jpg", "herd/"]).unwrap();
        assert_eq!(cli.inputs.len(), 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "breedscope",
            "cow.jpg",
            "--fail-fast",
            "--output-mode",
            "json",
            "-q",
            "--cpu",
        ])
        .unwrap();
        assert!(cli.classify.fail_fast);
        assert!(cli.classify.quiet);
        assert!(cli.classify.cpu);
        assert_eq!(cli.classify.output_mode, Some(OutputMode::Json));
    }

    #[test]
    fn test_gpu_and_cpu_conflict() {
        assert!(Cli::try_parse_from(["breedscope", "x.jpg", "--gpu", "--cpu"]).is_err());
    }

    #[test]
    fn test_breeds_list_filters() {
        let cli = Cli::try_parse_from([
            "breedscope",
            "breeds",
            "list",
            "--type",
            "buffalo",
            "--origin",
            "indian",
        ])
        .unwrap();
        let Some(Command::Breeds {
            action: BreedsAction::List { breed_type, origin },
        }) = cli.command
        else {
            panic!("expected breeds list");
        };
        assert_eq!(breed_type, Some(BreedType::Buffalo));
        assert_eq!(origin, Some(Origin::Indian));
    }

    #[test]
    fn test_global_output_mode_after_subcommand() {
        let cli =
            Cli::try_parse_from(["breedscope", "stats", "--top", "3", "--output-mode", "json"])
                .unwrap();
        assert_eq!(cli.classify.output_mode, Some(OutputMode::Json));
        assert!(matches!(cli.command, Some(Command::Stats { top: Some(3) })));
    }

    #[test]
    fn test_stats_top_must_be_positive() {
        assert!(Cli::try_parse_from(["breedscope", "stats", "--top", "0"]).is_err());
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["breedscope", "config", "show"]);
        assert!(cli.is_ok());
    }
}
