//! Breedscope - cattle and buffalo breed identification CLI tool.
//!
//! A species classifier decides whether a photo shows a cow, a buffalo or
//! neither. Confident cattle predictions continue to a breed classifier, and
//! the identified breed is joined with a curated knowledge base to produce
//! peer comparisons, farming advisories and an economic profile.

#![warn(missing_docs)]

pub mod analytics;
pub mod attributes;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod knowledge;
pub mod output;
pub mod pipeline;
pub mod recommend;
pub mod vision;

use clap::Parser;
use cli::{BreedsAction, ClassifyArgs, Cli, Command, ConfigAction, ModelsAction};
use config::{
    Config, InferenceDevice, OutputMode, config_file_path, load_default_config,
    save_default_config, validate_config,
};
use constants::{BREED_LABELS, SPECIES_LABELS};
use inference::{BreedClassifier, ModelPaths, ModelRegistry, OnnxModel, SpeciesClassifier};
use knowledge::{BreedRecord, KnowledgeBase};
use output::json_envelope::{
    BreedInfoPayload, BreedListPayload, BreedSummary, ConfigPayload, ErrorSeverity,
    ModelCheckPayload, ModelStatus, ResultType, StatsPayload,
};
use output::{
    PipelineSummary, create_reporter, emit_json_error, emit_json_result, human, progress,
};
use pipeline::{BreedInsight, Cascade, CascadeOptions, collect_input_files, process_file};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for breedscope CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.classify.verbose, cli.classify.quiet);

    let mut config = load_default_config()?;
    apply_overrides(&mut config, &cli.classify);
    validate_config(&config)?;

    if let Some(command) = cli.command {
        let result = handle_command(command, &config);
        if config.output.mode == OutputMode::Json
            && let Err(e) = &result
        {
            emit_json_error(e.code(), &e.to_string());
        }
        return result;
    }

    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&ModelPaths::from_config(&config));
        return Ok(());
    }

    classify_files(&cli.inputs, &cli.classify, &config)
}

/// Layer command-line flags and environment variables over the config file.
fn apply_overrides(config: &mut Config, args: &ClassifyArgs) {
    if let Some(path) = &args.species_model {
        config.models.species = Some(path.clone());
    }
    if let Some(path) = &args.breed_model {
        config.models.breed = Some(path.clone());
    }
    if let Some(mode) = args.output_mode {
        config.output.mode = mode;
    }
    if let Some(limit) = args.peer_limit {
        config.output.peer_limit = usize::try_from(limit).unwrap_or(usize::MAX);
    }
    if args.gpu {
        config.inference.device = InferenceDevice::Gpu;
    } else if args.cpu {
        config.inference.device = InferenceDevice::Cpu;
    }
}

/// Run the cascade over every input image.
fn classify_files(inputs: &[PathBuf], args: &ClassifyArgs, config: &Config) -> Result<()> {
    let total_start = Instant::now();
    let mode = config.output.mode;

    let files = collect_input_files(inputs)?;
    let progress_enabled = !args.quiet && mode == OutputMode::Human && files.len() > 1;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);
    let reporter = create_reporter(mode, file_progress.clone());

    let fatal = |e: Error| {
        reporter.error(
            e.code(),
            ErrorSeverity::Fatal,
            &e.to_string(),
            suggestion_for(&e),
        );
        e
    };

    if files.is_empty() {
        return Err(fatal(Error::NoValidImageFiles));
    }
    info!("Found {} image(s) to classify", files.len());
    reporter.pipeline_started(files.len());

    let paths = ModelPaths::from_config(config);
    let models = ModelRegistry::from_paths(paths, config.inference.device);
    // Species is needed for every image; fail before touching any file.
    if let Err(e) = models.species() {
        progress::finish_progress(file_progress.as_ref(), "Failed");
        return Err(fatal(e));
    }

    let cascade = Cascade::new(
        &models,
        KnowledgeBase::global(),
        CascadeOptions {
            top_n: config.output.top_n,
            peer_limit: config.output.peer_limit,
        },
    );

    let mut processed = 0;
    let mut failed = 0;

    for file in &files {
        match process_file(file, &cascade) {
            Ok(report) => {
                processed += 1;
                reporter.file_completed_success(file, &report);
            }
            Err(e) => {
                error!("Failed to classify {}: {}", file.display(), e);
                failed += 1;
                reporter.file_completed_failure(file, e.code(), &e.to_string());
                if args.fail_fast || matches!(e, Error::ModelUnavailable { .. }) {
                    progress::finish_progress(file_progress.as_ref(), "Failed");
                    return Err(fatal(e));
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress.as_ref(), "Complete");

    let elapsed = total_start.elapsed();
    reporter.pipeline_completed(&PipelineSummary {
        files_processed: processed,
        files_failed: failed,
        duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    });
    info!(
        "Complete: {} classified, {} errors in {}",
        processed,
        failed,
        progress::format_elapsed(elapsed.as_secs_f64())
    );

    if failed > 0 {
        warn!("{} image(s) had errors", failed);
        return Err(Error::ClassificationFailed {
            failed,
            total: files.len(),
        });
    }

    Ok(())
}

fn suggestion_for(e: &Error) -> Option<&'static str> {
    match e {
        Error::ModelUnavailable { .. } => Some(
            "run 'breedscope models check', or pass --species-model and --breed-model",
        ),
        Error::NoValidImageFiles => Some("supported formats: jpg, jpeg, png"),
        _ => None,
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // ORT logging is suppressed by default because CUDA fallback is expected in auto mode.
    let filter_str = if quiet {
        "warn,ort=off".to_string()
    } else {
        match verbose {
            0 => "info,ort=off".to_string(),
            1 => "debug,ort=warn".to_string(),
            2 => "trace,ort=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Breeds { action } => handle_breeds_command(action, config),
        Command::Stats { top } => {
            let top_n = top.map_or(config.output.top_n, |n| {
                usize::try_from(n).unwrap_or(usize::MAX)
            });
            handle_stats_command(top_n, config.output.mode);
            Ok(())
        }
        Command::Models { action } => handle_models_command(action, config),
        Command::Config { action } => handle_config_command(action, config),
    }
}

/// Resolve a user-typed breed name: spaces become underscores, and an exact
/// match wins over a case-insensitive one.
fn find_breed<'a>(kb: &'a KnowledgeBase, name: &str) -> Option<&'a BreedRecord> {
    let label = name.trim().replace(' ', "_");
    kb.lookup(&label).or_else(|| {
        kb.records()
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(&label))
    })
}

fn handle_breeds_command(action: BreedsAction, config: &Config) -> Result<()> {
    let kb = KnowledgeBase::global();

    match action {
        BreedsAction::List { breed_type, origin } => {
            let records: Vec<&BreedRecord> = kb.filter(breed_type, origin).collect();
            match config.output.mode {
                OutputMode::Json => emit_json_result(&BreedListPayload {
                    result_type: ResultType::BreedList,
                    count: records.len(),
                    breeds: records.iter().copied().map(BreedSummary::from).collect(),
                }),
                OutputMode::Human => print!("{}", human::format_breed_list(records)),
            }
            Ok(())
        }
        BreedsAction::Info { name } => {
            let record = find_breed(kb, &name).ok_or(Error::BreedNotFound { name })?;
            let insight = BreedInsight::build(kb, record, config.output.peer_limit);
            match config.output.mode {
                OutputMode::Json => emit_json_result(&BreedInfoPayload {
                    result_type: ResultType::BreedInfo,
                    breed: insight,
                }),
                OutputMode::Human => print!("{}", human::format_insight(&insight)),
            }
            Ok(())
        }
    }
}

fn handle_stats_command(top_n: usize, mode: OutputMode) {
    let stats = analytics::snapshot(KnowledgeBase::global(), top_n);
    match mode {
        OutputMode::Json => emit_json_result(&StatsPayload {
            result_type: ResultType::Stats,
            stats,
        }),
        OutputMode::Human => print!("{}", human::format_snapshot(&stats)),
    }
}

fn check_model(role: &str, path: &Path, labels: usize, device: InferenceDevice) -> ModelStatus {
    let loaded = OnnxModel::load(path, device).and_then(|model| {
        let model = Box::new(model);
        if labels == SPECIES_LABELS.len() {
            SpeciesClassifier::new(model).map(|_| ())
        } else {
            BreedClassifier::new(model).map(|_| ())
        }
    });

    ModelStatus {
        role: role.to_string(),
        path: path.to_path_buf(),
        labels,
        ok: loaded.is_ok(),
        error: loaded.err().map(|e| e.to_string()),
    }
}

fn handle_models_command(action: ModelsAction, config: &Config) -> Result<()> {
    match action {
        ModelsAction::Check => {
            let paths = ModelPaths::from_config(config);
            let device = config.inference.device;
            let models = vec![
                check_model("species", &paths.species, SPECIES_LABELS.len(), device),
                check_model("breed", &paths.breed, BREED_LABELS.len(), device),
            ];

            match config.output.mode {
                OutputMode::Json => emit_json_result(&ModelCheckPayload {
                    result_type: ResultType::ModelCheck,
                    models: models.clone(),
                }),
                OutputMode::Human => {
                    for status in &models {
                        let mark = if status.ok { "✓" } else { "✗" };
                        println!(
                            "  {mark} {} ({} labels): {}",
                            status.role,
                            status.labels,
                            status.path.display()
                        );
                        if let Some(reason) = &status.error {
                            println!("      {reason}");
                        }
                    }
                }
            }

            match models.into_iter().find(|status| !status.ok) {
                Some(status) => Err(Error::ModelUnavailable {
                    path: status.path,
                    reason: status.error.unwrap_or_default(),
                }),
                None => Ok(()),
            }
        }
    }
}

fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!(
                    "  set [models] species and breed paths, then run 'breedscope models check'"
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            let path = config_file_path()?;
            match config.output.mode {
                OutputMode::Json => {
                    let value = serde_json::to_value(config)
                        .map_err(|e| Error::JsonWrite { source: e })?;
                    emit_json_result(&ConfigPayload {
                        result_type: ResultType::Config,
                        config_path: path,
                        config: value,
                    });
                }
                OutputMode::Human => {
                    let contents = toml::to_string_pretty(config)
                        .map_err(|e| Error::ConfigSerialize { source: e })?;
                    println!("# {}", path.display());
                    print!("{contents}");
                }
            }
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
