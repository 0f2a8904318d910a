//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::inference::ModelPaths;

/// Print help message based on whether the model files are in place.
pub fn print_smart_help(paths: &ModelPaths) {
    if paths.species.is_file() && paths.breed.is_file() {
        print_configured_help();
    } else {
        print_first_time_help(paths);
    }
}

/// Print setup guide for users without model files.
pub fn print_first_time_help(paths: &ModelPaths) {
    println!("Model files not found. Get started with breedscope:");
    println!();
    println!("1. Place the exported ONNX classifiers at:");
    println!("   • Species: {}", paths.species.display());
    println!("   • Breed:   {}", paths.breed.display());
    println!();
    println!("   or point to them with --species-model and --breed-model,");
    println!("   or set [models] in the config file (breedscope config init).");
    println!();
    println!("2. Check that both models load:");
    println!("   breedscope models check");
    println!();
    println!("3. Classify photos:");
    println!("   breedscope cow.jpg herd_photos/");
    println!();
    println!("The breed knowledge base works without models:");
    println!("   breedscope breeds list --type buffalo");
    println!("   breedscope breeds info Gir");
    println!("   breedscope stats");
    println!();
    println!("Run 'breedscope -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: breedscope [IMAGES]... [OPTIONS]");
    println!();
    println!("Example: breedscope cow.jpg --output-mode json");
    println!();
    println!("Run 'breedscope -h' for all options or 'breedscope breeds list' to browse breeds.");
}
