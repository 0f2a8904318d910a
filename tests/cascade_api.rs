//! Library-level tests for the classification cascade and knowledge queries.

use breedscope::constants::{BREED_LABELS, SPECIES_LABELS};
use breedscope::inference::{
    BreedClassifier, GateReason, ImageModel, ModelRegistry, SpeciesClassifier,
};
use breedscope::knowledge::KnowledgeBase;
use breedscope::pipeline::{BreedDetails, Cascade, CascadeOptions, process_file};
use breedscope::vision::ImageTensor;
use breedscope::{Error, analytics, recommend};
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Model that ignores its input and returns fixed logits.
struct StubModel {
    path: PathBuf,
    logits: Vec<f32>,
}

impl ImageModel for StubModel {
    fn path(&self) -> &Path {
        &self.path
    }

    fn forward(&self, _input: &ImageTensor) -> breedscope::Result<Vec<f32>> {
        Ok(self.logits.clone())
    }
}

fn one_hot(labels: &[&str], label: &str) -> Vec<f32> {
    labels
        .iter()
        .map(|&l| if l == label { 8.0 } else { 0.0 })
        .collect()
}

fn stub(logits: Vec<f32>) -> Box<dyn ImageModel> {
    Box::new(StubModel {
        path: PathBuf::from("stub.onnx"),
        logits,
    })
}

fn registry(species: &str, breed: &str) -> ModelRegistry {
    let species_logits = one_hot(&SPECIES_LABELS, species);
    let breed_logits = one_hot(&BREED_LABELS, breed);
    ModelRegistry::with_loaders(
        Box::new(move || SpeciesClassifier::new(stub(species_logits.clone()))),
        Box::new(move || BreedClassifier::new(stub(breed_logits.clone()))),
    )
}

fn photo() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(320, 240, image::Rgb([90, 70, 50])))
}

#[test]
fn test_cow_photo_runs_full_cascade() {
    let models = registry("Cow", "Sahiwal");
    let cascade = Cascade::new(&models, KnowledgeBase::global(), CascadeOptions::default());

    let result = cascade.run(&photo()).unwrap();

    assert_eq!(result.species.result.label, "Cow");
    assert!(result.gate.proceed);
    assert_eq!(result.breed_label.as_deref(), Some("Sahiwal"));
    match result.breed.unwrap() {
        BreedDetails::Found(insight) => {
            assert_eq!(insight.record.name, "Sahiwal");
            assert!(insight.peers.iter().any(|p| p.is_target && p.breed == "Sahiwal"));
        }
        BreedDetails::NotFound(_) => panic!("Sahiwal has a curated record"),
    }
    assert_eq!(result.analytics.unwrap().total, 41);
    assert!(!result.recommendations.unwrap().is_empty());
}

#[test]
fn test_non_cattle_photo_stops_at_gate() {
    let models = registry("None", "Gir");
    let cascade = Cascade::new(&models, KnowledgeBase::global(), CascadeOptions::default());

    let result = cascade.run(&photo()).unwrap();

    assert!(!result.gate.proceed);
    assert_eq!(result.gate.reason, Some(GateReason::NotCattle));
    assert!(result.breed_label.is_none());
    assert!(result.analytics.is_none());
    assert!(!models.breed_loaded());
}

#[test]
fn test_process_file_reports_metadata() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("buffalo.png");
    RgbImage::from_pixel(64, 48, image::Rgb([40, 40, 40]))
        .save(&path)
        .unwrap();

    let models = registry("Buffalo", "Murrah");
    let cascade = Cascade::new(&models, KnowledgeBase::global(), CascadeOptions::default());
    let report = process_file(&path, &cascade).unwrap();

    assert_eq!(report.image.name, "buffalo.png");
    assert_eq!((report.image.width, report.image.height), (64, 48));
    assert_eq!(report.result.breed_label.as_deref(), Some("Murrah"));
}

#[test]
fn test_process_file_rejects_corrupt_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let models = registry("Cow", "Gir");
    let cascade = Cascade::new(&models, KnowledgeBase::global(), CascadeOptions::default());
    let err = process_file(&path, &cascade).unwrap_err();

    assert!(matches!(err, Error::InvalidImage { .. }));
}

#[test]
fn test_top_producers_from_embedded_data() {
    let top: Vec<String> = analytics::top_by_yield(KnowledgeBase::global(), 3)
        .into_iter()
        .map(|row| row.breed)
        .collect();

    assert_eq!(top, ["Holstein_Friesian", "Ayrshire", "Red_Dane"]);
}

#[test]
fn test_recommendations_for_gir() {
    let gir = KnowledgeBase::global().lookup("Gir").unwrap();

    let first = recommend::recommendations(gir);
    assert_eq!(
        first,
        [
            "Suitable for hot climates - requires minimal cooling arrangements",
            "Moderate milk producer - good for small to medium dairy operations",
            "Excellent for agricultural work - can be used for plowing and transportation",
            "Disease resistant - requires minimal veterinary intervention",
        ]
    );
    assert_eq!(first, recommend::recommendations(gir));
}
