//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "breedscope";

/// Species labels in model output order.
pub const SPECIES_LABELS: [&str; 3] = ["Buffalo", "Cow", "None"];

/// Breed labels in model output order.
pub const BREED_LABELS: [&str; 41] = [
    "Alambadi",
    "Amritmahal",
    "Ayrshire",
    "Banni",
    "Bargur",
    "Bhadawari",
    "Brown_Swiss",
    "Dangi",
    "Deoni",
    "Gir",
    "Guernsey",
    "Hallikar",
    "Hariana",
    "Holstein_Friesian",
    "Jaffrabadi",
    "Jersey",
    "Kangayam",
    "Kankrej",
    "Kasargod",
    "Kenkatha",
    "Kherigarh",
    "Khillari",
    "Krishna_Valley",
    "Malnad_gidda",
    "Mehsana",
    "Murrah",
    "Nagori",
    "Nagpuri",
    "Nili_Ravi",
    "Nimari",
    "Ongole",
    "Pulikulam",
    "Rathi",
    "Red_Dane",
    "Red_Sindhi",
    "Sahiwal",
    "Surti",
    "Tharparkar",
    "Toda",
    "Umblachery",
    "Vechur",
];

/// Image preprocessing constants.
pub mod preprocess {
    /// Model input height and width in pixels.
    pub const INPUT_SIZE: u32 = 224;

    /// Number of color channels fed to the models.
    pub const CHANNELS: usize = 3;

    /// Per-channel mean (ImageNet statistics, RGB order).
    pub const MEAN: [f32; 3] = [0.485, 0.456, 0.406];

    /// Per-channel standard deviation (ImageNet statistics, RGB order).
    pub const STD: [f32; 3] = [0.229, 0.224, 0.225];

    /// Accepted image file extensions.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
}

/// Species confidence gate.
pub mod gate {
    /// Minimum species confidence required before breed identification runs.
    pub const MIN_CONFIDENCE: f32 = 0.60;

    /// Species labels that qualify for breed identification.
    pub const CATTLE_LABELS: [&str; 2] = ["Cow", "Buffalo"];
}

/// Descriptive confidence tiers.
pub mod confidence {
    /// Lower bound of the high tier.
    pub const HIGH: f32 = 0.80;
    /// Lower bound of the moderate tier.
    pub const MODERATE: f32 = 0.60;
}

/// Knowledge base constants.
pub mod knowledge {
    /// Origin marker for the Indian partition.
    pub const INDIAN_MARKER: &str = "India";

    /// Curated comparison set for cow breeds.
    pub const COW_PEERS: [&str; 5] = [
        "Gir",
        "Holstein_Friesian",
        "Jersey",
        "Sahiwal",
        "Red_Sindhi",
    ];

    /// Curated comparison set for buffalo breeds.
    pub const BUFFALO_PEERS: [&str; 5] = ["Murrah", "Mehsana", "Jaffrabadi", "Surti", "Nili_Ravi"];

    /// Placeholder text for labels without a curated record.
    pub const PLACEHOLDER_MESSAGE: &str = "This breed has been identified, \
        but detailed information is not yet in the knowledge base.";
}

/// Analytics defaults.
pub mod analytics {
    /// Default number of breeds in the yield ranking.
    pub const DEFAULT_TOP_N: usize = 10;

    /// Default number of breeds in a peer comparison.
    pub const DEFAULT_PEER_LIMIT: usize = 5;
}

/// Milk yield tiers (lower bound of the yield range, liters per lactation).
pub mod yield_tier {
    /// Lower bound above which a breed is a high producer.
    pub const HIGH: f64 = 2000.0;
    /// Lower bound above which a breed is a moderate producer.
    pub const MODERATE: f64 = 1000.0;
}

/// Fat content above which milk suits ghee, butter and cheese (percent).
pub const HIGH_FAT_PERCENT: f64 = 5.0;

/// Default model file names.
pub mod model_files {
    /// Directory holding bundled model files.
    pub const DIR: &str = "models";
    /// Species classifier.
    pub const SPECIES: &str = "species_classifier.onnx";
    /// Breed classifier.
    pub const BREED: &str = "breed_classifier.onnx";
}
