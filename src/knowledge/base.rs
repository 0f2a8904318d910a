//! The process-wide breed knowledge base.

use crate::error::{Error, Result};
use crate::knowledge::{BreedRecord, BreedType, Origin};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, error};

/// Breed data compiled into the binary.
const EMBEDDED_BREEDS: &str = include_str!("../../data/breeds.toml");

static GLOBAL: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_toml_str(EMBEDDED_BREEDS).unwrap_or_else(|e| {
        error!("Embedded breed data is invalid, continuing without records: {e}");
        KnowledgeBase::default()
    })
});

#[derive(Deserialize)]
struct BreedFile {
    breeds: Vec<BreedRecord>,
}

/// Read-only collection of breed records.
///
/// Record order is the order of the source data and is preserved by every
/// listing.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    records: Vec<BreedRecord>,
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// The shared knowledge base, built once on first access.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Build a knowledge base from TOML with one `[[breeds]]` table per record.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: BreedFile =
            toml::from_str(contents).map_err(|e| Error::KnowledgeBaseParse { source: e })?;
        Self::from_records(file.breeds)
    }

    /// Build a knowledge base from records, rejecting duplicate names.
    pub fn from_records(records: Vec<BreedRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), position).is_some() {
                return Err(Error::DuplicateBreed {
                    name: record.name.clone(),
                });
            }
        }
        debug!("Knowledge base holds {} breed records", records.len());
        Ok(Self { records, index })
    }

    /// Look up a breed by its exact, case-sensitive label.
    pub fn lookup(&self, name: &str) -> Option<&BreedRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// All records in source order.
    pub fn records(&self) -> &[BreedRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the knowledge base has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching an optional type and an optional origin partition.
    pub fn filter(
        &self,
        breed_type: Option<BreedType>,
        origin: Option<Origin>,
    ) -> impl Iterator<Item = &BreedRecord> {
        self.records.iter().filter(move |record| {
            breed_type.is_none_or(|t| record.breed_type == t)
                && origin.is_none_or(|o| record.origin_partition() == o)
        })
    }
}

/// Human-facing form of a label: underscores become spaces.
pub fn display_name(label: &str) -> String {
    label.replace('_', " ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::BREED_LABELS;

    #[test]
    fn test_embedded_data_parses() {
        let kb = KnowledgeBase::from_toml_str(EMBEDDED_BREEDS).unwrap();
        assert_eq!(kb.len(), 41);
    }

    #[test]
    fn test_every_classifier_label_has_a_record() {
        let kb = KnowledgeBase::global();
        for label in BREED_LABELS {
            assert!(kb.lookup(label).is_some(), "missing record for {label}");
        }
    }

    #[test]
    fn test_lookup_unknown_breed_is_none() {
        assert!(KnowledgeBase::global().lookup("NotARealBreed").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let kb = KnowledgeBase::global();
        assert!(kb.lookup("Gir").is_some());
        assert!(kb.lookup("gir").is_none());
    }

    #[test]
    fn test_gir_record_fields() {
        let gir = KnowledgeBase::global().lookup("Gir").unwrap();
        assert_eq!(gir.breed_type, BreedType::Cow);
        assert_eq!(gir.milk_yield, "1200-1800 liters/lactation");
        assert_eq!(gir.origin_partition(), Origin::Indian);
    }

    #[test]
    fn test_origin_partition_uses_india_marker() {
        let kb = KnowledgeBase::global();
        assert_eq!(
            kb.lookup("Sahiwal").unwrap().origin_partition(),
            Origin::International
        );
        assert_eq!(
            kb.lookup("Nili_Ravi").unwrap().origin_partition(),
            Origin::Indian
        );
        assert_eq!(
            kb.lookup("Jersey").unwrap().origin_partition(),
            Origin::International
        );
    }

    #[test]
    fn test_filter_by_type_and_origin() {
        let kb = KnowledgeBase::global();
        let buffaloes: Vec<_> = kb.filter(Some(BreedType::Buffalo), None).collect();
        assert_eq!(buffaloes.len(), 9);
        assert!(buffaloes.iter().all(|r| r.breed_type == BreedType::Buffalo));

        let international_cows: Vec<_> = kb
            .filter(Some(BreedType::Cow), Some(Origin::International))
            .map(|r| r.name.as_str())
            .collect();
        assert!(international_cows.contains(&"Holstein_Friesian"));
        assert!(!international_cows.contains(&"Gir"));

        assert_eq!(kb.filter(None, None).count(), kb.len());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let gir = KnowledgeBase::global().lookup("Gir").unwrap().clone();
        let result = KnowledgeBase::from_records(vec![gir.clone(), gir]);
        assert!(matches!(result, Err(Error::DuplicateBreed { .. })));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let toml = r#"
[[breeds]]
name = "Yak"
type = "Yak"
origin = "Tibet"
characteristics = ""
milk_yield = "300 liters/lactation"
fat_content = "6%"
color = ""
size = ""
weight = ""
special_features = ""
climate_adaptation = ""
breeding_purpose = ""
lactation_period = ""
calving_interval = ""
description = ""
"#;
        assert!(matches!(
            KnowledgeBase::from_toml_str(toml),
            Err(Error::KnowledgeBaseParse { .. })
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Holstein_Friesian"), "Holstein Friesian");
        assert_eq!(display_name("Gir"), "Gir");
    }
}
