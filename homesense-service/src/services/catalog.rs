//! Read-only property catalog.
//!
//! The catalog is built once at startup and shared between requests without
//! locking. Lookups are exact string matches on the address.

use crate::models::PropertyRecord;
use std::collections::{BTreeMap, HashMap};

/// Lookup interface over the property records.
pub trait PropertyCatalog: Send + Sync {
    /// Find a record by its exact address. No trimming or case folding.
    fn lookup(&self, address: &str) -> Option<&PropertyRecord>;

    /// All known addresses, in catalog order.
    fn list_addresses(&self) -> Vec<String>;
}

/// In-memory catalog preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<PropertyRecord>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Build a catalog keyed by each record's own address. A later record with
    /// the same address replaces the earlier one in place.
    pub fn new(records: impl IntoIterator<Item = PropertyRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            match catalog.index.get(&record.address) {
                Some(&pos) => catalog.records[pos] = record,
                None => {
                    catalog
                        .index
                        .insert(record.address.clone(), catalog.records.len());
                    catalog.records.push(record);
                }
            }
        }
        catalog
    }

    /// The demo dataset served by default.
    pub fn simulated() -> Self {
        Self::new(simulated_properties())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PropertyCatalog for StaticCatalog {
    fn lookup(&self, address: &str) -> Option<&PropertyRecord> {
        self.index.get(address).map(|&pos| &self.records[pos])
    }

    fn list_addresses(&self) -> Vec<String> {
        self.records.iter().map(|r| r.address.clone()).collect()
    }
}

fn documents<const N: usize>(entries: [(&str, &str); N]) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|(label, text)| (label.to_string(), text.to_string()))
        .collect()
}

fn simulated_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            address: "123 Fictional Lane, London SW1A 1AA".to_string(),
            property_type: "Terraced House".to_string(),
            beds: 3,
            price_guide: "£550,000".to_string(),
            simulated_risks: vec![
                "Minor flood risk (low probability, past event nearby)".to_string(),
                "Approved planning for small extension on neighbouring property".to_string(),
                "Leasehold property (90 years remaining on lease)".to_string(),
                "EPC Rating: C (Good)".to_string(),
                "Local council tax band: D".to_string(),
            ],
            simulated_documents: documents([
                (
                    "lease_snippet",
                    "Clause 4.1: The Leaseholder shall pay annual ground rent of £250. \
                     Clause 7.2: No structural alterations without Lessor's prior written consent.",
                ),
                (
                    "planning_excerpt",
                    "Application 2024/00123/EXT: Approved for single-storey rear extension \
                     at 125 Fictional Lane.",
                ),
            ]),
        },
        PropertyRecord {
            address: "456 Prototype Mews, Manchester M1 1AB".to_string(),
            property_type: "Detached House".to_string(),
            beds: 4,
            price_guide: "£400,000".to_string(),
            simulated_risks: vec![
                "No significant flood risk identified".to_string(),
                "No recent planning applications nearby".to_string(),
                "Freehold property".to_string(),
                "EPC Rating: B (Very Good)".to_string(),
                "Local council tax band: C".to_string(),
            ],
            simulated_documents: documents([
                (
                    "survey_highlight",
                    "Roof appears in good condition. Damp readings found in utility room \
                     (minor, likely condensation).",
                ),
                (
                    "local_amenity_note",
                    "Within 0.5 miles of 'Outstanding' Ofsted primary school.",
                ),
            ]),
        },
    ]
}
