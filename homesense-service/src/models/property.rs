use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A simulated property listing.
///
/// Serialised with the field names the browser client expects, and echoed
/// back verbatim as `data_used` by the health check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: String,

    #[serde(rename = "type")]
    pub property_type: String,

    pub beds: u32,

    /// Display-formatted, e.g. `£550,000`.
    pub price_guide: String,

    pub simulated_risks: Vec<String>,

    /// Document label (snake_case) to excerpt text.
    pub simulated_documents: BTreeMap<String, String>,
}
