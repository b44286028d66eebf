pub mod catalog;
pub mod prompts;
pub mod providers;
pub mod valuation;

pub use catalog::{PropertyCatalog, StaticCatalog};
pub use valuation::parse_valuation;
