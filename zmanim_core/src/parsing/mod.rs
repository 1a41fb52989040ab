//! Parsers for caller-supplied definition catalogs.
//!
//! # Example
//!
//! ```no_run
//! use zmanim_core::parsing::json_parser::parse_catalog_json;
//! use std::path::Path;
//!
//! let catalog = parse_catalog_json(Path::new("zmanim.json"))
//!     .expect("Failed to parse catalog");
//! ```

pub mod json_parser;


pub use json_parser::{CatalogError, DefinitionCatalog, NamedDefinition};
