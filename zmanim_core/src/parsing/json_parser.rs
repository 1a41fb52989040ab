use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::core::ZmanDefinition;

/// Errors raised while reading a definition catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON at '{path}': {message}")]
    InvalidJson { path: String, message: String },

    #[error("Duplicate definition name: {0}")]
    DuplicateName(String),

    #[error("Definition name must not be empty (entry {0})")]
    EmptyName(usize),
}

/// A catalog entry: a caller-chosen name and the definition it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedDefinition {
    pub name: String,
    pub definition: ZmanDefinition,
}

/// Raw JSON structure of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogJson {
    definitions: Vec<NamedDefinition>,
}

/// Definitions supplied by a caller, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionCatalog {
    entries: Vec<NamedDefinition>,
}

impl DefinitionCatalog {
    pub fn get(&self, name: &str) -> Option<&ZmanDefinition> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.definition)
    }

    pub fn entries(&self) -> &[NamedDefinition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a definition catalog from a JSON file
///
/// # Arguments
/// * `json_path` - Path to a document of the form `{ "definitions": [...] }`
///
/// # Returns
/// * `Ok(DefinitionCatalog)` with entries in document order
/// * `Err` if the file cannot be read or its content is rejected by
///   [`parse_catalog_json_str`]
pub fn parse_catalog_json(json_path: &Path) -> Result<DefinitionCatalog> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    let catalog = parse_catalog_json_str(&json_content)
        .with_context(|| format!("Failed to parse catalog: {}", json_path.display()))?;

    log::info!(
        "Loaded {} zman definitions from {}",
        catalog.len(),
        json_path.display()
    );
    Ok(catalog)
}

/// Parse a definition catalog from a string
///
/// Deserialization errors carry the JSON path of the offending value, e.g.
/// `definitions[1].definition.main_calculation_method_used`.
///
/// # Arguments
/// * `json_str` - JSON catalog document
///
/// # Returns
/// * `Ok(DefinitionCatalog)` if every entry parses and names are unique
/// * `Err(CatalogError::InvalidJson)` on malformed JSON or invalid values
/// * `Err(CatalogError::EmptyName)` if an entry has a blank name
/// * `Err(CatalogError::DuplicateName)` if two entries share a name
pub fn parse_catalog_json_str(json_str: &str) -> Result<DefinitionCatalog, CatalogError> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);
    let raw: CatalogJson = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        log::warn!("Rejected catalog JSON at {}", path);
        CatalogError::InvalidJson {
            path,
            message: e.into_inner().to_string(),
        }
    })?;
    deserializer
        .end()
        .map_err(|e| CatalogError::InvalidJson {
            path: "<end of document>".to_string(),
            message: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    for (idx, entry) in raw.definitions.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(idx));
        }
        if !seen.insert(entry.name.as_str()) {
            log::warn!("Duplicate definition name in catalog: {}", entry.name);
            return Err(CatalogError::DuplicateName(entry.name.clone()));
        }
    }

    Ok(DefinitionCatalog {
        entries: raw.definitions,
    })
}
