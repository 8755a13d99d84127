//! Prefix map configuration
//!
//! A prefix map is a YAML mapping of `PREFIX: expansion` pairs. Order is
//! kept, so listings follow the file.

use super::error::CurieResult;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Short prefix -> expanded IRI prefix, in insertion order.
pub type CurieMap = IndexMap<String, String>;

const DEFAULT_CURIE_MAP: &str = include_str!("default_curie_map.yaml");

/// The built-in map of common OBO and semantic-web prefixes.
pub fn default_curie_map() -> CurieMap {
    // parse errors are caught by test_embedded_map_parses
    parse_curie_map(DEFAULT_CURIE_MAP).unwrap_or_default()
}

/// Parse a YAML prefix map.
pub fn parse_curie_map(yaml: &str) -> CurieResult<CurieMap> {
    if yaml.trim().is_empty() {
        return Ok(CurieMap::new());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Read a YAML prefix map from disk.
pub fn load_curie_map(path: impl AsRef<Path>) -> CurieResult<CurieMap> {
    let content = fs::read_to_string(path)?;
    parse_curie_map(&content)
}
