//! Override loading from TOML files (std only).
//!
//! Overrides are plain TOML tables keyed by section name:
//!
//! ```toml
//! [net]
//! retries = 5
//! host = "localhost"
//! ```
//!
//! Every overridden option must already be declared, and the value's kind
//! must match the declared default's kind.

use std::fs;
use std::path::Path;

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{Error, LoadError, RegistryError, Result};
use crate::option::MAX_NAME_LEN;
use crate::registry::{ConfigRegistry, MAX_SECTIONS};
use crate::section::MAX_OPTIONS;
use crate::value::Value;

/// Parsed override data: per-section tables of option values.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct OverrideSet {
    sections: FnvIndexMap<
        String<MAX_NAME_LEN>,
        FnvIndexMap<String<MAX_NAME_LEN>, Value, MAX_OPTIONS>,
        MAX_SECTIONS,
    >,
}

impl OverrideSet {
    /// Get an iterator over (section name, option name, value) triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.sections.iter().flat_map(|(section, options)| {
            options
                .iter()
                .map(move |(name, value)| (section.as_str(), name.as_str(), value))
        })
    }

    /// Check if the override set is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|options| options.is_empty())
    }
}

/// Load overrides from a TOML file and apply them to the registry.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any
/// override targets an unknown section or option or mismatches the
/// declared default's kind.
///
/// # Example
///
/// ```rust,ignore
/// use config_registry::{load_overrides, ConfigRegistry};
///
/// let mut registry = ConfigRegistry::new();
/// load_overrides(&mut registry, "overrides.toml")?;
/// ```
pub fn load_overrides<P: AsRef<Path>>(registry: &mut ConfigRegistry, path: P) -> Result<()> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Load(LoadError::IoError(msg))
    })?;

    let overrides = parse_overrides(&content)?;
    apply_overrides(registry, &overrides)
}

/// Parse overrides from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or contains value kinds the
/// registry does not support (floats, booleans, nested tables).
pub fn parse_overrides(content: &str) -> Result<OverrideSet> {
    toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Load(LoadError::ParseError(msg))
    })
}

/// Apply parsed overrides to declared options in the registry.
///
/// # Errors
///
/// Returns an error naming the first unknown section, unknown option, or
/// kind-mismatched value. Earlier overrides in the set stay applied.
pub fn apply_overrides(registry: &mut ConfigRegistry, overrides: &OverrideSet) -> Result<()> {
    for (section_name, options) in overrides.sections.iter() {
        let section = match registry.section_mut(section_name.as_str()) {
            Some(section) => section,
            None => {
                return Err(Error::Registry(RegistryError::SectionNotFound(
                    section_name.clone(),
                )))
            }
        };

        for (name, value) in options.iter() {
            section.set_value(name.as_str(), value.clone())?;
        }
    }

    Ok(())
}
