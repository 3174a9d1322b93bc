//! Configuration registry: the process-wide table of named sections.

use heapless::{FnvIndexMap, String};

use crate::error::{Error, RegistryError, Result};
use crate::option::MAX_NAME_LEN;
use crate::section::Section;

/// Maximum number of sections in the registry.
pub const MAX_SECTIONS: usize = 8;

/// Registry of named configuration sections.
///
/// Sections are created once, at load time, and live for the registry's
/// lifetime: there is no removal, so iteration order is always
/// registration order. Re-registering an existing section name is
/// rejected.
#[derive(Debug)]
pub struct ConfigRegistry {
    sections: FnvIndexMap<String<MAX_NAME_LEN>, Section, MAX_SECTIONS>,
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sections: FnvIndexMap::new(),
        }
    }

    /// Create a section with a name and one-line description and register
    /// it, returning a handle for declaring options.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSection` if the name is already
    /// registered, and `RegistryError::RegistryFull` if the registry has
    /// no room for another section.
    pub fn make_config(&mut self, name: &str, description: &str) -> Result<&mut Section> {
        let section = Section::new(name, description)?;
        let key = String::try_from(section.name()).unwrap_or_default();

        if self.sections.contains_key(&key) {
            return Err(Error::Registry(RegistryError::DuplicateSection(key)));
        }

        self.sections
            .insert(key.clone(), section)
            .map_err(|_| Error::Registry(RegistryError::RegistryFull))?;

        self.sections
            .get_mut(&key)
            .ok_or(Error::Registry(RegistryError::SectionNotFound(key)))
    }

    /// Get a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        let key = String::try_from(name).ok()?;
        self.sections.get(&key)
    }

    /// Get a mutable section by name.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        let key = String::try_from(name).ok()?;
        self.sections.get_mut(&key)
    }

    /// Get a section by name, or an error naming the missing section.
    pub fn section_or_error(&self, name: &str) -> Result<&Section> {
        self.section(name).ok_or_else(|| {
            Error::Registry(RegistryError::SectionNotFound(
                crate::option::truncated_name(name),
            ))
        })
    }

    /// Check if a section is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Get an iterator over section names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(|s| s.as_str())
    }

    /// Get an iterator over sections, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
