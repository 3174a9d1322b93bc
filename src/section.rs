//! Named configuration sections holding declared options.

use heapless::{FnvIndexMap, String};

use crate::error::{Error, OptionError, RegistryError, Result, ValueError};
use crate::option::{OptionDeclaration, OptionEntry, MAX_DOC_LEN, MAX_NAME_LEN};
use crate::value::Value;

/// Maximum number of options in a section.
pub const MAX_OPTIONS: usize = 64;

/// A named, described grouping of configuration options.
///
/// Options are stored in declaration order. Names are unique within the
/// section; duplicate declarations are rejected.
#[derive(Debug, Clone)]
pub struct Section {
    name: String<MAX_NAME_LEN>,
    description: String<MAX_DOC_LEN>,
    options: FnvIndexMap<String<MAX_NAME_LEN>, OptionEntry, MAX_OPTIONS>,
}

impl Section {
    /// Create a new empty section.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or too long, or the
    /// description is too long.
    pub fn new(name: &str, description: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Registry(RegistryError::InvalidSectionName(
                String::new(),
            )));
        }
        let name = String::try_from(name).map_err(|_| {
            Error::Registry(RegistryError::InvalidSectionName(
                crate::option::truncated_name(name),
            ))
        })?;
        let description =
            String::try_from(description).map_err(|_| Error::Option(OptionError::DocTooLong))?;

        Ok(Self {
            name,
            description,
            options: FnvIndexMap::new(),
        })
    }

    /// Get the section name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the section description.
    #[inline]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Declare an option with a name, default value, and documentation string.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::DuplicateOption` if the name is already
    /// declared in this section, and `OptionError::SectionFull` if the
    /// section has no room for another option.
    pub fn add_option(&mut self, name: &str, default: Value, doc: &str) -> Result<()> {
        let decl = OptionDeclaration::new(name, default, doc)?;

        if self.options.contains_key(&decl.name) {
            return Err(Error::Option(OptionError::DuplicateOption {
                section: self.name.clone(),
                name: decl.name,
            }));
        }

        let key = decl.name.clone();
        self.options
            .insert(key, OptionEntry::new(decl))
            .map_err(|_| Error::Option(OptionError::SectionFull(self.name.clone())))?;

        Ok(())
    }

    /// Get the effective value of an option: the override when set, else
    /// the declared default.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entry(name).map(OptionEntry::effective)
    }

    /// Get the effective value of an option, or an error listing the
    /// missing name and owning section.
    pub fn get_or_error(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| Error::Option(self.not_found(name)))
    }

    /// Get the declared default value of an option.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.entry(name).map(OptionEntry::default)
    }

    /// Get the documentation string of an option.
    pub fn doc_of(&self, name: &str) -> Option<&str> {
        self.entry(name).map(OptionEntry::doc)
    }

    /// Set an override value for a declared option.
    ///
    /// The value's kind must match the declared default's kind; options
    /// declared with a `None` default accept any kind.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::OptionNotFound` for undeclared names and
    /// `ValueError::TypeMismatch` for kind mismatches.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<()> {
        let section = self.name.clone();
        let entry = match self.entry_mut(name) {
            Some(entry) => entry,
            None => {
                return Err(Error::Option(OptionError::OptionNotFound {
                    section,
                    name: crate::option::truncated_name(name),
                }))
            }
        };

        if !entry.default().accepts(&value) {
            return Err(Error::Value(ValueError::TypeMismatch {
                option: entry.declaration().name.clone(),
                expected: entry.default().kind(),
                found: value.kind(),
            }));
        }

        entry.set(value);
        Ok(())
    }

    /// Clear an option's override, restoring the declared default.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::OptionNotFound` for undeclared names.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        let section = self.name.clone();
        match self.entry_mut(name) {
            Some(entry) => {
                entry.reset();
                Ok(())
            }
            None => Err(Error::Option(OptionError::OptionNotFound {
                section,
                name: crate::option::truncated_name(name),
            })),
        }
    }

    /// Check whether an option currently has an override set.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.entry(name).is_some_and(OptionEntry::is_overridden)
    }

    /// Check if an option is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Get an iterator over option names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(|s| s.as_str())
    }

    /// Get an iterator over options, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the section has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&OptionEntry> {
        let key = String::try_from(name).ok()?;
        self.options.get(&key)
    }

    pub(crate) fn entry_mut(&mut self, name: &str) -> Option<&mut OptionEntry> {
        let key = String::try_from(name).ok()?;
        self.options.get_mut(&key)
    }

    fn not_found(&self, name: &str) -> OptionError {
        OptionError::OptionNotFound {
            section: self.name.clone(),
            name: crate::option::truncated_name(name),
        }
    }
}
