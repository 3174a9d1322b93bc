//! Registry validation.

use heapless::String;

use crate::error::{Error, OptionError, RegistryError, Result, ValueError};
use crate::registry::ConfigRegistry;
use crate::section::Section;

/// Validate a registry.
///
/// Checks every registered section with [`validate_section`].
pub fn validate_registry(registry: &ConfigRegistry) -> Result<()> {
    for (_, section) in registry.iter() {
        validate_section(section)?;
    }

    Ok(())
}

/// Validate a single section.
///
/// Checks:
/// - The section name is non-empty
/// - Every declared option name is non-empty
/// - Any override present matches the declared default's kind
///
/// Construction through [`ConfigRegistry::make_config`] and
/// [`Section::add_option`] already enforces these; the sweep re-checks
/// them so externally assembled state fails loudly instead of silently.
pub fn validate_section(section: &Section) -> Result<()> {
    if section.name().is_empty() {
        return Err(Error::Registry(RegistryError::InvalidSectionName(
            String::new(),
        )));
    }

    for (name, entry) in section.iter() {
        if name.is_empty() {
            return Err(Error::Option(OptionError::InvalidOptionName(String::new())));
        }

        if entry.is_overridden() && !entry.default().accepts(entry.effective()) {
            return Err(Error::Value(ValueError::TypeMismatch {
                option: entry.declaration().name.clone(),
                expected: entry.default().kind(),
                found: entry.effective().kind(),
            }));
        }
    }

    Ok(())
}
