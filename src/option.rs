//! Option declarations: (name, default, documentation) triples.

use heapless::String;

use crate::error::OptionError;
use crate::value::Value;

/// Maximum length of an option or section name.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum length of a documentation string.
pub const MAX_DOC_LEN: usize = 128;

/// A declared option: name, default value, and documentation string.
///
/// Declarations are immutable after registration; runtime overrides live
/// alongside them in [`OptionEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDeclaration {
    /// Option name, unique within its owning section.
    pub name: String<MAX_NAME_LEN>,

    /// Default value. Its kind determines which overrides are accepted;
    /// a `None` default leaves the option untyped.
    pub default: Value,

    /// Human-readable documentation string.
    pub doc: String<MAX_DOC_LEN>,
}

impl OptionDeclaration {
    /// Create a new option declaration.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::InvalidOptionName` if the name is empty or
    /// exceeds [`MAX_NAME_LEN`], and `OptionError::DocTooLong` if the
    /// documentation string exceeds [`MAX_DOC_LEN`].
    pub fn new(name: &str, default: Value, doc: &str) -> Result<Self, OptionError> {
        if name.is_empty() {
            return Err(OptionError::InvalidOptionName(String::new()));
        }
        let name = String::try_from(name)
            .map_err(|_| OptionError::InvalidOptionName(truncated_name(name)))?;
        let doc = String::try_from(doc).map_err(|_| OptionError::DocTooLong)?;

        Ok(Self { name, default, doc })
    }
}

/// A declared option together with its optional runtime override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    decl: OptionDeclaration,
    value: Option<Value>,
}

impl OptionEntry {
    /// Create an entry for a declaration with no override set.
    pub fn new(decl: OptionDeclaration) -> Self {
        Self { decl, value: None }
    }

    /// Get the declaration.
    #[inline]
    pub fn declaration(&self) -> &OptionDeclaration {
        &self.decl
    }

    /// Get the declared default value.
    #[inline]
    pub fn default(&self) -> &Value {
        &self.decl.default
    }

    /// Get the documentation string.
    #[inline]
    pub fn doc(&self) -> &str {
        self.decl.doc.as_str()
    }

    /// Get the effective value: the override when set, else the default.
    pub fn effective(&self) -> &Value {
        self.value.as_ref().unwrap_or(&self.decl.default)
    }

    /// Check whether an override is set.
    #[inline]
    pub fn is_overridden(&self) -> bool {
        self.value.is_some()
    }

    /// Set the override value. Kind checking against the default is the
    /// owning section's responsibility.
    pub(crate) fn set(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Clear the override, restoring the default.
    pub(crate) fn reset(&mut self) {
        self.value = None;
    }
}

/// Truncate an over-long name so it fits in an error payload.
pub(crate) fn truncated_name(name: &str) -> String<MAX_NAME_LEN> {
    let mut s = String::new();
    for c in name.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_construction() {
        let decl = OptionDeclaration::new("timeout", Value::int(0), "doc").unwrap();
        assert_eq!(decl.name.as_str(), "timeout");
        assert_eq!(decl.default, Value::int(0));
        assert_eq!(decl.doc.as_str(), "doc");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = OptionDeclaration::new("", Value::none(), "doc");
        assert!(matches!(result, Err(OptionError::InvalidOptionName(_))));
    }

    #[test]
    fn test_long_name_rejected() {
        let long = "n".repeat(MAX_NAME_LEN + 1);
        let result = OptionDeclaration::new(&long, Value::none(), "doc");
        assert!(matches!(result, Err(OptionError::InvalidOptionName(_))));
    }

    #[test]
    fn test_long_doc_rejected() {
        let long = "d".repeat(MAX_DOC_LEN + 1);
        let result = OptionDeclaration::new("opt", Value::none(), &long);
        assert_eq!(result, Err(OptionError::DocTooLong));
    }

    #[test]
    fn test_entry_effective_value() {
        let decl = OptionDeclaration::new("opt", Value::int(0), "doc").unwrap();
        let mut entry = OptionEntry::new(decl);

        assert_eq!(entry.effective(), &Value::int(0));
        assert!(!entry.is_overridden());

        entry.set(Value::int(42));
        assert_eq!(entry.effective(), &Value::int(42));
        assert!(entry.is_overridden());
        assert_eq!(entry.default(), &Value::int(0));

        entry.reset();
        assert_eq!(entry.effective(), &Value::int(0));
        assert!(!entry.is_overridden());
    }
}
