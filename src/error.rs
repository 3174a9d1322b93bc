//! Error types for config-registry.
//!
//! Provides unified error handling across value construction, option
//! declaration, section lookup, and override loading.

use core::fmt;

use crate::value::ValueKind;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all config-registry operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Section registration or lookup error
    Registry(RegistryError),
    /// Option declaration or lookup error
    Option(OptionError),
    /// Value construction or type error
    Value(ValueError),
    /// Override parsing or file loading error
    Load(LoadError),
}

/// Section-level errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Section name already registered
    DuplicateSection(heapless::String<32>),
    /// Section name not found in the registry
    SectionNotFound(heapless::String<32>),
    /// Section name is empty or exceeds the maximum length
    InvalidSectionName(heapless::String<32>),
    /// Registry has no room for another section
    RegistryFull,
}

/// Option-level errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Option name already declared in the section
    DuplicateOption {
        /// Owning section name
        section: heapless::String<32>,
        /// Offending option name
        name: heapless::String<32>,
    },
    /// Option name not declared in the section
    OptionNotFound {
        /// Owning section name
        section: heapless::String<32>,
        /// Requested option name
        name: heapless::String<32>,
    },
    /// Option name is empty or exceeds the maximum length
    InvalidOptionName(heapless::String<32>),
    /// Documentation string exceeds the maximum length
    DocTooLong,
    /// Section has no room for another option
    SectionFull(heapless::String<32>),
}

/// Value construction and typing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Assigned value's kind does not match the declared default's kind
    TypeMismatch {
        /// Option name the assignment targeted
        option: heapless::String<32>,
        /// Kind of the declared default
        expected: ValueKind,
        /// Kind of the rejected value
        found: ValueKind,
    },
    /// String value exceeds the maximum length
    StringTooLong,
    /// List value exceeds the maximum element count
    ListTooLong,
}

/// Override loading errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Failed to parse TOML override data
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Option(e) => write!(f, "Option error: {}", e),
            Error::Value(e) => write!(f, "Value error: {}", e),
            Error::Load(e) => write!(f, "Load error: {}", e),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateSection(name) => {
                write!(f, "Section '{}' is already registered", name)
            }
            RegistryError::SectionNotFound(name) => write!(f, "Section '{}' not found", name),
            RegistryError::InvalidSectionName(name) => {
                write!(f, "Invalid section name: '{}'", name)
            }
            RegistryError::RegistryFull => write!(f, "Registry is full"),
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::DuplicateOption { section, name } => {
                write!(f, "Option '{}' already declared in section '{}'", name, section)
            }
            OptionError::OptionNotFound { section, name } => {
                write!(f, "Option '{}' not declared in section '{}'", name, section)
            }
            OptionError::InvalidOptionName(name) => write!(f, "Invalid option name: '{}'", name),
            OptionError::DocTooLong => write!(f, "Documentation string exceeds the maximum length"),
            OptionError::SectionFull(name) => {
                write!(f, "Section '{}' has no room for another option", name)
            }
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::TypeMismatch {
                option,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Option '{}' expects a {} value, got {}",
                    option, expected, found
                )
            }
            ValueError::StringTooLong => write!(f, "String value exceeds the maximum length"),
            ValueError::ListTooLong => write!(f, "List value exceeds the maximum element count"),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            LoadError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<OptionError> for Error {
    fn from(e: OptionError) -> Self {
        Error::Option(e)
    }
}

impl From<ValueError> for Error {
    fn from(e: ValueError) -> Self {
        Error::Value(e)
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Error::Load(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

#[cfg(feature = "std")]
impl std::error::Error for OptionError {}

#[cfg(feature = "std")]
impl std::error::Error for ValueError {}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}
