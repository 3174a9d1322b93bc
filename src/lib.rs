//! # config-registry
//!
//! Typed configuration option registry with named sections, defaults, and
//! documentation strings.
//!
//! ## Features
//!
//! - **Typed options**: string, integer, none, and list defaults; overrides
//!   are checked against the declared default's kind
//! - **Named sections**: options grouped under a section name and one-line
//!   description, unique within the registry
//! - **Declaration order preserved**: sections and options iterate in the
//!   order they were registered
//! - **TOML overrides**: layer values from TOML files over declared
//!   defaults (`std` feature)
//! - **no_std compatible**: core registry works without the standard
//!   library, using bounded `heapless` storage
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use config_registry::{ConfigRegistry, Value};
//!
//! let mut registry = ConfigRegistry::new();
//!
//! // Register a section and declare its options
//! let section = registry.make_config("net", "network settings")?;
//! section.add_option("retries", Value::int(3), "retry count")?;
//! section.add_option("host", Value::empty_str(), "remote host")?;
//!
//! // Layer overrides from a TOML file
//! config_registry::load_overrides(&mut registry, "overrides.toml")?;
//!
//! // Query effective values
//! let retries = registry.section("net").unwrap().get("retries");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod error;
pub mod fixtures;
pub mod option;
pub mod registry;
pub mod section;
pub mod validation;
pub mod value;

#[cfg(feature = "std")]
pub mod loader;

// Re-exports for ergonomic API
pub use error::{Error, LoadError, OptionError, RegistryError, Result, ValueError};
pub use option::{OptionDeclaration, OptionEntry};
pub use registry::ConfigRegistry;
pub use section::Section;
pub use validation::{validate_registry, validate_section};
pub use value::{Scalar, Value, ValueKind};

// Override loading (std only)
#[cfg(feature = "std")]
pub use loader::{apply_overrides, load_overrides, parse_overrides, OverrideSet};
