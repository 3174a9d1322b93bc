//! Unit test harness for config-registry.
//!
//! This module organizes unit tests for each component of the library.

mod declaration_validation;
mod override_parsing;
