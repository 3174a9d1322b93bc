//! Unit tests for option declaration and registry contracts.

use config_registry::option::{MAX_DOC_LEN, MAX_NAME_LEN};
use config_registry::{ConfigRegistry, Error, OptionError, Value};
use proptest::prelude::*;

/// Test that option declarations validate their names.
#[test]
fn test_invalid_option_names_rejected() {
    let mut registry = ConfigRegistry::new();
    let section = registry.make_config("app", "application settings").unwrap();

    let result = section.add_option("", Value::int(0), "doc");
    assert!(matches!(
        result,
        Err(Error::Option(OptionError::InvalidOptionName(_)))
    ));

    let long = "n".repeat(MAX_NAME_LEN + 1);
    let result = section.add_option(&long, Value::int(0), "doc");
    assert!(matches!(
        result,
        Err(Error::Option(OptionError::InvalidOptionName(_)))
    ));
}

/// Test that over-long documentation strings are rejected.
#[test]
fn test_long_doc_rejected() {
    let mut registry = ConfigRegistry::new();
    let section = registry.make_config("app", "application settings").unwrap();

    let long = "d".repeat(MAX_DOC_LEN + 1);
    let result = section.add_option("opt", Value::int(0), &long);
    assert!(matches!(result, Err(Error::Option(OptionError::DocTooLong))));
}

/// Test that declarations are queryable through every accessor.
#[test]
fn test_declaration_accessors() {
    let mut registry = ConfigRegistry::new();
    let section = registry.make_config("app", "application settings").unwrap();
    section
        .add_option("mode", Value::empty_str(), "run mode")
        .unwrap();

    assert!(section.contains("mode"));
    assert_eq!(section.doc_of("mode"), Some("run mode"));
    assert_eq!(section.default_of("mode"), Some(&Value::empty_str()));
    assert_eq!(section.get("mode"), Some(&Value::empty_str()));
    assert!(section.get_or_error("mode").is_ok());
}

proptest! {
    /// Any well-formed name registers exactly once and reads back its default.
    #[test]
    fn prop_declared_option_reads_back(name in "[a-z][a-z0-9_]{0,30}", default in -1000i64..1000) {
        let mut registry = ConfigRegistry::new();
        let section = registry.make_config("app", "application settings").unwrap();

        section.add_option(&name, Value::int(default), "doc").unwrap();
        prop_assert_eq!(section.get(&name).unwrap().as_int(), Some(default));

        // Second declaration of the same name is always rejected
        let result = section.add_option(&name, Value::int(default), "doc");
        let rejected = matches!(
            result,
            Err(Error::Option(OptionError::DuplicateOption { .. }))
        );
        prop_assert!(rejected, "duplicate declaration of '{}' was not rejected", name);
    }

    /// Integer overrides of integer options always take effect and reset cleanly.
    #[test]
    fn prop_override_roundtrip(value in any::<i64>()) {
        let mut registry = ConfigRegistry::new();
        let section = registry.make_config("app", "application settings").unwrap();
        section.add_option("opt", Value::int(0), "doc").unwrap();

        section.set_value("opt", Value::int(value)).unwrap();
        prop_assert_eq!(section.get("opt").unwrap().as_int(), Some(value));

        section.reset("opt").unwrap();
        prop_assert_eq!(section.get("opt").unwrap().as_int(), Some(0));
    }
}
