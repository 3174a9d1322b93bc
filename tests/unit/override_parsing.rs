//! Unit tests for TOML override parsing.

use config_registry::value::{MAX_LIST_LEN, MAX_STR_LEN};
use config_registry::{parse_overrides, ValueKind};

/// Test parsing a single-section override table.
#[test]
fn test_parse_single_section() {
    let toml_str = r#"
[net]
host = "localhost"
retries = 5
"#;

    let overrides = parse_overrides(toml_str).expect("Failed to parse TOML");
    let entries: Vec<_> = overrides.iter().collect();

    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .any(|(s, n, v)| *s == "net" && *n == "host" && v.as_str() == Some("localhost")));
    assert!(entries
        .iter()
        .any(|(s, n, v)| *s == "net" && *n == "retries" && v.as_int() == Some(5)));
}

/// Test parsing overrides spanning multiple sections.
#[test]
fn test_parse_multiple_sections() {
    let toml_str = r#"
[net]
retries = 5

[storage]
path = "/var/data"
"#;

    let overrides = parse_overrides(toml_str).expect("Failed to parse TOML");
    let sections: Vec<_> = overrides.iter().map(|(s, _, _)| s).collect();

    assert!(sections.contains(&"net"));
    assert!(sections.contains(&"storage"));
}

/// Test parsing list values with mixed string and integer elements.
#[test]
fn test_parse_mixed_list() {
    let toml_str = r#"
[net]
peers = ["alpha", 2, "gamma"]
"#;

    let overrides = parse_overrides(toml_str).expect("Failed to parse TOML");
    let (_, _, value) = overrides.iter().next().expect("Entry should exist");

    assert_eq!(value.kind(), ValueKind::List);
    let items = value.as_list().unwrap();
    assert_eq!(items.len(), 3);
}

/// Test parsing an empty list value.
#[test]
fn test_parse_empty_list() {
    let overrides = parse_overrides("[net]\npeers = []\n").expect("Failed to parse TOML");
    let (_, _, value) = overrides.iter().next().expect("Entry should exist");

    assert!(value.as_list().unwrap().is_empty());
}

/// Test that value kinds outside the registry's model are rejected.
#[test]
fn test_unsupported_kinds_rejected() {
    assert!(parse_overrides("[net]\nratio = 0.5\n").is_err(), "Should reject floats");
    assert!(parse_overrides("[net]\nenabled = true\n").is_err(), "Should reject booleans");
    assert!(
        parse_overrides("[net.nested]\nx = 1\n").is_err(),
        "Should reject nested tables"
    );
}

/// Test that over-long string values are rejected during parsing.
#[test]
fn test_long_string_value_rejected() {
    let long = "x".repeat(MAX_STR_LEN + 1);
    let toml_str = format!("[net]\nhost = \"{}\"\n", long);
    assert!(parse_overrides(&toml_str).is_err());
}

/// Test that over-long lists are rejected during parsing.
#[test]
fn test_long_list_rejected() {
    let items: Vec<String> = (0..MAX_LIST_LEN + 1).map(|i| i.to_string()).collect();
    let toml_str = format!("[net]\npeers = [{}]\n", items.join(", "));
    assert!(parse_overrides(&toml_str).is_err());
}
