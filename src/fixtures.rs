//! Fixture sections for exercising the registry from harness tests.

use core::fmt::Write;

use heapless::String;

use crate::error::Result;
use crate::option::MAX_NAME_LEN;
use crate::registry::ConfigRegistry;
use crate::value::Value;

/// Number of options declared by [`declare_test_config2`].
pub const TEST_CONFIG2_OPTION_COUNT: usize = 32;

/// Declare the `TestConfig2` fixture section.
///
/// Registers 32 options against a fresh section: `str1`..`str8` defaulting
/// to the empty string, `int1`..`int8` to `0`, `none1`..`none8` to none,
/// and `list1`..`list8` to the empty list. Each carries the documentation
/// string `"doc"`.
///
/// # Errors
///
/// Returns an error if the section is already registered or the registry
/// is full.
pub fn declare_test_config2(registry: &mut ConfigRegistry) -> Result<()> {
    let section = registry.make_config("TestConfig2", "more testing stuff")?;

    for i in 1..=8 {
        section.add_option(numbered("str", i).as_str(), Value::empty_str(), "doc")?;
    }

    for i in 1..=8 {
        section.add_option(numbered("int", i).as_str(), Value::int(0), "doc")?;
    }

    for i in 1..=8 {
        section.add_option(numbered("none", i).as_str(), Value::none(), "doc")?;
    }

    for i in 1..=8 {
        section.add_option(numbered("list", i).as_str(), Value::empty_list(), "doc")?;
    }

    Ok(())
}

fn numbered(prefix: &str, i: u8) -> String<MAX_NAME_LEN> {
    let mut name = String::new();
    // prefix + single digit always fits in MAX_NAME_LEN
    let _ = write!(name, "{}{}", prefix, i);
    name
}
