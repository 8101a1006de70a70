//! Extra rows for the compiler default standard table
use serde::*;

/// [`DefaultStandardAttribute`] - A row of the default standard table, declared
/// on a profile under `[[defaults]]`
/// * `compiler` - The compiler identifier, as the `compiler` setting spells it
/// * `version` - Which versions of the compiler the row applies to. An exact
/// version (`'9'`), a range of comma separated comparators (`'>=6, <11'`),
/// or nothing at all for every version
/// * `os` - The target os the row is restricted to, if any
/// * `cppstd` - The standard used by the compiler when no cppstd is declared
///
/// ### Tests
///
/// ```rust
/// use cppstd::config_file::defaults::DefaultStandardAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[defaults]]
///     compiler = 'clang'
///     version = '>=6, <16'
///     os = 'Linux'
///     cppstd = 'gnu14'
///"#;
///
/// let config: DefaultStandardAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the profile file");
///
/// assert_eq!(config.compiler, "clang");
/// assert_eq!(config.version, Some(">=6, <16"));
/// assert_eq!(config.os, Some("Linux"));
/// assert_eq!(config.cppstd, "gnu14");
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the profile file.
///
/// For a test over a real example, please look at the
/// [`cppstd::config_file::ProfileFile`] doc-test
#[derive(Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct DefaultStandardAttribute<'a> {
    pub compiler: &'a str,
    #[serde(borrow)]
    pub version: Option<&'a str>,
    #[serde(borrow)]
    pub os: Option<&'a str>,
    pub cppstd: &'a str,
}
