//! The machine that runs the build, when it isn't the one running the checks
use serde::*;

/// [`HostAttribute`] - Overrides the detected host platform
/// * `os` - The host operating system, spelled like the `os` setting
///
/// ```rust
/// use cppstd::config_file::host::HostAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[host]
///     os = 'Windows'
///"#;
///
/// let config: HostAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the profile file");
///
/// assert_eq!(config.os, Some("Windows"));
/// ```
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HostAttribute<'a> {
    #[serde(borrow)]
    pub os: Option<&'a str>,
}
