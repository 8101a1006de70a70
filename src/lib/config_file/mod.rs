//! root file for the crate where the datastructures that holds the TOML
//! parsed profile data lives.
pub mod defaults;
pub mod host;

use std::collections::BTreeMap;

use serde::Deserialize;

use self::{defaults::DefaultStandardAttribute, host::HostAttribute};

/// ```rust
/// use cppstd::config_file::ProfileFile;
///
/// const PROFILE_MOCK: &str = r#"
///     [settings]
///     os = 'Linux'
///     compiler = 'gcc'
///     'compiler.version' = '9'
///     'compiler.libcxx' = 'libstdc++'
///
///     [host]
///     os = 'Windows'
///
///     [[defaults]]
///     compiler = 'gcc'
///     version = '>=13'
///     cppstd = 'gnu17'
/// "#;
///
/// let profile: ProfileFile = toml::from_str(PROFILE_MOCK)
///     .expect("A failure happened parsing the profile file");
///
/// let settings = profile.settings.as_ref().unwrap();
/// assert_eq!(settings.get("compiler").and_then(|v| v.as_str()), Some("gcc"));
/// assert_eq!(settings.get("compiler.version").and_then(|v| v.as_str()), Some("9"));
///
/// assert_eq!(profile.host.unwrap().os, Some("Windows"));
///
/// let defaults = profile.defaults.unwrap();
/// assert_eq!(defaults.len(), 1);
/// assert_eq!(defaults[0].version, Some(">=13"));
/// assert_eq!(defaults[0].os, None);
/// ```
/// The [`ProfileFile`] is the type that holds the whole hierarchy
/// of a profile's attributes and properties.
///
/// `settings` is kept as raw TOML values, so its shape can be validated
/// into a [`crate::settings::BuildConfiguration`] afterwards.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ProfileFile<'a> {
    pub settings: Option<BTreeMap<String, toml::Value>>,
    #[serde(borrow)]
    pub host: Option<HostAttribute<'a>>,
    #[serde(borrow)]
    pub defaults: Option<Vec<DefaultStandardAttribute<'a>>>,
}

pub fn profile_from_file(cfg: &'_ str) -> Result<ProfileFile<'_>, toml::de::Error> {
    <ProfileFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = profile_from_file("").unwrap();
        assert!(profile.settings.is_none());
        assert!(profile.host.is_none());
        assert!(profile.defaults.is_none());
    }

    #[test]
    fn test_unknown_sections_are_rejected() {
        assert!(profile_from_file("[options]\nshared = true").is_err());
    }

    #[test]
    fn test_settings_keep_raw_values() {
        let profile = profile_from_file(
            r#"
            [settings]
            compiler = "gcc"
            "compiler.version" = 9
            "#,
        )
        .unwrap();

        let settings = profile.settings.unwrap();
        assert_eq!(
            settings.get("compiler.version"),
            Some(&toml::Value::Integer(9))
        );
    }
}
