//! The typed, read-only view over the build settings that the checks consume
pub mod host;

use serde::{Deserialize, Serialize};

use crate::error::{Argument, CppstdError, Result};
use crate::utils::constants::settings_keys;

/// The build configuration whose effective standard is checked.
///
/// It's owned by the caller and never mutated by the checks.
///
/// ```rust
/// use cppstd::settings::BuildConfiguration;
///
/// let config = BuildConfiguration::default()
///     .with("compiler", "gcc")
///     .unwrap()
///     .with("compiler.version", "9")
///     .unwrap();
///
/// assert_eq!(config.get("compiler"), Some("gcc"));
/// assert_eq!(config.get("compiler.cppstd"), None);
/// assert!(config.with("compiler.runtime", "MT").is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub os: Option<String>,
    pub arch: Option<String>,
    pub build_type: Option<String>,
    pub compiler: Option<String>,
    pub compiler_version: Option<String>,
    pub cppstd: Option<String>,
    pub libcxx: Option<String>,
}

impl BuildConfiguration {
    /// Read access by the dotted settings name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            settings_keys::OS => self.os.as_deref(),
            settings_keys::ARCH => self.arch.as_deref(),
            settings_keys::BUILD_TYPE => self.build_type.as_deref(),
            settings_keys::COMPILER => self.compiler.as_deref(),
            settings_keys::COMPILER_VERSION => self.compiler_version.as_deref(),
            settings_keys::COMPILER_CPPSTD => self.cppstd.as_deref(),
            settings_keys::COMPILER_LIBCXX => self.libcxx.as_deref(),
            _ => None,
        }
    }

    /// Sets `key` to `value`. Keys outside of [`settings_keys::ALL`] make the
    /// configuration invalid.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = match key {
            settings_keys::OS => &mut self.os,
            settings_keys::ARCH => &mut self.arch,
            settings_keys::BUILD_TYPE => &mut self.build_type,
            settings_keys::COMPILER => &mut self.compiler,
            settings_keys::COMPILER_VERSION => &mut self.compiler_version,
            settings_keys::COMPILER_CPPSTD => &mut self.cppstd,
            settings_keys::COMPILER_LIBCXX => &mut self.libcxx,
            _ => {
                log::debug!(
                    "Rejecting the unknown setting {key}, expected one of {:?}",
                    settings_keys::ALL
                );
                return Err(CppstdError::InvalidArgument(Argument::Configuration));
            }
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// Builder flavour of [`BuildConfiguration::set`]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Builds a configuration from raw key/value settings, rejecting anything that
    /// isn't a table of known keys with string values
    pub fn from_settings<'a, I>(settings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a toml::Value)>,
    {
        let mut config = BuildConfiguration::default();
        for (key, value) in settings {
            let value = value
                .as_str()
                .ok_or(CppstdError::InvalidArgument(Argument::Configuration))?;
            config.set(key, value)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_settings_name() -> Result<()> {
        let config = BuildConfiguration::default()
            .with("os", "Linux")?
            .with("compiler", "gcc")?
            .with("compiler.version", "9")?
            .with("compiler.cppstd", "gnu98")?
            .with("compiler.libcxx", "libstdc++")?;

        assert_eq!(config.get("os"), Some("Linux"));
        assert_eq!(config.get("compiler.version"), Some("9"));
        assert_eq!(config.get("compiler.cppstd"), Some("gnu98"));
        assert_eq!(config.get("compiler.libcxx"), Some("libstdc++"));
        assert_eq!(config.get("arch"), None);
        assert_eq!(config.get("whatever"), None);
        Ok(())
    }

    #[test]
    fn test_every_known_key_can_be_set() -> Result<()> {
        let mut config = BuildConfiguration::default();
        for key in settings_keys::ALL {
            config.set(key, key)?;
        }
        for key in settings_keys::ALL {
            assert_eq!(config.get(key), Some(key));
        }
        Ok(())
    }

    #[test]
    fn test_from_settings_rejects_malformed_values() {
        let table: toml::value::Table = toml::from_str(
            r#"
            compiler = "gcc"
            "compiler.version" = 9
            "#,
        )
        .unwrap();

        let result = BuildConfiguration::from_settings(table.iter().map(|(k, v)| (k.as_str(), v)));
        assert!(matches!(
            result,
            Err(CppstdError::InvalidArgument(Argument::Configuration))
        ));
    }

    #[test]
    fn test_from_settings_rejects_unknown_keys() {
        let table: toml::value::Table = toml::from_str(r#"compiler_name = "gcc""#).unwrap();

        let result = BuildConfiguration::from_settings(table.iter().map(|(k, v)| (k.as_str(), v)));
        assert!(result.is_err());
    }
}
