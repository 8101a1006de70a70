//! Maps a parsed profile (and the command line overrides) into the typed model
//! consumed by the checks
use color_eyre::{eyre::Context, Result};
use indexmap::IndexMap;

use crate::{
    config_file::{defaults::DefaultStandardAttribute, host::HostAttribute, ProfileFile},
    error::{Argument, CppstdError},
    settings::{host::FixedHost, BuildConfiguration},
    table::{DefaultStandardEntry, DefaultStandardTable},
    utils::constants::error_messages,
};

/// Everything a check needs, owned, once the profile has been read
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ProfileModel {
    pub configuration: BuildConfiguration,
    pub table: DefaultStandardTable,
    pub host: Option<FixedHost>,
}

/// Parses the `key=value` settings given on the command line. Later keys override
/// earlier ones.
pub fn parse_setting_overrides(raw: &[String]) -> Result<IndexMap<String, String>> {
    let mut overrides = IndexMap::new();
    for setting in raw {
        let (key, value) = setting
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(k, _)| !k.is_empty())
            .ok_or(CppstdError::InvalidArgument(Argument::Configuration))
            .with_context(|| format!("Ill-formed setting: '{setting}'. Expected 'key=value'"))?;
        overrides.insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}

pub fn build_model(
    profile: ProfileFile<'_>,
    overrides: &IndexMap<String, String>,
    base_table: &DefaultStandardTable,
) -> Result<ProfileModel> {
    let configuration = assemble_configuration(profile.settings.as_ref(), overrides)
        .with_context(|| error_messages::PROFILE_MODEL_MAPPING)?;
    let table = assemble_table(profile.defaults.unwrap_or_default(), base_table)
        .with_context(|| error_messages::PROFILE_MODEL_MAPPING)?;
    let host = assemble_host(profile.host);

    Ok(ProfileModel {
        configuration,
        table,
        host,
    })
}

fn assemble_configuration(
    settings: Option<&std::collections::BTreeMap<String, toml::Value>>,
    overrides: &IndexMap<String, String>,
) -> std::result::Result<BuildConfiguration, CppstdError> {
    let mut configuration = match settings {
        Some(settings) => {
            BuildConfiguration::from_settings(settings.iter().map(|(k, v)| (k.as_str(), v)))?
        }
        None => BuildConfiguration::default(),
    };

    for (key, value) in overrides {
        log::debug!("Overriding the setting {key} with: {value}");
        configuration.set(key, value.as_str())?;
    }

    Ok(configuration)
}

fn assemble_table(
    defaults: Vec<DefaultStandardAttribute<'_>>,
    base_table: &DefaultStandardTable,
) -> std::result::Result<DefaultStandardTable, CppstdError> {
    if defaults.is_empty() {
        return Ok(base_table.clone());
    }

    let overrides = defaults
        .iter()
        .map(|row| {
            let version = row.version.unwrap_or_default();
            DefaultStandardEntry::new(row.compiler, version, row.os, row.cppstd)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    log::debug!("Loaded {} default cppstd rows from the profile", overrides.len());

    Ok(base_table.with_overrides(overrides))
}

fn assemble_host(host: Option<HostAttribute<'_>>) -> Option<FixedHost> {
    host.and_then(|h| h.os).map(FixedHost::new)
}
