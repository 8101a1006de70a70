use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::utils::constants::CPPSTD;

/// [`config_logger`] The configuration for `env_logger`.
///
/// The default level is `Warn`, since the answers of the checks are written on
/// stdout and logs would get mixed with them. `-v` enables the debug traces of
/// the resolution.
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    match verbose_level {
        0 => builder.filter(None, LevelFilter::Warn),
        1 => builder.filter(None, LevelFilter::Debug),
        _ => return Err(eyre!("{CPPSTD} maximum allowed verbosity level is: '-v'")),
    };

    builder
        .try_init()
        .with_context(|| format!("{CPPSTD} wasn't able to set up the logger"))
}
