//! Whether the GNU dialect of a standard matters for a configuration, and whether
//! the effective standard provides it when it's required.
//!
//! The GNU extensions are a property of the target toolchain triple. Building on
//! a Windows host with a GNU cross toolchain for Linux still targets
//! `*-linux-gnu`, so the host os is only looked at when the configuration does
//! not declare a target os.
use crate::error::{CppstdError, Result};
use crate::standard::StandardToken;
use crate::utils::constants::{compiler_names, os_names};

pub fn target_is_gnu_triple(target_os: Option<&str>, compiler: &str, host_os: &str) -> bool {
    let os = target_os.unwrap_or(host_os);

    if compiler == compiler_names::MSVC || compiler == compiler_names::VISUAL_STUDIO {
        return false;
    }

    match os {
        os_names::LINUX => true,
        // MinGW
        os_names::WINDOWS => compiler == compiler_names::GCC,
        _ => false,
    }
}

pub fn satisfies(
    effective: &StandardToken,
    required_extensions: bool,
    target_is_gnu: bool,
) -> bool {
    !required_extensions || !target_is_gnu || effective.gnu_extension
}

/// The failing form of [`satisfies`]
pub fn ensure(
    effective: &StandardToken,
    required_extensions: bool,
    target_is_gnu: bool,
) -> Result<()> {
    if satisfies(effective, required_extensions, target_is_gnu) {
        Ok(())
    } else {
        log::debug!("{effective} lacks the GNU extensions required on this target");
        Err(CppstdError::MissingGnuExtension)
    }
}
