//! The platform where the checks are running, as opposed to the one being targeted
use std::borrow::Cow;

use crate::utils::constants::os_names;

pub trait HostPlatform {
    /// The host operating system, spelled as the `os` setting spells it
    fn current_os(&self) -> Cow<'_, str>;
}

/// The real host, as reported by the standard library at compile time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostPlatform for SystemHost {
    fn current_os(&self) -> Cow<'_, str> {
        Cow::Borrowed(settings_os_name(std::env::consts::OS))
    }
}

/// A host that always reports the same os. Used for tests and for profiles that
/// declare their `[host]`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FixedHost(pub String);

impl FixedHost {
    pub fn new(os: impl Into<String>) -> Self {
        Self(os.into())
    }
}

impl HostPlatform for FixedHost {
    fn current_os(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl<T: HostPlatform + ?Sized> HostPlatform for &T {
    fn current_os(&self) -> Cow<'_, str> {
        (**self).current_os()
    }
}

/// Maps the names of [`std::env::consts::OS`] to the settings ones
pub fn settings_os_name(rust_os: &str) -> &str {
    match rust_os {
        "linux" => os_names::LINUX,
        "windows" => os_names::WINDOWS,
        "macos" => os_names::MACOS,
        "freebsd" => os_names::FREEBSD,
        "netbsd" => os_names::NETBSD,
        "openbsd" => os_names::OPENBSD,
        "solaris" | "illumos" => os_names::SUNOS,
        "android" => os_names::ANDROID,
        "ios" => os_names::IOS,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_os_names_are_mapped() {
        assert_eq!(settings_os_name("linux"), "Linux");
        assert_eq!(settings_os_name("windows"), "Windows");
        assert_eq!(settings_os_name("macos"), "Macos");
        assert_eq!(settings_os_name("haiku"), "haiku");
    }

    #[test]
    fn test_fixed_host_reports_its_os() {
        let host = FixedHost::new("Windows");
        assert_eq!(host.current_os(), "Windows");
        assert_eq!((&host).current_os(), "Windows");
    }

    #[test]
    fn test_system_host_matches_build_target() {
        let os = SystemHost.current_os();
        if cfg!(target_os = "linux") {
            assert_eq!(os, "Linux");
        } else if cfg!(target_os = "windows") {
            assert_eq!(os, "Windows");
        }
    }
}
