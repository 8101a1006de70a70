//! The failures that the standard checks can report
use core::fmt;

use serde::Serialize;

use crate::utils::constants::error_messages;

/// The caller supplied argument that was rejected before any resolution work
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Argument {
    Configuration,
    Cppstd,
    GnuExtensions,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Configuration => f.write_str(error_messages::INVALID_CONFIGURATION_ARG),
            Argument::Cppstd => f.write_str(error_messages::INVALID_CPPSTD_ARG),
            Argument::GnuExtensions => f.write_str(error_messages::INVALID_GNU_EXTENSIONS_ARG),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CppstdError {
    #[error("{0}")]
    InvalidArgument(Argument),

    #[error("{}", error_messages::MISSING_COMPILER)]
    MissingCompiler,

    #[error("{}", error_messages::UNKNOWN_COMPILER_DEFAULT)]
    UnknownCompilerDefault,

    /// A configured (or table provided) cppstd that names no known level
    #[error("Unknown C++ standard: '{0}'")]
    UnknownStandard(String),

    #[error("{}", error_messages::GNU_EXTENSION_REQUIRED)]
    MissingGnuExtension,

    #[error("Current cppstd ({current}) is higher than the required C++ standard ({required}).")]
    StandardTooNew { current: String, required: String },

    #[error("Current cppstd ({current}) is lower than the required C++ standard ({required}).")]
    StandardTooOld { current: String, required: String },

    #[error("Invalid compiler version requirement '{requirement}' for {compiler}")]
    InvalidVersionRequirement { compiler: String, requirement: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The taxonomy the variants of [`CppstdError`] fall into
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    ConfigurationIncomplete,
    ConfigurationUnsupported,
    ExtensionRequirementUnmet,
    StandardTooNew,
    StandardTooOld,
    InvalidData,
}

impl CppstdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CppstdError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CppstdError::MissingCompiler => ErrorKind::ConfigurationIncomplete,
            CppstdError::UnknownCompilerDefault | CppstdError::UnknownStandard(_) => {
                ErrorKind::ConfigurationUnsupported
            }
            CppstdError::MissingGnuExtension => ErrorKind::ExtensionRequirementUnmet,
            CppstdError::StandardTooNew { .. } => ErrorKind::StandardTooNew,
            CppstdError::StandardTooOld { .. } => ErrorKind::StandardTooOld,
            CppstdError::InvalidVersionRequirement { .. }
            | CppstdError::Toml(_)
            | CppstdError::Io(_) => ErrorKind::InvalidData,
        }
    }

    /// Whether the failure is an answer ("does not fit") rather than a question
    /// that could not be evaluated. Only these are folded into `false` by the
    /// `valid_*` predicates.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ExtensionRequirementUnmet
                | ErrorKind::StandardTooNew
                | ErrorKind::StandardTooOld
        )
    }
}

pub type Result<T> = std::result::Result<T, CppstdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_messages() {
        assert_eq!(
            CppstdError::InvalidArgument(Argument::Cppstd).to_string(),
            "cppstd parameter must be a number"
        );
        assert_eq!(
            CppstdError::InvalidArgument(Argument::GnuExtensions).to_string(),
            "gnu_extensions parameter must be a bool"
        );
        assert_eq!(
            CppstdError::InvalidArgument(Argument::Configuration).to_string(),
            "configuration parameter must be a valid build configuration"
        );
        assert_eq!(
            CppstdError::UnknownCompilerDefault.to_string(),
            "Could not detect default cppstd for the current compiler."
        );
        assert_eq!(
            CppstdError::StandardTooNew {
                current: "gnu14".into(),
                required: "11".into()
            }
            .to_string(),
            "Current cppstd (gnu14) is higher than the required C++ standard (11)."
        );
    }

    #[test]
    fn test_only_answers_are_semantic() {
        assert!(CppstdError::MissingGnuExtension.is_semantic());
        assert!(CppstdError::StandardTooOld {
            current: "98".into(),
            required: "17".into()
        }
        .is_semantic());
        assert!(!CppstdError::MissingCompiler.is_semantic());
        assert!(!CppstdError::UnknownCompilerDefault.is_semantic());
        let bad_argument = CppstdError::InvalidArgument(Argument::Cppstd);
        assert!(!bad_argument.is_semantic());
    }
}
