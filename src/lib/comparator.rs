//! The public checks: does the effective standard of a configuration stay within
//! a ceiling (or reach a floor)?
//!
//! Every check comes in two flavours that share the whole evaluation. The `check_*`
//! ones fail with the reason when the configuration doesn't fit, while the `valid_*`
//! ones answer `false` instead. Failures that mean the question itself couldn't be
//! evaluated (bad arguments, missing compiler, unknown default) are errors for both.
use core::fmt;
use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Argument, CppstdError, Result};
use crate::extensions;
use crate::resolver::EffectiveStandardResolver;
use crate::settings::host::{HostPlatform, SystemHost};
use crate::settings::BuildConfiguration;
use crate::standard::{self, StandardNumber, StandardToken};
use crate::table::DefaultStandardTable;

/// The standard that the caller asks for, either as a number or as text
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CppstdArg<'a> {
    Number(i64),
    Text(&'a str),
}

impl From<u32> for CppstdArg<'_> {
    fn from(value: u32) -> Self {
        CppstdArg::Number(value.into())
    }
}

impl From<i32> for CppstdArg<'_> {
    fn from(value: i32) -> Self {
        CppstdArg::Number(value.into())
    }
}

impl<'a> From<&'a str> for CppstdArg<'a> {
    fn from(value: &'a str) -> Self {
        CppstdArg::Text(value)
    }
}

impl<'a> From<&'a String> for CppstdArg<'a> {
    fn from(value: &'a String) -> Self {
        CppstdArg::Text(value)
    }
}

impl CppstdArg<'_> {
    /// The standard named by the argument. It must be made only of digits, so a `gnu`
    /// dialect is rejected here: the required bound never carries one.
    pub fn number(&self) -> Result<StandardNumber> {
        let number = match *self {
            CppstdArg::Number(n) if n < 0 => None,
            CppstdArg::Number(n) => StandardNumber::parse(&n.to_string()),
            CppstdArg::Text(text) => StandardNumber::parse(text),
        };
        number.ok_or(CppstdError::InvalidArgument(Argument::Cppstd))
    }
}

/// Validates a textual `gnu_extensions` argument. Only `true` and `false` are booleans.
pub fn parse_gnu_extensions(raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CppstdError::InvalidArgument(Argument::GnuExtensions)),
    }
}

/// Which side of the effective standard the required one bounds
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Max,
    Min,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Max => write!(f, "max"),
            Bound::Min => write!(f, "min"),
        }
    }
}

/// The validated inputs of a single check
#[derive(Debug, Clone)]
pub struct ComparisonRequest<'a> {
    pub configuration: &'a BuildConfiguration,
    pub required: StandardNumber,
    pub gnu_extensions: bool,
}

impl<'a> ComparisonRequest<'a> {
    pub fn new<'c>(
        configuration: &'a BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
    ) -> Result<Self> {
        Ok(Self {
            configuration,
            required: cppstd.into().number()?,
            gnu_extensions,
        })
    }
}

/// Runs the checks against an injected default standard table and host
#[derive(Debug, Clone)]
pub struct Comparator<'a, H: HostPlatform> {
    resolver: EffectiveStandardResolver<'a>,
    host: H,
}

impl<'a, H: HostPlatform> Comparator<'a, H> {
    pub fn new(table: &'a DefaultStandardTable, host: H) -> Self {
        Self {
            resolver: EffectiveStandardResolver::new(table),
            host,
        }
    }

    pub fn effective(&self, configuration: &BuildConfiguration) -> Result<StandardToken> {
        self.resolver.resolve(configuration)
    }

    /// The whole evaluation. Returns the effective standard when it fits `bound`.
    pub fn evaluate(&self, request: &ComparisonRequest<'_>, bound: Bound) -> Result<StandardToken> {
        let configuration = request.configuration;
        let effective = self.resolver.resolve(configuration)?;

        if request.gnu_extensions {
            // The resolver already failed if there's no compiler
            let compiler = configuration.compiler.as_deref().unwrap_or_default();
            let host_os = self.host.current_os();
            let target_is_gnu =
                extensions::target_is_gnu_triple(configuration.os.as_deref(), compiler, &host_os);
            extensions::ensure(&effective, true, target_is_gnu)?;
        }

        let required = &request.required;
        let ordering = standard::compare_to_number(&effective, required);
        log::debug!("Effective cppstd {effective} is {ordering:?} than the {bound} {required}");

        match (bound, ordering) {
            (Bound::Max, Ordering::Greater) => Err(CppstdError::StandardTooNew {
                current: effective.to_string(),
                required: required.to_string(),
            }),
            (Bound::Min, Ordering::Less) => Err(CppstdError::StandardTooOld {
                current: effective.to_string(),
                required: required.to_string(),
            }),
            _ => Ok(effective),
        }
    }

    fn check<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
        bound: Bound,
    ) -> Result<()> {
        let request = ComparisonRequest::new(configuration, cppstd, gnu_extensions)?;
        self.evaluate(&request, bound).map(|_| ())
    }

    fn valid<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
        bound: Bound,
    ) -> Result<bool> {
        match self.check(configuration, cppstd, gnu_extensions, bound) {
            Ok(()) => Ok(true),
            Err(err) if err.is_semantic() => {
                log::debug!("The configuration does not satisfy the {bound} cppstd: {err}");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    pub fn check_max<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
    ) -> Result<()> {
        self.check(configuration, cppstd, gnu_extensions, Bound::Max)
    }

    pub fn valid_max<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
    ) -> Result<bool> {
        self.valid(configuration, cppstd, gnu_extensions, Bound::Max)
    }

    pub fn check_min<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
    ) -> Result<()> {
        self.check(configuration, cppstd, gnu_extensions, Bound::Min)
    }

    pub fn valid_min<'c>(
        &self,
        configuration: &BuildConfiguration,
        cppstd: impl Into<CppstdArg<'c>>,
        gnu_extensions: bool,
    ) -> Result<bool> {
        self.valid(configuration, cppstd, gnu_extensions, Bound::Min)
    }
}

fn builtin() -> Comparator<'static, SystemHost> {
    Comparator::new(DefaultStandardTable::builtin(), SystemHost)
}

/// Fails unless the effective standard of `configuration` is `cppstd` or older,
/// using the built-in default standards and the real host.
///
/// ```rust
/// use cppstd::{check_max_cppstd, settings::BuildConfiguration};
///
/// let config = BuildConfiguration::default()
///     .with("os", "Linux").unwrap()
///     .with("compiler", "gcc").unwrap()
///     .with("compiler.version", "9").unwrap()
///     .with("compiler.cppstd", "17").unwrap();
///
/// assert!(check_max_cppstd(&config, "20", false).is_ok());
/// assert_eq!(
///     check_max_cppstd(&config, 98, false).unwrap_err().to_string(),
///     "Current cppstd (17) is higher than the required C++ standard (98)."
/// );
/// ```
pub fn check_max_cppstd<'c>(
    configuration: &BuildConfiguration,
    cppstd: impl Into<CppstdArg<'c>>,
    gnu_extensions: bool,
) -> Result<()> {
    builtin().check_max(configuration, cppstd, gnu_extensions)
}

pub fn valid_max_cppstd<'c>(
    configuration: &BuildConfiguration,
    cppstd: impl Into<CppstdArg<'c>>,
    gnu_extensions: bool,
) -> Result<bool> {
    builtin().valid_max(configuration, cppstd, gnu_extensions)
}

pub fn check_min_cppstd<'c>(
    configuration: &BuildConfiguration,
    cppstd: impl Into<CppstdArg<'c>>,
    gnu_extensions: bool,
) -> Result<()> {
    builtin().check_min(configuration, cppstd, gnu_extensions)
}

pub fn valid_min_cppstd<'c>(
    configuration: &BuildConfiguration,
    cppstd: impl Into<CppstdArg<'c>>,
    gnu_extensions: bool,
) -> Result<bool> {
    builtin().valid_min(configuration, cppstd, gnu_extensions)
}
