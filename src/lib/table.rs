//! The default standard that each compiler uses when no cppstd is declared.
//!
//! A row matches a configuration when its compiler id is the configured one, its
//! version requirement accepts the configured version and, if it names an os,
//! that os is the target one. When several rows match, the most specific wins:
//!
//! 1. an exact version beats a range bounded on both sides, which beats a one
//!    sided range, which beats a row that accepts any version
//! 2. at the same version specificity, a row that names the os beats one that does not
//! 3. what is still tied goes to the row declared first
//!
//! Rows added with [`DefaultStandardTable::with_overrides`] are declared before the
//! existing ones, so they win the ties in 3.
use std::sync::OnceLock;

use crate::error::{CppstdError, Result};
use crate::standard::StandardToken;
use crate::utils::constants::compiler_names;
use crate::version::{CompilerVersion, VersionReq};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DefaultStandardEntry {
    pub compiler: String,
    pub version: VersionReq,
    pub os: Option<String>,
    pub standard: StandardToken,
}

impl DefaultStandardEntry {
    /// Builds a row from its textual form, validating both the version requirement
    /// and the standard token
    pub fn new(compiler: &str, version: &str, os: Option<&str>, standard: &str) -> Result<Self> {
        let version = VersionReq::parse(version).ok_or_else(|| {
            CppstdError::InvalidVersionRequirement {
                compiler: compiler.to_string(),
                requirement: version.to_string(),
            }
        })?;

        Ok(Self {
            compiler: compiler.to_string(),
            version,
            os: os.map(str::to_string),
            standard: StandardToken::parse(standard)?,
        })
    }

    fn matches(&self, compiler: &str, version: Option<&CompilerVersion>, os: Option<&str>) -> bool {
        if self.compiler != compiler {
            return false;
        }
        if let Some(row_os) = self.os.as_deref() {
            if Some(row_os) != os {
                return false;
            }
        }
        match (&self.version, version) {
            (VersionReq::Any, _) => true,
            (req, Some(version)) => req.matches(version),
            (_, None) => false,
        }
    }
}

/// The injectable source of compiler default standards
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct DefaultStandardTable {
    entries: Vec<DefaultStandardEntry>,
}

/// (compiler, version requirement, os, default standard)
const BUILTIN_ROWS: &[(&str, &str, Option<&str>, &str)] = &[
    (compiler_names::GCC, "<6", None, "gnu98"),
    (compiler_names::GCC, ">=6, <11", None, "gnu14"),
    (compiler_names::GCC, ">=11", None, "gnu17"),
    // Since 6.0 clang follows gcc's choice, whatever its docs say
    (compiler_names::CLANG, "<6", None, "gnu98"),
    (compiler_names::CLANG, ">=6, <16", None, "gnu14"),
    (compiler_names::CLANG, ">=16", None, "gnu17"),
    (compiler_names::APPLE_CLANG, "", None, "gnu98"),
    (compiler_names::MSVC, ">=190", None, "14"),
    (compiler_names::VISUAL_STUDIO, ">=14", None, "14"),
    (compiler_names::MCST_LCC, "<1.24", None, "gnu98"),
    (compiler_names::MCST_LCC, ">=1.24", None, "gnu14"),
];

impl DefaultStandardTable {
    pub fn new(entries: Vec<DefaultStandardEntry>) -> Self {
        Self { entries }
    }

    /// The table shipped with the crate, built once and shared for the whole process
    pub fn builtin() -> &'static DefaultStandardTable {
        static BUILTIN: OnceLock<DefaultStandardTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let entries = BUILTIN_ROWS
                .iter()
                .map(|(compiler, version, os, standard)| {
                    DefaultStandardEntry::new(compiler, version, *os, standard)
                        .expect("valid built-in default standard row")
                })
                .collect();
            DefaultStandardTable::new(entries)
        })
    }

    /// A new table where `overrides` are declared ahead of the rows of `self`
    pub fn with_overrides(&self, overrides: Vec<DefaultStandardEntry>) -> Self {
        let mut entries = overrides;
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    pub fn entries(&self) -> &[DefaultStandardEntry] {
        &self.entries
    }

    /// The most specific row for the given compiler, version and target os, if any
    pub fn find(
        &self,
        compiler: &str,
        version: Option<&str>,
        os: Option<&str>,
    ) -> Option<&DefaultStandardEntry> {
        let version = version.and_then(CompilerVersion::parse);

        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(compiler, version.as_ref(), os))
            // `max_by_key` keeps the last of equal keys, so the declaration index is
            // reversed to hand the ties to the first declared row
            .max_by_key(|(idx, entry)| {
                (
                    entry.version.specificity(),
                    entry.os.is_some(),
                    std::cmp::Reverse(*idx),
                )
            })
            .map(|(_, entry)| entry)
    }

    pub fn lookup(
        &self,
        compiler: &str,
        version: Option<&str>,
        os: Option<&str>,
    ) -> Option<StandardToken> {
        self.find(compiler, version, os).map(|entry| entry.standard)
    }

    /// Same as [`DefaultStandardTable::lookup`], rendered as a token string
    pub fn default_for(
        &self,
        compiler: &str,
        version: Option<&str>,
        os: Option<&str>,
    ) -> Option<String> {
        self.lookup(compiler, version, os)
            .map(|standard| standard.to_string())
    }
}
