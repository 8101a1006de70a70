//! Works out the standard in force for a build configuration
use crate::error::{CppstdError, Result};
use crate::settings::BuildConfiguration;
use crate::standard::StandardToken;
use crate::table::DefaultStandardTable;
use crate::utils::constants::debug_messages;

#[derive(Debug, Clone, Copy)]
pub struct EffectiveStandardResolver<'a> {
    table: &'a DefaultStandardTable,
}

impl<'a> EffectiveStandardResolver<'a> {
    pub fn new(table: &'a DefaultStandardTable) -> Self {
        Self { table }
    }

    /// The explicitly declared cppstd when there's one, the compiler's default otherwise
    pub fn resolve(&self, config: &BuildConfiguration) -> Result<StandardToken> {
        let compiler = config
            .compiler
            .as_deref()
            .ok_or(CppstdError::MissingCompiler)?;

        if let Some(cppstd) = config.cppstd.as_deref() {
            log::debug!("{}: {cppstd}", debug_messages::EXPLICIT_CPPSTD);
            return StandardToken::parse(cppstd);
        }

        log::debug!(
            "{} ({compiler} {:?} on {:?})",
            debug_messages::DEFAULT_CPPSTD,
            config.compiler_version,
            config.os
        );
        let standard = self
            .table
            .lookup(
                compiler,
                config.compiler_version.as_deref(),
                config.os.as_deref(),
            )
            .ok_or(CppstdError::UnknownCompilerDefault)?;
        log::debug!("Default cppstd for {compiler} resolved to {standard}");

        Ok(standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::LanguageLevel;
    use crate::table::DefaultStandardEntry;

    fn gcc9(cppstd: Option<&str>) -> BuildConfiguration {
        BuildConfiguration {
            os: Some("Linux".into()),
            compiler: Some("gcc".into()),
            compiler_version: Some("9".into()),
            cppstd: cppstd.map(str::to_string),
            libcxx: Some("libstdc++".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_cppstd_wins() -> Result<()> {
        let resolver = EffectiveStandardResolver::new(DefaultStandardTable::builtin());
        let standard = resolver.resolve(&gcc9(Some("17")))?;
        assert_eq!(standard, StandardToken::new(LanguageLevel::CPP17, false));
        Ok(())
    }

    #[test]
    fn test_explicit_cppstd_wins_over_any_table_content() -> Result<()> {
        let entry = DefaultStandardEntry::new("gcc", "9", None, "gnu23")?;
        let table = DefaultStandardTable::new(vec![entry]);
        let resolver = EffectiveStandardResolver::new(&table);
        assert_eq!(resolver.resolve(&gcc9(Some("11")))?.to_string(), "11");
        assert_eq!(resolver.resolve(&gcc9(None))?.to_string(), "gnu23");
        Ok(())
    }

    #[test]
    fn test_default_comes_from_the_table() -> Result<()> {
        let resolver = EffectiveStandardResolver::new(DefaultStandardTable::builtin());
        let standard = resolver.resolve(&gcc9(None))?;
        assert_eq!(standard, StandardToken::new(LanguageLevel::CPP14, true));
        Ok(())
    }

    #[test]
    fn test_missing_compiler() {
        let resolver = EffectiveStandardResolver::new(DefaultStandardTable::builtin());
        let config = BuildConfiguration {
            compiler: None,
            ..gcc9(Some("17"))
        };
        let err = resolver.resolve(&config).unwrap_err();
        assert!(matches!(err, CppstdError::MissingCompiler));
        assert!(err.to_string().contains("compiler is not specified"));
    }

    #[test]
    fn test_unknown_compiler_default() {
        let resolver = EffectiveStandardResolver::new(DefaultStandardTable::builtin());
        let config = BuildConfiguration {
            compiler: Some("sun-cc".into()),
            compiler_version: Some("5.13".into()),
            ..gcc9(None)
        };
        assert!(matches!(
            resolver.resolve(&config),
            Err(CppstdError::UnknownCompilerDefault)
        ));
    }

    #[test]
    fn test_malformed_explicit_cppstd() {
        let resolver = EffectiveStandardResolver::new(DefaultStandardTable::builtin());
        assert!(matches!(
            resolver.resolve(&gcc9(Some("c++17"))),
            Err(CppstdError::UnknownStandard(_))
        ));
    }
}
