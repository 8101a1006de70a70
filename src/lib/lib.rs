pub mod cli;
pub mod comparator;
pub mod config_file;
pub mod error;
pub mod extensions;
pub mod resolver;
pub mod settings;
pub mod standard;
pub mod table;
pub mod utils;
pub mod version;

pub use comparator::{check_max_cppstd, check_min_cppstd, valid_max_cppstd, valid_min_cppstd};

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::fs;
    use std::path::Path;

    use color_eyre::{eyre::Context, Result};
    use indexmap::IndexMap;

    use crate::{
        cli::{
            input::CliArgs,
            output::{Reason, Report},
        },
        comparator::{parse_gnu_extensions, Comparator, ComparisonRequest},
        config_file::{self, ProfileFile},
        error::CppstdError,
        settings::host::{FixedHost, HostPlatform, SystemHost},
        table::DefaultStandardTable,
        utils::{
            constants::error_messages,
            reader::{self, ProfileModel},
        },
    };

    /// Runs the command inputted in the CLI.
    ///
    /// `valid-*` commands answer with a [`Report`] even when the configuration does
    /// not fit. `check-*` ones fail instead, carrying the reason as the root cause.
    pub fn run_cppstd(cli_args: &CliArgs) -> Result<Report> {
        let raw_profile = match cli_args.profile.as_deref() {
            Some(path) => read_profile(path)?,
            None => String::new(),
        };
        let model = load_model(cli_args, &raw_profile)?;

        let host: Box<dyn HostPlatform> = match (cli_args.host_os.as_deref(), model.host.clone()) {
            (Some(os), _) => Box::new(FixedHost::new(os)),
            (None, Some(host)) => Box::new(host),
            (None, None) => Box::new(SystemHost),
        };
        log::debug!("Running the checks on a {} host", host.current_os());

        let comparator = Comparator::new(&model.table, host.as_ref());
        perform_main_work(cli_args, &comparator, &model)
    }

    fn read_profile(path: &Path) -> Result<String> {
        log::debug!("Reading the profile: {path:?}");
        fs::read_to_string(path)
            .with_context(|| format!("{}: {:?}", error_messages::READ_PROFILE_FILE, path))
    }

    fn load_model(cli_args: &CliArgs, raw_profile: &str) -> Result<ProfileModel> {
        let profile: ProfileFile<'_> = config_file::profile_from_file(raw_profile)
            .with_context(|| error_messages::PARSE_PROFILE_FILE)?;
        let overrides: IndexMap<String, String> =
            reader::parse_setting_overrides(&cli_args.settings)?;

        reader::build_model(profile, &overrides, DefaultStandardTable::builtin())
    }

    fn perform_main_work<H: HostPlatform>(
        cli_args: &CliArgs,
        comparator: &Comparator<'_, H>,
        model: &ProfileModel,
    ) -> Result<Report> {
        let configuration = &model.configuration;

        let Some((cppstd, gnu_extensions, bound, hard_check)) = cli_args.command.comparison()
        else {
            let effective = comparator
                .effective(configuration)
                .with_context(|| error_messages::FAILURE_CHECKING_CPPSTD)?;
            return Ok(Report {
                effective: Some(effective.to_string()),
                bound: None,
                required: None,
                gnu_extensions: false,
                valid: true,
                reason: None,
            });
        };

        let gnu_extensions = parse_gnu_extensions(gnu_extensions)?;
        let request = ComparisonRequest::new(configuration, cppstd, gnu_extensions)?;

        let mut report = Report {
            effective: None,
            bound: Some(bound),
            required: Some(request.required.to_string()),
            gnu_extensions,
            valid: true,
            reason: None,
        };

        match comparator.evaluate(&request, bound) {
            Ok(effective) => {
                log::info!("{effective} satisfies the {bound} cppstd {}", request.required);
                report.effective = Some(effective.to_string());
                Ok(report)
            }
            Err(err) if err.is_semantic() && !hard_check => {
                report.effective = comparator.effective(configuration).ok().map(|s| s.to_string());
                report.valid = false;
                report.reason = Some(reason_of(&err));
                Ok(report)
            }
            Err(err) => Err(err).with_context(|| error_messages::FAILURE_CHECKING_CPPSTD),
        }
    }

    fn reason_of(err: &CppstdError) -> Reason {
        Reason {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;

        use super::*;
        use crate::error::ErrorKind;

        const GCC9_LINUX: [&str; 3] = ["os=Linux", "compiler=gcc", "compiler.version=9"];

        /// Runs `command` over the given `-s` settings
        fn run(settings: &[&str], command: &[&str]) -> Result<Report> {
            let mut argv = vec![""];
            for setting in settings {
                argv.extend(["-s", *setting]);
            }
            argv.extend_from_slice(command);
            run_cppstd(&CliArgs::parse_from(argv))
        }

        #[test]
        fn test_effective_from_settings() -> Result<()> {
            let report = run(&GCC9_LINUX, &["effective"])?;
            assert_eq!(report.effective.as_deref(), Some("gnu14"));
            Ok(())
        }

        #[test]
        fn test_valid_max_answers_false() -> Result<()> {
            let report = run(&GCC9_LINUX, &["valid-max", "11"])?;
            assert!(!report.valid);
            assert_eq!(report.effective.as_deref(), Some("gnu14"));
            assert_eq!(
                report.reason.map(|r| r.kind),
                Some(ErrorKind::StandardTooNew)
            );
            Ok(())
        }

        #[test]
        fn test_valid_max_beyond_the_known_standards() -> Result<()> {
            let report = run(&GCC9_LINUX, &["valid-max", "42"])?;
            assert!(report.valid);
            assert_eq!(report.required.as_deref(), Some("42"));
            Ok(())
        }

        #[test]
        fn test_check_max_fails_with_the_reason() {
            let settings = [GCC9_LINUX.as_slice(), &["compiler.cppstd=17"][..]].concat();
            let err = run(&settings, &["check-max", "98"]).unwrap_err();
            assert_eq!(
                err.root_cause().to_string(),
                "Current cppstd (17) is higher than the required C++ standard (98)."
            );
        }

        #[test]
        fn test_host_os_flag_does_not_override_target() -> Result<()> {
            let settings = [GCC9_LINUX.as_slice(), &["compiler.cppstd=98"][..]].concat();
            let command = [
                "--host-os",
                "Windows",
                "valid-max",
                "17",
                "--gnu-extensions",
                "true",
            ];
            let report = run(&settings, &command)?;
            assert!(!report.valid);
            assert_eq!(
                report.reason.map(|r| r.kind),
                Some(ErrorKind::ExtensionRequirementUnmet)
            );
            Ok(())
        }

        #[test]
        fn test_invalid_gnu_extensions_argument() {
            let command = ["valid-max", "17", "--gnu-extensions", "False"];
            let err = run(&["compiler=gcc"], &command).unwrap_err();
            assert_eq!(err.to_string(), "gnu_extensions parameter must be a bool");
        }
    }
}
