use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::comparator::Bound;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use cppstd::cli::input::{CliArgs, Command, OutputFormat};
///
/// let parser = CliArgs::parse_from(["", "-v", "effective"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Effective);
///
/// let parser = CliArgs::parse_from([
///     "", "-s", "compiler=gcc", "-s", "compiler.version=9", "--format", "json",
///     "check-max", "17", "--gnu-extensions", "true",
/// ]);
/// assert_eq!(parser.settings, vec!["compiler=gcc", "compiler.version=9"]);
/// assert_eq!(parser.format, OutputFormat::Json);
/// assert_eq!(
///     parser.command,
///     Command::CheckMax { cppstd: "17".into(), gnu_extensions: "true".into() }
/// );
/// ```
#[derive(Parser, Debug)]
#[command(name = "cppstd")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.0")]
#[command(
    about = "Checks a build configuration's effective C++ standard against a required one",
    long_about = "Resolves the C++ standard in force for a compiler, version and target os \
    (declared or defaulted) and checks it against a maximum or minimum required standard"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Maximum allowed verbosity level is: '-v'"
    )]
    pub verbose: u8,

    #[arg(short, long, help = "A TOML profile with the [settings] to check")]
    pub profile: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "setting",
        value_name = "KEY=VALUE",
        help = "Sets (or overrides the profile's) build setting"
    )]
    pub settings: Vec<String>,

    #[arg(long, help = "Overrides the host operating system")]
    pub host_os: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fails if the effective cppstd is newer than the given one
    CheckMax {
        cppstd: String,
        #[arg(long, default_value = "false", help = "Whether the GNU extensions are required")]
        gnu_extensions: String,
    },
    /// Prints whether the effective cppstd is the given one or an older one
    ValidMax {
        cppstd: String,
        #[arg(long, default_value = "false", help = "Whether the GNU extensions are required")]
        gnu_extensions: String,
    },
    /// Fails if the effective cppstd is older than the given one
    CheckMin {
        cppstd: String,
        #[arg(long, default_value = "false", help = "Whether the GNU extensions are required")]
        gnu_extensions: String,
    },
    /// Prints whether the effective cppstd is the given one or a newer one
    ValidMin {
        cppstd: String,
        #[arg(long, default_value = "false", help = "Whether the GNU extensions are required")]
        gnu_extensions: String,
    },
    /// Prints the effective cppstd of the configuration
    Effective,
}

impl Command {
    /// The required standard, its GNU flag, the bound it sets and whether a miss
    /// is an error (`check-*`) or an answer (`valid-*`)
    pub fn comparison(&self) -> Option<(&str, &str, Bound, bool)> {
        match self {
            Command::CheckMax {
                cppstd,
                gnu_extensions: gnu,
            } => Some((cppstd.as_str(), gnu.as_str(), Bound::Max, true)),
            Command::ValidMax {
                cppstd,
                gnu_extensions: gnu,
            } => Some((cppstd.as_str(), gnu.as_str(), Bound::Max, false)),
            Command::CheckMin {
                cppstd,
                gnu_extensions: gnu,
            } => Some((cppstd.as_str(), gnu.as_str(), Bound::Min, true)),
            Command::ValidMin {
                cppstd,
                gnu_extensions: gnu,
            } => Some((cppstd.as_str(), gnu.as_str(), Bound::Min, false)),
            Command::Effective => None,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
