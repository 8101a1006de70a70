//! Constant value definitions to use across the whole program

pub const CPPSTD: &str = "cppstd";

/// The dotted names of the build settings understood by the checks
pub mod settings_keys {
    pub const OS: &str = "os";
    pub const ARCH: &str = "arch";
    pub const BUILD_TYPE: &str = "build_type";
    pub const COMPILER: &str = "compiler";
    pub const COMPILER_VERSION: &str = "compiler.version";
    pub const COMPILER_CPPSTD: &str = "compiler.cppstd";
    pub const COMPILER_LIBCXX: &str = "compiler.libcxx";

    pub const ALL: [&str; 7] = [
        OS,
        ARCH,
        BUILD_TYPE,
        COMPILER,
        COMPILER_VERSION,
        COMPILER_CPPSTD,
        COMPILER_LIBCXX,
    ];
}

/// Operating system names, as they are spelled on the settings
pub mod os_names {
    pub const LINUX: &str = "Linux";
    pub const WINDOWS: &str = "Windows";
    pub const MACOS: &str = "Macos";
    pub const FREEBSD: &str = "FreeBSD";
    pub const NETBSD: &str = "NetBSD";
    pub const OPENBSD: &str = "OpenBSD";
    pub const SUNOS: &str = "SunOS";
    pub const ANDROID: &str = "Android";
    pub const IOS: &str = "iOS";
}

pub mod compiler_names {
    pub const GCC: &str = "gcc";
    pub const CLANG: &str = "clang";
    pub const APPLE_CLANG: &str = "apple-clang";
    pub const MSVC: &str = "msvc";
    pub const VISUAL_STUDIO: &str = "Visual Studio";
    pub const MCST_LCC: &str = "mcst-lcc";
}

pub mod debug_messages {
    pub const EXPLICIT_CPPSTD: &str = "Using the cppstd explicitly declared on the settings";
    pub const DEFAULT_CPPSTD: &str =
        "No cppstd declared on the settings. Looking up the compiler's default";
}

pub mod error_messages {
    pub const INVALID_CONFIGURATION_ARG: &str =
        "configuration parameter must be a valid build configuration";
    pub const INVALID_CPPSTD_ARG: &str = "cppstd parameter must be a number";
    pub const INVALID_GNU_EXTENSIONS_ARG: &str = "gnu_extensions parameter must be a bool";
    pub const MISSING_COMPILER: &str =
        "Could not obtain cppstd because the compiler is not specified";
    pub const UNKNOWN_COMPILER_DEFAULT: &str =
        "Could not detect default cppstd for the current compiler.";
    pub const GNU_EXTENSION_REQUIRED: &str = "The cppstd GNU extension is required";

    pub const READ_PROFILE_FILE: &str = "Could not read the profile file";
    pub const PARSE_PROFILE_FILE: &str = "Could not parse the profile file";
    pub const PROFILE_MODEL_MAPPING: &str = "Error building the configuration from the profile";
    pub const FAILURE_CHECKING_CPPSTD: &str = "The cppstd check could not be completed";
}
