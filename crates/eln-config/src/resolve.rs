//! Profile path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG paths →
//! system config → built-in defaults.

use std::path::{Path, PathBuf};

/// Where a report profile was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/eln-report/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Resolved profile location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLocation {
    /// Path to the profile file (None means built-in defaults).
    pub path: Option<PathBuf>,

    /// Source of the profile (for diagnostics).
    pub source: ConfigSource,
}

/// Environment variable names.
pub const ENV_PROFILE_PATH: &str = "ELN_REPORT_PROFILE";
pub const ENV_CONFIG_DIR: &str = "ELN_REPORT_CONFIG_DIR";

/// Standard profile file name.
pub const PROFILE_FILENAME: &str = "profile.json";

/// Application name for XDG directories.
const APP_NAME: &str = "eln-report";

/// Resolve the profile path using the standard resolution order.
///
/// 1. Explicit CLI path (always wins, even if missing, so the loader can
///    report it)
/// 2. `ELN_REPORT_PROFILE`
/// 3. `ELN_REPORT_CONFIG_DIR` + `profile.json`
/// 4. XDG config directory (`~/.config/eln-report/`)
/// 5. System config (`/etc/eln-report/`)
/// 6. Built-in defaults (None)
pub fn resolve_profile(cli_path: Option<&Path>) -> ProfileLocation {
    resolve_with(
        cli_path,
        |name| std::env::var(name).ok(),
        xdg_config_dir(),
        system_config_dir(),
    )
}

/// Resolution with injected environment and directories.
pub(crate) fn resolve_with(
    cli_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    xdg_dir: Option<PathBuf>,
    system_dir: PathBuf,
) -> ProfileLocation {
    // 1. CLI argument
    if let Some(path) = cli_path {
        return ProfileLocation {
            path: Some(path.to_path_buf()),
            source: ConfigSource::CliArgument,
        };
    }

    // 2. Environment variable (direct path)
    if let Some(env_path) = env(ENV_PROFILE_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 3. Environment variable (config dir)
    if let Some(config_dir) = env(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(PROFILE_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 4. XDG config directory
    if let Some(dir) = xdg_dir {
        let path = dir.join(PROFILE_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::XdgConfig);
        }
    }

    // 5. System config
    let system_path = system_dir.join(PROFILE_FILENAME);
    if system_path.exists() {
        return found(system_path, ConfigSource::SystemConfig);
    }

    // 6. Built-in default
    ProfileLocation::default()
}

fn found(path: PathBuf, source: ConfigSource) -> ProfileLocation {
    ProfileLocation {
        path: Some(path),
        source,
    }
}

/// Get the XDG config directory for eln-report.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
