//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "HELLO_BUTTON_CONFIG";

/// Path to the debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("hello-button.log")
}

#[must_use]
#[cfg(windows)]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(home) = var_os("USERPROFILE") {
        return Some(PathBuf::from(home));
    }

    let drive = var_os("HOMEDRIVE");
    let path = var_os("HOMEPATH");
    if let (Some(drive), Some(path)) = (drive, path) {
        let mut combined = PathBuf::from(drive);
        combined.push(path);
        return Some(combined);
    }

    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        home_dir_from(var_os).map(|home| {
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".config")
            }
        })
    })
}

fn config_override_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os(CONFIG_PATH_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

fn config_path_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> PathBuf {
    if let Some(path) = config_override_from(var_os) {
        return path;
    }
    config_dir_from(var_os)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hello-button")
        .join("config.json")
}

/// Location of the config file, honouring [`CONFIG_PATH_ENV`].
#[must_use]
pub fn config_path() -> PathBuf {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_path_from(&mut var_os)
}

/// Config file named by [`CONFIG_PATH_ENV`], if it is set.
#[must_use]
pub fn config_override() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_override_from(&mut var_os)
}
