// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`HALF_FRAME_DATA_DIR`, `HALF_FRAME_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "HalfFrame";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "HALF_FRAME_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HALF_FRAME_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    if CLI_DATA_DIR.set(data_dir).is_err() || CLI_CONFIG_DIR.set(config_dir).is_err() {
        tracing::warn!("CLI directory overrides already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory for transient state (`state.cbor`) and log files.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Data directory with an optional explicit override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory for user preferences (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory with an optional explicit override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_path_takes_precedence_for_data_dir() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn platform_default_appends_app_name() {
        let unset: OnceLock<Option<PathBuf>> = OnceLock::new();
        let resolved = resolve(
            None,
            &unset,
            "HALF_FRAME_TEST_UNSET_VARIABLE",
            || Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn cli_value_beats_platform_default() {
        let cli: OnceLock<Option<PathBuf>> = OnceLock::new();
        cli.set(Some(PathBuf::from("/from/cli"))).expect("fresh lock");
        let resolved = resolve(None, &cli, "HALF_FRAME_TEST_UNSET_VARIABLE", || {
            Some(PathBuf::from("/platform"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/from/cli")));
    }
}
