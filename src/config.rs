use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScannerError};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "android-git-scanner.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".android-git-scanner.toml";

/// Represents the complete configuration for android-git-scanner.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
}

/// Returns the default list of substrings that exclude a tag from scanning.
///
/// Covers platform-tools releases, previews, developer previews, betas,
/// VTS/CTS test suites, security-only drops and mainline (`aml_`, `frc_`) tags.
fn default_ignored_words() -> Vec<String> {
    vec![
        "platform-tools".to_string(),
        "-preview".to_string(),
        "-dp".to_string(),
        "-beta".to_string(),
        "-vts".to_string(),
        "-cts".to_string(),
        "-security".to_string(),
        "aml_".to_string(),
        "frc_".to_string(),
    ]
}

/// Configuration for tag selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_ignored_words")]
    pub ignored_words: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            ignored_words: default_ignored_words(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `android-git-scanner.toml` in current directory
/// 3. `.android-git-scanner.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ScannerError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| ScannerError::config(format!("Cannot parse '{}': {}", path.display(), e)))
}

fn discover_config_path() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
