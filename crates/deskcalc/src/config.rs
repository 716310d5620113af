//! Persisted preferences: window size, theme and calculation history
//!
//! The file lives at `<config dir>/config.json`. Where the config directory
//! is comes from a [`PathProvider`] handed to [`ConfigStore`], so tests and
//! the `--config-dir` flag can point it anywhere.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "deskcalc";

/// File name of the persisted configuration
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the exported history
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory could be determined for this platform
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    /// Reading, writing or creating a path failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid configuration
    #[error("malformed configuration in {}: {source}", path.display())]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Colour theme of the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// Returns the other theme
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name as stored in the file
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A theme name other than `light` or `dark`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preferred window width. The terminal front-end has no window to
    /// size, so it only stores what `deskcalc config --window-size` sets.
    pub window_width: i64,
    /// Preferred window height, see `window_width`
    pub window_height: i64,
    /// Colour theme; unknown names load as light
    #[serde(deserialize_with = "theme_or_light")]
    pub theme: Theme,
    /// Calculation history, oldest first
    #[serde(deserialize_with = "null_as_empty")]
    pub history: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 600,
            theme: Theme::Light,
            history: Vec::new(),
        }
    }
}

fn theme_or_light<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|n| n.parse().ok()).unwrap_or_default())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolves the directory holding the configuration file
pub trait PathProvider {
    /// Returns the config directory, or `None` if it cannot be determined
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Platform convention: `$XDG_CONFIG_HOME` (or `~/.config`) on Linux,
/// `~/Library/Application Support` on macOS, `%APPDATA%` on Windows, each
/// joined with [`APP_DIR_NAME`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirs;

impl PathProvider for PlatformDirs {
    fn config_dir(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }
}

/// A fixed directory, used for `--config-dir` and in tests
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl PathProvider for FixedDir {
    fn config_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

impl<P: PathProvider + ?Sized> PathProvider for Box<P> {
    fn config_dir(&self) -> Option<PathBuf> {
        (**self).config_dir()
    }
}

/// Loads and saves [`Config`] in the directory given by a [`PathProvider`]
#[derive(Debug, Clone, Default)]
pub struct ConfigStore<P> {
    paths: P,
}

impl<P: PathProvider> ConfigStore<P> {
    /// Creates a store reading from the provider's directory
    #[must_use]
    pub fn new(paths: P) -> Self {
        Self { paths }
    }

    /// Returns the config directory
    pub fn config_dir(&self) -> ConfigResult<PathBuf> {
        self.paths.config_dir().ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the path of `config.json`
    pub fn config_path(&self) -> ConfigResult<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path of `history.json`
    pub fn history_file_path(&self) -> ConfigResult<PathBuf> {
        Ok(self.config_dir()?.join(HISTORY_FILE_NAME))
    }

    /// Loads the configuration.
    ///
    /// A missing file or an unresolvable directory yields the defaults. A
    /// file that exists but cannot be read or parsed is an error.
    pub fn load(&self) -> ConfigResult<Config> {
        let Ok(path) = self.config_path() else {
            tracing::debug!("no config directory; using defaults");
            return Ok(Config::default());
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file absent; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::io(&path, e)),
        };

        let config = serde_json::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves the configuration, creating the directory if needed
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        let contents = serde_json::to_string_pretty(config)?;
        let path = self.write_file(CONFIG_FILE_NAME, &contents)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Writes the history as a JSON array to `history.json`
    pub fn export_history(&self, history: &[String]) -> ConfigResult<PathBuf> {
        let contents = serde_json::to_string_pretty(history)?;
        self.write_file(HISTORY_FILE_NAME, &contents)
    }

    fn write_file(&self, name: &str, contents: &str) -> ConfigResult<PathBuf> {
        let dir = self.config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::io(&dir, e))?;
        let path = dir.join(name);
        std::fs::write(&path, contents).map_err(|e| ConfigError::io(&path, e))?;
        Ok(path)
    }
}
