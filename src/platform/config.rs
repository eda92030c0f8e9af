// fieldfilter - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. Only logging is configurable; the input path,
// output path, and keep-set are fixed.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for fieldfilter configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/fieldfilter/ or %APPDATA%\fieldfilter\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

/// Parse and validate config text. `path` is used for error context only.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut errors = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(source) => {
            errors.push(ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            });
            return (AppConfig::default(), errors);
        }
    };

    let mut config = AppConfig::default();

    if let Some(level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            errors.push(ConfigError::InvalidValue {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    (config, errors)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns the config with validated values and a list of non-fatal
/// problems. A missing file yields defaults with no problems; an unreadable
/// or unparseable file yields defaults plus the error.
///
/// Called before logging is initialised, so problems are returned rather
/// than logged here.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_config(&content, &config_path),
        Err(source) => (
            AppConfig::default(),
            vec![ConfigError::Io {
                path: config_path,
                source,
            }],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, errors) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_valid_logging_section() {
        let (config, errors) = parse_config(
            "[logging]\nlevel = \"DEBUG\"\nfile = \"/tmp/ff.log\"\n",
            Path::new("config.toml"),
        );
        assert!(errors.is_empty());
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/ff.log"));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let (config, errors) =
            parse_config("[logging]\nlevel = \"loud\"\n", Path::new("config.toml"));
        assert!(config.log_level.is_none());
        assert!(matches!(errors.as_slice(), [ConfigError::InvalidValue { .. }]));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (config, errors) = parse_config(
            "[filter]\nkeep = [\"apache\"]\n[logging]\nfile = \"\"\n",
            Path::new("config.toml"),
        );
        assert!(errors.is_empty());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_bad_toml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[logging\n").unwrap();
        let (config, errors) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(matches!(errors.as_slice(), [ConfigError::TomlParse { .. }]));
    }
}
