// fieldfilter - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path it happened on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a filter run.
/// Errors are categorised by the side of the run that produced them.
#[derive(Debug)]
pub enum FieldFilterError {
    /// The fields file could not be read.
    Input(InputError),

    /// The trimmed fields file could not be written.
    Output(OutputError),
}

impl fmt::Display for FieldFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for FieldFilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors reading the rendered fields file.
#[derive(Debug)]
pub enum InputError {
    /// The input path does not exist.
    NotFound { path: PathBuf },

    /// The input exists but could not be opened or read.
    Unreadable { path: PathBuf, source: io::Error },
}

impl InputError {
    /// Classify an `io::Error` raised while reading `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source }
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Fields file '{}' does not exist", path.display())
            }
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read fields file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<InputError> for FieldFilterError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors writing the trimmed fields file.
#[derive(Debug)]
pub enum OutputError {
    /// The output file could not be created (permissions, missing directory).
    Unwritable { path: PathBuf, source: io::Error },

    /// Writing or flushing an already-open output file failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwritable { path, source } => {
                write!(f, "Cannot create '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed writing '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unwritable { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<OutputError> for FieldFilterError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These never abort a run, so they are not part of `FieldFilterError`:
/// `load_config` returns them alongside the defaults it fell back to.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not recognised. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Convenience type alias for fieldfilter results.
pub type Result<T> = std::result::Result<T, FieldFilterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_is_classified() {
        let err = InputError::from_io(
            PathBuf::from("missing.yml"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn test_other_io_is_unreadable_with_source() {
        let err = InputError::from_io(
            PathBuf::from("locked.yml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, InputError::Unreadable { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_top_level_chain_preserved() {
        let err: FieldFilterError = OutputError::Unwritable {
            path: PathBuf::from("out/fields.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Output error:"), "got {msg}");
        assert!(err.source().and_then(|s| s.source()).is_some());
    }
}
