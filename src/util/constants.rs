// fieldfilter - util/constants.rs
//
// Single source of truth for all named constants, paths, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "fieldfilter";

/// Application identifier used for config directories.
pub const APP_ID: &str = "fieldfilter";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input / output
// =============================================================================

/// Rendered fields file produced by the filebeat build, relative to the
/// working directory.
pub const INPUT_PATH: &str = "../filebeat/build/fields/fields.all.yml";

/// Trimmed fields file written into the working directory.
pub const OUTPUT_PATH: &str = "fields.yml";

/// Character that opens a new top-level list entry.
pub const MARKER_CHAR: char = '-';

/// Field groups retained in the output, matched against the last token of
/// each entry's first line.
pub const KEEP_KEYS: [&str; 15] = [
    "ecs",
    "beat",
    "cloud",
    "docker",
    "host",
    "kubernetes",
    "process",
    "log",
    "auditd",
    "elasticsearch",
    "kibana",
    "osquery",
    "gcp",
    "google_workspace",
    "misp",
];

// =============================================================================
// Configuration & logging
// =============================================================================

/// Config file name, looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
