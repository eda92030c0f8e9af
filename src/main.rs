// fieldfilter - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. One filter run over the fixed input and output paths

use clap::Parser;
use fieldfilter::app;
use fieldfilter::core::model::KeepSet;
use fieldfilter::platform;
use fieldfilter::util;
use std::path::Path;

/// fieldfilter - trim a rendered Beats fields.all.yml.
///
/// Reads ../filebeat/build/fields/fields.all.yml and writes fields.yml in
/// the working directory, keeping only the allow-listed field groups.
#[derive(Parser, Debug)]
#[command(name = "fieldfilter", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_errors) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    for err in &config_errors {
        tracing::warn!(error = %err, "Config problem; using defaults");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "fieldfilter starting"
    );

    let result = app::run::filter(
        Path::new(util::constants::INPUT_PATH),
        Path::new(util::constants::OUTPUT_PATH),
        &KeepSet::builtin(),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Filter run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
