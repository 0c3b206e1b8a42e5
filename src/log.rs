use log::LevelFilter;
use std::fs::File;

/// File that receives verbose diagnostics when `--debug` is enabled.
/// Truncated at the start of each run.
pub const DEBUG_LOG_PATH: &str = ".log";

/// Initialize logging for the process.
///
/// # Behavior
/// - **`debug_enabled`:** debug-level messages, written to [`DEBUG_LOG_PATH`]
///   (falling back to stderr if the file cannot be created).
/// - **otherwise:** only error-level messages, on stderr.
/// - `RUST_LOG` overrides the filter defaults when explicitly set.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let mut builder = env_logger::Builder::new();

    if debug_enabled {
        builder.filter(None, LevelFilter::Debug);
        match File::create(DEBUG_LOG_PATH) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("could not open {DEBUG_LOG_PATH} for debug logging ({e}); using stderr");
            }
        }
    } else {
        builder.filter(None, LevelFilter::Error);
    }

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("logger initialized");
}
