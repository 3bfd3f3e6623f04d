//! Structured logging for the terrain generator.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds,
//! a JSON log file. The filter honors `RUST_LOG` first, then the config's
//! `debug.log_level`.

use std::fs::File;
use std::path::Path;

use relief_config::Config;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config specify one.
pub const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "relief.log";

/// Filter directive for `config`, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// - Console output with uptime, target and level
/// - JSON file output in `log_dir` when `debug_build` is set
/// - `RUST_LOG` overrides the config log level
///
/// Calling this twice panics, as `tracing_subscriber` only allows one global
/// subscriber.
///
/// # Examples
///
/// ```no_run
/// use relief_config::Config;
/// use relief_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let directive = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = create_log_file(log_dir)
    {
        subscriber.with(json_file_layer(log_file)).init();
        return;
    }

    subscriber.init();
}

/// Create `log_dir` if needed and truncate [`LOG_FILE_NAME`] inside it.
///
/// Returns `None` if either step fails; file logging is then skipped.
pub fn create_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_dir.join(LOG_FILE_NAME)).ok()
}

/// JSON event layer writing to `file`, one object per line.
pub fn json_file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .json()
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_gpu_crates() {
        let filter = format!("{}", default_env_filter());
        assert!(filter.contains("wgpu=warn"));
        assert!(filter.contains("naga=warn"));
        assert!(filter.contains("info"));
    }

    #[test]
    fn test_directive_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,relief_mesh=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,relief_mesh=trace");
    }

    #[test]
    fn test_directive_falls_back_to_default() {
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
        let mut config = Config::default();
        config.debug.log_level.clear();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        for directive in [
            "info",
            "debug,relief_mesh=trace",
            "warn,relief_app=debug,relief_mesh=info",
            DEFAULT_FILTER,
        ] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "failed to parse filter: {directive}"
            );
        }
    }

    #[test]
    fn test_create_log_file_makes_missing_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");
        assert!(create_log_file(&log_dir).is_some());
        assert!(log_dir.join(LOG_FILE_NAME).is_file());
    }

    #[test]
    fn test_create_log_file_fails_on_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        assert!(create_log_file(&blocker).is_none());
    }

    #[test]
    fn test_json_file_layer_writes_events() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = create_log_file(temp_dir.path()).unwrap();
        let subscriber = tracing_subscriber::registry().with(json_file_layer(file));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(grid_size = 64, "Terrain mesh ready");
        });

        let contents = std::fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
        let line = contents.lines().next().expect("one JSON line per event");
        assert!(line.starts_with('{') && line.ends_with('}'), "not JSON: {line}");
        assert!(line.contains(r#""level":"INFO""#), "{line}");
        assert!(line.contains(r#""message":"Terrain mesh ready""#), "{line}");
        assert!(line.contains(r#""grid_size":64"#), "{line}");
    }
}
