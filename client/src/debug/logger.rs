//! Logging initialization

use super::config::{LogConfig, DEFAULT_FILTER};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system
///
/// Sets up:
/// - Human-readable (or JSON) output on stderr, so command output on stdout stays clean;
///   event targets are shown when the filter enables debug
/// - Optional daily-rotated log file in `config.log_dir`
///
/// The returned guard flushes the file writer on drop; keep it alive for the lifetime
/// of the program. Calling `init` twice is harmless: the second call logs nothing new.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.is_debug_enabled())
            .compact()
            .boxed()
    };

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            // Create file appender with daily rotation
            let file_appender = tracing_appender::rolling::daily(dir, "blog-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!(
            log_level = %config.log_level,
            log_dir = ?config.log_dir,
            json = config.json,
            "Logging initialized"
        );
    }

    guard
}
