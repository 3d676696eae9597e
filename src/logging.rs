use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path prefix.
pub const LOG_ENV_VAR: &str = "PETSTORE_LOG";

/// Where log output goes when `PETSTORE_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Drop everything. The TUI owns the terminal.
    Silent,
    /// Write to stderr, but only if `RUST_LOG` asks for it.
    Stderr,
}

/// Initialize tracing.
///
/// With `PETSTORE_LOG` set, logs go to `{path}.{timestamp}.{pid}` so that
/// concurrent instances never share a file. Otherwise `fallback` decides.
pub fn init_tracing(fallback: Fallback) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var(LOG_ENV_VAR) {
        let unique_path = unique_log_path(&log_path);
        let Ok(file) = std::fs::File::create(&unique_path) else {
            eprintln!("Warning: Failed to create log file: {}", unique_path);
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_timer(UtcTime::rfc_3339());

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
        return;
    }

    if fallback == Fallback::Stderr && std::env::var_os("RUST_LOG").is_some() {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(UtcTime::rfc_3339());

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }
}

fn unique_log_path(prefix: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", prefix, timestamp, pid)
}
