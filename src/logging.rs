use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TALLY_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal UI owns the screen; log only to a file when asked.
    Tui,
    /// No UI on screen; stderr is fine.
    Headless,
}

/// Initialize tracing.
///
/// With `TALLY_LOG` set, logs go to `{path}.{timestamp}.{pid}` so several
/// instances never share a file. Without it, headless mode logs to stderr
/// and terminal mode logs nothing.
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var(LOG_ENV) {
        let unique_path = unique_log_path(&log_path);
        let Ok(file) = std::fs::File::create(&unique_path) else {
            eprintln!("Warning: Failed to create log file: {}", unique_path);
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
        return;
    }

    if target == LogTarget::Headless {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
