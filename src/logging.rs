use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "emu_keeper.log";

/// Installs the global subscriber: stdout plus a daily rolling file in `log_dir`.
/// Keep the returned guard alive for the lifetime of the app or buffered lines are lost.
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_writer, guard) = match std::fs::create_dir_all(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        Err(e) => {
            eprintln!("Log directory {} unavailable: {e}", log_dir.display());
            (None, None)
        }
    };

    let file_layer = file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }

    guard
}
