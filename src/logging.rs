//! Tracing setup: stderr always, plus an optional file under `<data_dir>/logs`.

use mockdesk_core::config::GeneralConfig;
use mockdesk_core::shellexpand;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `log_level`. The returned guard flushes the file
/// sink on drop and must be held for the life of the process.
pub fn init(config: &GeneralConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let stderr = fmt::layer().with_writer(std::io::stderr).with_filter(filter());

    let (file, guard) = if config.log_file {
        let dir = log_dir(&config.data_dir);
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, "mockdesk.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr)
        .with(file)
        .try_init()?;

    Ok(guard)
}

fn log_dir(data_dir: &str) -> PathBuf {
    PathBuf::from(shellexpand(data_dir)).join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_under_data_dir() {
        assert_eq!(
            log_dir("/var/lib/mockdesk"),
            PathBuf::from("/var/lib/mockdesk/logs")
        );
    }
}
