use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::model::LogMeta;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "ident_kit=debug,info".to_string(),
        (false, Some(level)) => format!("ident_kit={}", level),
        (false, None) => "ident_kit=info".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    let registry = tracing_subscriber::registry().with(filter);

    // 日誌寫到 stderr，stdout 留給結果輸出
    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}

/// Emits one event carrying `meta` as a JSON-encoded `meta` field.
pub fn log_with_meta(level: Level, msg: &str, meta: &LogMeta) {
    let meta = serde_json::to_string(meta).unwrap_or_else(|_| "{}".to_string());
    match level {
        Level::ERROR => tracing::error!(meta = %meta, "{}", msg),
        Level::WARN => tracing::warn!(meta = %meta, "{}", msg),
        Level::INFO => tracing::info!(meta = %meta, "{}", msg),
        Level::DEBUG => tracing::debug!(meta = %meta, "{}", msg),
        _ => tracing::trace!(meta = %meta, "{}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true, Some("warn")), "ident_kit=debug,info");
        assert_eq!(default_directive(false, Some("warn")), "ident_kit=warn");
        assert_eq!(default_directive(false, None), "ident_kit=info");
    }

    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(max_level: Level, f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_with_meta_emits_meta_field() {
        let mut meta = LogMeta::new();
        meta.insert("input".into(), "2024".into());
        meta.insert("processed".into(), 3usize.into());

        let out = capture(Level::TRACE, || {
            log_with_meta(Level::WARN, "malformed timestamp", &meta)
        });
        assert!(out.contains("WARN"));
        assert!(out.contains("malformed timestamp"));
        assert!(out.contains(r#"meta={"input":"2024","processed":3}"#));
    }

    #[test]
    fn test_log_with_meta_respects_level() {
        let meta = LogMeta::new();
        let out = capture(Level::INFO, || {
            log_with_meta(Level::DEBUG, "batch finished", &meta);
            log_with_meta(Level::ERROR, "config rejected", &meta);
        });
        assert!(!out.contains("batch finished"));
        assert!(out.contains("config rejected"));
    }
}
