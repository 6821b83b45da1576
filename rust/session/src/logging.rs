//! Log setup for binaries and a capturing subscriber for tests.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,holobac_session=info,holobac_engine=info";

/// `json` here selects [`LogFormat::Json`].
pub const LOG_FORMAT_ENV: &str = "HOLOBAC_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Installs the global `fmt` subscriber on stderr, so logs never mix with
/// game output. Returns `false` when a subscriber was already set.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    init_logging_with(filter, LogFormat::from_env())
}

pub fn init_logging_with(filter: EnvFilter, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
    };
    installed.is_ok()
}

/// One captured event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Keeps every event it sees, for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// First entry whose message contains `fragment`.
    pub fn find(&self, fragment: &str) -> Option<LogEntry> {
        self.lock()
            .iter()
            .find(|e| e.message.contains(fragment))
            .cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Layer feeding this subscriber; stack it on any registry.
    pub fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            sink: self.clone(),
        }
    }
}

pub struct CaptureLayer {
    sink: TestLogSubscriber,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.sink.lock().push(LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl EntryVisitor {
    fn put(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, error, info, warn};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    fn capture<F: FnOnce()>(f: F) -> TestLogSubscriber {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.layer());
        tracing::subscriber::with_default(registry, f);
        subscriber
    }

    #[test]
    fn captures_levels_in_order() {
        let subscriber = capture(|| {
            info!("session started");
            warn!("session expired");
            error!("record write failed");
        });

        let entries = subscriber.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "session started");
        assert_eq!(entries[1].level, Level::WARN);
        assert_eq!(entries[2].level, Level::ERROR);
    }

    #[test]
    fn captures_fields() {
        let subscriber = capture(|| {
            info!(session_id = "abc123", round = 2, busted = false, "round settled");
        });

        let entry = subscriber.find("round settled").unwrap();
        assert_eq!(entry.field("session_id"), Some("abc123"));
        assert_eq!(entry.field("round"), Some("2"));
        assert_eq!(entry.field("busted"), Some("false"));
        assert_eq!(entry.field("missing"), None);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let subscriber = capture(|| debug!("first message"));
        assert_eq!(subscriber.entries().len(), 1);

        subscriber.clear();
        assert!(subscriber.entries().is_empty());
        assert!(subscriber.find("first").is_none());
    }

    #[test]
    fn json_format_only_on_request() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
