//! The append-only event log.

use std::sync::Arc;

use home_core::config::EventsConfig;

use crate::logging::{LogFormat, StructuredLogger};
use crate::{AnalyticsSink, Event, EventData, EventStore, JsonLinesSink, StorageError};

/// Slot holding the event array unless configured otherwise.
pub const DEFAULT_SLOT: &str = "site_events";

/// Records events into one store slot and forwards them to an optional sink.
///
/// `record` is a plain read-append-write of the whole slot. Two writers on
/// the same slot can lose each other's updates; within one process the
/// store's own locking keeps each read and write intact.
#[derive(Clone)]
pub struct EventLog {
    store: Arc<dyn EventStore>,
    slot: String,
    sink: Option<Arc<dyn AnalyticsSink>>,
    logger: StructuredLogger,
}

impl EventLog {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            slot: DEFAULT_SLOT.to_string(),
            sink: None,
            logger: StructuredLogger::default().with_component("events"),
        }
    }

    /// Build a log from settings: slot name, log format, and a JSON-lines
    /// sink when `sink_path` is set.
    pub fn from_config(config: &EventsConfig, store: Arc<dyn EventStore>) -> Self {
        let logger = StructuredLogger::default()
            .with_component("events")
            .with_format(LogFormat::from_name(&config.log_format));
        let mut log = Self::new(store).with_slot(&config.slot).with_logger(logger);
        if let Some(path) = &config.sink_path {
            log = log.with_sink(Arc::new(JsonLinesSink::new(path)));
        }
        log
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Forward an event to the sink and append it to the log.
    ///
    /// The sink is called once; its failure is logged and does not stop
    /// the append. Errors come only from reading, parsing, or writing the
    /// slot.
    pub fn record(&self, name: &str, data: EventData) -> Result<(), StorageError> {
        self.forward(name, &data);

        let mut events = self.events()?;
        events.push(Event::new(name, data));
        let bytes = serde_json::to_vec(&events)?;
        self.store.write(&self.slot, &bytes)?;

        self.logger
            .info_builder("Event tracked")
            .field("event", name)
            .field_i64("log_len", events.len() as i64)
            .emit();
        Ok(())
    }

    /// Send an event to the sink only. No-op without a sink.
    pub fn forward(&self, name: &str, data: &EventData) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.send_event(name, data) {
            self.logger
                .warn_builder("Analytics sink failed")
                .field("event", name)
                .field("error", e.to_string())
                .emit();
        }
    }

    /// All persisted events, oldest first.
    pub fn events(&self) -> Result<Vec<Event>, StorageError> {
        match self.store.read(&self.slot)? {
            Some(bytes) if !bytes.is_empty() => Ok(serde_json::from_slice(&bytes)?),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, SinkError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<String>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn send_event(&self, name: &str, _data: &EventData) -> Result<(), SinkError> {
            self.calls.lock().unwrap().push(name.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingSink {
        calls: AtomicUsize,
    }

    impl AnalyticsSink for FailingSink {
        fn send_event(&self, _name: &str, _data: &EventData) -> Result<(), SinkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SinkError::Unavailable("offline".to_string()))
        }
    }

    fn quiet_logger() -> StructuredLogger {
        StructuredLogger::default().with_min_level(crate::LogLevel::Error)
    }

    #[test]
    fn test_record_appends_and_forwards_once() {
        let sink = Arc::new(RecordingSink::default());
        let log = EventLog::new(Arc::new(MemoryStore::new()))
            .with_sink(sink.clone())
            .with_logger(quiet_logger());

        log.record("page_view", EventData::new().with("page", "home"))
            .unwrap();
        log.record("product_click", EventData::new().with("product", "Drill"))
            .unwrap();

        assert_eq!(*sink.calls.lock().unwrap(), vec!["page_view", "product_click"]);
        let events = log.events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "page_view");
        assert_eq!(events[1].data.get_str("product"), Some("Drill"));
    }

    #[test]
    fn test_failing_sink_still_appends() {
        let sink = Arc::new(FailingSink::default());
        let log = EventLog::new(Arc::new(MemoryStore::new()))
            .with_sink(sink.clone())
            .with_logger(quiet_logger());

        log.record("newsletter_signup", EventData::new()).unwrap();

        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(log.events().unwrap().len(), 1);
    }

    #[test]
    fn test_no_sink_still_appends() {
        let log = EventLog::new(Arc::new(MemoryStore::new())).with_logger(quiet_logger());
        assert!(!log.has_sink());

        log.record("page_view", EventData::new()).unwrap();
        assert_eq!(log.events().unwrap().len(), 1);
    }

    #[test]
    fn test_persisted_shape() {
        let store = Arc::new(MemoryStore::new());
        let log = EventLog::new(store.clone()).with_logger(quiet_logger());
        log.record("page_view", EventData::new().with("page", "home"))
            .unwrap();

        let bytes = store.read(DEFAULT_SLOT).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "event": "page_view", "data": { "page": "home" } }])
        );
    }

    #[test]
    fn test_malformed_slot_is_an_error() {
        let store = Arc::new(MemoryStore::new());
        store.write(DEFAULT_SLOT, b"not json").unwrap();
        let log = EventLog::new(store.clone()).with_logger(quiet_logger());

        let err = log.record("page_view", EventData::new()).unwrap_err();
        assert!(matches!(err, StorageError::SerializeError(_)));
        assert_eq!(store.read(DEFAULT_SLOT).unwrap(), Some(b"not json".to_vec()));
    }

    #[test]
    fn test_from_config_uses_slot_and_sink() {
        let tmp = tempfile::tempdir().unwrap();
        let config = EventsConfig {
            slot: "custom".to_string(),
            sink_path: Some(tmp.path().join("analytics.jsonl")),
            log_format: "human".to_string(),
            ..Default::default()
        };
        let store = Arc::new(MemoryStore::new());
        let log = EventLog::from_config(&config, store.clone())
            .with_logger(quiet_logger());

        log.record("page_view", EventData::new()).unwrap();

        assert_eq!(log.slot(), "custom");
        assert!(store.read("custom").unwrap().is_some());
        let lines = std::fs::read_to_string(tmp.path().join("analytics.jsonl")).unwrap();
        assert_eq!(lines.lines().count(), 1);
    }
}
