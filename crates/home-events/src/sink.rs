//! Analytics sinks.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::{EventData, SinkError};

/// Outbound analytics hook, the equivalent of a tag manager's `send_event`.
pub trait AnalyticsSink: Send + Sync {
    fn send_event(&self, name: &str, data: &EventData) -> Result<(), SinkError>;
}

/// Appends one `{"event": ..., "data": {...}}` object per line to a file.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

#[derive(Serialize)]
struct SinkLine<'a> {
    event: &'a str,
    data: &'a EventData,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn send_event(&self, name: &str, data: &EventData) -> Result<(), SinkError> {
        let line = serde_json::to_string(&SinkLine { event: name, data })?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("analytics.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.send_event("page_view", &EventData::new().with("page", "home"))
            .unwrap();
        sink.send_event("affiliate_click", &EventData::new().with("value", 1))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"event":"page_view","data":{"page":"home"}}"#);
        assert_eq!(lines[1], r#"{"event":"affiliate_click","data":{"value":1}}"#);
    }

    #[test]
    fn test_event_attribute_does_not_clash_with_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("analytics.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.send_event("custom", &EventData::new().with("event", "inner"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(line["event"], "custom");
        assert_eq!(line["data"]["event"], "inner");
        assert_eq!(line.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(tmp.path().join("missing/analytics.jsonl"));
        let err = sink.send_event("x", &EventData::new()).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
    }
}
