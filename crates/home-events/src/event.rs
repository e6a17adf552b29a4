//! Event records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open map of event attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventData(BTreeMap<String, Value>);

impl EventData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Add an attribute in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String attribute, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry of the event log, stored as `{"event": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event")]
    pub name: String,
    #[serde(default)]
    pub data: EventData,
}

impl Event {
    pub fn new(name: impl Into<String>, data: EventData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// `data.timestamp`, when the event carries one.
    pub fn timestamp(&self) -> Option<&str> {
        self.data.get_str("timestamp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_shape() {
        let event = Event::new(
            "product_click",
            EventData::new()
                .with("product", "Instant Pot Duo 7-in-1")
                .with("value", 1),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "product_click",
                "data": { "product": "Instant Pot Duo 7-in-1", "value": 1 }
            })
        );
    }

    #[test]
    fn test_accessors() {
        let data = EventData::new()
            .with("timestamp", "2025-12-08T14:03:07.123Z")
            .with("value", 1);
        let event = Event::new("x", data);

        assert_eq!(event.timestamp(), Some("2025-12-08T14:03:07.123Z"));
        assert_eq!(event.data.get_str("value"), None);
        assert_eq!(event.data.len(), 2);
    }

    #[test]
    fn test_missing_data_defaults_empty() {
        let event: Event = serde_json::from_str(r#"{"event":"page_view"}"#).unwrap();
        assert!(event.data.is_empty());
    }
}
