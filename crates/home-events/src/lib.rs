//! Analytics event log for the Home Essentials site.
//!
//! Events are appended to a single JSON array kept in one slot of a
//! key-value store, and optionally forwarded to an analytics sink:
//! - [`EventLog`] - read-append-write recorder with sink forwarding
//! - [`EventStore`] - slot storage (memory, directory of files, Spin KV)
//! - [`AnalyticsSink`] - outbound analytics hook
//! - [`StructuredLogger`] - JSON or human logs on stderr
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use home_events::{EventData, EventLog, MemoryStore};
//!
//! let log = EventLog::new(Arc::new(MemoryStore::new()));
//! log.record("page_view", EventData::new().with("page", "home")).unwrap();
//! assert_eq!(log.events().unwrap().len(), 1);
//! ```

mod error;
mod event;
mod log;
pub mod logging;
mod sink;
mod store;

pub use error::{SinkError, StorageError};
pub use event::{Event, EventData};
pub use log::{EventLog, DEFAULT_SLOT};
pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, SessionId, StructuredLogger};
pub use sink::{AnalyticsSink, JsonLinesSink};
#[cfg(target_arch = "wasm32")]
pub use store::SpinStore;
pub use store::{EventStore, FileStore, MemoryStore};
