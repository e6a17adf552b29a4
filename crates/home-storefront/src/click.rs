//! Product clicks.

use serde::Serialize;

use home_core::format::timestamp_now;
use home_core::{AffiliateLinkBuilder, AppContext, Product};
use home_events::{EventData, EventLog, StorageError};

/// Browsing context a navigation opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// `_blank`
    NewContext,
    SameContext,
}

impl NavigationTarget {
    /// Value for an anchor's `target` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::NewContext => "_blank",
            Self::SameContext => "_self",
        }
    }
}

/// Where the browser should go after a click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub url: String,
    pub target: NavigationTarget,
}

/// Tracks a product click and produces the outbound navigation.
#[derive(Clone)]
pub struct ClickHandler {
    links: AffiliateLinkBuilder,
    events: EventLog,
}

impl ClickHandler {
    pub fn new(links: AffiliateLinkBuilder, events: EventLog) -> Self {
        Self { links, events }
    }

    pub fn from_context(ctx: &AppContext, events: EventLog) -> Self {
        Self::new(ctx.links.clone(), events)
    }

    /// Handle a click on `product`'s buy button.
    ///
    /// Sends `affiliate_click` to the analytics sink, records
    /// `product_click` with the undecorated URL, then returns the decorated
    /// URL to open in a new browsing context. Nothing is returned unless the
    /// click was recorded.
    pub fn handle(&self, product: &Product) -> Result<Navigation, StorageError> {
        let category = product.category.as_str();

        self.events.forward(
            "affiliate_click",
            &EventData::new()
                .with("event_category", "Product")
                .with("event_label", product.title.as_str())
                .with("product_category", category)
                .with("value", 1),
        );

        self.events.record(
            "product_click",
            EventData::new()
                .with("product", product.title.as_str())
                .with("category", category)
                .with("url", product.affiliate_url.as_str())
                .with("timestamp", timestamp_now()),
        )?;

        Ok(Navigation {
            url: self.links.decorate(&product.affiliate_url),
            target: NavigationTarget::NewContext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use home_core::{CatalogStore, SiteConfig};
    use home_events::{AnalyticsSink, LogLevel, MemoryStore, SinkError, StructuredLogger};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(String, EventData)>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn send_event(&self, name: &str, data: &EventData) -> Result<(), SinkError> {
            self.calls
                .lock()
                .unwrap()
                .push((name.to_string(), data.clone()));
            Ok(())
        }
    }

    fn handler(sink: Option<Arc<RecordingSink>>) -> (ClickHandler, EventLog) {
        let ctx = AppContext::new(SiteConfig::default());
        let mut events = EventLog::new(Arc::new(MemoryStore::new()))
            .with_logger(StructuredLogger::default().with_min_level(LogLevel::Error));
        if let Some(sink) = sink {
            events = events.with_sink(sink);
        }
        (ClickHandler::from_context(&ctx, events.clone()), events)
    }

    #[test]
    fn test_click_navigates_to_decorated_url() {
        let (handler, events) = handler(None);
        let catalog = CatalogStore::seed();
        let drill = catalog.find(11).unwrap();

        let nav = handler.handle(drill).unwrap();
        assert_eq!(
            nav.url,
            format!("{}?tag=virginiahomee-20", drill.affiliate_url)
        );
        assert_eq!(nav.target, NavigationTarget::NewContext);
        assert_eq!(nav.target.as_attr(), "_blank");

        let logged = events.events().unwrap();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].name, "product_click");
        assert_eq!(logged[0].data.get_str("product"), Some(drill.title.as_str()));
        assert_eq!(logged[0].data.get_str("category"), Some("tools"));
        assert_eq!(logged[0].data.get_str("url"), Some(drill.affiliate_url.as_str()));
    }

    #[test]
    fn test_sink_sees_affiliate_click_then_product_click() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, events) = handler(Some(sink.clone()));
        let catalog = CatalogStore::seed();
        let pot = catalog.find(8).unwrap();

        handler.handle(pot).unwrap();

        let calls = sink.calls.lock().unwrap();
        let names: Vec<&str> = calls.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["affiliate_click", "product_click"]);

        let affiliate = &calls[0].1;
        assert_eq!(affiliate.get_str("event_category"), Some("Product"));
        assert_eq!(affiliate.get_str("event_label"), Some("Instant Pot Duo 7-in-1"));
        assert_eq!(affiliate.get_str("product_category"), Some("kitchen"));
        assert_eq!(affiliate.get("value"), Some(&serde_json::json!(1)));

        // only product_click reaches the persisted log
        assert_eq!(events.events().unwrap().len(), 1);
    }
}
