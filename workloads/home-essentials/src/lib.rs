//! Home Essentials as a Spin HTTP component.
//!
//! Routes:
//! - `GET /` - the page; `?category=<key>` picks the active tab
//! - `GET /go/{id}` - track a product click, then redirect to the affiliate URL
//! - `POST /api/newsletter` - form signup
//! - `GET /api/recommendations`, `GET /api/blog-outline`, `GET /api/market-data` - admin JSON
//!
//! Events are kept in the component's default key-value store.

mod routes;

use std::sync::Arc;

use spin_sdk::http::{Method, Request, Response};
#[cfg(target_arch = "wasm32")]
use spin_sdk::http_component;

use home_core::{AppContext, SiteConfig};
use home_events::{EventLog, EventStore, LogFormat, SessionId, StructuredLogger};

use routes::{App, HttpMethod};

#[cfg_attr(target_arch = "wasm32", http_component)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
async fn handle_home(req: Request) -> anyhow::Result<Response> {
    let logger = StructuredLogger::new(SessionId::generate())
        .with_component("home-essentials")
        .with_format(LogFormat::Human);

    let config = SiteConfig::default();
    let events = EventLog::from_config(&config.events, event_store()).with_logger(logger.clone());
    let app = App::new(Arc::new(AppContext::new(config)), events);

    let method = match req.method() {
        Method::Get => HttpMethod::Get,
        Method::Post => HttpMethod::Post,
        _ => HttpMethod::Other,
    };

    let reply = match app.route(method, req.path(), req.query(), req.body()).await {
        Ok(reply) => reply,
        Err(e) => {
            logger
                .error_builder("Request failed")
                .field("path", req.path())
                .field("error", format!("{:#}", e))
                .emit();
            routes::Reply::text(500, "Internal Server Error")
        }
    };

    logger
        .info_builder("Request complete")
        .field("path", req.path())
        .field_i64("status", i64::from(reply.status))
        .emit();

    let mut builder = Response::builder();
    builder
        .status(reply.status)
        .header("content-type", reply.content_type);
    if let Some(location) = &reply.location {
        builder.header("location", location.as_str());
    }
    Ok(builder.body(reply.body).build())
}

#[cfg(target_arch = "wasm32")]
fn event_store() -> Arc<dyn EventStore> {
    Arc::new(home_events::SpinStore::open_default())
}

// Native builds only run the route tests; nothing persists across requests.
#[cfg(not(target_arch = "wasm32"))]
fn event_store() -> Arc<dyn EventStore> {
    Arc::new(home_events::MemoryStore::new())
}
