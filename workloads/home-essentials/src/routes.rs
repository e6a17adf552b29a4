//! Request routing, independent of the Spin types.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;

use home_core::admin::{fetch_market_data, generate_blog_content};
use home_core::format::timestamp_now;
use home_core::recommend::{generate_product_recommendations, RecommendationPreferences};
use home_core::{AppContext, Category, Product};
use home_events::{EventData, EventLog};
use home_render::sections::render_newsletter_confirmation;
use home_storefront::{render_home_page, ClickHandler, NewsletterSignup, PageLinks};

const NEWSLETTER_ACTION: &str = "/api/newsletter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Other,
}

/// Response produced by a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub location: Option<String>,
}

impl Reply {
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
            location: None,
        }
    }

    pub fn json<T: serde::Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Self {
            status: 200,
            content_type: "application/json",
            body: serde_json::to_string(value).context("Failed to serialize response")?,
            location: None,
        })
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
            location: None,
        }
    }

    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: String::new(),
            location: Some(location.into()),
        }
    }
}

/// Per-request application state.
pub struct App {
    ctx: Arc<AppContext>,
    events: EventLog,
}

impl App {
    pub fn new(ctx: Arc<AppContext>, events: EventLog) -> Self {
        Self { ctx, events }
    }

    pub async fn route(
        &self,
        method: HttpMethod,
        path: &str,
        query: &str,
        body: &[u8],
    ) -> anyhow::Result<Reply> {
        let query = parse_query(query);
        let path = path.trim_end_matches('/');

        match (method, path) {
            (HttpMethod::Get, "") => self.home(query.get("category").map(String::as_str), None),
            (HttpMethod::Get, p) if p.starts_with("/go/") => self.go(&p["/go/".len()..]),
            (HttpMethod::Post, "/api/newsletter") => self.newsletter(body),
            (HttpMethod::Get, "/api/recommendations") => self.recommendations(&query),
            (HttpMethod::Get, "/api/blog-outline") => self.blog_outline(&query),
            (HttpMethod::Get, "/api/market-data") => Reply::json(&fetch_market_data().await),
            (_, "" | "/api/newsletter" | "/api/recommendations" | "/api/blog-outline" | "/api/market-data") => {
                Ok(Reply::text(405, "Method Not Allowed"))
            }
            _ => Ok(Reply::text(404, "Not Found")),
        }
    }

    fn home(&self, category: Option<&str>, newsletter: Option<String>) -> anyhow::Result<Reply> {
        let active = match category {
            Some(key) => {
                self.events
                    .record(
                        "category_selected",
                        EventData::new()
                            .with("category", key)
                            .with("timestamp", timestamp_now()),
                    )
                    .context("Failed to record category selection")?;
                key.to_string()
            }
            None => self.ctx.default_category().as_str().to_string(),
        };

        let card = |p: &Product| format!("/go/{}", p.id);
        let tab = |c: Category| format!("/?category={}", c);
        let links = PageLinks {
            card: &card,
            tab: &tab,
            newsletter_action: NEWSLETTER_ACTION,
        };

        Ok(Reply::html(render_home_page(
            &self.ctx, &active, &links, newsletter,
        )))
    }

    fn go(&self, id: &str) -> anyhow::Result<Reply> {
        let Some(product) = id.parse::<u32>().ok().and_then(|id| self.ctx.catalog.find(id)) else {
            return Ok(Reply::text(404, "Unknown product"));
        };

        let navigation = ClickHandler::from_context(&self.ctx, self.events.clone())
            .handle(product)
            .context("Failed to record product click")?;
        Ok(Reply::redirect(302, navigation.url))
    }

    fn newsletter(&self, body: &[u8]) -> anyhow::Result<Reply> {
        let signup = NewsletterSignup::new(self.events.clone());
        match signup
            .submit_form(body)
            .context("Failed to record newsletter signup")?
        {
            Some(message) => self.home(None, Some(render_newsletter_confirmation(message))),
            None => Ok(Reply::redirect(303, "/#newsletter")),
        }
    }

    fn recommendations(&self, query: &HashMap<String, String>) -> anyhow::Result<Reply> {
        let min_rating = match query.get("min_rating").map(|v| v.parse::<f64>()) {
            Some(Ok(rating)) => rating,
            Some(Err(_)) => return Ok(Reply::text(400, "min_rating must be a number")),
            None => 0.0,
        };
        let max_per_category = match query.get("max_per_category").map(|v| v.parse::<usize>()) {
            Some(Ok(max)) => Some(max),
            Some(Err(_)) => return Ok(Reply::text(400, "max_per_category must be an integer")),
            None => None,
        };
        let prefs = RecommendationPreferences {
            categories: list_param(query, "categories"),
            min_rating,
            max_per_category,
        };
        Reply::json(&generate_product_recommendations(&self.ctx.catalog, &prefs))
    }

    fn blog_outline(&self, query: &HashMap<String, String>) -> anyhow::Result<Reply> {
        let Some(topic) = query.get("topic").filter(|t| !t.trim().is_empty()) else {
            return Ok(Reply::text(400, "topic is required"));
        };
        Reply::json(&generate_blog_content(topic, &list_param(query, "keywords")))
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Comma-separated list parameter, blanks dropped.
fn list_param(query: &HashMap<String, String>, key: &str) -> Vec<String> {
    query
        .get(key)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use home_core::SiteConfig;
    use home_events::{LogLevel, MemoryStore, StructuredLogger};

    fn app() -> (App, EventLog) {
        let events = EventLog::new(Arc::new(MemoryStore::new()))
            .with_logger(StructuredLogger::default().with_min_level(LogLevel::Error));
        let ctx = Arc::new(AppContext::new(SiteConfig::default()));
        (App::new(ctx, events.clone()), events)
    }

    #[tokio::test]
    async fn test_home_defaults_to_smart_home() {
        let (app, events) = app();
        let reply = app.route(HttpMethod::Get, "/", "", b"").await.unwrap();

        assert_eq!(reply.status, 200);
        assert!(reply.body.contains(r#"<a class="tab-btn active" data-category="smart-home""#));
        assert_eq!(reply.body.matches(r#"class="product-card""#).count(), 4);
        assert!(events.events().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_home_category_query_records_selection() {
        let (app, events) = app();
        let reply = app
            .route(HttpMethod::Get, "/", "category=kitchen", b"")
            .await
            .unwrap();

        assert!(reply.body.contains(r#"href="/go/8""#));
        assert_eq!(reply.body.matches(r#"class="product-card""#).count(), 3);
        let logged = events.events().unwrap();
        assert_eq!(logged[0].name, "category_selected");
        assert_eq!(logged[0].data.get_str("category"), Some("kitchen"));
    }

    #[tokio::test]
    async fn test_go_redirects_with_tag() {
        let (app, events) = app();
        let reply = app.route(HttpMethod::Get, "/go/8", "", b"").await.unwrap();

        assert_eq!(reply.status, 302);
        assert_eq!(
            reply.location.as_deref(),
            Some("https://amazon.com/dp/B00FLYWNYQ?tag=virginiahomee-20")
        );
        assert_eq!(events.events().unwrap()[0].name, "product_click");
    }

    #[tokio::test]
    async fn test_go_unknown_product() {
        let (app, _) = app();
        let reply = app.route(HttpMethod::Get, "/go/99", "", b"").await.unwrap();
        assert_eq!(reply.status, 404);
        let reply = app.route(HttpMethod::Get, "/go/abc", "", b"").await.unwrap();
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn test_newsletter_confirmation() {
        let (app, events) = app();
        let reply = app
            .route(HttpMethod::Post, "/api/newsletter", "", b"email=a%40b.com")
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        assert!(reply.body.contains("Thank you for subscribing!"));
        assert!(!reply.body.contains("newsletter-form"));
        assert_eq!(events.events().unwrap()[0].name, "newsletter_signup");
    }

    #[tokio::test]
    async fn test_newsletter_without_email() {
        let (app, events) = app();
        let reply = app
            .route(HttpMethod::Post, "/api/newsletter", "", b"")
            .await
            .unwrap();

        assert_eq!(reply.status, 303);
        assert!(events.events().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_json() {
        let (app, _) = app();
        let reply = app
            .route(
                HttpMethod::Get,
                "/api/recommendations",
                "categories=kitchen&min_rating=4.6&max_per_category=1",
                b"",
            )
            .await
            .unwrap();

        let products: Vec<Product> = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 8);
    }

    #[tokio::test]
    async fn test_recommendations_bad_input_is_client_error() {
        let (app, _) = app();
        let reply = app
            .route(HttpMethod::Get, "/api/recommendations", "min_rating=high", b"")
            .await
            .unwrap();
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, "min_rating must be a number");

        let reply = app
            .route(
                HttpMethod::Get,
                "/api/recommendations",
                "categories=kitchen&max_per_category=-1",
                b"",
            )
            .await
            .unwrap();
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, "max_per_category must be an integer");
    }

    #[tokio::test]
    async fn test_blog_outline() {
        let (app, _) = app();
        let reply = app
            .route(
                HttpMethod::Get,
                "/api/blog-outline",
                "topic=Home+Security&keywords=locks,+cameras",
                b"",
            )
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(json["title"], "Home Security: A Complete Guide for Virginia Homeowners");
        assert_eq!(json["keywords"], serde_json::json!(["locks", "cameras"]));

        let missing = app
            .route(HttpMethod::Get, "/api/blog-outline", "", b"")
            .await
            .unwrap();
        assert_eq!(missing.status, 400);
    }

    #[tokio::test]
    async fn test_market_data_and_fallbacks() {
        let (app, _) = app();
        let reply = app
            .route(HttpMethod::Get, "/api/market-data", "", b"")
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(json["inventory"]["current"], 36801);

        let reply = app.route(HttpMethod::Post, "/", "", b"").await.unwrap();
        assert_eq!(reply.status, 405);
        let reply = app.route(HttpMethod::Get, "/nope", "", b"").await.unwrap();
        assert_eq!(reply.status, 404);
    }
}
