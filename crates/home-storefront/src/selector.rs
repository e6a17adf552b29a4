//! Category tabs and the delayed product render.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use home_core::format::timestamp_now;
use home_core::{AppContext, Product};
use home_events::{EventData, EventLog, StorageError};
use home_render::sections::{render_loading, render_product_grid};
use tokio::task::JoinHandle;

use crate::RenderTarget;

/// Maps a product to the href of its buy button.
pub type CardHref = Arc<dyn Fn(&Product) -> String + Send + Sync>;

/// Holds the active category and draws its products.
///
/// Drawing shows the loading indicator right away and the product cards
/// after the configured delay. At most one delayed draw is pending: a new
/// selection aborts the previous one. Every draw also carries a generation
/// number, checked under the same lock that orders draws onto the target, so
/// a draw already past its delay when it is superseded is dropped instead of
/// landing on top of the newer loading indicator.
pub struct CategorySelector {
    ctx: Arc<AppContext>,
    events: Option<EventLog>,
    target: Option<Arc<dyn RenderTarget>>,
    active: String,
    delay: Duration,
    href: CardHref,
    pending: Option<JoinHandle<()>>,
    generation: Arc<Mutex<u64>>,
}

impl CategorySelector {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let active = ctx.default_category().as_str().to_string();
        let delay = Duration::from_millis(ctx.config.site.load_delay_ms);
        let links = ctx.links.clone();
        Self {
            ctx,
            events: None,
            target: None,
            active,
            delay,
            href: Arc::new(move |product: &Product| links.decorate(&product.affiliate_url)),
            pending: None,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_target(mut self, target: Arc<dyn RenderTarget>) -> Self {
        self.target = Some(target);
        self
    }

    /// Record `category_selected` into this log on every selection.
    pub fn with_events(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_href(mut self, href: CardHref) -> Self {
        self.href = href;
        self
    }

    pub fn active_category(&self) -> &str {
        &self.active
    }

    /// Whether a delayed draw has not finished yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Make `category` active, record the selection, and redraw.
    ///
    /// Unknown keys are accepted and draw an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if a render target is attached and this is called outside a
    /// tokio runtime (see [`render_products`](Self::render_products)).
    pub fn select(&mut self, category: &str) -> Result<(), StorageError> {
        self.active = category.to_string();
        self.render_products();

        if let Some(events) = &self.events {
            events.record(
                "category_selected",
                EventData::new()
                    .with("category", category)
                    .with("timestamp", timestamp_now()),
            )?;
        }
        Ok(())
    }

    /// Draw the active category: loading indicator now, cards after the delay.
    ///
    /// # Panics
    ///
    /// The delayed draw is spawned with `tokio::spawn`, so this panics when a
    /// render target is attached and no tokio runtime is current. Without a
    /// target it returns before spawning.
    pub fn render_products(&mut self) {
        self.cancel();
        let Some(target) = self.target.clone() else {
            return;
        };

        let generation = {
            let mut current = lock_generation(&self.generation);
            *current += 1;
            target.replace(render_loading());
            *current
        };

        let ctx = Arc::clone(&self.ctx);
        let category = self.active.clone();
        let href = Arc::clone(&self.href);
        let delay = self.delay;
        let current = Arc::clone(&self.generation);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let products = ctx.catalog.get_by_category(&category);
            let html = render_product_grid(products, |p| href(p));

            let current = lock_generation(&current);
            if *current == generation {
                target.replace(html);
            }
        }));
    }

    /// Abort the pending draw, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait for the pending draw to land.
    pub async fn wait(&mut self) {
        if let Some(handle) = self.pending.take() {
            // an aborted draw is fine to ignore
            let _ = handle.await;
        }
    }
}

fn lock_generation(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(|e| e.into_inner())
}

impl Drop for CategorySelector {
    fn drop(&mut self) {
        self.cancel();
    }
}
