//! Render targets.

use std::sync::{Mutex, MutexGuard};

/// A display area whose content is replaced wholesale on each draw.
pub trait RenderTarget: Send + Sync {
    fn replace(&self, html: String);
}

/// In-memory display area that remembers every draw.
#[derive(Debug, Default)]
pub struct Container {
    draws: Mutex<Vec<String>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // a panicking drawer cannot leave the Vec half-written
        self.draws.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current content, empty before the first draw.
    pub fn html(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    /// Every draw so far, oldest first.
    pub fn draws(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn draw_count(&self) -> usize {
        self.lock().len()
    }
}

impl RenderTarget for Container {
    fn replace(&self, html: String) {
        self.lock().push(html);
    }
}
