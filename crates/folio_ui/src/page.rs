//! Page root
//!
//! The composition root for one rendered documentation page: the keyed
//! state context, the animation scheduler, and (optionally) the theme
//! provider all live here and die together when the page is dropped.

use folio_animation::{AnimationScheduler, SharedScheduler};
use folio_core::UiContext;
use folio_theme::{ThemeProvider, ThemeSource};
use std::sync::{Arc, Mutex};

/// One page instance
///
/// Multiple pages are fully independent; nothing here is process-global.
pub struct Page {
    ctx: UiContext,
    scheduler: SharedScheduler,
    theme: Option<Arc<ThemeProvider>>,
}

impl Page {
    /// A page without a theme provider
    ///
    /// Themed widgets built on such a page panic at construction; see
    /// [`Page::theme`].
    pub fn new() -> Self {
        Self {
            ctx: UiContext::new(),
            scheduler: Arc::new(Mutex::new(AnimationScheduler::new())),
            theme: None,
        }
    }

    /// A page with a theme provider resolved from the injected source
    ///
    /// Theme toggles mark the page dirty so every consumer re-renders.
    pub fn with_theme(source: impl ThemeSource + 'static) -> Self {
        let mut page = Self::new();
        let provider = ThemeProvider::with_defaults(source);

        let dirty = page.ctx.dirty_flag();
        provider.subscribe(move |_| {
            dirty.store(true, std::sync::atomic::Ordering::SeqCst);
        });

        page.theme = Some(provider);
        page
    }

    pub fn ctx(&self) -> &UiContext {
        &self.ctx
    }

    pub fn scheduler(&self) -> SharedScheduler {
        Arc::clone(&self.scheduler)
    }

    /// The page's theme provider
    ///
    /// # Panics
    ///
    /// Panics if the page was built without one. Reading the theme without
    /// a provider is a programming error and must fail loudly rather than
    /// silently fall back to indeterminate styling.
    pub fn theme(&self) -> &Arc<ThemeProvider> {
        self.theme.as_ref().expect(
            "No ThemeProvider installed for this page. \
             Build the page with Page::with_theme() before constructing themed widgets.",
        )
    }

    pub fn has_theme(&self) -> bool {
        self.theme.is_some()
    }

    /// Read and clear the rebuild flag
    pub fn take_dirty(&self) -> bool {
        self.ctx.take_dirty()
    }

    /// Advance all page animations by an explicit delta (milliseconds)
    pub fn advance_animations(&self, dt_ms: f32) {
        self.scheduler.lock().unwrap().advance_by(dt_ms);
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
