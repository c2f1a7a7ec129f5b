//! Theme toggle control
//!
//! A stateless button bound to the page's theme provider, with a two-phase
//! readiness guard: when the initial theme can differ between a
//! pre-rendered pass and the live pass, the first render shows an
//! icon-less placeholder of the final dimensions, and only the second
//! render reads the theme. This prevents the wrong-icon flash without any
//! layout shift.
//!
//! The icon invites the switch: sun while dark, moon while light.

use crate::element::{div, icon, ElementBuilder, ElementTree, IconKind, NodeId};
use crate::page::Page;
use folio_core::State;
use folio_theme::{ColorToken, ThemeProvider};
use std::sync::Arc;

/// Fixed control dimensions, identical for placeholder and ready renders
const TOGGLE_SIZE: f32 = 32.0;

/// Theme toggle control
pub struct ThemeToggle {
    ready: State<bool>,
    theme: Arc<ThemeProvider>,
}

impl ThemeToggle {
    /// Whether the control has passed its first render
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Mark the first render pass as complete
    ///
    /// Call after the first render has been committed; the control then
    /// re-renders showing the icon for the current theme.
    pub fn mark_ready(&self) {
        if !self.ready.get() {
            self.ready.set(true);
        }
    }

    /// Activate the control
    ///
    /// Calls the provider's toggle exactly once. Rapid activations are not
    /// debounced; each applies in order.
    pub fn activate(&self) {
        self.theme.toggle();
    }

    /// Build this control into the element tree
    pub fn render(&self, tree: &mut ElementTree) -> NodeId {
        let button = div().w(TOGGLE_SIZE).h(TOGGLE_SIZE);

        if !self.ready.get() {
            // First pass: neutral placeholder, no theme read
            return button.build(tree);
        }

        let kind = if self.theme.mode().is_dark() {
            IconKind::Sun
        } else {
            IconKind::Moon
        };

        button
            .child(icon(kind).color(ColorToken::TextPrimary))
            .build(tree)
    }
}

/// Create a theme toggle bound to a page
///
/// # Panics
///
/// Panics if the page has no theme provider installed; a toggle without a
/// provider is a programming error.
pub fn theme_toggle(page: &Page, key: impl Into<String>) -> ThemeToggle {
    let state_key = format!("{}_ready", key.into());
    ThemeToggle {
        ready: page.ctx().use_state_keyed(&state_key, || false),
        theme: Arc::clone(page.theme()),
    }
}
