//! Accordion component for a single expandable content section
//!
//! A persistent title bar over a content region whose visibility toggles.
//! The open state is a plain boolean - the height/opacity reveal and the
//! chevron rotation are animated presentation driven by that boolean, not
//! part of it. Collapsed content is removed from the element tree
//! entirely, so it is unreachable by text traversal.
//!
//! # Example
//!
//! ```ignore
//! use folio_ui::prelude::*;
//!
//! let faq = accordion(&page, "faq")
//!     .title("FAQ")
//!     .content(|| div().child(text("Answers live here.")))
//!     .build_component();
//!
//! faq.toggle(); // expand
//! let root = faq.render(&mut tree);
//! ```

use crate::components::ContentBuilderFn;
use crate::element::{div, icon, text, Div, ElementBuilder, ElementTree, IconKind, NodeId};
use crate::page::Page;
use folio_animation::{AnimatedValue, Easing, WIDGET_TRANSITION_MS};
use folio_core::State;
use folio_theme::{ColorToken, ThemeProvider};
use std::sync::Arc;

/// Builder for creating an [`Accordion`] with a fluent API
pub struct AccordionBuilder<'a> {
    page: &'a Page,
    key: String,
    title: String,
    default_open: bool,
    duration_ms: u32,
    content: Option<ContentBuilderFn>,
}

impl<'a> AccordionBuilder<'a> {
    /// Set the title shown in the trigger header
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start expanded instead of collapsed
    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    /// Override the fixed transition duration
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the function that builds the content when expanded
    pub fn content<F>(mut self, content: F) -> Self
    where
        F: Fn() -> Div + Send + Sync + 'static,
    {
        self.content = Some(Arc::new(content));
        self
    }

    /// Build the final Accordion component
    pub fn build_component(self) -> Accordion {
        let state_key = format!("{}_open", self.key);
        let expanded: State<bool> = self
            .page
            .ctx()
            .use_state_keyed(&state_key, || self.default_open);

        // Animations start settled at the persisted state's targets
        let is_open = expanded.get();
        let (rotation_target, reveal_target) = targets(is_open);

        let scheduler = self.page.scheduler();
        let mut guard = scheduler.lock().unwrap();
        let rotation = guard.animate(rotation_target, self.duration_ms, Easing::EaseInOut);
        let reveal = guard.animate(reveal_target, self.duration_ms, Easing::EaseInOut);
        drop(guard);

        Accordion {
            title: self.title,
            content: self
                .content
                .unwrap_or_else(|| Arc::new(div) as ContentBuilderFn),
            expanded,
            rotation,
            reveal,
            theme: Arc::clone(self.page.theme()),
        }
    }
}

/// Rotation and reveal targets for an open state
fn targets(open: bool) -> (f32, f32) {
    if open {
        (180.0, 1.0)
    } else {
        (0.0, 0.0)
    }
}

/// Single-section disclosure widget
pub struct Accordion {
    title: String,
    content: ContentBuilderFn,
    expanded: State<bool>,
    /// Chevron rotation, 0 (collapsed) to 180 degrees (expanded)
    rotation: AnimatedValue,
    /// Content reveal, 0.0 to 1.0 over the same fixed duration; drives
    /// both the body's height fraction and its opacity
    reveal: AnimatedValue,
    theme: Arc<ThemeProvider>,
}

impl Accordion {
    /// Flip the open state
    ///
    /// Always transitions: collapsed becomes expanded and vice versa. Any
    /// in-flight reveal animation is superseded, not queued - the tweens
    /// reverse from wherever they currently are.
    pub fn toggle(&self) {
        let next = !self.expanded.get();
        self.expanded.set(next);

        let (rotation_target, reveal_target) = targets(next);
        self.rotation.set_target(rotation_target);
        self.reveal.set_target(reveal_target);

        tracing::debug!(expanded = next, title = %self.title, "accordion toggled");
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// The theme provider this widget is bound to
    pub fn theme(&self) -> &Arc<ThemeProvider> {
        &self.theme
    }

    /// Current chevron rotation in degrees
    pub fn chevron_rotation(&self) -> f32 {
        self.rotation.get()
    }

    /// Build this widget into the element tree
    ///
    /// The header row is always present. The body is only built while
    /// expanded; when collapsed it is absent from the tree, not hidden.
    pub fn render(&self, tree: &mut ElementTree) -> NodeId {
        let header = div()
            .child(text(&self.title).color(ColorToken::TextPrimary))
            .child(
                icon(IconKind::ChevronDown)
                    .color(ColorToken::TextSecondary)
                    .rotation(self.rotation.get()),
            );

        let mut outer = div().color(ColorToken::Border).child(header);

        if self.expanded.get() {
            // One reveal value animates the region from zero height and
            // opacity to its natural height, fully opaque
            let reveal = self.reveal.get();
            let body = div()
                .height_factor(reveal)
                .opacity(reveal)
                .child((self.content)());
            outer = outer.child(body);
        }

        outer.build(tree)
    }
}

/// Create an accordion bound to a page
///
/// `key` identifies this instance's state across rebuilds of the page.
pub fn accordion<'a>(page: &'a Page, key: impl Into<String>) -> AccordionBuilder<'a> {
    AccordionBuilder {
        page,
        key: key.into(),
        title: String::new(),
        default_open: false,
        duration_ms: WIDGET_TRANSITION_MS,
        content: None,
    }
}
