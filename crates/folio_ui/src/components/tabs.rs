//! Tabs component for mutually exclusive content panels
//!
//! A horizontal row of labeled selectors over N panels, exactly one of
//! which is shown. Every panel stays mounted in the tree - inactive ones
//! are hidden, not removed - so panel-local state survives switching, at
//! the cost of building all panel content eagerly.
//!
//! Duplicate `value` identifiers are rejected at construction: keyed
//! rendering would silently collide otherwise.
//!
//! # Example
//!
//! ```ignore
//! use folio_ui::prelude::*;
//!
//! let langs = tabs(&page, "install")
//!     .item("Cargo", "cargo", || div().child(text("cargo add folio")))
//!     .item("Source", "source", || div().child(text("git clone ...")))
//!     .build_component()?;
//!
//! langs.select("source");
//! let root = langs.render(&mut tree);
//! ```

use crate::components::ContentBuilderFn;
use crate::element::{div, text, Div, ElementBuilder, ElementTree, NodeId};
use crate::page::Page;
use folio_core::State;
use folio_theme::{ColorToken, ThemeProvider};
use std::sync::Arc;
use thiserror::Error;

/// Configuration-shape errors, surfaced at construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabsError {
    /// Two entries in one list share a `value` identifier
    #[error("duplicate tab value {value:?} in one tab list")]
    DuplicateValue { value: String },
}

/// One labeled tab with its panel content
#[derive(Clone)]
pub struct TabItem {
    pub label: String,
    pub value: String,
    content: ContentBuilderFn,
}

impl TabItem {
    pub fn new<F>(label: impl Into<String>, value: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> Div + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            value: value.into(),
            content: Arc::new(content),
        }
    }
}

/// Builder for creating a [`Tabs`] widget with a fluent API
pub struct TabsBuilder<'a> {
    page: &'a Page,
    key: String,
    items: Vec<TabItem>,
    default_value: Option<String>,
}

impl<'a> TabsBuilder<'a> {
    /// Add a tab
    ///
    /// `value` must be unique within this list; `content` builds the panel.
    pub fn item<F>(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        content: F,
    ) -> Self
    where
        F: Fn() -> Div + Send + Sync + 'static,
    {
        self.items.push(TabItem::new(label, value, content));
        self
    }

    /// Select this value initially instead of the first entry
    ///
    /// A value that names no configured entry is ignored and the first
    /// entry is selected instead.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Validate the configuration and build the final Tabs component
    pub fn build_component(self) -> Result<Tabs, TabsError> {
        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|prev| prev.value == item.value) {
                return Err(TabsError::DuplicateValue {
                    value: item.value.clone(),
                });
            }
        }

        // Explicit default if it names a configured entry, else the first
        // entry, else nothing
        let initial = self
            .default_value
            .filter(|wanted| self.items.iter().any(|item| &item.value == wanted))
            .or_else(|| self.items.first().map(|item| item.value.clone()));

        let state_key = format!("{}_active", self.key);
        let active: State<Option<String>> = self
            .page
            .ctx()
            .use_state_keyed(&state_key, || initial);

        Ok(Tabs {
            items: self.items,
            active,
            theme: Arc::clone(self.page.theme()),
        })
    }
}

/// Mutually-exclusive panel selection widget
pub struct Tabs {
    items: Vec<TabItem>,
    active: State<Option<String>>,
    theme: Arc<ThemeProvider>,
}

impl Tabs {
    /// Select a tab by value
    ///
    /// Unconditional, including re-selecting the already-active tab (an
    /// idempotent no-visible-change). A value not in the configured list
    /// is ignored; the active value always names a configured entry.
    pub fn select(&self, value: &str) {
        if !self.items.iter().any(|item| item.value == value) {
            tracing::debug!(value, "ignoring selection of unconfigured tab value");
            return;
        }
        self.active.set(Some(value.to_string()));
    }

    /// The currently active value, if the list is non-empty
    pub fn active_value(&self) -> Option<String> {
        self.active.get()
    }

    /// The configured tabs, in order
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// The theme provider this widget is bound to
    pub fn theme(&self) -> &Arc<ThemeProvider> {
        &self.theme
    }

    /// Build this widget into the element tree
    ///
    /// The selector row carries every label; the active one is styled with
    /// the accent underline marker, inactive ones are muted and brighten on
    /// hover. All panels are mounted; only the active one is visible.
    pub fn render(&self, tree: &mut ElementTree) -> NodeId {
        let active = self.active.get();

        let mut selector_row = div();
        for item in &self.items {
            let is_active = active.as_deref() == Some(item.value.as_str());

            let label = if is_active {
                text(&item.label)
                    .color(ColorToken::TextPrimary)
                    .underline(true)
            } else {
                text(&item.label)
                    .color(ColorToken::TextSecondary)
                    .hover_color(ColorToken::TextPrimary)
            };

            let mut cell = div().child(label);
            if is_active {
                // Accent underline marker below the active label
                cell = cell.child(div().h(2.0).color(ColorToken::Accent));
            }
            selector_row = selector_row.child(cell);
        }

        let mut panels = div();
        for item in &self.items {
            let is_active = active.as_deref() == Some(item.value.as_str());
            panels = panels.child(div().hidden(!is_active).child((item.content)()));
        }

        div()
            .color(ColorToken::Surface)
            .child(selector_row)
            .child(panels)
            .build(tree)
    }
}

/// Create a tabs widget bound to a page
///
/// `key` identifies this instance's selection state across rebuilds.
pub fn tabs<'a>(page: &'a Page, key: impl Into<String>) -> TabsBuilder<'a> {
    TabsBuilder {
        page,
        key: key.into(),
        items: Vec::new(),
        default_value: None,
    }
}
