//! Folio UI
//!
//! The interactive layer for long-form documentation pages: a disclosure
//! widget (accordion), a tabbed panel widget, and a theme toggle, all
//! rendering into a traversable element tree.
//!
//! Widgets are independent and self-contained; each owns its interaction
//! state through the page context and none talks to its siblings. The one
//! shared value is the page's theme, exposed read-many/write-by-toggle
//! through the page-scoped provider.
//!
//! # Example
//!
//! ```rust
//! use folio_ui::prelude::*;
//! use folio_theme::SystemDefault;
//!
//! let page = Page::with_theme(SystemDefault);
//!
//! let faq = accordion(&page, "faq")
//!     .title("FAQ")
//!     .content(|| div().child(text("It toggles.")))
//!     .build_component();
//!
//! let mut tree = ElementTree::new();
//! faq.toggle();
//! let root = faq.render(&mut tree);
//! assert_eq!(tree.mounted_text(root), vec!["FAQ", "It toggles."]);
//! ```

pub mod components;
pub mod element;
pub mod page;

pub use components::{
    accordion, tabs, theme_toggle, Accordion, TabItem, Tabs, TabsError, ThemeToggle,
};
pub use element::{div, icon, text, ElementBuilder, ElementTree, IconKind, NodeId};
pub use page::Page;

/// Commonly used types and constructors
pub mod prelude {
    pub use crate::components::{accordion, tabs, theme_toggle};
    pub use crate::element::{div, icon, text, ElementBuilder, ElementTree, IconKind};
    pub use crate::page::Page;
}
