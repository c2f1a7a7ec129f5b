//! Themed documentation widgets
//!
//! Each widget owns its own local interaction state through the page
//! context and renders into the element tree. Widgets do not communicate
//! with siblings; the only shared value is the page's theme.

pub mod accordion;
pub mod tabs;
pub mod theme_toggle;

pub use accordion::{accordion, Accordion, AccordionBuilder};
pub use tabs::{tabs, TabItem, Tabs, TabsBuilder, TabsError};
pub use theme_toggle::{theme_toggle, ThemeToggle};

use crate::element::Div;
use std::sync::Arc;

/// Content builder function type (cloneable via Arc)
///
/// Widget bodies are opaque renderables; the widgets never inspect what
/// the closure produces.
pub type ContentBuilderFn = Arc<dyn Fn() -> Div + Send + Sync>;
