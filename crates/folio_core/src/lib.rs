//! Folio Core Runtime
//!
//! Foundational primitives for the Folio documentation-page interaction
//! layer:
//!
//! - **Reactive Signals**: version-counted values that widgets depend on
//! - **Page Context**: keyed state that persists across UI rebuilds,
//!   scoped to one page instance
//! - **Color**: the linear RGBA primitive shared by the theme tokens
//!
//! # Example
//!
//! ```rust
//! use folio_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! // Create a signal
//! let count = graph.create_signal(0i32);
//!
//! // Update it; the version counter records the change
//! let before = graph.version(count.id()).unwrap();
//! graph.set(count, 5);
//! assert_eq!(graph.get(count), Some(5));
//! assert!(graph.version(count.id()).unwrap() > before);
//! ```

pub mod color;
pub mod context;
pub mod reactive;

pub use color::Color;
pub use context::{StateKey, UiContext};
pub use reactive::{
    DirtyFlag, ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State,
};
