//! Folio Theme System
//!
//! Semantic design tokens and the page-scoped light/dark theme provider
//! for the documentation widgets.
//!
//! # Overview
//!
//! - **Design tokens**: semantic colors the widgets consume; concrete
//!   values come from the built-in light/dark palettes
//! - **Theme provider**: one owned provider per page holding the current
//!   mode, with a toggle operation that notifies every subscriber
//! - **Injected resolution**: the initial mode comes from a [`ThemeSource`]
//!   supplied by the embedding layer (stored preference, OS signal, ...);
//!   toggles are forwarded back to it for persistence
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{ColorToken, SystemDefault, ThemeProvider};
//!
//! let provider = ThemeProvider::with_defaults(SystemDefault);
//! let accent = provider.color(ColorToken::Accent);
//! provider.toggle();
//! ```
//!
//! The provider is an owned value with the page's lifetime, not a process
//! singleton: independent pages (and tests) never share theme state.

pub mod provider;
pub mod theme;
pub mod tokens;

pub use provider::{SystemDefault, ThemeProvider, ThemeSource};
pub use theme::{Theme, ThemeBundle, ThemeMode};
pub use tokens::{ColorToken, ColorTokens};
