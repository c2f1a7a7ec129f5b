//! Page-scoped theme provider
//!
//! One provider is constructed when a page mounts and dropped when it
//! unmounts; every themed widget on the page reads through it. This is an
//! owned value rather than a process-wide singleton so multiple page
//! instances (and tests) never share theme state.
//!
//! The initial mode is resolved before first paint by an injected
//! [`ThemeSource`] - a stored preference, an OS-level signal, whatever the
//! embedding layer wires in. Subsequent toggles are forwarded back to the
//! source so it may persist them.

use crate::theme::{ThemeBundle, ThemeMode};
use crate::tokens::{ColorToken, ColorTokens};
use folio_core::Color;
use std::sync::{Arc, Mutex, RwLock};

/// External collaborator that resolves the initial theme mode and may
/// persist later toggles
pub trait ThemeSource: Send + Sync {
    /// The mode to use at provider construction, before first paint
    fn initial_mode(&self) -> ThemeMode;

    /// Called after every toggle with the new mode
    fn persist(&self, _mode: ThemeMode) {}
}

/// Fallback source: light mode, no persistence
pub struct SystemDefault;

impl ThemeSource for SystemDefault {
    fn initial_mode(&self) -> ThemeMode {
        ThemeMode::Light
    }
}

type Subscriber = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// Holds the single current theme mode for a page and broadcasts changes
/// to all subscribed consumers
pub struct ThemeProvider {
    bundle: ThemeBundle,
    mode: RwLock<ThemeMode>,
    subscribers: Mutex<Vec<Subscriber>>,
    source: Box<dyn ThemeSource>,
}

impl ThemeProvider {
    /// Construct a provider, resolving the initial mode from the source
    pub fn new(bundle: ThemeBundle, source: impl ThemeSource + 'static) -> Arc<Self> {
        let initial = source.initial_mode();
        tracing::debug!("ThemeProvider::new - initial mode {:?}", initial);
        Arc::new(Self {
            bundle,
            mode: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            source: Box::new(source),
        })
    }

    /// Construct with the built-in documentation-site bundle
    pub fn with_defaults(source: impl ThemeSource + 'static) -> Arc<Self> {
        Self::new(ThemeBundle::docs_default(), source)
    }

    /// The current mode (pure synchronous read)
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap()
    }

    /// Flip the mode to its complement
    ///
    /// Notifies every subscriber in registration order and forwards the new
    /// mode to the source for persistence. Two toggles restore the original
    /// mode; a single toggle is never a no-op.
    pub fn toggle(&self) -> ThemeMode {
        let next = {
            let mut mode = self.mode.write().unwrap();
            *mode = mode.toggle();
            *mode
        };
        tracing::debug!("ThemeProvider::toggle - switched to {:?}", next);

        self.source.persist(next);
        for subscriber in self.subscribers.lock().unwrap().iter() {
            subscriber(next);
        }
        next
    }

    /// Get a color token value for the current mode
    pub fn color(&self, token: ColorToken) -> Color {
        self.bundle.for_mode(self.mode()).color(token)
    }

    /// All token values for the current mode
    pub fn colors(&self) -> ColorTokens {
        self.bundle.for_mode(self.mode()).colors().clone()
    }

    /// Register a consumer callback, invoked synchronously on every toggle
    pub fn subscribe(&self, f: impl Fn(ThemeMode) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(f));
    }

    /// Number of registered consumers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DarkPreference;

    impl ThemeSource for DarkPreference {
        fn initial_mode(&self) -> ThemeMode {
            ThemeMode::Dark
        }
    }

    #[test]
    fn test_initial_mode_comes_from_source() {
        let provider = ThemeProvider::with_defaults(DarkPreference);
        assert_eq!(provider.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_parity() {
        let provider = ThemeProvider::with_defaults(SystemDefault);
        let initial = provider.mode();

        for n in 1..=6 {
            provider.toggle();
            let expected = if n % 2 == 0 { initial } else { initial.toggle() };
            assert_eq!(provider.mode(), expected, "after {n} toggles");
        }
    }

    #[test]
    fn test_subscribers_notified_with_new_mode() {
        let provider = ThemeProvider::with_defaults(SystemDefault);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        provider.subscribe(move |mode| seen_clone.lock().unwrap().push(mode));

        provider.toggle();
        provider.toggle();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn test_toggle_forwards_to_source_for_persistence() {
        struct CountingSource(Arc<AtomicUsize>);

        impl ThemeSource for CountingSource {
            fn initial_mode(&self) -> ThemeMode {
                ThemeMode::Light
            }
            fn persist(&self, _mode: ThemeMode) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let persisted = Arc::new(AtomicUsize::new(0));
        let provider = ThemeProvider::with_defaults(CountingSource(Arc::clone(&persisted)));

        provider.toggle();
        provider.toggle();
        provider.toggle();
        assert_eq!(persisted.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_providers_are_independent() {
        let a = ThemeProvider::with_defaults(SystemDefault);
        let b = ThemeProvider::with_defaults(SystemDefault);

        a.toggle();
        assert_eq!(a.mode(), ThemeMode::Dark);
        assert_eq!(b.mode(), ThemeMode::Light);
    }
}
