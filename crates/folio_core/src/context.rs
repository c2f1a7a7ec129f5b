//! Page-scoped state context
//!
//! `UiContext` owns the reactive graph, the keyed-state store, and the
//! rebuild flag for one rendered page. It is an owned value with the page's
//! lifetime rather than a process-wide singleton, so independent page
//! instances (and tests) never share state.
//!
//! Components create internal state without leaking implementation details:
//!
//! ```rust
//! use folio_core::UiContext;
//!
//! let ctx = UiContext::new();
//! let open = ctx.use_state_keyed("faq_open", || false);
//! open.set(true);
//!
//! // Same key and type resolves to the same signal on the next rebuild
//! let again = ctx.use_state_keyed("faq_open", || false);
//! assert!(again.get());
//! ```

use crate::reactive::{DirtyFlag, ReactiveGraph, SharedReactiveGraph, Signal, State};
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Key for identifying a signal in the keyed state system
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hash of the user-provided key
    key_hash: u64,
    /// Type ID of the signal value
    type_id: TypeId,
}

impl StateKey {
    /// Create a new StateKey from a hashable key and value type
    pub fn new<T: 'static, K: Hash>(key: &K) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        key.hash(&mut hasher);
        Self {
            key_hash: hasher.finish(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create a StateKey from a string key and value type
    pub fn from_string<T: 'static>(key: &str) -> Self {
        Self::new::<T, _>(&key)
    }
}

/// State context for one page instance
///
/// Constructed when the page mounts and dropped when it unmounts; nothing
/// survives the drop.
pub struct UiContext {
    /// Reactive graph for signal-based state management
    reactive: SharedReactiveGraph,
    /// Keyed signals that persist across rebuilds
    hooks: Mutex<FxHashMap<StateKey, crate::reactive::SignalId>>,
    /// Dirty flag for triggering UI rebuilds
    dirty: DirtyFlag,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            hooks: Mutex::new(FxHashMap::default()),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a persistent state value that survives across UI rebuilds
    ///
    /// The signal is identified by the string key plus the value type; the
    /// same key resolves to the same signal on every rebuild of this page.
    /// `init` runs only the first time the key is seen.
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::from_string::<T>(key);
        let mut hooks = self.hooks.lock().unwrap();

        let signal = if let Some(&id) = hooks.get(&state_key) {
            Signal::from_id(id)
        } else {
            let signal = self.reactive.lock().unwrap().create_signal(init());
            hooks.insert(state_key, signal.id());
            tracing::debug!(key, "created keyed state signal");
            signal
        };

        State::new(signal, Arc::clone(&self.reactive), Arc::clone(&self.dirty))
    }

    /// Get the shared reactive graph
    pub fn reactive(&self) -> &SharedReactiveGraph {
        &self.reactive
    }

    /// Get the dirty flag
    pub fn dirty_flag(&self) -> DirtyFlag {
        Arc::clone(&self.dirty)
    }

    /// Request a UI rebuild by setting the dirty flag
    pub fn request_rebuild(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Read and clear the rebuild flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}
