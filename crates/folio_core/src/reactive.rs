//! Reactive signal graph
//!
//! Signals are type-erased values stored in an arena. Every write is a
//! total replacement that bumps a per-signal version counter, which is how
//! widgets detect that a dependency changed between rebuilds.

use slotmap::{new_key_type, SlotMap};
use std::any::Any;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

new_key_type! {
    struct SignalKey;
}

/// Raw identifier for a signal, independent of its value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignalId(SignalKey);

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag for triggering UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

struct SignalSlot {
    value: Box<dyn Any + Send>,
    version: u64,
}

/// Arena of reactive signal values
pub struct ReactiveGraph {
    signals: SlotMap<SignalKey, SignalSlot>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
        }
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let key = self.signals.insert(SignalSlot {
            value: Box::new(initial),
            version: 0,
        });
        Signal::from_id(SignalId(key))
    }

    /// Get the current value of a signal (cloned out)
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id().0)
            .and_then(|slot| slot.value.downcast_ref::<T>())
            .cloned()
    }

    /// Set the value of a signal, bumping its version
    ///
    /// Every write is a total replacement of the stored value.
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        if let Some(slot) = self.signals.get_mut(signal.id().0) {
            slot.value = Box::new(value);
            slot.version += 1;
        }
    }

    /// Get the change counter for a signal
    pub fn version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id.0).map(|slot| slot.version)
    }

    /// Remove a signal from the graph
    pub fn remove(&mut self, id: SignalId) {
        self.signals.remove(id.0);
    }

    /// Number of live signals
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed handle to a signal in a [`ReactiveGraph`]
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Signal<T> {
    /// Reconstruct a typed handle from a raw id
    pub fn from_id(id: SignalId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> SignalId {
        self.id
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

/// Ergonomic state handle with direct `.get()` and `.set()` access
///
/// Bundles a signal with the shared graph it lives in and the page's dirty
/// flag. Every `set` marks the page dirty so the next frame rebuilds.
pub struct State<T> {
    signal: Signal<T>,
    graph: SharedReactiveGraph,
    dirty: DirtyFlag,
}

impl<T: Clone + Send + 'static> State<T> {
    pub fn new(signal: Signal<T>, graph: SharedReactiveGraph, dirty: DirtyFlag) -> Self {
        Self {
            signal,
            graph,
            dirty,
        }
    }

    /// Read the current value
    ///
    /// # Panics
    ///
    /// Panics if the signal was removed from the graph, which indicates the
    /// state handle outlived its page.
    pub fn get(&self) -> T {
        self.graph
            .lock()
            .unwrap()
            .get(self.signal)
            .expect("State read after its signal was removed from the page")
    }

    /// Replace the value and mark the page dirty
    pub fn set(&self, value: T) {
        self.graph.lock().unwrap().set(self.signal, value);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Update the value through a function
    pub fn update<F: FnOnce(T) -> T>(&self, f: F) {
        let mut graph = self.graph.lock().unwrap();
        if let Some(current) = graph.get(self.signal) {
            graph.set(self.signal, f(current));
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal,
            graph: Arc::clone(&self.graph),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_get_set() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(1i32);

        assert_eq!(graph.get(count), Some(1));
        graph.set(count, 7);
        assert_eq!(graph.get(count), Some(7));
    }

    #[test]
    fn test_version_bumps_on_write() {
        let mut graph = ReactiveGraph::new();
        let flag = graph.create_signal(false);

        assert_eq!(graph.version(flag.id()), Some(0));
        graph.set(flag, true);
        graph.set(flag, false);
        assert_eq!(graph.version(flag.id()), Some(2));
    }

    #[test]
    fn test_removed_signal_reads_none() {
        let mut graph = ReactiveGraph::new();
        let s = graph.create_signal(0u8);
        graph.remove(s.id());

        assert_eq!(graph.get(s), None);
        assert_eq!(graph.version(s.id()), None);
    }

    #[test]
    fn test_state_set_marks_dirty() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));

        let signal = graph.lock().unwrap().create_signal(String::from("a"));
        let state = State::new(signal, Arc::clone(&graph), Arc::clone(&dirty));

        assert_eq!(state.get(), "a");
        assert!(!dirty.load(Ordering::SeqCst));

        state.set("b".to_string());
        assert_eq!(state.get(), "b");
        assert!(dirty.load(Ordering::SeqCst));
    }

    #[test]
    fn test_state_update() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));

        let signal = graph.lock().unwrap().create_signal(2i32);
        let state = State::new(signal, graph, dirty);

        state.update(|n| n * 10);
        assert_eq!(state.get(), 20);
    }
}
