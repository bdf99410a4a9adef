//! The store collaborator the binding publishes into.

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tree_i18n_core::{LocaleCode, Translator};

/// Called with the requested locale whenever a [`StoreEvent::Locale`] fires.
pub type LocaleListener = Arc<dyn Fn(&LocaleCode) + Send + Sync>;

/// Called with the new state every time [`Store::set`] runs.
pub type StateObserver = Arc<dyn Fn(&I18nState) + Send + Sync>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    /// Request to switch the active locale.
    Locale(LocaleCode),
}

/// Snapshot of the binding as seen by observers.
///
/// Both fields stay `None` until the first locale event has been handled.
#[derive(Clone, Debug, Default)]
pub struct I18nState {
    pub locale: Option<LocaleCode>,
    pub translate: Option<Translator>,
}

/// Minimal pub/sub contract a binding needs from its store.
pub trait Store: Send + Sync {
    /// Registers a listener for locale events.
    fn on_locale(&self, listener: LocaleListener);

    /// Emits an event to the registered listeners.
    ///
    /// Listeners have run by the time this returns, unless the call was made
    /// from inside a listener or observer of the same store; such nested
    /// events run after the outer dispatch.
    fn fire(&self, event: StoreEvent);

    /// Returns the current state.
    fn get(&self) -> I18nState;

    /// Replaces the state and notifies observers.
    fn set(&self, state: I18nState);

    /// Registers an observer of state changes.
    fn subscribe(&self, observer: StateObserver);
}

pub trait StoreExt: Store {
    /// Requests a locale change, the same as firing [`StoreEvent::Locale`].
    fn set_locale(&self, code: impl Into<LocaleCode>) {
        self.fire(StoreEvent::Locale(code.into()));
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

/// In-memory [`Store`].
///
/// Listeners and observers run synchronously on the calling thread, never
/// while a state or registration lock is held. An event fired from inside a
/// listener or observer is queued and handled once the current dispatch has
/// finished, so changes apply in order and the last one wins.
///
/// Dispatches are serialized: a `fire` from another thread waits for the
/// running dispatch, then handles its own event before returning. A listener
/// must therefore not block on another thread that fires on the same store.
///
/// A panicking listener or observer drops the events still queued behind it;
/// the store keeps accepting events afterwards.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<I18nState>,
    locale_listeners: RwLock<Vec<LocaleListener>>,
    observers: RwLock<Vec<StateObserver>>,
    pending: Mutex<VecDeque<StoreEvent>>,
    dispatch_lock: ReentrantMutex<()>,
    dispatching: AtomicBool,
}

/// Clears the dispatching flag on every exit path, unwinding included.
struct DispatchGuard<'a> {
    store: &'a MemoryStore,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.store.pending.lock().clear();
        }
        self.store.dispatching.store(false, Ordering::Release);
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_event(&self) -> Option<StoreEvent> {
        self.pending.lock().pop_front()
    }

    fn dispatch(&self, event: StoreEvent) {
        match event {
            StoreEvent::Locale(code) => {
                let listeners = self.locale_listeners.read().clone();
                if listeners.is_empty() {
                    tracing::warn!(
                        "Locale '{}' requested before any i18n binding was attached",
                        code
                    );
                }
                for listener in listeners {
                    listener(&code);
                }
            },
        }
    }
}

impl Store for MemoryStore {
    fn on_locale(&self, listener: LocaleListener) {
        self.locale_listeners.write().push(listener);
    }

    fn fire(&self, event: StoreEvent) {
        let _serial = self.dispatch_lock.lock();
        self.pending.lock().push_back(event);

        if self.dispatching.swap(true, Ordering::AcqRel) {
            return;
        }
        let _guard = DispatchGuard { store: self };

        while let Some(event) = self.next_event() {
            self.dispatch(event);
        }
    }

    fn get(&self) -> I18nState {
        self.state.read().clone()
    }

    fn set(&self, state: I18nState) {
        *self.state.write() = state.clone();

        let observers = self.observers.read().clone();
        for observer in observers {
            observer(&state);
        }
    }

    fn subscribe(&self, observer: StateObserver) {
        self.observers.write().push(observer);
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("state", &*self.state.read())
            .field("locale_listeners", &self.locale_listeners.read().len())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}
