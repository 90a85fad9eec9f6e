//! Publish/subscribe primitive.
//!
//! `EventBus` is an explicit listener registry keyed by event kind,
//! deliberately not a DOM-style event target, so the engine runs
//! anywhere. Dispatch is synchronous and follows registration order.
//!
//! ## Re-entrancy
//!
//! Listeners may register further listeners or emit further events
//! from inside a handler without crashing. Listeners registered during
//! a dispatch do not observe the event being dispatched. A listener
//! must not arrange for its own re-entry (infinite mutual emission is
//! the caller's responsibility to avoid).
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use grid_ccg::events::{Event, EventBus};
//!
//! #[derive(Clone)]
//! struct Ping(u32);
//! impl Event for Ping {
//!     type Kind = ();
//!     fn kind(&self) -> () {}
//! }
//!
//! let bus = EventBus::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! bus.on((), move |ping: &Ping| sink.borrow_mut().push(ping.0));
//!
//! bus.emit(&Ping(1));
//! bus.emit(&Ping(2));
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An event payload that can be dispatched on an `EventBus`.
///
/// `Kind` is the subscription key: listeners register for one kind and
/// receive every payload whose `kind()` matches.
pub trait Event {
    /// Subscription key type.
    type Kind: Copy + Eq;

    /// The kind of this payload.
    fn kind(&self) -> Self::Kind;
}

/// Handle for deregistering a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry<E: Event> {
    id: ListenerId,
    kind: E::Kind,
    once: bool,
    // Marked instead of removed so dispatch indices stay stable;
    // compacted when the outermost dispatch finishes.
    spent: Cell<bool>,
    callback: Rc<RefCell<dyn FnMut(&E)>>,
}

/// Listener registry with synchronous, registration-ordered dispatch.
pub struct EventBus<E: Event> {
    entries: RefCell<Vec<Entry<E>>>,
    next_id: Cell<u64>,
    depth: Cell<u32>,
}

impl<E: Event> EventBus<E> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            depth: Cell::new(0),
        }
    }

    /// Register a listener for one event kind.
    pub fn on(&self, kind: E::Kind, callback: impl FnMut(&E) + 'static) -> ListenerId {
        self.register(kind, false, callback)
    }

    /// Register a listener that auto-deregisters after its first
    /// invocation.
    pub fn once(&self, kind: E::Kind, callback: impl FnMut(&E) + 'static) -> ListenerId {
        self.register(kind, true, callback)
    }

    fn register(
        &self,
        kind: E::Kind,
        once: bool,
        callback: impl FnMut(&E) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            kind,
            once,
            spent: Cell::new(false),
            callback: Rc::new(RefCell::new(callback)),
        });
        id
    }

    /// Deregister a listener. Returns false if it was already gone.
    pub fn off(&self, id: ListenerId) -> bool {
        let entries = self.entries.borrow();
        match entries.iter().find(|e| e.id == id && !e.spent.get()) {
            Some(entry) => {
                entry.spent.set(true);
                true
            }
            None => false,
        }
    }

    /// Invoke every live listener registered for this event's kind,
    /// synchronously, in registration order.
    pub fn emit(&self, event: &E) {
        let kind = event.kind();
        // Listeners added during this dispatch start at `len` and are
        // intentionally not visited for this event.
        let len = self.entries.borrow().len();

        self.depth.set(self.depth.get() + 1);
        for i in 0..len {
            let callback = {
                let entries = self.entries.borrow();
                let entry = &entries[i];
                if entry.spent.get() || entry.kind != kind {
                    None
                } else {
                    if entry.once {
                        entry.spent.set(true);
                    }
                    Some(Rc::clone(&entry.callback))
                }
            };
            if let Some(callback) = callback {
                // The registry borrow is released here, so the handler
                // may register listeners or emit on this bus.
                (callback.borrow_mut())(event);
            }
        }
        self.depth.set(self.depth.get() - 1);

        if self.depth.get() == 0 {
            self.entries.borrow_mut().retain(|e| !e.spent.get());
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.entries.borrow().iter().filter(|e| !e.spent.get()).count()
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
