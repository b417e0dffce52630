//! Typed event subscription.
//!
//! Handlers are called in registration order. The handler list lock is
//! released before any handler runs, so a handler may subscribe or
//! unsubscribe while an event is being delivered.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::Mutex;

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Identifies one registered handler.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HandlerId(u64);

/// A list of event handlers for events of type `E`.
pub struct Emitter<E> {
    handlers: Mutex<Vec<(HandlerId, Handler<E>)>>,
    next_id: AtomicU64,
}

impl<E> Emitter<E> {
    /// Creates an emitter with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Registers `handler` and returns its id.
    pub fn on<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.lock().push((id, Arc::new(handler)));
        id
    }

    /// Removes the handler registered as `id`. Returns false if it was not
    /// registered.
    pub fn off(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.lock();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Removes every handler.
    pub fn clear(&self) {
        self.handlers.lock().clear();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Returns true when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `event` to every handler registered at the time of the call.
    pub fn emit(&self, event: &E) {
        let handlers: Vec<Handler<E>> = self
            .handlers
            .lock()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("handlers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn handlers_receive_events_in_order() {
        let emitter = Emitter::<u32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        emitter.on(move |value| first.lock().push(("first", *value)));
        let second = Arc::clone(&seen);
        emitter.on(move |value| second.lock().push(("second", *value)));

        emitter.emit(&7);
        assert_eq!(*seen.lock(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn off_removes_only_the_given_handler() {
        let emitter = Emitter::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let a = Arc::clone(&count);
        let id = emitter.on(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let b = Arc::clone(&count);
        emitter.on(move |_| {
            b.fetch_add(10, Ordering::SeqCst);
        });

        assert!(emitter.off(id));
        assert!(!emitter.off(id));
        emitter.emit(&());
        assert_eq!(count.load(Ordering::SeqCst), 10);

        emitter.clear();
        assert!(emitter.is_empty());
        emitter.emit(&());
        assert_eq!(count.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn handler_may_subscribe_during_emit() {
        let emitter = Arc::new(Emitter::<()>::new());
        let inner = Arc::clone(&emitter);
        emitter.on(move |_| {
            inner.on(|_| {});
        });
        emitter.emit(&());
        assert_eq!(emitter.len(), 2);
    }
}
