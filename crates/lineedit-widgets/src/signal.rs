#![forbid(unsafe_code)]

//! Payload-free notifications with RAII subscriptions.
//!
//! A [`Signal`] keeps weak references to its listeners; the strong side lives
//! in the [`Subscription`] guard handed back by [`Signal::subscribe`].
//! Dropping the guard detaches the listener. Dead entries are pruned lazily
//! on the next [`Signal::emit`].
//!
//! Listeners are collected before any is invoked, so a listener may
//! subscribe to or drop guards of the same signal while it runs.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type ListenerRc = Rc<dyn Fn()>;
type ListenerWeak = Weak<dyn Fn()>;

/// A fire-and-forget notification.
#[derive(Default)]
pub struct Signal {
    listeners: RefCell<Vec<ListenerWeak>>,
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

impl Signal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays attached while the returned guard lives.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(listener);
        self.listeners.borrow_mut().push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Invoke every live listener in registration order.
    pub fn emit(&self) {
        let live: Vec<ListenerRc> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|w| w.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in &live {
            listener();
        }
    }

    /// Registered listeners, including dead ones not yet pruned.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Detach every listener.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

/// Keeps a listener attached; drop to unsubscribe.
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emit_reaches_listeners_in_order() {
        let signal = Signal::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let log = Rc::clone(&log);
            signal.subscribe(move || log.borrow_mut().push('a'))
        };
        let b = {
            let log = Rc::clone(&log);
            signal.subscribe(move || log.borrow_mut().push('b'))
        };
        signal.emit();
        assert_eq!(*log.borrow(), vec!['a', 'b']);
        drop((a, b));
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = Rc::clone(&hits);
            signal.subscribe(move || hits.set(hits.get() + 1))
        };
        signal.emit();
        drop(sub);
        signal.emit();
        assert_eq!(hits.get(), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn clear_detaches_everything() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = Rc::clone(&hits);
            signal.subscribe(move || hits.set(hits.get() + 1))
        };
        signal.clear();
        signal.emit();
        assert_eq!(hits.get(), 0);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let signal = Rc::new(Signal::new());
        let late = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let signal_ref = Rc::clone(&signal);
            let late = Rc::clone(&late);
            signal.subscribe(move || {
                late.borrow_mut().push(signal_ref.subscribe(|| {}));
            })
        };
        signal.emit();
        assert_eq!(signal.listener_count(), 2);
    }
}
