//! Container-size observation capability.
//!
//! The grid needs the live height of whatever hosts it, but the concrete
//! resize signal belongs to the host platform. `SizeObserver` is the seam:
//! the host injects an implementation at construction, the board consumes
//! heights through a latest-value handle, and dropping the subscription
//! detaches the watcher so it cannot outlive its owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SizeCallback = Box<dyn FnMut(f32)>;

/// A source of container-height change notifications.
pub trait SizeObserver {
    /// Register a callback; it stays attached until the returned
    /// subscription is dropped.
    fn observe(&mut self, callback: SizeCallback) -> SizeSubscription;
}

/// Keeps a size callback attached. Dropping detaches.
pub struct SizeSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl SizeSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Explicit teardown, identical to dropping.
    pub fn detach(self) {}
}

impl Drop for SizeSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Latest-value slot bridging callback delivery to polled consumption.
/// Bursts of resize notifications collapse to the most recent height.
#[derive(Clone)]
pub struct SizeHandle(Rc<Cell<Option<f32>>>);

impl SizeHandle {
    /// The most recent unseen height, if any. Consuming clears the slot.
    pub fn take(&self) -> Option<f32> {
        self.0.take()
    }
}

/// Observe a source through a latest-value handle.
pub fn observe_latest(observer: &mut dyn SizeObserver) -> (SizeSubscription, SizeHandle) {
    let slot: Rc<Cell<Option<f32>>> = Rc::new(Cell::new(None));
    let writer = Rc::clone(&slot);
    let subscription = observer.observe(Box::new(move |height| writer.set(Some(height))));
    (subscription, SizeHandle(slot))
}

type ListenerList = Rc<RefCell<Vec<(u64, SizeCallback)>>>;

/// Size source driven by explicit `emit` calls. Used by tests and the demo
/// binary; a platform resize signal implements `SizeObserver` the same way.
#[derive(Default)]
pub struct ManualSizeSource {
    listeners: ListenerList,
    next_id: u64,
}

impl ManualSizeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, height: f32) {
        for (_, callback) in self.listeners.borrow_mut().iter_mut() {
            callback(height);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl SizeObserver for ManualSizeSource {
    fn observe(&mut self, callback: SizeCallback) -> SizeSubscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.borrow_mut().push((id, callback));

        let listeners = Rc::clone(&self.listeners);
        SizeSubscription::new(move || {
            listeners.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_sees_latest_emitted_height() {
        let mut source = ManualSizeSource::new();
        let (_subscription, handle) = observe_latest(&mut source);

        source.emit(480.0);
        source.emit(600.0);

        assert_eq!(handle.take(), Some(600.0));
        // Consumed; nothing new until the next emit.
        assert_eq!(handle.take(), None);
    }

    #[test]
    fn test_dropping_subscription_detaches_listener() {
        let mut source = ManualSizeSource::new();
        let (subscription, handle) = observe_latest(&mut source);
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.emit(512.0);
        assert_eq!(handle.take(), None);
    }

    #[test]
    fn test_multiple_listeners_each_get_notified() {
        let mut source = ManualSizeSource::new();
        let (_sub_a, handle_a) = observe_latest(&mut source);
        let (_sub_b, handle_b) = observe_latest(&mut source);

        source.emit(300.0);
        assert_eq!(handle_a.take(), Some(300.0));
        assert_eq!(handle_b.take(), Some(300.0));
    }
}
