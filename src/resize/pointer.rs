//! Process-wide pointer notification hub.
//!
//! The host UI forwards every pointer notification it sees into a
//! [`PointerEvents`] hub; interested parties register a listener and hold the
//! returned [`Subscription`] for as long as they want to hear about pointer
//! activity. Listeners are not scoped to any element, so a drag keeps
//! receiving moves after the pointer leaves the handle it started on.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A single pointer notification, carrying the pointer's X coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f32 },
    /// Pointer moved (button state irrelevant)
    Move { x: f32 },
    /// Primary button released
    Up { x: f32 },
}

impl PointerEvent {
    /// Returns the pointer X coordinate carried by this event.
    pub fn x(&self) -> f32 {
        match *self {
            PointerEvent::Down { x } | PointerEvent::Move { x } | PointerEvent::Up { x } => x,
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Dispatcher for process-wide pointer notifications.
///
/// Cloning is cheap and every clone refers to the same listener set.
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener that receives every dispatched event until the
    /// returned subscription is disposed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(RefCell::new(listener))));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
            active: true,
        }
    }

    /// Delivers `event` synchronously to every registered listener, in
    /// registration order.
    ///
    /// Listeners may subscribe or unsubscribe while the event is being
    /// delivered. A listener removed during delivery is not called for the
    /// remainder of it; one added during delivery first hears the next event.
    pub fn dispatch(&self, event: PointerEvent) {
        let listeners: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in listeners {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            // A listener that dispatches from inside itself does not hear its own event.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (*listener)(&event);
            }
        }
    }

    /// Returns the number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle to a registered pointer listener.
///
/// The listener is unregistered exactly once: on the first call to
/// [`Subscription::dispose`] or when the handle is dropped.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    active: bool,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Subscription {
    /// Unregisters the listener. Further calls are no-ops.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Some(registry) = self.registry.upgrade() {
            let removed = {
                let mut registry = registry.borrow_mut();
                let index = registry.listeners.iter().position(|(id, _)| *id == self.id);
                index.map(|index| registry.listeners.remove(index))
            };
            // Dropped outside the borrow: the listener's captures may touch the hub.
            drop(removed);
        }
    }

    /// Returns true until the listener has been unregistered.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(events: &PointerEvents) -> (Rc<RefCell<Vec<PointerEvent>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = events.subscribe(move |event| sink.borrow_mut().push(*event));
        (seen, subscription)
    }

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let events = PointerEvents::new();
        let (seen, _subscription) = recorder(&events);

        events.dispatch(PointerEvent::Move { x: 3.0 });
        events.dispatch(PointerEvent::Up { x: 4.0 });

        assert_eq!(
            *seen.borrow(),
            vec![PointerEvent::Move { x: 3.0 }, PointerEvent::Up { x: 4.0 }]
        );
    }

    #[test]
    fn test_dispose_stops_delivery() {
        let events = PointerEvents::new();
        let (seen, mut subscription) = recorder(&events);

        subscription.dispose();
        assert!(!subscription.is_active());
        assert_eq!(events.listener_count(), 0);

        events.dispatch(PointerEvent::Move { x: 1.0 });
        assert!(seen.borrow().is_empty());

        // Second dispose is a no-op
        subscription.dispose();
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = PointerEvents::new();
        {
            let (_seen, _subscription) = recorder(&events);
            assert_eq!(events.listener_count(), 1);
        }
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself_during_dispatch() {
        let events = PointerEvents::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(RefCell::new(0));

        let inner_slot = Rc::clone(&slot);
        let inner_count = Rc::clone(&count);
        let subscription = events.subscribe(move |_| {
            *inner_count.borrow_mut() += 1;
            let own = inner_slot.borrow_mut().take();
            drop(own);
        });
        *slot.borrow_mut() = Some(subscription);

        events.dispatch(PointerEvent::Up { x: 0.0 });
        events.dispatch(PointerEvent::Up { x: 0.0 });

        assert_eq!(*count.borrow(), 1);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_listener_removed_mid_dispatch_is_skipped() {
        let events = PointerEvents::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let killer_slot = Rc::clone(&victim);
        let _killer = events.subscribe(move |_| {
            killer_slot.borrow_mut().take();
        });
        let (seen, victim_subscription) = recorder(&events);
        *victim.borrow_mut() = Some(victim_subscription);

        events.dispatch(PointerEvent::Move { x: 9.0 });
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_pointer_event_x() {
        assert_eq!(PointerEvent::Down { x: 1.0 }.x(), 1.0);
        assert_eq!(PointerEvent::Move { x: 2.0 }.x(), 2.0);
        assert_eq!(PointerEvent::Up { x: 3.0 }.x(), 3.0);
    }
}
