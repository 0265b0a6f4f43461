//! Typed publish-subscribe with queued, tick-aligned dispatch.
//!
//! Events are raised at any point during a tick and delivered in one batch
//! when the owner calls [`EventManager::dispatch_raised_events`], typically at
//! the end of the tick. Each event type has its own FIFO queue; there is no
//! ordering guarantee across types.
//!
//! Subscriptions are handle-based: [`EventManager::subscribe`] returns a
//! [`Subscription`] token, and only that token can unsubscribe. Handlers may
//! raise follow-up events through the [`EventWriter`] they are handed; those
//! are applied after the full dispatch pass and therefore delivered on the
//! next cycle, never mid-flight.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::error::EventError;

/// Handle identifying one subscription, returned by
/// [`EventManager::subscribe`] and consumed by [`EventManager::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "without the token the subscription cannot be removed"]
pub struct Subscription {
    /// Event type this subscription listens to.
    type_id: TypeId,
    /// Dispatcher-local subscriber id.
    id: u64,
}

/// Sink for events raised from inside a handler.
///
/// Raises are buffered and applied once the current dispatch pass has
/// delivered everything that was queued before it started, so nothing raised
/// here is dispatched as a side effect mid-iteration.
pub struct EventWriter {
    /// Deferred raises, applied against the manager after the pass.
    deferred: Vec<Box<dyn FnOnce(&mut EventManager)>>,
}

impl EventWriter {
    /// Creates an empty writer.
    fn new() -> Self {
        Self {
            deferred: Vec::new(),
        }
    }

    /// Raises an event for delivery on the next dispatch cycle.
    pub fn raise<E: 'static>(&mut self, event: E) {
        self.deferred
            .push(Box::new(move |manager: &mut EventManager| {
                manager.raise(event);
            }));
    }

    /// Applies all deferred raises to the manager.
    fn apply(self, manager: &mut EventManager) {
        for raise in self.deferred {
            raise(manager);
        }
    }
}

/// Handler signature: the event plus a writer for follow-up raises.
type Handler<E> = Box<dyn FnMut(&E, &mut EventWriter)>;

/// Per-type subscriber list and pending queue.
struct EventDispatcher<E> {
    /// Subscribers in registration order, each tagged with its token id.
    subscribers: Vec<(u64, Handler<E>)>,
    /// Events raised since the last dispatch, oldest first.
    queue: Vec<E>,
    /// Next token id to hand out.
    next_id: u64,
}

impl<E> EventDispatcher<E> {
    fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            queue: Vec::new(),
            next_id: 0,
        }
    }
}

/// Type-erased view of a dispatcher, so the manager can hold one per
/// event type in a single map.
trait AnyDispatcher {
    /// Drains the pending queue and delivers each event to every subscriber.
    fn dispatch_raised_events(&mut self, writer: &mut EventWriter);

    /// Removes the subscriber with the given token id. Returns whether it
    /// existed.
    fn remove_subscriber(&mut self, id: u64) -> bool;

    /// Number of registered subscribers.
    fn subscriber_len(&self) -> usize;

    /// Number of queued, undelivered events.
    fn pending_len(&self) -> usize;

    /// Downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: 'static> AnyDispatcher for EventDispatcher<E> {
    fn dispatch_raised_events(&mut self, writer: &mut EventWriter) {
        // Snapshot: anything raised after this point belongs to the next
        // cycle.
        let batch = std::mem::take(&mut self.queue);

        for event in &batch {
            for (_, handler) in &mut self.subscribers {
                handler(event, writer);
            }
        }
    }

    fn remove_subscriber(&mut self, id: u64) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn subscriber_len(&self) -> usize {
        self.subscribers.len()
    }

    fn pending_len(&self) -> usize {
        self.queue.len()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Manages event subscriptions and queued dispatch, one dispatcher per event
/// type.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use bramble_core::EventManager;
///
/// struct Damage(u32);
///
/// let mut events = EventManager::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let token = events.subscribe(move |e: &Damage, _w| sink.borrow_mut().push(e.0));
///
/// events.raise(Damage(7));
/// events.dispatch_raised_events();
/// assert_eq!(*seen.borrow(), vec![7]);
///
/// events.unsubscribe(token).unwrap();
/// ```
pub struct EventManager {
    /// One dispatcher per event type.
    dispatchers: HashMap<TypeId, Box<dyn AnyDispatcher>>,
}

impl EventManager {
    /// Creates a new event manager with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispatchers: HashMap::new(),
        }
    }

    /// Subscribes `handler` to events of type `E` and returns the token that
    /// identifies this subscription.
    ///
    /// Every call registers a distinct subscriber; registering the same
    /// closure twice yields two deliveries and two independent tokens.
    pub fn subscribe<E, F>(&mut self, handler: F) -> Subscription
    where
        E: 'static,
        F: FnMut(&E, &mut EventWriter) + 'static,
    {
        let type_id = TypeId::of::<E>();
        let entry = self
            .dispatchers
            .entry(type_id)
            .or_insert_with(|| Box::new(EventDispatcher::<E>::new()));

        let Some(dispatcher) = entry.as_any_mut().downcast_mut::<EventDispatcher<E>>() else {
            unreachable!("dispatcher registered under a foreign TypeId")
        };

        let id = dispatcher.next_id;
        dispatcher.next_id += 1;
        dispatcher.subscribers.push((id, Box::new(handler)));

        Subscription { type_id, id }
    }

    /// Removes the subscription identified by `subscription`.
    ///
    /// # Errors
    ///
    /// [`EventError::UnknownEventType`] if no subscriber for the token's event
    /// type was ever registered, [`EventError::UnknownSubscriber`] if the
    /// token was already unsubscribed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> Result<(), EventError> {
        let Some(dispatcher) = self.dispatchers.get_mut(&subscription.type_id) else {
            return Err(EventError::UnknownEventType);
        };

        if dispatcher.remove_subscriber(subscription.id) {
            Ok(())
        } else {
            Err(EventError::UnknownSubscriber)
        }
    }

    /// Raises an event. It is queued until
    /// [`EventManager::dispatch_raised_events`] is called.
    ///
    /// Events of a type nobody has ever subscribed to are dropped.
    pub fn raise<E: 'static>(&mut self, event: E) {
        let Some(entry) = self.dispatchers.get_mut(&TypeId::of::<E>()) else {
            tracing::debug!(
                event_type = std::any::type_name::<E>(),
                "event dropped, no subscribers"
            );
            return;
        };

        let Some(dispatcher) = entry.as_any_mut().downcast_mut::<EventDispatcher<E>>() else {
            unreachable!("dispatcher registered under a foreign TypeId")
        };

        dispatcher.queue.push(event);
    }

    /// Dispatches all previously raised events. Intended to be invoked once
    /// per tick.
    ///
    /// Each per-type queue is drained into a snapshot before delivery, and
    /// follow-up events raised by handlers are applied only after every
    /// dispatcher finished its pass. Delivery is FIFO within an event type;
    /// there is no cross-type ordering guarantee.
    pub fn dispatch_raised_events(&mut self) {
        let mut writer = EventWriter::new();

        for dispatcher in self.dispatchers.values_mut() {
            dispatcher.dispatch_raised_events(&mut writer);
        }

        writer.apply(self);
    }

    /// Number of subscribers currently registered for `E`.
    #[must_use]
    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.dispatchers
            .get(&TypeId::of::<E>())
            .map_or(0, |d| d.subscriber_len())
    }

    /// Number of events of type `E` queued for the next dispatch.
    #[must_use]
    pub fn pending_count<E: 'static>(&self) -> usize {
        self.dispatchers
            .get(&TypeId::of::<E>())
            .map_or(0, |d| d.pending_len())
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    struct Ping(u32);

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    struct Pong(u32);

    fn recorder<E: Copy + 'static>(
        events: &mut EventManager,
    ) -> (Subscription, Rc<RefCell<Vec<E>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let token = events.subscribe(move |e: &E, _w: &mut EventWriter| sink.borrow_mut().push(*e));
        (token, seen)
    }

    #[test]
    fn delivers_fifo_per_type_to_every_subscriber() {
        let mut events = EventManager::new();
        let (_, first) = recorder::<Ping>(&mut events);
        let (_, second) = recorder::<Ping>(&mut events);

        events.raise(Ping(1));
        events.raise(Ping(2));
        events.raise(Ping(3));
        assert_eq!(events.pending_count::<Ping>(), 3);

        events.dispatch_raised_events();
        assert_eq!(*first.borrow(), vec![Ping(1), Ping(2), Ping(3)]);
        assert_eq!(*second.borrow(), vec![Ping(1), Ping(2), Ping(3)]);
        assert_eq!(events.pending_count::<Ping>(), 0);
    }

    #[test]
    fn raise_without_subscribers_drops_the_event() {
        let mut events = EventManager::new();
        events.raise(Ping(9));
        assert_eq!(events.pending_count::<Ping>(), 0);

        // Dispatch with nothing registered is a no-op.
        events.dispatch_raised_events();
    }

    #[test]
    fn no_dispatch_before_dispatch_call() {
        let mut events = EventManager::new();
        let (_, seen) = recorder::<Ping>(&mut events);

        events.raise(Ping(1));
        assert!(seen.borrow().is_empty());

        events.dispatch_raised_events();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut events = EventManager::new();
        let (token, seen) = recorder::<Ping>(&mut events);

        events.raise(Ping(1));
        events.dispatch_raised_events();

        events.unsubscribe(token).unwrap();
        assert_eq!(events.subscriber_count::<Ping>(), 0);

        events.raise(Ping(2));
        events.dispatch_raised_events();
        assert_eq!(*seen.borrow(), vec![Ping(1)]);
    }

    #[test]
    fn unsubscribing_a_stranger_is_an_error() {
        let mut events = EventManager::new();
        let (token, _) = recorder::<Ping>(&mut events);

        events.unsubscribe(token).unwrap();
        assert_eq!(
            events.unsubscribe(token),
            Err(EventError::UnknownSubscriber)
        );
    }

    #[test]
    fn unsubscribing_an_unknown_type_is_an_error() {
        let mut ping_events = EventManager::new();
        let mut pong_events = EventManager::new();
        let (token, _) = recorder::<Ping>(&mut ping_events);

        // Token from a manager that never saw this event type.
        assert_eq!(
            pong_events.unsubscribe(token),
            Err(EventError::UnknownEventType)
        );
    }

    #[test]
    fn events_raised_during_dispatch_wait_for_the_next_cycle() {
        let mut events = EventManager::new();
        let (_, pongs) = recorder::<Pong>(&mut events);

        // A Ping handler that answers with a Pong through the writer.
        let _ = events.subscribe(move |e: &Ping, writer: &mut EventWriter| {
            writer.raise(Pong(e.0 * 10));
        });

        events.raise(Ping(1));
        events.dispatch_raised_events();
        // The Pong is queued, not yet delivered.
        assert!(pongs.borrow().is_empty());
        assert_eq!(events.pending_count::<Pong>(), 1);

        events.dispatch_raised_events();
        assert_eq!(*pongs.borrow(), vec![Pong(10)]);
    }

    #[test]
    fn duplicate_handlers_are_distinct_subscriptions() {
        let mut events = EventManager::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink_a = Rc::clone(&seen);
        let a = events.subscribe(move |e: &Ping, _w: &mut EventWriter| {
            sink_a.borrow_mut().push(e.0);
        });
        let sink_b = Rc::clone(&seen);
        let b = events.subscribe(move |e: &Ping, _w: &mut EventWriter| {
            sink_b.borrow_mut().push(e.0);
        });
        assert_ne!(a, b);

        events.raise(Ping(5));
        events.dispatch_raised_events();
        assert_eq!(*seen.borrow(), vec![5, 5]);

        events.unsubscribe(a).unwrap();
        events.unsubscribe(b).unwrap();
    }
}
