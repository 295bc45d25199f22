//! Canvas lifecycle events and subscriptions.

use crate::shapes::Shape;

/// An event emitted by a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A shape was inserted into the surface.
    ObjectAdded(Shape),
    /// A shape is being scaled; carries its updated state.
    ObjectScaling(Shape),
    /// A selection was made where there was none.
    SelectionCreated(Vec<Shape>),
    /// An existing selection changed.
    SelectionUpdated(Vec<Shape>),
    /// The selection was dropped.
    SelectionCleared,
}

impl CanvasEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            CanvasEvent::ObjectAdded(_) => EventKind::ObjectAdded,
            CanvasEvent::ObjectScaling(_) => EventKind::ObjectScaling,
            CanvasEvent::SelectionCreated(_) => EventKind::SelectionCreated,
            CanvasEvent::SelectionUpdated(_) => EventKind::SelectionUpdated,
            CanvasEvent::SelectionCleared => EventKind::SelectionCleared,
        }
    }
}

/// Discriminant of [`CanvasEvent`], used to subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ObjectAdded,
    ObjectScaling,
    SelectionCreated,
    SelectionUpdated,
    SelectionCleared,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::ObjectAdded,
        EventKind::ObjectScaling,
        EventKind::SelectionCreated,
        EventKind::SelectionUpdated,
        EventKind::SelectionCleared,
    ];

    /// Canonical event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ObjectAdded => "object:added",
            EventKind::ObjectScaling => "object:scaling",
            EventKind::SelectionCreated => "selection:created",
            EventKind::SelectionUpdated => "selection:updated",
            EventKind::SelectionCleared => "selection:cleared",
        }
    }
}

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&CanvasEvent)>;

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

/// Synchronous event dispatcher.
///
/// Handlers run on the emitting call, in the order they subscribed.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one kind of event.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&CanvasEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            kind,
            handler: Box::new(handler),
        });
        log::debug!("Subscribed {:?} to {}", id, kind.name());
        id
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver an event to every handler of its kind.
    pub fn emit(&mut self, event: &CanvasEvent) {
        let kind = event.kind();
        for sub in self.subscriptions.iter_mut().filter(|sub| sub.kind == kind) {
            (sub.handler)(event);
        }
    }

    /// Number of handlers registered for a kind.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|sub| sub.kind == kind).count()
    }

    /// Total number of registered handlers.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_only_reaches_matching_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let sink = Rc::clone(&seen);
        bus.on(EventKind::SelectionCleared, move |event| {
            sink.borrow_mut().push(event.kind());
        });

        bus.emit(&CanvasEvent::SelectionCreated(Vec::new()));
        bus.emit(&CanvasEvent::SelectionCleared);

        assert_eq!(*seen.borrow(), vec![EventKind::SelectionCleared]);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second"] {
            let sink = Rc::clone(&seen);
            bus.on(EventKind::SelectionCleared, move |_| sink.borrow_mut().push(tag));
        }
        bus.emit(&CanvasEvent::SelectionCleared);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_off_removes_handler() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let sink = Rc::clone(&count);
        let id = bus.on(EventKind::SelectionCleared, move |_| *sink.borrow_mut() += 1);

        bus.emit(&CanvasEvent::SelectionCleared);
        assert!(bus.off(id));
        assert!(!bus.off(id));
        bus.emit(&CanvasEvent::SelectionCleared);

        assert_eq!(*count.borrow(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_event_names() {
        let names: Vec<_> = EventKind::ALL.iter().map(EventKind::name).collect();
        assert_eq!(
            names,
            vec![
                "object:added",
                "object:scaling",
                "selection:created",
                "selection:updated",
                "selection:cleared"
            ]
        );
    }
}
