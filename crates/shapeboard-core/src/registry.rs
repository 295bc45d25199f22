//! Shape registry: a read-side mirror of a surface's objects and selection.
//!
//! The registry never touches the surface. It only listens to the surface's
//! events and keeps its own copies of the reported shapes:
//!
//! - `object:added` appends to the shape list (duplicates are kept)
//! - `object:scaling` replaces the first entry with the same id
//! - `selection:created` / `selection:updated` replace the selected ids
//! - `selection:cleared` empties the selected ids

use crate::events::{CanvasEvent, EventBus, EventKind, SubscriptionId};
use crate::shapes::{Shape, ShapeId, ShapeTrait};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry is already bound to an event stream")]
    AlreadyBound,
}

/// Subscription lifecycle of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound,
}

/// Mirrored shape state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryState {
    all_shapes: Vec<Shape>,
    selected_ids: Vec<ShapeId>,
    dropped_updates: usize,
}

impl RegistryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: &CanvasEvent) {
        match event {
            CanvasEvent::ObjectAdded(shape) => self.all_shapes.push(shape.clone()),
            CanvasEvent::ObjectScaling(shape) => self.replace(shape),
            CanvasEvent::SelectionCreated(shapes) | CanvasEvent::SelectionUpdated(shapes) => {
                self.selected_ids = shapes
                    .iter()
                    .filter_map(|s| s.id().map(str::to_owned))
                    .collect();
            }
            CanvasEvent::SelectionCleared => self.selected_ids.clear(),
        }
    }

    fn replace(&mut self, shape: &Shape) {
        let Some(id) = shape.id() else {
            self.dropped_updates += 1;
            log::warn!(
                "Dropping scaling update for {} without an id ({:.1}x{:.1})",
                shape.kind(),
                shape.scaled_width(),
                shape.scaled_height()
            );
            return;
        };
        match self.all_shapes.iter_mut().find(|s| s.has_id(id)) {
            Some(entry) => *entry = shape.clone(),
            None => log::debug!("Scaling update for unknown shape {id}"),
        }
    }

    /// All known shapes, in the order they were added.
    pub fn all_shapes(&self) -> &[Shape] {
        &self.all_shapes
    }

    /// Selected ids, in the order the last selection event reported them.
    pub fn selected_ids(&self) -> &[ShapeId] {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|selected| selected == id)
    }

    /// Shapes whose id is selected, in `all_shapes` order.
    pub fn selected_shapes(&self) -> Vec<&Shape> {
        self.all_shapes
            .iter()
            .filter(|s| s.id().is_some_and(|id| self.is_selected(id)))
            .collect()
    }

    /// Scaling updates discarded because the shape had no id.
    pub fn dropped_updates(&self) -> usize {
        self.dropped_updates
    }
}

/// Keeps a [`RegistryState`] in sync with an event stream.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    state: Rc<RefCell<RegistryState>>,
    subscriptions: Vec<SubscriptionId>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every event kind on `events`.
    pub fn bind(&mut self, events: &mut EventBus) -> Result<(), RegistryError> {
        if self.is_bound() {
            return Err(RegistryError::AlreadyBound);
        }
        for kind in EventKind::ALL {
            let state = Rc::clone(&self.state);
            let id = events.on(kind, move |event| state.borrow_mut().apply(event));
            self.subscriptions.push(id);
        }
        log::debug!("Shape registry bound");
        Ok(())
    }

    /// Remove every subscription made by [`ShapeRegistry::bind`].
    ///
    /// Returns how many handlers were removed. Mirrored state is kept.
    pub fn unbind(&mut self, events: &mut EventBus) -> usize {
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|&id| events.off(id))
            .count();
        if removed > 0 {
            log::debug!("Shape registry unbound ({removed} handlers)");
        }
        removed
    }

    pub fn is_bound(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn binding_state(&self) -> BindingState {
        if self.is_bound() {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    /// Borrow the mirrored state.
    ///
    /// Release the borrow before emitting events into the bound stream.
    pub fn state(&self) -> Ref<'_, RegistryState> {
        self.state.borrow()
    }

    /// Snapshot of all shapes.
    pub fn all_shapes(&self) -> Vec<Shape> {
        self.state.borrow().all_shapes().to_vec()
    }

    /// Snapshot of the selected shapes, in `all_shapes` order.
    pub fn selected_shapes(&self) -> Vec<Shape> {
        self.state
            .borrow()
            .selected_shapes()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Snapshot of the selected ids.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.state.borrow().selected_ids().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Text};
    use kurbo::Point;

    fn text(id: &str) -> Shape {
        Text::new(Some(id.into()), "hi").into()
    }

    fn rect(id: &str) -> Shape {
        Rectangle::new(Some(id.into()), Point::ZERO, 10.0, 10.0).into()
    }

    #[test]
    fn test_added_shapes_keep_order_and_duplicates() {
        let mut state = RegistryState::new();
        for shape in [text("a"), rect("b"), text("a")] {
            state.apply(&CanvasEvent::ObjectAdded(shape));
        }
        let ids: Vec<_> = state.all_shapes().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b"), Some("a")]);
    }

    #[test]
    fn test_selection_replaces_wholesale() {
        let mut state = RegistryState::new();
        state.apply(&CanvasEvent::SelectionCreated(vec![text("a"), rect("b")]));
        state.apply(&CanvasEvent::SelectionUpdated(vec![rect("c")]));
        assert_eq!(state.selected_ids(), ["c".to_string()]);
        state.apply(&CanvasEvent::SelectionCleared);
        assert!(state.selected_ids().is_empty());
    }

    #[test]
    fn test_selected_shapes_follow_all_shapes_order() {
        let mut state = RegistryState::new();
        state.apply(&CanvasEvent::ObjectAdded(text("a")));
        state.apply(&CanvasEvent::ObjectAdded(rect("b")));
        state.apply(&CanvasEvent::SelectionCreated(vec![rect("b"), text("a")]));
        let ids: Vec<_> = state.selected_shapes().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_scaling_replaces_first_match_only() {
        let mut state = RegistryState::new();
        state.apply(&CanvasEvent::ObjectAdded(rect("a")));
        state.apply(&CanvasEvent::ObjectAdded(rect("a")));
        let mut scaled = rect("a");
        scaled.set_scale(3.0, 3.0);
        state.apply(&CanvasEvent::ObjectScaling(scaled.clone()));
        assert_eq!(state.all_shapes()[0], scaled);
        assert_eq!(state.all_shapes()[1], rect("a"));
    }

    #[test]
    fn test_scaling_without_id_is_dropped() {
        let mut state = RegistryState::new();
        state.apply(&CanvasEvent::ObjectAdded(rect("a")));
        let anonymous: Shape = Rectangle::new(None, Point::ZERO, 5.0, 5.0).into();
        state.apply(&CanvasEvent::ObjectScaling(anonymous));
        assert_eq!(state.all_shapes(), [rect("a")]);
        assert_eq!(state.dropped_updates(), 1);
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut bus = EventBus::new();
        let mut registry = ShapeRegistry::new();
        assert_eq!(registry.binding_state(), BindingState::Unbound);

        registry.bind(&mut bus).unwrap();
        assert_eq!(registry.binding_state(), BindingState::Bound);
        assert_eq!(registry.bind(&mut bus), Err(RegistryError::AlreadyBound));
        for kind in EventKind::ALL {
            assert_eq!(bus.handler_count(kind), 1);
        }

        bus.emit(&CanvasEvent::ObjectAdded(text("a")));
        assert_eq!(registry.unbind(&mut bus), 5);
        assert!(bus.is_empty());
        assert_eq!(registry.unbind(&mut bus), 0);

        bus.emit(&CanvasEvent::ObjectAdded(rect("b")));
        assert_eq!(registry.all_shapes(), vec![text("a")]);
    }

    #[test]
    fn test_rebind_does_not_duplicate_handlers() {
        let mut bus = EventBus::new();
        let mut registry = ShapeRegistry::new();
        registry.bind(&mut bus).unwrap();
        registry.unbind(&mut bus);
        registry.bind(&mut bus).unwrap();

        bus.emit(&CanvasEvent::ObjectAdded(text("a")));
        assert_eq!(registry.all_shapes().len(), 1);
        assert_eq!(bus.len(), 5);
    }
}
