//! Drawing surface: owns the object graph and emits lifecycle events.

use crate::config::CanvasConfig;
use crate::events::{CanvasEvent, EventBus};
use crate::shapes::{SerializableColor, Shape, ShapeTrait};
use kurbo::Size;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("No object with id {0} on the surface")]
    UnknownObject(String),
}

/// Fixed-size region the surface draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    pub width: f64,
    pub height: f64,
}

impl RenderTarget {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A drawing surface bound to one render target.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    background: SerializableColor,
    lock_scaling_flip: bool,
    /// Objects in z-order (back to front).
    objects: Vec<Shape>,
    /// Indices into `objects` of the active selection.
    selection: Vec<usize>,
    events: EventBus,
    render_count: u64,
}

impl Surface {
    /// Create a surface sized to the target, styled by the config.
    pub fn new(target: RenderTarget, config: &CanvasConfig) -> Self {
        Self {
            size: target.size(),
            background: config.background,
            lock_scaling_flip: config.interaction.lock_scaling_flip,
            objects: Vec::new(),
            selection: Vec::new(),
            events: EventBus::new(),
            render_count: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn background(&self) -> SerializableColor {
        self.background
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Objects in z-order (back to front).
    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    /// Currently selected objects, in selection order.
    pub fn selection(&self) -> Vec<&Shape> {
        self.selection.iter().map(|&i| &self.objects[i]).collect()
    }

    /// Number of completed render passes.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Add shapes on top of the stack, announcing each one.
    pub fn add(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        for shape in shapes {
            self.objects.push(shape.clone());
            self.events.emit(&CanvasEvent::ObjectAdded(shape));
        }
    }

    /// Run a render pass. Pixel output belongs to the renderer.
    pub fn render_all(&mut self) {
        self.render_count += 1;
        log::trace!("Render pass {} ({} objects)", self.render_count, self.objects.len());
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|s| s.has_id(id))
    }

    /// Replace the selection with the objects carrying `ids`.
    ///
    /// Unknown ids are ignored. Selecting nothing clears the selection, and
    /// reselecting the current set emits nothing.
    pub fn select<S: AsRef<str>>(&mut self, ids: &[S]) {
        let mut next = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(index) = self.index_of(id.as_ref()) {
                if !next.contains(&index) {
                    next.push(index);
                }
            }
        }

        if next.is_empty() {
            self.clear_selection();
            return;
        }
        if next == self.selection {
            return;
        }

        let had_selection = !self.selection.is_empty();
        self.selection = next;
        let selected: Vec<Shape> = self.selection().into_iter().cloned().collect();
        let event = if had_selection {
            CanvasEvent::SelectionUpdated(selected)
        } else {
            CanvasEvent::SelectionCreated(selected)
        };
        self.events.emit(&event);
    }

    /// Drop the selection, if any.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.events.emit(&CanvasEvent::SelectionCleared);
    }

    /// Scale an object and announce its new state.
    pub fn scale(&mut self, id: &str, scale_x: f64, scale_y: f64) -> Result<(), SurfaceError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| SurfaceError::UnknownObject(id.to_string()))?;
        let (scale_x, scale_y) = if self.lock_scaling_flip {
            (scale_x.abs(), scale_y.abs())
        } else {
            (scale_x, scale_y)
        };
        let shape = &mut self.objects[index];
        shape.set_scale(scale_x, scale_y);
        let snapshot = shape.clone();
        self.events.emit(&CanvasEvent::ObjectScaling(snapshot));
        Ok(())
    }

    /// Announce scaling of a transient object that is not in the graph,
    /// such as a group wrapping a multi-selection.
    pub fn scale_transient(&mut self, mut shape: Shape, scale_x: f64, scale_y: f64) {
        shape.set_scale(scale_x, scale_y);
        self.events.emit(&CanvasEvent::ObjectScaling(shape));
    }
}
