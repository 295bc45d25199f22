//! Canvas host: owns one surface and seeds it with demo content.

use crate::config::CanvasConfig;
use crate::events::EventBus;
use crate::id::{IdGenerator, UuidIds};
use crate::shapes::{
    ApproxTextMeasure, FontWeight, Rectangle, SerializableColor, Shape, ShapeTrait, Text,
    TextMeasure,
};
use crate::surface::{RenderTarget, Surface};
use kurbo::Point;
use std::collections::VecDeque;
use thiserror::Error;

/// Content of the demo label.
pub const DEMO_TEXT: &str = "Hello, Fabric";
/// Font size of the demo label.
pub const DEMO_FONT_SIZE: f64 = 32.0;
/// Side length of the demo square.
pub const DEMO_RECT_SIZE: f64 = 60.0;

/// Host errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Canvas surface has not been initialized")]
    NoSurface,
    #[error("Demo content was already placed on this surface")]
    AlreadyPopulated,
}

/// Work deferred to the next scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    PopulateDemo,
}

/// Owns a single drawing surface and performs one-time setup.
pub struct CanvasHost {
    config: CanvasConfig,
    ids: Box<dyn IdGenerator>,
    metrics: Box<dyn TextMeasure>,
    surface: Option<Surface>,
    pending: VecDeque<DeferredTask>,
    populated: bool,
}

impl std::fmt::Debug for CanvasHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasHost")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("pending", &self.pending)
            .field("populated", &self.populated)
            .finish_non_exhaustive()
    }
}

impl Default for CanvasHost {
    fn default() -> Self {
        Self::new(CanvasConfig::default(), UuidIds)
    }
}

impl CanvasHost {
    /// Create a host. No surface exists until [`CanvasHost::initialize`].
    pub fn new(config: CanvasConfig, ids: impl IdGenerator + 'static) -> Self {
        Self {
            config,
            ids: Box::new(ids),
            metrics: Box::new(ApproxTextMeasure::default()),
            surface: None,
            pending: VecDeque::new(),
            populated: false,
        }
    }

    /// Replace the text measurement backend.
    pub fn with_text_measure(mut self, metrics: impl TextMeasure + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The render target described by the configuration.
    pub fn default_target(&self) -> RenderTarget {
        RenderTarget::new(self.config.width, self.config.height)
    }

    /// Construct the surface against `target` and schedule demo content.
    ///
    /// Returns `false` without side effects when a surface already exists
    /// or when no target is available.
    pub fn initialize(&mut self, target: Option<RenderTarget>) -> bool {
        if self.surface.is_some() {
            log::debug!("Canvas already initialized, skipping");
            return false;
        }
        let Some(target) = target else {
            log::debug!("No render target available, skipping canvas initialization");
            return false;
        };

        log::debug!("Initializing {}x{} canvas", target.width, target.height);
        self.surface = Some(Surface::new(target, &self.config));
        self.pending.push_back(DeferredTask::PopulateDemo);
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Run the tasks deferred before this call. Tasks they schedule wait for
    /// the next tick.
    pub fn tick(&mut self) -> Result<usize, HostError> {
        let due = self.pending.len();
        for _ in 0..due {
            let Some(task) = self.pending.pop_front() else {
                break;
            };
            match task {
                DeferredTask::PopulateDemo if self.populated => {
                    log::debug!("Demo content already placed, skipping deferred population");
                }
                DeferredTask::PopulateDemo => self.populate_demo_content()?,
            }
        }
        Ok(due)
    }

    /// Place the demo label and square, then render.
    ///
    /// The label is centered; the square is centered horizontally and sits
    /// below center by twice the label's height.
    pub fn populate_demo_content(&mut self) -> Result<(), HostError> {
        if self.populated {
            return Err(HostError::AlreadyPopulated);
        }
        let surface = self.surface.as_mut().ok_or(HostError::NoSurface)?;
        let canvas = surface.size();

        let mut text = Text::new(Some(self.ids.next_id()), DEMO_TEXT)
            .with_font_size(DEMO_FONT_SIZE)
            .with_font_weight(FontWeight::Bold)
            .measured(self.metrics.as_ref());
        let text_size = text.size();
        text.set_position(Point::new(
            (canvas.width - text_size.width) / 2.0,
            (canvas.height - text_size.height) / 2.0,
        ));

        let rect = Rectangle::new(
            Some(self.ids.next_id()),
            Point::new(
                (canvas.width - DEMO_RECT_SIZE) / 2.0,
                (canvas.height - DEMO_RECT_SIZE) / 2.0 + text_size.height * 2.0,
            ),
            DEMO_RECT_SIZE,
            DEMO_RECT_SIZE,
        )
        .with_fill(SerializableColor::rgba(248, 180, 26, 0.6));

        surface.add([Shape::Text(text), Shape::Rectangle(rect)]);
        surface.render_all();
        self.populated = true;
        log::debug!("Placed demo content");
        Ok(())
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    /// The surface's event stream. Only available once initialized.
    pub fn events(&self) -> Result<&EventBus, HostError> {
        self.surface.as_ref().map(Surface::events).ok_or(HostError::NoSurface)
    }

    /// Mutable access to the event stream, for subscribing.
    pub fn events_mut(&mut self) -> Result<&mut EventBus, HostError> {
        self.surface
            .as_mut()
            .map(Surface::events_mut)
            .ok_or(HostError::NoSurface)
    }
}
