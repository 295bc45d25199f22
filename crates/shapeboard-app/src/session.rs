//! A mounted canvas: host plus the registry mirroring it.

use crate::panel::ShapePanel;
use shapeboard_core::{
    BindingState, CanvasConfig, CanvasHost, HostError, IdGenerator, RegistryError, RenderTarget,
    ShapeRegistry, SurfaceError, UuidIds,
};
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Ties one canvas host to the registry that feeds the side panel.
#[derive(Debug)]
pub struct Session {
    host: CanvasHost,
    registry: ShapeRegistry,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Session {
    /// Create a session with random shape ids.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_ids(config, UuidIds)
    }

    /// Create a session with a specific id generator.
    pub fn with_ids(config: CanvasConfig, ids: impl IdGenerator + 'static) -> Self {
        Self {
            host: CanvasHost::new(config, ids),
            registry: ShapeRegistry::new(),
        }
    }

    /// Attach to a render target and start mirroring.
    ///
    /// Safe to call repeatedly: the surface is built once and the registry
    /// is bound at most once. Returns whether the registry is bound.
    pub fn mount(&mut self, target: Option<RenderTarget>) -> Result<bool, SessionError> {
        self.host.initialize(target);
        if !self.host.is_initialized() {
            return Ok(false);
        }
        if !self.registry.is_bound() {
            self.registry.bind(self.host.events_mut()?)?;
            log::debug!("Session mounted");
        }
        Ok(true)
    }

    /// Stop mirroring. Mirrored state is kept for a later remount.
    pub fn unmount(&mut self) {
        if let Ok(events) = self.host.events_mut() {
            self.registry.unbind(events);
        }
    }

    /// Run deferred work, such as placing the demo content.
    pub fn tick(&mut self) -> Result<usize, SessionError> {
        Ok(self.host.tick()?)
    }

    pub fn binding_state(&self) -> BindingState {
        self.registry.binding_state()
    }

    pub fn host(&self) -> &CanvasHost {
        &self.host
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Select shapes by id, as a click or marquee on the canvas would.
    pub fn select<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), SessionError> {
        let surface = self.host.surface_mut().ok_or(HostError::NoSurface)?;
        surface.select(ids);
        Ok(())
    }

    /// Scale one shape, as dragging a corner handle would.
    pub fn scale(&mut self, id: &str, scale_x: f64, scale_y: f64) -> Result<(), SessionError> {
        let surface = self.host.surface_mut().ok_or(HostError::NoSurface)?;
        surface.scale(id, scale_x, scale_y)?;
        Ok(())
    }

    /// Click on empty canvas.
    pub fn clear_selection(&mut self) -> Result<(), SessionError> {
        let surface = self.host.surface_mut().ok_or(HostError::NoSurface)?;
        surface.clear_selection();
        Ok(())
    }

    /// Current contents of the side panel.
    pub fn panel(&self) -> ShapePanel {
        ShapePanel::from_registry(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeboard_core::SequentialIds;

    fn session() -> Session {
        Session::with_ids(CanvasConfig::default(), SequentialIds::new("s"))
    }

    fn target() -> Option<RenderTarget> {
        Some(RenderTarget::new(600.0, 600.0))
    }

    #[test]
    fn test_mount_without_target() {
        let mut session = session();
        assert_eq!(session.mount(None), Ok(false));
        assert_eq!(session.binding_state(), BindingState::Unbound);
        assert_eq!(session.select(&["s1"]), Err(SessionError::Host(HostError::NoSurface)));
    }

    #[test]
    fn test_mount_twice_binds_once() {
        let mut session = session();
        assert_eq!(session.mount(target()), Ok(true));
        assert_eq!(session.mount(target()), Ok(true));
        session.tick().unwrap();
        assert_eq!(session.registry().all_shapes().len(), 2);
    }

    #[test]
    fn test_remount_keeps_single_handlers() {
        let mut session = session();
        session.mount(target()).unwrap();
        session.unmount();
        assert_eq!(session.binding_state(), BindingState::Unbound);
        session.mount(target()).unwrap();
        session.tick().unwrap();

        let events = session.host().events().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(session.registry().all_shapes().len(), 2);
    }

    #[test]
    fn test_gestures() {
        let mut session = session();
        session.mount(target()).unwrap();
        session.tick().unwrap();

        session.select(&["s2"]).unwrap();
        session.scale("s2", 2.0, 2.0).unwrap();
        let panel = session.panel();
        assert_eq!(panel.selected.len(), 1);
        assert_eq!(panel.selected[0].to_string(), "1.rect width: 120 height: 120");

        session.clear_selection().unwrap();
        assert!(session.panel().selected.is_empty());
        assert_eq!(
            session.scale("nope", 1.0, 1.0),
            Err(SessionError::Surface(SurfaceError::UnknownObject("nope".into())))
        );
    }
}
