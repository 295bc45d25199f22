//! Shapeboard Core Library
//!
//! Platform-agnostic shape model, canvas host and shape registry.

pub mod config;
pub mod events;
pub mod host;
pub mod id;
pub mod listing;
pub mod registry;
pub mod shapes;
pub mod surface;

pub use config::{CanvasConfig, ConfigError, ControlsVisibility, CornerStyle, InteractionDefaults};
pub use events::{CanvasEvent, EventBus, EventKind, SubscriptionId};
pub use host::{CanvasHost, DeferredTask, HostError};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use listing::{ShapeRow, rows};
pub use registry::{BindingState, RegistryError, RegistryState, ShapeRegistry};
pub use shapes::{Shape, ShapeId, ShapeKind, ShapeTrait};
pub use surface::{RenderTarget, Surface, SurfaceError};
