//! Shapeboard Application
//!
//! Application shell: mounts a canvas session and reports the shape panel.

mod config;
mod panel;
mod session;

pub use config::{AppConfig, AppConfigError};
pub use panel::ShapePanel;
pub use session::{Session, SessionError};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
