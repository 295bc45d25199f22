//! WebAssembly entry point and browser bindings.

use crate::{AppConfig, Session};
use shapeboard_core::RenderTarget;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Look up the `<canvas>` element and size it to the configured target.
fn find_target(config: &AppConfig) -> Option<RenderTarget> {
    let document = web_sys::window()?.document()?;
    let canvas = document
        .get_element_by_id(&config.canvas_element_id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()?;
    let target = config.render_target();
    canvas.set_width(target.width as u32);
    canvas.set_height(target.height as u32);
    Some(target)
}

/// Run deferred session work on the next event-loop turn.
fn schedule_tick() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(|| {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                if let Err(e) = session.tick() {
                    log::warn!("Deferred canvas work failed: {e}");
                }
            }
        });
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
        .is_err()
    {
        log::warn!("Failed to schedule deferred canvas work");
    }
}

/// Initialize and mount the canvas session.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    let config = AppConfig::default();
    log::info!("Starting {} (WASM)", config.title);

    let target = find_target(&config);
    if target.is_none() {
        log::info!("No <canvas id=\"{}\"> found", config.canvas_element_id);
    }

    let mut session = Session::new(config.canvas);
    match session.mount(target) {
        Ok(true) => {
            SESSION.with(|cell| *cell.borrow_mut() = Some(session));
            schedule_tick();
        }
        Ok(false) => {}
        Err(e) => log::error!("Failed to mount canvas: {e}"),
    }
}

/// Text of the shape panel, for the page to display.
#[wasm_bindgen]
pub fn shape_panel_text() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|session| session.panel().to_string())
            .unwrap_or_default()
    })
}

/// Select shapes by id.
#[wasm_bindgen]
pub fn select_shapes(ids: Vec<String>) {
    with_session(|session| session.select(&ids));
}

/// Scale a shape by id.
#[wasm_bindgen]
pub fn scale_shape(id: &str, scale_x: f64, scale_y: f64) {
    with_session(|session| session.scale(id, scale_x, scale_y));
}

/// Clear the current selection.
#[wasm_bindgen]
pub fn clear_selection() {
    with_session(Session::clear_selection);
}

fn with_session(f: impl FnOnce(&mut Session) -> Result<(), crate::SessionError>) {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            if let Err(e) = f(session) {
                log::warn!("{e}");
            }
        }
    });
}
