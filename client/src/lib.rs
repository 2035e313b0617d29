use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod studio;

use studio::{app, config, events, media_streams, shell, AppState, SharedState};

thread_local! {
    static APP_STATE: RefCell<Option<SharedState>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("MemoryPhoto client initialized");
}

/// Renders the page and mounts the camera studio.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let supported = media_streams::media_supported();
    shell::render_page(&document, supported)?;

    if !supported {
        log::warn!("MediaDevices API missing, showing fallback notice");
        return Ok(());
    }

    let config = config::load_config(&document);
    let state = AppState::new(&document, config)?;
    events::register_event_listeners(&state)?;

    let request = state.borrow_mut().studio.mount();
    app::run_stream_request(&state, request);

    APP_STATE.with(|slot| *slot.borrow_mut() = Some(state));
    log::info!("Camera studio mounted");
    Ok(())
}

/// Releases the camera. Safe to call repeatedly or before `start`.
#[wasm_bindgen]
pub fn shutdown() {
    APP_STATE.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            state.borrow_mut().unmount();
        }
    });
}
