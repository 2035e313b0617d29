use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::studio::app::{self, SharedState};

fn on_click<F>(element: &web_sys::HtmlElement, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handler();
    }) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn register_event_listeners(state: &SharedState) -> Result<(), JsValue> {
    let ui = state.borrow().ui.clone();

    let s = state.clone();
    on_click(&ui.capture_btn, move || s.borrow_mut().capture())?;

    let s = state.clone();
    on_click(&ui.switch_btn, move || {
        let request = s.borrow_mut().studio.toggle_facing();
        app::run_stream_request(&s, request);
    })?;

    let s = state.clone();
    on_click(&ui.refresh_btn, move || {
        let request = s.borrow_mut().studio.request_stream();
        app::run_stream_request(&s, request);
    })?;

    let s = state.clone();
    on_click(&ui.download_btn, move || s.borrow().download())?;

    let s = state.clone();
    on_click(&ui.retake_btn, move || s.borrow_mut().retake())?;

    setup_upload_input(state)?;
    setup_pagehide(state)?;

    Ok(())
}

fn setup_upload_input(state: &SharedState) -> Result<(), JsValue> {
    let input = state.borrow().ui.upload_input.clone();
    let s = state.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let file = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            app::run_upload(&s, file);
        }
    }) as Box<dyn FnMut(_)>);

    input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Leaving the page releases the camera; coming back from the back/forward
/// cache mounts the studio again.
fn setup_pagehide(state: &SharedState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;

    let s = state.clone();
    let hide = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Ok(mut app) = s.try_borrow_mut() {
            app.unmount();
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("pagehide", hide.as_ref().unchecked_ref())?;
    hide.forget();

    let s = state.clone();
    let show = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let request = match s.try_borrow_mut() {
            Ok(mut app) if !app.studio.is_mounted() => app.studio.mount(),
            _ => return,
        };
        app::run_stream_request(&s, request);
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("pageshow", show.as_ref().unchecked_ref())?;
    show.forget();

    Ok(())
}
