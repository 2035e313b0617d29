use common::{CaptureStream, StreamConstraints};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// Whether the browser exposes `navigator.mediaDevices.getUserMedia` at all.
/// Old browsers and insecure origins leave `mediaDevices` undefined.
pub fn media_supported() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };

    let media_devices = match js_sys::Reflect::get(&window.navigator(), &"mediaDevices".into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return false,
    };

    js_sys::Reflect::get(&media_devices, &"getUserMedia".into())
        .map(|f| f.is_function())
        .unwrap_or(false)
}

pub async fn get_camera_stream(constraints: &StreamConstraints) -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let media_devices = window.navigator().media_devices()?;

    let constraints_js = constraints.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    let constraints: MediaStreamConstraints = constraints_js.unchecked_into();

    let promise = media_devices.get_user_media_with_constraints(&constraints)?;
    let stream_js = JsFuture::from(promise).await?;
    Ok(MediaStream::from(stream_js))
}

pub fn stop_stream(stream: &MediaStream) {
    let tracks = stream.get_tracks();
    for i in 0..tracks.length() {
        let track = MediaStreamTrack::from(tracks.get(i));
        track.stop();
    }
}

/// Message carried by a rejected promise. Empty when there is none.
pub fn error_message(error: &JsValue) -> String {
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    error.as_string().unwrap_or_default()
}

/// A camera stream bound to the preview element it plays in.
pub struct BrowserStream {
    stream: MediaStream,
    video: HtmlVideoElement,
}

impl BrowserStream {
    pub fn new(stream: MediaStream, video: HtmlVideoElement) -> Self {
        Self { stream, video }
    }

    /// Attaches the stream to the preview and waits for playback to start.
    pub async fn attach(&self) -> Result<(), JsValue> {
        self.video.set_src_object(Some(&self.stream));
        JsFuture::from(self.video.play()?).await?;
        log::debug!("Preview playing at {}x{}", self.video.video_width(), self.video.video_height());
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.video
            .src_object()
            .map(|current| current.id() == self.stream.id())
            .unwrap_or(false)
    }
}

impl CaptureStream for BrowserStream {
    fn stop(&self) {
        stop_stream(&self.stream);
        // A newer stream may already own the preview
        if self.is_attached() {
            self.video.set_src_object(None);
        }
    }
}
