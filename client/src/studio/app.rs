use std::cell::RefCell;
use std::rc::Rc;

use common::{CameraStudio, CaptureStream, RequestOutcome, StreamRequest, StudioConfig, StudioView};
use wasm_bindgen::prelude::*;
use web_sys::{Document, File};

use crate::studio::canvas_renderer::CanvasRenderer;
use crate::studio::download::AnchorDownloader;
use crate::studio::media_streams::{self, BrowserStream};
use crate::studio::ui::UiController;
use crate::studio::upload;

pub struct AppState {
    pub studio: CameraStudio<BrowserStream>,
    pub ui: UiController,
    renderer: CanvasRenderer,
    downloader: AnchorDownloader,
}

pub type SharedState = Rc<RefCell<AppState>>;

impl AppState {
    pub fn new(document: &Document, config: StudioConfig) -> Result<SharedState, JsValue> {
        let ui = UiController::new(document)?;
        let renderer = CanvasRenderer::new(ui.canvas.clone(), ui.video.clone());
        let downloader = AnchorDownloader::new(document.clone());
        let studio = CameraStudio::new(config, media_streams::media_supported());

        Ok(Rc::new(RefCell::new(Self {
            studio,
            ui,
            renderer,
            downloader,
        })))
    }

    pub fn render(&self) {
        let view = StudioView::from_studio(&self.studio);
        if let Err(e) = self.ui.render(&view) {
            log::warn!("Render failed: {:?}", e);
        }
    }

    pub fn capture(&mut self) {
        match self.studio.capture(&self.renderer) {
            Ok(Some(photo)) => log::info!("Captured {} bytes", photo.encoded_len()),
            Ok(None) => log::debug!("Capture ignored, camera not streaming"),
            Err(e) => log::error!("Capture failed: {}", e),
        }
        self.render();
    }

    pub fn download(&self) {
        let timestamp_ms = js_sys::Date::now() as u64;
        match self.studio.download(&self.downloader, timestamp_ms) {
            Ok(Some(_)) => {}
            Ok(None) => log::debug!("Download ignored, no photo"),
            Err(e) => log::error!("Download failed: {}", e),
        }
    }

    pub fn retake(&mut self) {
        self.studio.clear_photo();
        self.render();
    }

    pub fn unmount(&mut self) {
        self.studio.unmount();
        self.render();
    }
}

/// Runs a stream request issued by the studio: asks the browser for the
/// camera, plays it in the preview and reports back.
pub fn run_stream_request(state: &SharedState, request: Option<StreamRequest>) {
    state.borrow().render();

    let request = match request {
        Some(r) => r,
        None => return,
    };

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = acquire_stream(&state, &request).await;

        let mut app = state.borrow_mut();
        if app.studio.complete_request(request, result) == RequestOutcome::Attached {
            log::info!("Camera streaming ({})", app.studio.facing().display_name());
        }
        app.render();
    });
}

async fn acquire_stream(state: &SharedState, request: &StreamRequest) -> Result<BrowserStream, String> {
    let stream = media_streams::get_camera_stream(&request.constraints)
        .await
        .map_err(|e| media_streams::error_message(&e))?;

    let (current, video) = {
        let app = state.borrow();
        (app.studio.is_current(request), app.ui.video.clone())
    };
    let stream = BrowserStream::new(stream, video);

    // Superseded while the permission prompt was open: let the studio stop it
    if !current {
        return Ok(stream);
    }

    if let Err(e) = stream.attach().await {
        stream.stop();
        return Err(media_streams::error_message(&e));
    }
    Ok(stream)
}

/// Reads an uploaded file and stores it as the current photo, unless a
/// newer capture or upload got there first.
pub fn run_upload(state: &SharedState, file: File) {
    let ticket = state.borrow_mut().studio.begin_upload();
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = upload::read_image_file(&file).await;

        let mut app = state.borrow_mut();
        match result {
            Ok(decoded) => {
                match app.studio.apply_upload(ticket, decoded.data_url, decoded.width, decoded.height) {
                    Ok(Some(_)) => log::info!("Upload stored ({} bytes)", decoded.size),
                    Ok(None) => log::debug!("Upload of '{}' superseded", file.name()),
                    Err(e) => log::warn!("Upload rejected: {}", e),
                }
            }
            Err(e) => log::warn!("Could not read '{}': {:?}", file.name(), e),
        }
        app.ui.reset_upload();
        app.render();
    });
}
