use common::{FrameGrabber, StudioError};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

use common::photo::JPEG_MIME;

/// Off-screen canvas used to freeze frames of the live preview.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    video: HtmlVideoElement,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, video: HtmlVideoElement) -> Self {
        Self { canvas, video }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not 2d"))
    }

    fn draw_frame(&self, width: u32, height: u32, quality: f64) -> Result<String, JsValue> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let ctx = self.context()?;
        ctx.draw_image_with_html_video_element_and_dw_and_dh(
            &self.video,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )?;

        self.canvas
            .to_data_url_with_type_and_encoder_options(JPEG_MIME, &JsValue::from_f64(quality))
    }
}

impl FrameGrabber for CanvasRenderer {
    fn native_size(&self) -> (u32, u32) {
        (self.video.video_width(), self.video.video_height())
    }

    fn encode_jpeg(&self, width: u32, height: u32, quality: f64) -> Result<String, StudioError> {
        self.draw_frame(width, height, quality)
            .map_err(|e| StudioError::Encode(super::media_streams::error_message(&e)))
    }
}
