use common::StudioView;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlImageElement,
    HtmlInputElement, HtmlVideoElement,
};

fn get_element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has unexpected type", id)))
}

/// Handles to every studio element the page renders.
#[derive(Clone)]
pub struct UiController {
    pub video: HtmlVideoElement,
    pub canvas: HtmlCanvasElement,
    pub overlay: HtmlElement,
    pub overlay_text: HtmlElement,
    pub capture_btn: HtmlButtonElement,
    pub switch_btn: HtmlButtonElement,
    pub refresh_btn: HtmlButtonElement,
    pub error_el: HtmlElement,
    pub preview_el: HtmlElement,
    pub preview_frame: HtmlElement,
    pub preview_image: HtmlImageElement,
    pub preview_caption: HtmlElement,
    pub placeholder_el: HtmlElement,
    pub download_btn: HtmlButtonElement,
    pub retake_btn: HtmlButtonElement,
    pub upload_input: HtmlInputElement,
}

impl UiController {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            video: get_element_by_id(document, "camera-video")?,
            canvas: get_element_by_id(document, "capture-canvas")?,
            overlay: get_element_by_id(document, "camera-overlay")?,
            overlay_text: get_element_by_id(document, "camera-overlay-text")?,
            capture_btn: get_element_by_id(document, "capture-photo")?,
            switch_btn: get_element_by_id(document, "switch-camera")?,
            refresh_btn: get_element_by_id(document, "refresh-camera")?,
            error_el: get_element_by_id(document, "camera-error")?,
            preview_el: get_element_by_id(document, "photo-preview")?,
            preview_frame: get_element_by_id(document, "preview-frame")?,
            preview_image: get_element_by_id(document, "preview-image")?,
            preview_caption: get_element_by_id(document, "preview-caption")?,
            placeholder_el: get_element_by_id(document, "photo-placeholder")?,
            download_btn: get_element_by_id(document, "download-photo")?,
            retake_btn: get_element_by_id(document, "retake-photo")?,
            upload_input: get_element_by_id(document, "upload-input")?,
        })
    }

    pub fn render(&self, view: &StudioView) -> Result<(), JsValue> {
        self.capture_btn.set_disabled(!view.capture_enabled);
        self.switch_btn.set_disabled(!view.switch_enabled);
        self.refresh_btn.set_disabled(!view.refresh_enabled);
        self.switch_btn.set_title(view.switch_label);

        match view.overlay {
            Some(text) => {
                self.overlay_text.set_text_content(Some(text));
                self.overlay.set_hidden(false);
            }
            None => self.overlay.set_hidden(true),
        }

        match &view.error {
            Some(message) => {
                self.error_el.set_text_content(Some(message));
                self.error_el.set_hidden(false);
            }
            None => {
                self.error_el.set_text_content(None);
                self.error_el.set_hidden(true);
            }
        }

        match &view.preview {
            Some(preview) => {
                // Data URLs can be megabytes long; skip the reassignment when unchanged
                if self.preview_image.src() != preview.src {
                    self.preview_image.set_src(&preview.src);
                }
                self.preview_frame
                    .style()
                    .set_property("aspect-ratio", &preview.aspect_ratio)?;
                self.preview_caption.set_text_content(Some(&preview.caption));
                self.preview_el.set_hidden(false);
                self.placeholder_el.set_hidden(true);
            }
            None => {
                self.preview_image.remove_attribute("src")?;
                self.preview_frame
                    .style()
                    .set_property("aspect-ratio", view.aspect_ratio())?;
                self.preview_el.set_hidden(true);
                self.placeholder_el.set_hidden(false);
            }
        }

        Ok(())
    }

    /// Clears the file input so picking the same file again still fires
    /// `change`.
    pub fn reset_upload(&self) {
        self.upload_input.set_value("");
    }
}
