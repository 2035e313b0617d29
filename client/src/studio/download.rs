use common::{PhotoSink, StudioError};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAnchorElement};

/// Saves through a synthetic click on a temporary `<a download>`.
pub struct AnchorDownloader {
    document: Document,
}

impl AnchorDownloader {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn click_link(&self, href: &str, filename: &str) -> Result<(), JsValue> {
        let a: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        a.set_href(href);
        a.set_download(filename);
        a.click();
        Ok(())
    }
}

impl PhotoSink for AnchorDownloader {
    fn save(&self, href: &str, filename: &str) -> Result<(), StudioError> {
        self.click_link(href, filename)
            .map_err(|e| StudioError::Save(super::media_streams::error_message(&e)))
    }
}
