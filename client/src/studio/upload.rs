use common::encode_data_url;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlImageElement};

/// A user-picked image, read into memory and measured.
pub struct DecodedUpload {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub size: usize,
}

pub async fn read_image_file(file: &File) -> Result<DecodedUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let data_url = encode_data_url(&file.type_(), &bytes);
    let (width, height) = decode_dimensions(&data_url).await?;

    log::debug!("Read '{}' ({} bytes, {})", file.name(), bytes.len(), file.type_());

    Ok(DecodedUpload {
        data_url,
        width,
        height,
        size: bytes.len(),
    })
}

/// Intrinsic size of the image behind `src`, as the browser decodes it.
async fn decode_dimensions(src: &str) -> Result<(u32, u32), JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    JsFuture::from(img.decode()).await?;
    Ok((img.natural_width(), img.natural_height()))
}
