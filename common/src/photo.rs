use base64::{engine::general_purpose::STANDARD, Engine as _};
/// MIME type produced by frame captures.
pub const JPEG_MIME: &str = "image/jpeg";

/// Aspect ratio used for the preview pane before dimensions are known.
pub const DEFAULT_ASPECT_RATIO: &str = "3 / 4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Capture,
    Upload,
}

impl PhotoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSource::Capture => "capture",
            PhotoSource::Upload => "upload",
        }
    }
}

/// Handed out when an upload starts. Only the newest ticket may store its
/// image; any later capture, upload or clear makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub id: u64,
}

/// A stored photo. The image data and its pixel size only ever travel
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPhoto {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub source: PhotoSource,
}

impl CapturedPhoto {
    pub fn new(data_url: String, width: u32, height: u32, source: PhotoSource) -> Self {
        Self {
            data_url,
            width,
            height,
            source,
        }
    }

    /// CSS `aspect-ratio` value for the preview pane
    pub fn aspect_ratio(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return DEFAULT_ASPECT_RATIO.to_string();
        }
        format!("{} / {}", self.width, self.height)
    }

    /// Size of the encoded image in bytes, without decoding the payload.
    pub fn encoded_len(&self) -> usize {
        match split_data_url(&self.data_url) {
            Some((true, payload)) => {
                let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
                ((payload.len() / 4) * 3).saturating_sub(padding.min(2))
            }
            Some((false, payload)) => payload.len(),
            None => 0,
        }
    }
}

/// Encodes raw bytes as a self-contained `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        "application/octet-stream"
    } else {
        mime.trim()
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Splits a `data:` URL into its base64 flag and raw payload.
fn split_data_url(url: &str) -> Option<(bool, &str)> {
    let (header, payload) = url.strip_prefix("data:")?.split_once(',')?;
    let is_base64 = header.split(';').skip(1).any(|p| p.eq_ignore_ascii_case("base64"));
    Some((is_base64, payload))
}

/// File name offered when saving a photo: `<prefix>-<timestamp_ms>.jpeg`.
pub fn download_filename(prefix: &str, timestamp_ms: u64) -> String {
    format!("{}-{}.jpeg", prefix, timestamp_ms)
}
