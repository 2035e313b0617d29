//! Boundaries between the studio core and the host environment. The browser
//! client implements these with web-sys types; tests use in-memory fakes.

use crate::error::StudioError;

/// A live camera feed held open until stopped.
pub trait CaptureStream {
    /// Stops every track of the feed and detaches it from any preview.
    /// Must be safe to call more than once.
    fn stop(&self);
}

/// Source of still frames from the live preview.
pub trait FrameGrabber {
    /// Native pixel size of the current video frame.
    fn native_size(&self) -> (u32, u32);

    /// Draws the current frame onto a `width` x `height` surface and returns
    /// it as a JPEG `data:` URL.
    fn encode_jpeg(&self, width: u32, height: u32, quality: f64) -> Result<String, StudioError>;
}

/// Client-side "save as" primitive.
pub trait PhotoSink {
    fn save(&self, href: &str, filename: &str) -> Result<(), StudioError>;
}
