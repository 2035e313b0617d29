pub mod config;
pub mod constraints;
pub mod error;
pub mod facing;
pub mod photo;
pub mod platform;
pub mod stream;
pub mod studio;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::StudioConfig;
pub use constraints::StreamConstraints;
pub use error::{stream_error_message, StudioError, CAMERA_ACCESS_FAILED};
pub use facing::FacingMode;
pub use photo::{download_filename, encode_data_url, CapturedPhoto, PhotoSource, UploadTicket};
pub use platform::{CaptureStream, FrameGrabber, PhotoSink};
pub use stream::{RequestOutcome, StreamPhase, StreamRequest};
pub use studio::CameraStudio;
pub use view::{PreviewView, StudioView};
