use thiserror::Error;

/// Fallback shown when a failed stream request carries no usable message.
pub const CAMERA_ACCESS_FAILED: &str = "Camera access failed. Please check permissions.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudioError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Frame encoding failed: {0}")]
    Encode(String),

    #[error("Image decoding failed: {0}")]
    Decode(String),

    #[error("Saving photo failed: {0}")]
    Save(String),

    #[error("Frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },
}

/// Turns whatever the platform reported for a failed stream request into
/// the text shown to the user.
pub fn stream_error_message(raw: Option<String>) -> String {
    match raw {
        Some(message) if !message.trim().is_empty() => message,
        _ => CAMERA_ACCESS_FAILED.to_string(),
    }
}
