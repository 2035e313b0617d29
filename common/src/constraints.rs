//! getUserMedia constraints, shaped so that serializing them yields the
//! exact object the browser expects:
//!
//! ```text
//! { "video": { "facingMode": { "ideal": "environment" },
//!              "width": { "ideal": 1920 }, "height": { "ideal": 1080 } },
//!   "audio": false }
//! ```

use serde::Serialize;

use crate::config::StudioConfig;
use crate::facing::FacingMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ideal<T> {
    pub ideal: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub facing_mode: Ideal<FacingMode>,
    pub width: Ideal<u32>,
    pub height: Ideal<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamConstraints {
    pub video: VideoConstraints,
    pub audio: bool,
}

impl StreamConstraints {
    /// Video-only request biased toward `facing` at the configured resolution.
    pub fn for_facing(facing: FacingMode, config: &StudioConfig) -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: Ideal { ideal: facing },
                width: Ideal { ideal: config.ideal_width },
                height: Ideal { ideal: config.ideal_height },
            },
            audio: false,
        }
    }

    pub fn facing(&self) -> FacingMode {
        self.video.facing_mode.ideal
    }
}
