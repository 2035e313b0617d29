use serde::{Deserialize, Serialize};

use crate::error::StudioError;
use crate::facing::FacingMode;

/// Tunables for the camera studio. Every field has a default so a partial
/// (or missing) config block is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Preferred capture width in pixels (advisory, the device may differ)
    #[serde(default = "default_ideal_width")]
    pub ideal_width: u32,

    /// Preferred capture height in pixels (advisory)
    #[serde(default = "default_ideal_height")]
    pub ideal_height: u32,

    /// JPEG quality passed to the canvas encoder, in (0, 1]
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: f64,

    #[serde(default)]
    pub default_facing: FacingMode,

    /// Downloads are saved as `<prefix>-<timestamp>.jpeg`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

fn default_ideal_width() -> u32 {
    1920
}

fn default_ideal_height() -> u32 {
    1080
}

fn default_jpeg_quality() -> f64 {
    0.92
}

fn default_filename_prefix() -> String {
    "memory".to_string()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            ideal_width: default_ideal_width(),
            ideal_height: default_ideal_height(),
            jpeg_quality: default_jpeg_quality(),
            default_facing: FacingMode::default(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        let config: StudioConfig =
            serde_json::from_str(json).map_err(|e| StudioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StudioError> {
        if self.ideal_width == 0 || self.ideal_height == 0 {
            return Err(StudioError::Config(format!(
                "ideal resolution must be non-zero, got {}x{}",
                self.ideal_width, self.ideal_height
            )));
        }
        if !(self.jpeg_quality > 0.0 && self.jpeg_quality <= 1.0) {
            return Err(StudioError::Config(format!(
                "jpeg_quality must be in (0, 1], got {}",
                self.jpeg_quality
            )));
        }
        let prefix = self.filename_prefix.trim();
        if prefix.is_empty() || prefix.contains(|c| c == '/' || c == '\\') {
            return Err(StudioError::Config(format!(
                "invalid filename_prefix '{}'",
                self.filename_prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.ideal_width, 1920);
        assert_eq!(config.ideal_height, 1080);
        assert_eq!(config.jpeg_quality, 0.92);
        assert_eq!(config.default_facing, FacingMode::Environment);
        assert_eq!(config.filename_prefix, "memory");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = StudioConfig::from_json(r#"{"default_facing": "user", "jpeg_quality": 0.8}"#).unwrap();
        assert_eq!(config.default_facing, FacingMode::User);
        assert_eq!(config.jpeg_quality, 0.8);
        assert_eq!(config.ideal_width, 1920);
        assert_eq!(config.filename_prefix, "memory");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(StudioConfig::from_json("{}").unwrap(), StudioConfig::default());
    }

    #[test]
    fn test_rejects_bad_quality() {
        let err = StudioConfig::from_json(r#"{"jpeg_quality": 1.5}"#).unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
        assert!(StudioConfig::from_json(r#"{"jpeg_quality": 0}"#).is_err());
    }

    #[test]
    fn test_rejects_path_in_prefix() {
        assert!(StudioConfig::from_json(r#"{"filename_prefix": "../evil"}"#).is_err());
        assert!(StudioConfig::from_json(r#"{"filename_prefix": ""}"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            StudioConfig::from_json("{not json"),
            Err(StudioError::Config(_))
        ));
    }
}
