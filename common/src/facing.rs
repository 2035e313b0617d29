use serde::{Deserialize, Serialize};

/// Which physical camera a stream request prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FacingMode {
    #[serde(rename = "user", alias = "front")]
    User, // Front camera
    #[default]
    #[serde(rename = "environment", alias = "back")]
    Environment, // Back camera
}

impl FacingMode {
    /// Value expected by `MediaTrackConstraints.facingMode`
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacingMode::User => "Front camera",
            FacingMode::Environment => "Back camera",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}
