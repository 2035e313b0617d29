use crate::photo::DEFAULT_ASPECT_RATIO;
use crate::platform::CaptureStream;
use crate::studio::CameraStudio;

pub const STARTING_CAMERA: &str = "Starting camera…";
pub const GRANT_PERMISSION: &str = "Grant permission to start the camera.";

/// Everything the page needs to draw the studio, computed from studio state.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioView {
    pub capture_enabled: bool,
    pub switch_enabled: bool,
    pub refresh_enabled: bool,
    /// Text over the video while there is no live preview
    pub overlay: Option<&'static str>,
    pub error: Option<String>,
    pub switch_label: &'static str,
    pub preview: Option<PreviewView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub src: String,
    pub aspect_ratio: String,
    pub caption: String,
}

impl StudioView {
    pub fn from_studio<S: CaptureStream>(studio: &CameraStudio<S>) -> Self {
        let loading = studio.is_loading();
        let streaming = studio.is_streaming();

        let overlay = match (streaming, loading) {
            (true, _) => None,
            (false, true) => Some(STARTING_CAMERA),
            (false, false) => Some(GRANT_PERMISSION),
        };

        let switch_label = match studio.facing().toggled() {
            crate::facing::FacingMode::User => "Use front camera",
            crate::facing::FacingMode::Environment => "Use back camera",
        };

        let preview = studio.photo().map(|photo| PreviewView {
            src: photo.data_url.clone(),
            aspect_ratio: photo.aspect_ratio(),
            caption: format!("{} · {}×{}", photo.source.as_str(), photo.width, photo.height),
        });

        Self {
            capture_enabled: streaming && !loading,
            switch_enabled: !loading,
            refresh_enabled: !loading,
            overlay,
            error: studio.error().map(str::to_string),
            switch_label,
            preview,
        }
    }

    /// Aspect ratio for the preview pane, including the empty state.
    pub fn aspect_ratio(&self) -> &str {
        self.preview
            .as_ref()
            .map(|p| p.aspect_ratio.as_str())
            .unwrap_or(DEFAULT_ASPECT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioConfig;
    use crate::testing::{FakeCamera, FakeStream};

    fn studio() -> CameraStudio<FakeStream> {
        CameraStudio::new(StudioConfig::default(), true)
    }

    #[test]
    fn test_idle_view() {
        let view = StudioView::from_studio(&studio());
        assert!(!view.capture_enabled);
        assert!(view.switch_enabled);
        assert_eq!(view.overlay, Some(GRANT_PERMISSION));
        assert_eq!(view.switch_label, "Use front camera");
        assert!(view.preview.is_none());
        assert_eq!(view.aspect_ratio(), "3 / 4");
    }

    #[test]
    fn test_loading_view_disables_controls() {
        let mut studio = studio();
        studio.mount().unwrap();
        let view = StudioView::from_studio(&studio);
        assert!(!view.capture_enabled);
        assert!(!view.switch_enabled);
        assert!(!view.refresh_enabled);
        assert_eq!(view.overlay, Some(STARTING_CAMERA));
    }

    #[test]
    fn test_streaming_view() {
        let camera = FakeCamera::new();
        let mut studio = studio();
        let request = studio.mount().unwrap();
        studio.complete_request(request, Ok(camera.open()));

        let view = StudioView::from_studio(&studio);
        assert!(view.capture_enabled);
        assert!(view.switch_enabled);
        assert_eq!(view.overlay, None);
        assert_eq!(view.error, None);
    }

    #[test]
    fn test_denied_view_keeps_capture_disabled() {
        let mut studio = studio();
        let request = studio.mount().unwrap();
        studio.complete_request(request, Err("Permission denied".to_string()));

        let view = StudioView::from_studio(&studio);
        assert!(!view.capture_enabled);
        assert!(view.refresh_enabled);
        assert_eq!(view.error.as_deref(), Some("Permission denied"));
        assert_eq!(view.overlay, Some(GRANT_PERMISSION));
    }

    #[test]
    fn test_preview_view() {
        let mut studio = studio();
        let ticket = studio.begin_upload();
        studio
            .apply_upload(ticket, "data:image/jpeg;base64,AA==".to_string(), 800, 600)
            .unwrap();

        let view = StudioView::from_studio(&studio);
        let preview = view.preview.as_ref().unwrap();
        assert_eq!(preview.src, "data:image/jpeg;base64,AA==");
        assert_eq!(preview.aspect_ratio, "800 / 600");
        assert_eq!(preview.caption, "upload · 800×600");
        assert_eq!(view.aspect_ratio(), "800 / 600");
    }

    #[test]
    fn test_switch_label_follows_facing() {
        let mut studio = studio();
        studio.mount();
        studio.toggle_facing();
        assert_eq!(StudioView::from_studio(&studio).switch_label, "Use back camera");
    }
}
