use crate::config::StudioConfig;
use crate::constraints::StreamConstraints;
use crate::error::{stream_error_message, StudioError};
use crate::facing::FacingMode;
use crate::photo::{download_filename, CapturedPhoto, PhotoSource, UploadTicket};
use crate::platform::{CaptureStream, FrameGrabber, PhotoSink};
use crate::stream::{RequestOutcome, StreamPhase, StreamRequest};

/// State of the camera studio: the one owner of the capture stream and of
/// the stored photo.
///
/// Stream acquisition is split into [`CameraStudio::request_stream`], which
/// hands out a [`StreamRequest`] ticket, and
/// [`CameraStudio::complete_request`], which consumes it together with the
/// platform's answer. Whatever runs the asynchronous part in between (a
/// browser promise, a thread, a test) sees the same transitions. Uploads
/// follow the same pattern with [`CameraStudio::begin_upload`] and
/// [`CameraStudio::apply_upload`].
pub struct CameraStudio<S: CaptureStream> {
    config: StudioConfig,
    media_supported: bool,
    mounted: bool,
    facing: FacingMode,
    phase: StreamPhase,
    stream: Option<S>,
    photo: Option<CapturedPhoto>,
    next_request_id: u64,
    pending_request: Option<u64>,
    photo_generation: u64,
}

impl<S: CaptureStream> CameraStudio<S> {
    pub fn new(config: StudioConfig, media_supported: bool) -> Self {
        let facing = config.default_facing;
        Self {
            config,
            media_supported,
            mounted: false,
            facing,
            phase: StreamPhase::Idle,
            stream: None,
            photo: None,
            next_request_id: 0,
            pending_request: None,
            photo_generation: 0,
        }
    }

    /// Starts the studio and, when the host has a camera API, requests the
    /// first stream.
    pub fn mount(&mut self) -> Option<StreamRequest> {
        self.mounted = true;
        if !self.media_supported {
            log::warn!("Camera API not available, studio running without live preview");
            return None;
        }
        self.request_stream()
    }

    /// Tears the studio down. The stream is always released and any request
    /// still in flight becomes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending_request = None;
        self.release_stream();
        self.phase = StreamPhase::Idle;
        log::info!("Camera studio unmounted");
    }

    /// Stops the current stream and issues a ticket for a new one with the
    /// current facing mode. Returns `None` when no request can be made
    /// (no camera API, or not mounted).
    pub fn request_stream(&mut self) -> Option<StreamRequest> {
        if !self.media_supported || !self.mounted {
            return None;
        }

        self.release_stream();
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.pending_request = Some(id);
        self.phase = StreamPhase::Requesting;

        log::info!("Requesting {} stream (request #{})", self.facing.as_str(), id);

        Some(StreamRequest {
            id,
            constraints: StreamConstraints::for_facing(self.facing, &self.config),
        })
    }

    /// Whether `request` is still the one the studio is waiting for.
    pub fn is_current(&self, request: &StreamRequest) -> bool {
        self.mounted && self.pending_request == Some(request.id)
    }

    /// Applies the platform's answer to `request`. Stale answers never touch
    /// state; a stale stream is stopped on the spot.
    pub fn complete_request(&mut self, request: StreamRequest, result: Result<S, String>) -> RequestOutcome {
        if !self.is_current(&request) {
            if let Ok(stream) = result {
                stream.stop();
            }
            log::debug!("Dropping superseded stream request #{}", request.id);
            return RequestOutcome::Superseded;
        }

        self.pending_request = None;
        match result {
            Ok(stream) => {
                self.release_stream();
                self.stream = Some(stream);
                self.phase = StreamPhase::Streaming;
                log::info!("Stream request #{} attached", request.id);
                RequestOutcome::Attached
            }
            Err(raw) => {
                let message = stream_error_message(Some(raw));
                log::warn!("Stream request #{} failed: {}", request.id, message);
                self.phase = StreamPhase::Error(message);
                RequestOutcome::Failed
            }
        }
    }

    /// Stops the stream (if any) and returns to `Idle`. Idempotent.
    pub fn stop_stream(&mut self) {
        self.pending_request = None;
        self.release_stream();
        self.phase = StreamPhase::Idle;
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
            log::info!("Camera stream stopped");
        }
    }

    /// Switches to `facing`. A change restarts the stream; setting the mode
    /// already in use does nothing.
    pub fn set_facing(&mut self, facing: FacingMode) -> Option<StreamRequest> {
        if facing == self.facing {
            return None;
        }
        self.facing = facing;
        log::info!("Switched to {}", facing.display_name());
        self.request_stream()
    }

    pub fn toggle_facing(&mut self) -> Option<StreamRequest> {
        self.set_facing(self.facing.toggled())
    }

    /// Freezes the current frame at its native resolution. Does nothing
    /// (returns `Ok(None)`) unless a stream is live.
    pub fn capture<G: FrameGrabber>(&mut self, grabber: &G) -> Result<Option<&CapturedPhoto>, StudioError> {
        if !self.phase.is_streaming() {
            return Ok(None);
        }

        let (width, height) = grabber.native_size();
        if width == 0 || height == 0 {
            return Err(StudioError::EmptyFrame { width, height });
        }

        let data_url = grabber.encode_jpeg(width, height, self.config.jpeg_quality)?;
        log::info!("Captured {}x{} frame", width, height);
        self.photo_generation += 1;
        self.photo = Some(CapturedPhoto::new(data_url, width, height, PhotoSource::Capture));
        Ok(self.photo.as_ref())
    }

    /// Marks the start of an upload. The returned ticket supersedes any
    /// upload still being read.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.photo_generation += 1;
        UploadTicket {
            id: self.photo_generation,
        }
    }

    /// Stores an uploaded image with its decoded intrinsic size. Independent
    /// of the camera. Returns `Ok(None)` when a newer capture, upload or
    /// clear happened since `ticket` was issued.
    pub fn apply_upload(
        &mut self,
        ticket: UploadTicket,
        data_url: String,
        width: u32,
        height: u32,
    ) -> Result<Option<&CapturedPhoto>, StudioError> {
        if ticket.id != self.photo_generation {
            log::debug!("Dropping superseded upload #{}", ticket.id);
            return Ok(None);
        }
        if width == 0 || height == 0 {
            return Err(StudioError::Decode(format!(
                "uploaded image has no intrinsic size ({}x{})",
                width, height
            )));
        }
        log::info!("Uploaded {}x{} image", width, height);
        Ok(Some(&*self
            .photo
            .insert(CapturedPhoto::new(data_url, width, height, PhotoSource::Upload))))
    }

    /// Hands the stored photo to `sink` as `<prefix>-<timestamp_ms>.jpeg`.
    /// Returns the file name, or `None` when there is nothing to save.
    pub fn download<P: PhotoSink>(&self, sink: &P, timestamp_ms: u64) -> Result<Option<String>, StudioError> {
        let photo = match &self.photo {
            Some(photo) => photo,
            None => return Ok(None),
        };
        let filename = download_filename(&self.config.filename_prefix, timestamp_ms);
        sink.save(&photo.data_url, &filename)?;
        log::info!("Saved photo as {}", filename);
        Ok(Some(filename))
    }

    /// Discards the stored photo. The stream is left alone.
    pub fn clear_photo(&mut self) {
        self.photo_generation += 1;
        self.photo = None;
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn media_supported(&self) -> bool {
        self.media_supported
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    pub fn phase(&self) -> &StreamPhase {
        &self.phase
    }

    pub fn is_streaming(&self) -> bool {
        self.phase.is_streaming()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.phase.error()
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    pub fn photo(&self) -> Option<&CapturedPhoto> {
        self.photo.as_ref()
    }
}

impl<S: CaptureStream> Drop for CameraStudio<S> {
    fn drop(&mut self) {
        self.release_stream();
    }
}
