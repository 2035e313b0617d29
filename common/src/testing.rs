//! In-memory stand-ins for the browser boundaries.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::StudioError;
use crate::photo::{encode_data_url, JPEG_MIME};
use crate::platform::{CaptureStream, FrameGrabber, PhotoSink};

/// Hands out streams and counts how many are still running.
#[derive(Clone, Default)]
pub struct FakeCamera {
    active: Rc<Cell<usize>>,
    stop_calls: Rc<Cell<usize>>,
}

impl FakeCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> FakeStream {
        self.active.set(self.active.get() + 1);
        FakeStream {
            stopped: Rc::new(Cell::new(false)),
            camera: self.clone(),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }

    /// Number of streams stopped. Repeated stops of one stream count once.
    pub fn stop_calls(&self) -> usize {
        self.stop_calls.get()
    }
}

#[derive(Clone)]
pub struct FakeStream {
    stopped: Rc<Cell<bool>>,
    camera: FakeCamera,
}

impl FakeStream {
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl CaptureStream for FakeStream {
    fn stop(&self) {
        if !self.stopped.replace(true) {
            self.camera.active.set(self.camera.active.get() - 1);
            self.camera.stop_calls.set(self.camera.stop_calls.get() + 1);
        }
    }
}

pub struct FakeFrame {
    width: u32,
    height: u32,
    encode_calls: Cell<usize>,
    last_quality: Cell<Option<f64>>,
    last_size: Cell<Option<(u32, u32)>>,
}

impl FakeFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            encode_calls: Cell::new(0),
            last_quality: Cell::new(None),
            last_size: Cell::new(None),
        }
    }

    pub fn encode_calls(&self) -> usize {
        self.encode_calls.get()
    }

    pub fn last_quality(&self) -> Option<f64> {
        self.last_quality.get()
    }

    pub fn last_size(&self) -> Option<(u32, u32)> {
        self.last_size.get()
    }
}

impl FrameGrabber for FakeFrame {
    fn native_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn encode_jpeg(&self, width: u32, height: u32, quality: f64) -> Result<String, StudioError> {
        self.encode_calls.set(self.encode_calls.get() + 1);
        self.last_quality.set(Some(quality));
        self.last_size.set(Some((width, height)));
        Ok(encode_data_url(JPEG_MIME, &[0xff, 0xd8, 0xff, 0xd9]))
    }
}

#[derive(Default)]
pub struct FakeSink {
    saved: RefCell<Vec<(String, String)>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(href, filename)` pairs in save order
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.borrow().clone()
    }
}

impl PhotoSink for FakeSink {
    fn save(&self, href: &str, filename: &str) -> Result<(), StudioError> {
        self.saved
            .borrow_mut()
            .push((href.to_string(), filename.to_string()));
        Ok(())
    }
}
