//! Camera studio: live preview, capture, upload and download in the browser

pub mod app;
pub mod canvas_renderer;
pub mod config;
pub mod download;
pub mod events;
pub mod media_streams;
pub mod shell;
pub mod ui;
pub mod upload;

pub use app::{AppState, SharedState};
