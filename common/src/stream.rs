use crate::constraints::StreamConstraints;

/// Lifecycle of the camera stream.
///
/// `Idle -> Requesting -> Streaming`, `Requesting -> Error`, and any state
/// back to `Idle` on stop. Loading and streaming are read off this single
/// value so they can never both be true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamPhase {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Error(String),
}

impl StreamPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, StreamPhase::Requesting)
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self, StreamPhase::Streaming)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StreamPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamPhase::Idle => "idle",
            StreamPhase::Requesting => "requesting",
            StreamPhase::Streaming => "streaming",
            StreamPhase::Error(_) => "error",
        }
    }
}

/// Ticket for one stream attempt. Only the most recently issued ticket can
/// change studio state; older ones are stale.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamRequest {
    pub id: u64,
    pub constraints: StreamConstraints,
}

/// What happened to a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Stream attached, studio is streaming
    Attached,
    /// Request failed, studio shows the error
    Failed,
    /// A newer request was issued (or the studio was unmounted) while this
    /// one was pending; any stream it produced has been stopped
    Superseded,
}
