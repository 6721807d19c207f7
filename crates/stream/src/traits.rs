use crate::{SourceConfig, StreamError};
use frame::{Frame, FrameFormat};

/// Blocking producer contract for a transport+decode collaborator.
///
/// Implementations run on a dedicated worker thread owned by `Capture`.
/// `open` must return the format the source actually negotiated; every
/// payload from `blocking_capture` is expected to match it for the rest
/// of the session.
pub trait FrameSource: Send {
    /// Open the source, returning the negotiated frame format.
    fn open(&mut self, config: &SourceConfig) -> Result<FrameFormat, StreamError>;

    /// Capture one frame payload, blocking until it is available.
    fn blocking_capture(&mut self) -> Result<Vec<u8>, StreamError>;

    /// Close the source, if open.
    fn close(&mut self);
}

/// Async consumer contract for frame delivery.
///
/// Sinks own any re-encoding (e.g., to a still-image format) and
/// persistence or transmission.
#[allow(async_fn_in_trait)]
pub trait FrameSink {
    /// Deliver one frame to the sink.
    async fn deliver(&mut self, frame: &Frame) -> Result<(), StreamError>;
}
