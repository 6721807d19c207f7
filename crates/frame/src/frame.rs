use crate::{FrameError, FrameFormat};

/// One decoded image: an immutable byte payload tagged with its format and
/// a monotonically increasing sequence number.
///
/// Sequence numbers are assigned by the producer; a consumer that sees a
/// gap between consecutive frames knows intermediate frames were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    format: FrameFormat,
    seq: u64,
    data: Vec<u8>,
}

impl Frame {
    /// Build a frame, validating the payload length against the format.
    pub fn new(format: FrameFormat, seq: u64, data: Vec<u8>) -> Result<Self, FrameError> {
        if data.len() != format.byte_len() {
            return Err(FrameError::Length {
                expected: format.byte_len(),
                actual: data.len(),
            });
        }
        Ok(Self { format, seq, data })
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame, returning the raw payload.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
