use std::fmt;

/// Pixel layout of a capture session, fixed at negotiation time.
///
/// All frames of a session share one format; the payload is tightly packed
/// HWC, so a frame holds exactly `byte_len()` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameFormat {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl FrameFormat {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Packed RGB, 3 channels.
    pub fn rgb(width: usize, height: usize) -> Self {
        Self::new(width, height, 3)
    }

    /// Payload size in bytes of one frame in this format.
    pub fn byte_len(&self) -> usize {
        self.width * self.height * self.channels
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}
