use crate::{FrameSource, SourceConfig, StreamError};
use frame::FrameFormat;
use std::time::Duration;

/// Synthetic RGB source producing a moving gradient.
///
/// Stands in for the external transport/decode collaborator in
/// experiments and tests. Like a real device, it negotiates its own
/// output size and ignores the requested one when they differ.
pub struct PatternSource {
    width: usize,
    height: usize,
    pace: Duration,
    counter: u64,
    open: bool,
}

impl PatternSource {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pace: Duration::ZERO,
            counter: 0,
            open: false,
        }
    }

    /// Sleep this long before each frame, simulating a frame interval.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }
}

impl FrameSource for PatternSource {
    fn open(&mut self, config: &SourceConfig) -> Result<FrameFormat, StreamError> {
        if self.width == 0 || self.height == 0 {
            return Err(StreamError::Source("pattern source has zero size".to_string()));
        }
        if config.width() as usize != self.width || config.height() as usize != self.height {
            log::info!(
                "pattern source: requested {}x{}, negotiated {}x{}",
                config.width(),
                config.height(),
                self.width,
                self.height
            );
        }
        self.open = true;
        Ok(FrameFormat::rgb(self.width, self.height))
    }

    fn blocking_capture(&mut self) -> Result<Vec<u8>, StreamError> {
        if !self.open {
            return Err(StreamError::Source("pattern source not open".to_string()));
        }
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }

        let t = self.counter as usize;
        self.counter += 1;

        let mut data = Vec::with_capacity(self.width * self.height * 3);
        for y in 0..self.height {
            for x in 0..self.width {
                data.push(((x + t) % 256) as u8);
                data.push((y % 256) as u8);
                data.push(((x + y + t) % 256) as u8);
            }
        }
        Ok(data)
    }

    fn close(&mut self) {
        self.open = false;
    }
}
