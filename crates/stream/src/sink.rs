use crate::{FrameSink, StreamError};
use base64::Engine;
use frame::Frame;
use image::{ExtendedColorType, ImageEncoder, codecs::jpeg::JpegEncoder};
use std::fs;
use std::path::PathBuf;

const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode a packed RGB frame as JPEG.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, StreamError> {
    let format = frame.format();
    if format.channels != 3 {
        return Err(StreamError::Encode(format!(
            "unsupported channel count: {}",
            format.channels
        )));
    }

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            frame.data(),
            format.width as u32,
            format.height as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| StreamError::Encode(e.to_string()))?;

    Ok(buffer)
}

/// Writes each delivered frame as `frame_{n}.jpg` under a directory.
pub struct JpegFileSink {
    dir: PathBuf,
    quality: u8,
    count: usize,
}

impl JpegFileSink {
    /// Create the sink, creating the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StreamError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            quality: DEFAULT_JPEG_QUALITY,
            count: 0,
        })
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Number of frames written so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl FrameSink for JpegFileSink {
    async fn deliver(&mut self, frame: &Frame) -> Result<(), StreamError> {
        let jpeg = encode_jpeg(frame, self.quality)?;
        let path = self.dir.join(format!("frame_{}.jpg", self.count));
        fs::write(&path, jpeg)?;
        log::info!("saved frame seq {} to {}", frame.seq(), path.display());
        self.count += 1;
        Ok(())
    }
}

/// Keeps the most recent frame as a base64 JPEG data URL.
pub struct DataUrlSink {
    quality: u8,
    current: Option<String>,
}

impl DataUrlSink {
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            current: None,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// The latest delivered frame as `data:image/jpeg;base64,...`, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Default for DataUrlSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for DataUrlSink {
    async fn deliver(&mut self, frame: &Frame) -> Result<(), StreamError> {
        let jpeg = encode_jpeg(frame, self.quality)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&jpeg);
        self.current = Some(format!("data:image/jpeg;base64,{encoded}"));
        Ok(())
    }
}
