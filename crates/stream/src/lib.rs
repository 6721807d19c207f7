//! Capture pipeline layer for the frame-relay ecosystem.
//!
//! This crate connects a blocking `FrameSource` (the external
//! transport/decode collaborator) to async consumers through a
//! `FrameRelay`, with explicit start/stop lifecycle, and provides sink
//! adapters for JPEG files and data URLs.

pub mod capture;
pub mod config;
pub mod error;
pub mod pattern;
pub mod sink;
pub mod traits;

pub use capture::Capture;
pub use config::SourceConfig;
pub use error::StreamError;
pub use pattern::PatternSource;
pub use sink::{DataUrlSink, JpegFileSink, encode_jpeg};
pub use traits::{FrameSink, FrameSource};
