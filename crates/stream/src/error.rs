use frame::FrameError;
use std::fmt;

#[derive(Debug)]
pub enum StreamError {
    Source(String),
    Sink(String),
    Encode(String),
    Frame(FrameError),
    Channel(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Source(msg) => write!(f, "source error: {msg}"),
            StreamError::Sink(msg) => write!(f, "sink error: {msg}"),
            StreamError::Encode(msg) => write!(f, "encode error: {msg}"),
            StreamError::Frame(err) => write!(f, "frame error: {err}"),
            StreamError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Sink(err.to_string())
    }
}

impl From<FrameError> for StreamError {
    fn from(err: FrameError) -> Self {
        StreamError::Frame(err)
    }
}

impl From<image::ImageError> for StreamError {
    fn from(err: image::ImageError) -> Self {
        StreamError::Encode(err.to_string())
    }
}
