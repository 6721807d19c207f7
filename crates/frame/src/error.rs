use crate::FrameFormat;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Payload length disagrees with the declared format.
    Length { expected: usize, actual: usize },
    /// Frame format disagrees with the session format.
    Format {
        expected: FrameFormat,
        actual: FrameFormat,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Length { expected, actual } => {
                write!(f, "payload length error: expected {expected} bytes, got {actual}")
            }
            FrameError::Format { expected, actual } => {
                write!(f, "format error: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for FrameError {}
