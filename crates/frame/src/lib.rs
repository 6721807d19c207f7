//! Frame data types for the frame-relay ecosystem.
//!
//! This crate provides the `Frame` and `FrameFormat` types shared by the
//! relay and stream crates, plus the `log`-facade logger implementations
//! used by binaries.

pub mod error;
pub mod format;
pub mod frame;
pub mod logging;

pub use error::FrameError;
pub use format::FrameFormat;
pub use frame::Frame;
pub use logging::{StdoutLogger, init_stdout_logger};
