//! Latest-wins frame hand-off for the frame-relay ecosystem.
//!
//! This crate provides `FrameRelay`, a single-slot channel between a
//! blocking producer (decode thread) and an async consumer. A new frame
//! always supersedes an unread one, so the producer never waits on the
//! consumer and the consumer never sees a backlog.

pub mod relay;

pub use relay::FrameRelay;
