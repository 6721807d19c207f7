use crate::{FrameSource, SourceConfig, StreamError};
use frame::{Frame, FrameFormat};
use relay::FrameRelay;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::task::{JoinHandle, spawn_blocking};

// delay before reconnecting after a capture failure
const WAIT_BEFORE_RECONNECT_MS: u64 = 100;

/// Running capture session: a `FrameSource` pumping frames through a
/// `FrameRelay` from its own worker thread.
///
/// The source is opened on the worker thread (some backends have thread
/// affinity requirements), the negotiated format is reported back, and
/// the relay is created from it. The session format is fixed: a source
/// that renegotiates a different format after a reconnect stops the
/// worker instead of relabeling buffers.
pub struct Capture {
    relay: FrameRelay,
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
    config: SourceConfig,
}

impl Capture {
    /// Open the source and start pumping frames.
    pub async fn start(
        source: Box<dyn FrameSource>,
        config: SourceConfig,
    ) -> Result<Self, StreamError> {
        let cancel = Arc::new(AtomicBool::new(false));

        // The worker sends back a relay handle built from the negotiated
        // format once the source is open.
        let (init_tx, init_rx) = tokio::sync::oneshot::channel::<Result<FrameRelay, StreamError>>();

        let join_handle = spawn_blocking({
            let cancel = Arc::clone(&cancel);
            let config = config.clone();
            let mut source = source;
            move || {
                let format = match source.open(&config) {
                    Ok(format) => format,
                    Err(e) => {
                        let _ = init_tx.send(Err(e));
                        return;
                    }
                };

                let relay = FrameRelay::new(format);
                if init_tx.send(Ok(relay.clone())).is_err() {
                    source.close();
                    return;
                }

                Self::pump(source.as_mut(), &relay, &config, format, &cancel);

                source.close();
                relay.close();
            }
        });

        let relay = init_rx
            .await
            .map_err(|_| StreamError::Channel("worker thread died during init".to_string()))??;

        Ok(Self {
            relay,
            cancel,
            join_handle: Some(join_handle),
            config,
        })
    }

    /// Worker loop: capture frames until cancelled, reconnecting after
    /// capture failures.
    fn pump(
        source: &mut dyn FrameSource,
        relay: &FrameRelay,
        config: &SourceConfig,
        format: FrameFormat,
        cancel: &AtomicBool,
    ) {
        let mut seq: u64 = 0;

        'session: while !cancel.load(Ordering::Relaxed) {
            log::info!("capture worker: starting capture loop");
            while !cancel.load(Ordering::Relaxed) {
                match source.blocking_capture() {
                    Ok(data) => {
                        seq += 1;
                        let frame = match Frame::new(format, seq, data) {
                            Ok(frame) => frame,
                            Err(e) => {
                                log::error!("capture worker: bad frame payload: {}", e);
                                break;
                            }
                        };
                        if let Err(e) = relay.publish(frame) {
                            log::error!("capture worker: publish rejected: {}", e);
                            break 'session;
                        }
                        if relay.is_closed() {
                            break 'session;
                        }
                    }
                    Err(e) => {
                        log::error!("capture worker: capture failed: {}", e);
                        break;
                    }
                }
            }

            // close, wait, and reopen the source
            while !cancel.load(Ordering::Relaxed) {
                log::info!("capture worker: reconnecting...");
                source.close();
                std::thread::sleep(std::time::Duration::from_millis(WAIT_BEFORE_RECONNECT_MS));
                match source.open(config) {
                    Ok(new_format) if new_format == format => break,
                    Ok(new_format) => {
                        log::error!(
                            "capture worker: source renegotiated {} mid-session, expected {}",
                            new_format,
                            format
                        );
                        break 'session;
                    }
                    // if open fails, just stay in the loop
                    Err(_) => {}
                }
            }
        }
    }

    /// Format negotiated by the source for this session.
    pub fn format(&self) -> FrameFormat {
        self.relay.format()
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Clone of the relay handle, for handing to a consumer context.
    pub fn relay(&self) -> FrameRelay {
        self.relay.clone()
    }

    /// Take the most recent unread frame without waiting.
    pub fn latest(&self) -> Option<Frame> {
        self.relay.consume()
    }

    /// Wait for the next frame; `None` once the session has stopped.
    pub async fn recv(&self) -> Option<Frame> {
        self.relay.recv().await
    }

    /// Stop the session: close the relay, tell the source to stop feeding,
    /// and join the worker.
    pub async fn stop(mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        self.relay.close();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        self.relay.close();
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }
}
