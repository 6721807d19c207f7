use frame::init_stdout_logger;
use std::time::Duration;
use stream::{Capture, DataUrlSink, FrameSink, PatternSource, SourceConfig};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const POLL_INTERVAL_MS: u64 = 500;
const MAX_UPDATES: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    println!("Latest frame");
    println!("Polling the newest frame every {}ms", POLL_INTERVAL_MS);
    println!("Controls: Ctrl-C to stop early");
    println!();

    let config = SourceConfig::default()
        .with_width(WIDTH as u32)
        .with_height(HEIGHT as u32);
    let source = PatternSource::new(WIDTH, HEIGHT).with_pace(Duration::from_millis(33));

    let capture = Capture::start(Box::new(source), config).await?;
    println!("Negotiated format: {}", capture.format());

    let mut sink = DataUrlSink::new();
    let mut updates = 0;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)) => {
                // Only act on the most recent frame; superseded ones are gone
                let Some(frame) = capture.latest() else { continue };
                sink.deliver(&frame).await?;
                if let Some(url) = sink.current() {
                    println!(
                        "Current frame: seq {}, data URL {} chars ({}...)",
                        frame.seq(),
                        url.len(),
                        &url[..40]
                    );
                }
                updates += 1;
                if updates >= MAX_UPDATES {
                    println!("Reached maximum update count, stopping...");
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Interrupted, stopping...");
                break;
            }
        }
    }

    capture.stop().await;
    Ok(())
}
