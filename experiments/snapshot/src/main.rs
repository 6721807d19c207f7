use frame::init_stdout_logger;
use std::time::Duration;
use stream::{Capture, FrameSink, JpegFileSink, PatternSource, SourceConfig};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const MAX_FRAMES: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    println!("Snapshot");
    println!("Saving {} frames to ./frames", MAX_FRAMES);
    println!("Controls: Ctrl-C to stop early");
    println!();

    let config = SourceConfig::default()
        .with_width(WIDTH as u32)
        .with_height(HEIGHT as u32);
    let source = PatternSource::new(WIDTH, HEIGHT).with_pace(Duration::from_millis(33));

    let capture = Capture::start(Box::new(source), config).await?;
    println!("Negotiated format: {}", capture.format());

    let mut sink = JpegFileSink::new("frames")?;

    loop {
        tokio::select! {
            frame = capture.recv() => {
                let Some(frame) = frame else { break };
                println!("Received frame of size: {} bytes", frame.data().len());
                sink.deliver(&frame).await?;
                println!("Saved frame {} as JPEG", sink.count() - 1);
                if sink.count() >= MAX_FRAMES {
                    println!("Reached maximum frame count, stopping...");
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
