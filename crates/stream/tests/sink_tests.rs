use frame::{Frame, FrameFormat};
use std::fs;
use stream::{DataUrlSink, FrameSink, JpegFileSink, StreamError, encode_jpeg};

fn gradient_frame(width: usize, height: usize, seq: u64) -> Frame {
    let format = FrameFormat::rgb(width, height);
    let mut data = Vec::with_capacity(format.byte_len());
    for y in 0..height {
        for x in 0..width {
            data.push((x % 256) as u8);
            data.push((y % 256) as u8);
            data.push(((x + y + seq as usize) % 256) as u8);
        }
    }
    Frame::new(format, seq, data).unwrap()
}

#[test]
fn test_encode_jpeg_roundtrips_dimensions() {
    let frame = gradient_frame(32, 24, 1);
    let jpeg = encode_jpeg(&frame, 90).unwrap();

    // JPEG SOI marker
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&jpeg).unwrap();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 24);
}

#[test]
fn test_encode_jpeg_rejects_non_rgb() {
    let format = FrameFormat::new(2, 2, 1);
    let frame = Frame::new(format, 1, vec![0u8; 4]).unwrap();

    match encode_jpeg(&frame, 90) {
        Err(StreamError::Encode(msg)) => assert!(msg.contains("channel count")),
        _ => panic!("Expected StreamError::Encode"),
    }
}

#[tokio::test]
async fn test_jpeg_file_sink_writes_numbered_files() {
    let dir = std::env::temp_dir().join(format!("frame-sink-test-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let mut sink = JpegFileSink::new(&dir).unwrap();
    sink.deliver(&gradient_frame(16, 16, 1)).await.unwrap();
    sink.deliver(&gradient_frame(16, 16, 2)).await.unwrap();

    assert_eq!(sink.count(), 2);

    for n in 0..2 {
        let path = dir.join(format!("frame_{}.jpg", n));
        let bytes = fs::read(&path).expect("frame file missing");
        let decoded = image::load_from_memory(&bytes).expect("frame file not decodable");
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_jpeg_file_sink_creates_directory() {
    let dir = std::env::temp_dir().join(format!("frame-sink-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let _sink = JpegFileSink::new(&dir).unwrap();
    assert!(dir.is_dir());

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_data_url_sink_holds_latest() {
    let mut sink = DataUrlSink::new();
    assert!(sink.current().is_none());

    sink.deliver(&gradient_frame(16, 16, 1)).await.unwrap();
    let first = sink.current().expect("no data URL after deliver").to_string();
    assert!(first.starts_with("data:image/jpeg;base64,"));
    assert!(first.len() > "data:image/jpeg;base64,".len());

    sink.deliver(&gradient_frame(16, 16, 50)).await.unwrap();
    let second = sink.current().expect("no data URL after second deliver");
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_data_url_sink_quality_changes_size() {
    let frame = gradient_frame(64, 64, 1);

    let mut high = DataUrlSink::new().with_quality(95);
    let mut low = DataUrlSink::new().with_quality(10);
    high.deliver(&frame).await.unwrap();
    low.deliver(&frame).await.unwrap();

    assert!(high.current().unwrap().len() > low.current().unwrap().len());
}
