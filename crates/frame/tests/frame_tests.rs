use frame::{Frame, FrameError, FrameFormat};

#[test]
fn test_format_byte_len() {
    let format = FrameFormat::rgb(640, 480);
    assert_eq!(format.width, 640);
    assert_eq!(format.height, 480);
    assert_eq!(format.channels, 3);
    assert_eq!(format.byte_len(), 640 * 480 * 3);
}

#[test]
fn test_format_display() {
    let format = FrameFormat::rgb(640, 480);
    assert_eq!(format.to_string(), "640x480x3");
}

#[test]
fn test_frame_new_valid() {
    let format = FrameFormat::rgb(4, 2);
    let frame = Frame::new(format, 7, vec![0u8; 24]).unwrap();

    assert_eq!(frame.format(), format);
    assert_eq!(frame.seq(), 7);
    assert_eq!(frame.data().len(), 24);
}

#[test]
fn test_frame_new_short_payload() {
    let format = FrameFormat::rgb(4, 2);
    let result = Frame::new(format, 0, vec![0u8; 23]);

    match result {
        Err(FrameError::Length { expected, actual }) => {
            assert_eq!(expected, 24);
            assert_eq!(actual, 23);
        }
        _ => panic!("Expected FrameError::Length"),
    }
}

#[test]
fn test_frame_new_empty_payload() {
    let format = FrameFormat::rgb(2, 2);
    assert!(Frame::new(format, 0, Vec::new()).is_err());
}

#[test]
fn test_frame_into_data() {
    let format = FrameFormat::new(2, 1, 3);
    let data = vec![1, 2, 3, 4, 5, 6];
    let frame = Frame::new(format, 1, data.clone()).unwrap();

    assert_eq!(frame.into_data(), data);
}

#[test]
fn test_error_display() {
    let length_err = FrameError::Length {
        expected: 24,
        actual: 12,
    };
    assert!(length_err.to_string().contains("24"));
    assert!(length_err.to_string().contains("12"));

    let format_err = FrameError::Format {
        expected: FrameFormat::rgb(640, 480),
        actual: FrameFormat::rgb(320, 240),
    };
    assert!(format_err.to_string().contains("640x480x3"));
    assert!(format_err.to_string().contains("320x240x3"));
}

#[test]
fn test_frame_send_sync() {
    // Frames cross the producer/consumer thread boundary
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Frame>();
}
