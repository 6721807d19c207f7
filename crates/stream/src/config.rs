/// Configuration handed to a `FrameSource` when it opens.
///
/// Width and height are a request; the source reports what it actually
/// negotiated from `open`.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    uri: String,
    width: u32,
    height: u32,
    latency_ms: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            uri: "rtsp://127.0.0.1:554/main".to_string(),
            width: 640,
            height: 480,
            latency_ms: 0,
        }
    }
}

impl SourceConfig {
    /// Set the source address (e.g., an RTSP URI or device path).
    pub fn with_uri(mut self, uri: String) -> Self {
        self.uri = uri;
        self
    }

    /// Set the requested width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the requested height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the bounded-latency hint in milliseconds. Zero trades buffering
    /// for freshness.
    pub fn with_latency_ms(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    // Getters
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn latency_ms(&self) -> u32 {
        self.latency_ms
    }
}
