use corsgate::{ApplicationResponse, HeaderCollection, OutgoingResponse, WriteSink};

/// Stand-in for the transport connection: records every response the channel
/// writes instead of putting it on a socket.
#[derive(Default)]
pub struct CapturingSink {
    written: Vec<OutgoingResponse>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[OutgoingResponse] {
        &self.written
    }

    pub fn into_single(mut self) -> OutgoingResponse {
        assert_eq!(self.written.len(), 1, "expected exactly one written response");
        self.written.remove(0)
    }
}

impl WriteSink for CapturingSink {
    fn write(&mut self, response: OutgoingResponse) {
        self.written.push(response);
    }
}

pub struct TestResponse {
    status: u16,
    content_type: String,
    body: Vec<u8>,
    headers: HeaderCollection,
}

impl TestResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            content_type: "text".into(),
            body: Vec::new(),
            headers: HeaderCollection::new(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }
}

impl Default for TestResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationResponse for TestResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn content(&self) -> &[u8] {
        &self.body
    }

    fn headers(&self) -> &HeaderCollection {
        &self.headers
    }
}
