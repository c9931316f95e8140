use crate::headers::HeaderCollection;

/// Response produced by the application layer, before CORS headers and
/// transport-computed headers are layered in.
pub trait ApplicationResponse {
    fn status(&self) -> u16;
    fn content_type(&self) -> &str;
    fn content(&self) -> &[u8];
    /// Custom headers the application has already populated.
    fn headers(&self) -> &HeaderCollection;
}

/// Final response handed to the transport for a single write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    pub status: u16,
    pub headers: HeaderCollection,
    pub body: Vec<u8>,
}
