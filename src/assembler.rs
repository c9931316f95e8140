use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::response::{ApplicationResponse, OutgoingResponse};

/// Merge CORS headers with the application's own response into the final
/// outgoing header set.
///
/// CORS headers come first, application headers are layered on top, and
/// `Content-Type` is always taken from the application response.
/// `Content-Length` is recomputed from the actual body here, never trusted
/// from caller input. Total over well-formed inputs; performs no I/O.
pub fn assemble(
    cors_headers: HeaderCollection,
    response: &dyn ApplicationResponse,
) -> OutgoingResponse {
    let mut headers = cors_headers;
    headers.extend(response.headers());
    headers.set(header::CONTENT_TYPE, response.content_type());

    let body = response.content().to_vec();
    let mut length = itoa::Buffer::new();
    headers.set(header::CONTENT_LENGTH, length.format(body.len()));

    OutgoingResponse {
        status: response.status(),
        headers,
        body,
    }
}

#[cfg(test)]
#[path = "assembler_test.rs"]
mod assembler_test;
