use crate::assembler::assemble;
use crate::composer::compose;
use crate::context::RequestContext;
use crate::policy::CorsPolicy;
use crate::response::{ApplicationResponse, OutgoingResponse};

/// Write capability of the surrounding transport.
///
/// The core hands each assembled response to the sink exactly once and does
/// not observe the outcome of the write; buffering, flushing, and failure
/// handling belong to the transport.
pub trait WriteSink {
    fn write(&mut self, response: OutgoingResponse);
}

/// Per-request response channel: runs the decide → compose → assemble
/// pipeline and emits the result through the transport's sink.
pub struct HttpChannel<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HttpChannel<'a> {
    pub fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn send_response(
        &self,
        request: &RequestContext<'_>,
        response: &dyn ApplicationResponse,
        sink: &mut dyn WriteSink,
    ) {
        let decision = self.policy.decide(request);
        let cors_headers = compose(&decision);
        sink.write(assemble(cors_headers, response));
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;
