use super::transport::{CapturingSink, TestResponse};
use corsgate::constants::method;
use corsgate::{
    ApplicationResponse, CorsPolicy, CorsSettings, HttpChannel, OutgoingResponse, PolicyConfig,
    RequestContext,
};

#[derive(Default)]
pub struct PolicyBuilder {
    settings: CorsSettings,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.settings.enabled = enabled;
        self
    }

    pub fn allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.settings.allowed_origin = Some(origin.into());
        self
    }

    pub fn allowed_methods(mut self, methods: impl Into<String>) -> Self {
        self.settings.allowed_methods = Some(methods.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.settings.allow_credentials = enabled;
        self
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(PolicyConfig::from_settings(&self.settings))
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// Send one GET request with the given `Origin` and `Host` through the
/// channel and return the single response the transport would have written.
pub fn exec_request_with_cors(
    policy: &CorsPolicy,
    origin: &str,
    host: &str,
) -> OutgoingResponse {
    exec_request(policy, origin, host, &TestResponse::new())
}

pub fn exec_request(
    policy: &CorsPolicy,
    origin: &str,
    host: &str,
    response: &dyn ApplicationResponse,
) -> OutgoingResponse {
    let request = RequestContext {
        method: method::GET,
        origin: Some(origin),
        host: Some(host),
    };
    let mut sink = CapturingSink::new();
    HttpChannel::new(policy).send_response(&request, response, &mut sink);
    sink.into_single()
}
