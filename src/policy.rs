use crate::config::PolicyConfig;
use crate::constants::ANY_ORIGIN;
use crate::context::RequestContext;
use crate::origin::OriginResolution;
use crate::result::CorsDecision;

/// Core CORS policy engine that evaluates requests against a [`PolicyConfig`].
///
/// The engine is stateless beyond the immutable configuration, so a single
/// instance may be shared across any number of concurrent requests.
pub struct CorsPolicy {
    config: PolicyConfig,
}

impl CorsPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide whether the request's origin is authorized and which values the
    /// response must echo.
    ///
    /// With CORS disabled or no `Origin` header present, the decision is
    /// unmatched and no CORS headers are ever added. Under the wildcard
    /// policy the wildcard token itself is echoed and the credentials header
    /// is suppressed even when configured; a credentialed wildcard response
    /// must never be emitted.
    pub fn decide(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.config.enabled {
            return CorsDecision::unmatched();
        }
        let origin = match request.origin {
            Some(origin) if !origin.is_empty() => origin,
            _ => return CorsDecision::unmatched(),
        };

        let (allow_origin, allow_credentials) =
            match self.config.allowed_origin.resolve(origin, request.host) {
                OriginResolution::Unmatched => return CorsDecision::unmatched(),
                OriginResolution::Wildcard => (ANY_ORIGIN.to_owned(), false),
                OriginResolution::Literal(value) => (value, self.config.allow_credentials),
            };

        CorsDecision {
            matched: true,
            allow_origin: Some(allow_origin),
            allow_credentials,
            allow_methods: if self.config.allowed_methods.is_empty() {
                None
            } else {
                Some(self.config.allowed_methods.clone())
            },
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
