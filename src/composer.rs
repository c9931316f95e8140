use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::result::CorsDecision;

/// Turn a policy decision into the CORS response headers.
///
/// Pure and deterministic: an unmatched decision composes to an empty
/// collection, and a header with no value in the decision is simply absent,
/// never emitted empty.
pub fn compose(decision: &CorsDecision) -> HeaderCollection {
    let mut headers = HeaderCollection::new();
    if !decision.matched {
        return headers;
    }

    if let Some(value) = &decision.allow_origin {
        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.clone());
    }
    if decision.allow_credentials {
        headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }
    if let Some(methods) = &decision.allow_methods
        && !methods.is_empty()
    {
        let value = methods
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, value);
    }

    headers
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;
