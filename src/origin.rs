use crate::constants::ANY_ORIGIN;
use crate::util::strip_scheme;

/// Parsed allowed-origin policy.
///
/// The raw configuration value is either empty (no allow-list), the reserved
/// wildcard token, or a single literal origin. Lists and patterns are not
/// supported at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginSpec {
    /// No allow-list configured; only the same-host fallback applies.
    #[default]
    None,
    /// The wildcard token: any origin is allowed.
    Any,
    /// A single literal origin, compared byte-exact against the request.
    Exact(String),
}

/// Outcome of resolving a request origin against an [`OriginSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OriginResolution {
    /// The origin is not authorized; no CORS headers are emitted.
    Unmatched,
    /// Authorized via the wildcard policy; the wildcard token itself is echoed.
    Wildcard,
    /// Authorized; the literal value to echo back.
    Literal(String),
}

impl OriginSpec {
    /// Parse the raw configured value. Absent or empty input degrades to
    /// [`OriginSpec::None`] rather than failing.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => OriginSpec::None,
            Some(value) if value.is_empty() => OriginSpec::None,
            Some(value) if value == ANY_ORIGIN => OriginSpec::Any,
            Some(value) => OriginSpec::Exact(value.to_owned()),
        }
    }

    /// Resolve a request's `Origin` (and `Host`, for the same-host fallback)
    /// against this policy.
    ///
    /// Exact matching is byte-exact with no normalization, and the echoed
    /// value is always the literal origin the client sent. With no allow-list
    /// configured, an origin whose scheme-stripped form equals the `Host`
    /// header verbatim is treated as same-origin and matched; port suffixes
    /// are part of the comparison.
    pub(crate) fn resolve(&self, origin: &str, host: Option<&str>) -> OriginResolution {
        match self {
            OriginSpec::Any => OriginResolution::Wildcard,
            OriginSpec::Exact(value) => {
                if origin == value {
                    OriginResolution::Literal(origin.to_owned())
                } else {
                    OriginResolution::Unmatched
                }
            }
            OriginSpec::None => match host {
                Some(host) if !host.is_empty() && strip_scheme(origin) == host => {
                    OriginResolution::Literal(origin.to_owned())
                }
                _ => OriginResolution::Unmatched,
            },
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
