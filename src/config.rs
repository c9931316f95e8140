use crate::origin::OriginSpec;
use crate::settings::CorsSettings;
use crate::util::is_http_token;
use indexmap::IndexSet;

/// Immutable parsed CORS policy configuration.
///
/// Built once per server instance from [`CorsSettings`] and shared read-only
/// by every request afterwards. Parsing is total: malformed input degrades to
/// an empty policy instead of producing an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub enabled: bool,
    pub allowed_origin: OriginSpec,
    pub allowed_methods: IndexSet<String>,
    pub allow_credentials: bool,
}

impl PolicyConfig {
    pub fn from_settings(settings: &CorsSettings) -> Self {
        Self {
            enabled: settings.enabled,
            allowed_origin: OriginSpec::parse(settings.allowed_origin.as_deref()),
            allowed_methods: parse_methods(settings.allowed_methods.as_deref()),
            allow_credentials: settings.allow_credentials,
        }
    }
}

/// Split the raw comma-separated method list into an ordered set.
///
/// Tokens are trimmed and upper-cased; duplicates keep their first position.
/// Entries that are not valid HTTP tokens are dropped.
fn parse_methods(raw: Option<&str>) -> IndexSet<String> {
    let Some(raw) = raw else {
        return IndexSet::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|token| is_http_token(token))
        .map(|token| token.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
