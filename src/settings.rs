/// Raw CORS transport settings, as read from whatever configuration source
/// the surrounding server uses.
///
/// Values are kept verbatim; parsing and normalization happen once, when a
/// [`PolicyConfig`](crate::PolicyConfig) is built from them. Defaults match
/// an unconfigured transport: CORS disabled, no allow-list, no methods, no
/// credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsSettings {
    /// Whether CORS processing is enabled at all.
    pub enabled: bool,
    /// Raw allowed-origin value: a literal origin or the wildcard token.
    pub allowed_origin: Option<String>,
    /// Raw comma-separated method list.
    pub allowed_methods: Option<String>,
    /// Whether credentialed responses are allowed.
    pub allow_credentials: bool,
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
