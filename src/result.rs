use indexmap::IndexSet;

/// Per-request outcome of policy evaluation, consumed by the header composer.
///
/// Produced fresh for every request and immutable once built. An unmatched
/// decision carries no values at all; composing it yields no headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsDecision {
    pub matched: bool,
    /// The exact literal to echo as `Access-Control-Allow-Origin`. This is
    /// the wildcard token only when the policy itself is the wildcard.
    pub allow_origin: Option<String>,
    pub allow_credentials: bool,
    pub allow_methods: Option<IndexSet<String>>,
}

impl CorsDecision {
    pub(crate) fn unmatched() -> Self {
        Self::default()
    }
}
