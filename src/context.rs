/// Read-only view of one inbound request. Lives for a single request and is
/// never retained by the policy engine.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub host: Option<&'a str>,
}
