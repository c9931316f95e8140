pub mod constants;

mod assembler;
mod channel;
mod composer;
mod config;
mod context;
mod headers;
mod origin;
mod policy;
mod response;
mod result;
mod settings;
mod util;

pub use assembler::assemble;
pub use channel::{HttpChannel, WriteSink};
pub use composer::compose;
pub use config::PolicyConfig;
pub use context::RequestContext;
pub use headers::HeaderCollection;
pub use origin::OriginSpec;
pub use policy::CorsPolicy;
pub use response::{ApplicationResponse, OutgoingResponse};
pub use result::CorsDecision;
pub use settings::CorsSettings;
