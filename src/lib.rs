mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod http_compat;
mod origin;
mod policy;
mod response;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOrigins;
pub use config::{ConfigError, DEFAULT_CONFIG_VAR, RawList, RawPolicy, load_file, load_from_env};
pub use context::{RequestContext, RequestView};
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use header_builder::Header;
pub use policy::CorsPolicy;
pub use response::{CorsResponse, Headers, ResponseSink};
pub use result::{CorsDecision, CorsRejection, Flow};
pub use util::split_list;
