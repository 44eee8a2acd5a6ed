//! Request/response middleware applied by [`crate::server::with_middleware`].

pub mod security;
pub mod timing;

pub use security::security_headers;
pub use timing::{PROCESS_TIME_HEADER, timing};
