//! Minimal HTTP surface for Grappelli URL dispatch.
//!
//! The router resolves paths and hands requests to [`Handler`]
//! implementations; everything else (transport, middleware, templating)
//! lives outside this workspace.

mod handler;
mod params;
mod request;
mod response;

pub use grappelli_exception::{Error, Result};
pub use handler::Handler;
pub use params::{PathParams, PathValue};
pub use request::{Request, RequestBuilder};
pub use response::Response;
