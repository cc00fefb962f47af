//! HTTP request/response types and the Handler trait.
//!
//! # Examples
//!
//! ```rust,no_run
//! use grappelli::http::{Handler, Request, Response};
//! ```

pub use grappelli_http::*;
