//! # Grappelli
//!
//! Django-style URL routing for Rust.
//!
//! Grappelli takes Django's URL dispatch model and expresses it with Rust's
//! type system: path templates with typed converters instead of stringly
//! parameters, an ordered route table where the first match wins, and
//! reverse lookup from route names back to concrete paths.
//!
//! ## Quick Example
//!
//! The polls URL table from the Django tutorial:
//!
//! ```
//! use grappelli::urls::{DefaultRouter, Router, function, path, re_path};
//! use grappelli::http::{Request, Response};
//! use grappelli::Result;
//!
//! async fn index(_req: Request) -> Result<Response> {
//!     Ok(Response::ok().with_body("index"))
//! }
//! async fn detail(req: Request) -> Result<Response> {
//!     let question_id = req.path_params.get_int("question_id")?;
//!     Ok(Response::ok().with_body(format!("question {}", question_id)))
//! }
//! # async fn results(req: Request) -> Result<Response> { detail(req).await }
//! # async fn vote(req: Request) -> Result<Response> { detail(req).await }
//!
//! let urlpatterns = vec![
//!     path("", function(index)).unwrap().with_name("index"),
//!     path("{question_id:int}/", function(detail)).unwrap().with_name("detail"),
//!     path("{question_id:int}/results/", function(results)).unwrap().with_name("results"),
//!     re_path(r"^(?P<question_id>[0-9]+)/vote/$", function(vote)).unwrap().with_name("vote"),
//! ];
//!
//! let mut router = DefaultRouter::new();
//! router.mount("/polls", urlpatterns, Some("polls".to_string())).unwrap();
//!
//! let matched = router.resolve("/polls/5/").unwrap();
//! assert_eq!(matched.full_name(), Some("polls:detail".to_string()));
//! assert_eq!(
//!     router.reverse_with("polls:detail", &[("question_id", "5")]).unwrap(),
//!     "/polls/5/"
//! );
//! ```

// Module re-exports following Django's structure
pub mod exception;
pub mod http;
pub mod urls;

// Re-export the error type and common HTTP types at the crate root
pub use grappelli_exception::{Error, Result};
pub use grappelli_http::{Handler, PathParams, PathValue, Request, Response};
pub use grappelli_urls::{DefaultRouter, Route, Router};

// Re-export StatusCode from hyper (already used in grappelli_http)
pub use hyper::StatusCode;
