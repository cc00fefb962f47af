//! # Grappelli URLs
//!
//! Django-style URL dispatch for the Grappelli workspace:
//!
//! - **Typed path patterns**: `"{question_id:int}/"` compiles to an anchored
//!   regex with a converter that yields an integer, not a string
//! - **Raw regex routes**: `re_path(r"^(?P<question_id>[0-9]+)/vote/$", ..)`
//!   for patterns the template syntax cannot express
//! - **First-match routing**: routes are tried in registration order; the
//!   first structural match wins
//! - **Reverse lookup**: `reverse("polls:detail", ..)` turns a route name and
//!   parameters back into a concrete path
//! - **Namespaces**: route lists mount under a prefix and namespace, so
//!   `detail` in the polls app is addressed as `"polls:detail"`
//!
//! # Examples
//!
//! The polls URL table from the Django tutorial:
//!
//! ```
//! use grappelli_urls::{DefaultRouter, Router, function, path, re_path};
//! use grappelli_http::{Request, Response, Result};
//!
//! async fn index(_req: Request) -> Result<Response> {
//!     Ok(Response::ok())
//! }
//! async fn detail(req: Request) -> Result<Response> {
//!     let question_id = req.path_params.get_int("question_id")?;
//!     Ok(Response::ok().with_body(question_id.to_string()))
//! }
//! # async fn results(req: Request) -> Result<Response> { detail(req).await }
//! # async fn vote(req: Request) -> Result<Response> { detail(req).await }
//!
//! let routes = vec![
//!     path("", function(index)).unwrap().with_name("index"),
//!     path("{question_id:int}/", function(detail)).unwrap().with_name("detail"),
//!     path("{question_id:int}/results/", function(results)).unwrap().with_name("results"),
//!     re_path(r"^(?P<question_id>[0-9]+)/vote/$", function(vote)).unwrap().with_name("vote"),
//! ];
//!
//! let mut router = DefaultRouter::new();
//! router.mount("/polls", routes, Some("polls".to_string())).unwrap();
//!
//! let matched = router.resolve("/polls/5/").unwrap();
//! assert_eq!(matched.full_name(), Some("polls:detail".to_string()));
//! assert_eq!(matched.params.get_int("question_id").unwrap(), 5);
//!
//! let url = router.reverse_with("polls:detail", &[("question_id", "5")]).unwrap();
//! assert_eq!(url, "/polls/5/");
//! ```

pub mod converters;
pub mod helpers;
pub mod pattern;
pub mod reverse;
pub mod route;
pub mod router;

pub use converters::{
	Converter, IntegerConverter, PathConverter, SlugConverter, StringConverter, UuidConverter,
	converter_by_name,
};
pub use helpers::{FunctionHandler, function, path, re_path};
pub use pattern::{PathPattern, validate_reverse_param};
pub use reverse::{
	UrlReverser, extract_param_names, reverse_single_pass, reverse_with_aho_corasick,
};
pub use route::Route;
pub use router::{DefaultRouter, ResolverMatch, Router};
