//! Constructors in Django spelling: `path`, `re_path`, and a function
//! adapter so plain `async fn` views can be registered without a struct.

use crate::pattern::PathPattern;
use crate::route::Route;
use async_trait::async_trait;
use grappelli_exception::Result;
use grappelli_http::{Handler, Request, Response};
use std::future::Future;
use std::sync::Arc;

/// Build a route from a typed-segment template.
///
/// # Examples
///
/// ```
/// use grappelli_urls::{function, path};
/// use grappelli_http::{Request, Response, Result};
///
/// async fn detail(req: Request) -> Result<Response> {
///     let question_id = req.path_params.get_int("question_id")?;
///     Ok(Response::ok().with_body(question_id.to_string()))
/// }
///
/// let route = path("{question_id:int}/", function(detail))
///     .unwrap()
///     .with_name("detail");
/// assert!(route.pattern().is_match("5/"));
/// ```
pub fn path(template: &str, handler: Arc<dyn Handler>) -> Result<Route> {
	Ok(Route::new(PathPattern::parse(template)?, handler))
}

/// Build a route from a raw regular expression with named capture groups.
pub fn re_path(expr: &str, handler: Arc<dyn Handler>) -> Result<Route> {
	Ok(Route::new(PathPattern::regex(expr)?, handler))
}

/// Adapter that lets an async function serve as a [`Handler`].
pub struct FunctionHandler<F> {
	func: F,
}

#[async_trait]
impl<F, Fut> Handler for FunctionHandler<F>
where
	F: Fn(Request) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	async fn handle(&self, request: Request) -> Result<Response> {
		(self.func)(request).await
	}
}

/// Wrap an async view function as an `Arc<dyn Handler>`.
pub fn function<F, Fut>(func: F) -> Arc<dyn Handler>
where
	F: Fn(Request) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<Response>> + Send + 'static,
{
	Arc::new(FunctionHandler { func })
}

#[cfg(test)]
mod tests {
	use super::*;

	async fn ok_view(_req: Request) -> Result<Response> {
		Ok(Response::ok().with_body("ok"))
	}

	#[tokio::test]
	async fn test_function_adapter_dispatches() {
		let handler = function(ok_view);
		let request = Request::builder().uri("/").build().unwrap();
		let response = handler.handle(request).await.unwrap();
		assert_eq!(response.text(), "ok");
	}

	#[test]
	fn test_path_rejects_bad_template() {
		assert!(path("{question_id:float}/", function(ok_view)).is_err());
	}

	#[test]
	fn test_re_path_rejects_bad_regex() {
		assert!(re_path(r"^(?P<id>[0-9+$", function(ok_view)).is_err());
	}
}
