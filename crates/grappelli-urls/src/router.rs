//! Route tables and request dispatch.
//!
//! [`DefaultRouter`] holds an ordered route table. [`DefaultRouter::resolve`]
//! is the pure half: path in, matched route and typed parameters out, no
//! request or handler involved. [`Router::route`] builds on it to dispatch
//! a full request.

use crate::reverse::UrlReverser;
use crate::route::Route;
use async_trait::async_trait;
use grappelli_exception::{Error, Result};
use grappelli_http::{Handler, PathParams, Request, Response};
use std::collections::HashMap;

/// Composes routes together and dispatches requests to them.
pub trait Router: Send + Sync {
	fn add_route(&mut self, route: Route);

	/// Mount a route table under a prefix, optionally stamping a namespace
	/// onto every route.
	fn mount(&mut self, prefix: &str, routes: Vec<Route>, namespace: Option<String>) -> Result<()>;

	/// Handle a request (similar to Handler::handle)
	fn route(&self, request: Request)
	-> impl std::future::Future<Output = Result<Response>> + Send;
}

/// The outcome of a successful path resolution.
#[derive(Debug)]
pub struct ResolverMatch<'a> {
	route: &'a Route,
	/// Converted parameter values captured from the path.
	pub params: PathParams,
}

impl<'a> ResolverMatch<'a> {
	pub fn route(&self) -> &'a Route {
		self.route
	}

	pub fn handler(&self) -> &'a std::sync::Arc<dyn Handler> {
		self.route.handler()
	}

	/// The matched route's fully qualified name, if it has one.
	pub fn full_name(&self) -> Option<String> {
		self.route.full_name()
	}
}

/// Ordered-table router: routes are tried in registration order and the
/// first match wins.
#[derive(Default)]
pub struct DefaultRouter {
	routes: Vec<Route>,
	reverser: UrlReverser,
}

impl DefaultRouter {
	/// Create a new DefaultRouter
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::DefaultRouter;
	///
	/// let router = DefaultRouter::new();
	/// assert_eq!(router.get_routes().len(), 0);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve a path against the route table.
	///
	/// Pure and side-effect free: the same path against the same table
	/// always yields the same result. Routes are tried in registration
	/// order; the first whose pattern matches wins, with its captured
	/// parameters already converted. No match is [`Error::NotFound`].
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::{DefaultRouter, Router, function, path};
	/// use grappelli_http::{Request, Response, Result};
	///
	/// # async fn detail(_req: Request) -> Result<Response> { Ok(Response::ok()) }
	/// let mut router = DefaultRouter::new();
	/// router.add_route(
	///     path("{question_id:int}/", function(detail))
	///         .unwrap()
	///         .with_name("detail"),
	/// );
	///
	/// let matched = router.resolve("34/").unwrap();
	/// assert_eq!(matched.full_name(), Some("detail".to_string()));
	/// assert_eq!(matched.params.get_int("question_id").unwrap(), 34);
	///
	/// assert!(router.resolve("abc/").is_err());
	/// ```
	pub fn resolve(&self, path: &str) -> Result<ResolverMatch<'_>> {
		for route in &self.routes {
			if let Some(params) = route.pattern().matches(path) {
				tracing::debug!(
					path,
					pattern = route.pattern().source(),
					name = route.full_name().as_deref(),
					"route matched"
				);
				return Ok(ResolverMatch { route, params });
			}
		}
		tracing::debug!(path, "no route matched");
		Err(Error::NotFound(format!("No route found for {}", path)))
	}

	/// Reverse a route name to a path. See [`UrlReverser::reverse`].
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
		self.reverser.reverse(name, params)
	}

	/// Reverse a route name with key-value pairs.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::{DefaultRouter, Router, function, path};
	/// use grappelli_http::{Request, Response, Result};
	///
	/// # async fn detail(_req: Request) -> Result<Response> { Ok(Response::ok()) }
	/// let mut router = DefaultRouter::new();
	/// router.add_route(
	///     path("{question_id:int}/", function(detail))
	///         .unwrap()
	///         .with_name("detail"),
	/// );
	///
	/// let url = router.reverse_with("detail", &[("question_id", "123")]).unwrap();
	/// assert_eq!(url, "123/");
	/// ```
	pub fn reverse_with<S: AsRef<str>>(&self, name: &str, params: &[(S, S)]) -> Result<String> {
		self.reverser.reverse_with(name, params)
	}

	pub fn reverser(&self) -> &UrlReverser {
		&self.reverser
	}

	/// Get all registered routes
	pub fn get_routes(&self) -> &[Route] {
		&self.routes
	}
}

impl Router for DefaultRouter {
	fn add_route(&mut self, route: Route) {
		self.reverser.register(route.clone());
		self.routes.push(route);
	}

	/// Mount routes at the given prefix
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::{DefaultRouter, Router, function, path};
	/// use grappelli_http::{Request, Response, Result};
	///
	/// # async fn view(_req: Request) -> Result<Response> { Ok(Response::ok()) }
	/// let table = vec![
	///     path("", function(view)).unwrap().with_name("index"),
	///     path("{question_id:int}/", function(view)).unwrap().with_name("detail"),
	/// ];
	///
	/// let mut router = DefaultRouter::new();
	/// router.mount("/polls", table, Some("polls".to_string())).unwrap();
	///
	/// let matched = router.resolve("/polls/5/").unwrap();
	/// assert_eq!(matched.full_name(), Some("polls:detail".to_string()));
	/// ```
	fn mount(&mut self, prefix: &str, routes: Vec<Route>, namespace: Option<String>) -> Result<()> {
		for route in routes {
			let mut mounted = route.with_prefix(prefix)?;
			if let Some(ref ns) = namespace {
				mounted.namespace = Some(ns.clone());
			}
			self.add_route(mounted);
		}
		Ok(())
	}

	async fn route(&self, mut request: Request) -> Result<Response> {
		let path = request.path().to_string();
		let matched = self.resolve(&path)?;
		let handler = matched.handler().clone();
		request.path_params = matched.params;
		handler.handle(request).await
	}
}

#[async_trait]
impl Handler for DefaultRouter {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.route(request).await
	}
}
