use crate::pattern::PathPattern;
use grappelli_exception::Result;
use grappelli_http::Handler;
use std::sync::Arc;

/// A single routing rule: pattern, handler, symbolic name.
///
/// Routes are immutable once registered with a router. The namespace is
/// normally stamped on by [`crate::Router::mount`] rather than set by hand.
#[derive(Clone)]
pub struct Route {
	pattern: PathPattern,
	handler: Arc<dyn Handler>,
	pub name: Option<String>,
	pub namespace: Option<String>,
}

impl Route {
	pub fn new(pattern: PathPattern, handler: Arc<dyn Handler>) -> Self {
		Self {
			pattern,
			handler,
			name: None,
			namespace: None,
		}
	}

	/// Set the symbolic name used for reverse lookup.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Set the namespace scoping this route's name.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	pub fn handler(&self) -> &Arc<dyn Handler> {
		&self.handler
	}

	/// The fully qualified name, `"namespace:name"` when both are set.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::{PathPattern, Route};
	/// use grappelli_http::{Handler, Request, Response, Result};
	/// use std::sync::Arc;
	///
	/// # struct Dummy;
	/// # #[async_trait::async_trait]
	/// # impl Handler for Dummy {
	/// #     async fn handle(&self, _req: Request) -> Result<Response> {
	/// #         Ok(Response::ok())
	/// #     }
	/// # }
	/// let pattern = PathPattern::parse("{question_id:int}/").unwrap();
	/// let route = Route::new(pattern, Arc::new(Dummy))
	///     .with_name("detail")
	///     .with_namespace("polls");
	/// assert_eq!(route.full_name(), Some("polls:detail".to_string()));
	/// ```
	pub fn full_name(&self) -> Option<String> {
		match (&self.namespace, &self.name) {
			(Some(ns), Some(name)) => Some(format!("{}:{}", ns, name)),
			(None, Some(name)) => Some(name.clone()),
			_ => None,
		}
	}

	/// Rebuild this route under a mount prefix, keeping name and namespace.
	pub fn with_prefix(&self, prefix: &str) -> Result<Self> {
		Ok(Self {
			pattern: self.pattern.with_prefix(prefix)?,
			handler: self.handler.clone(),
			name: self.name.clone(),
			namespace: self.namespace.clone(),
		})
	}
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("namespace", &self.namespace)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use grappelli_http::{Request, Response};

	struct DummyHandler;

	#[async_trait]
	impl Handler for DummyHandler {
		async fn handle(&self, _req: Request) -> grappelli_exception::Result<Response> {
			Ok(Response::ok())
		}
	}

	#[test]
	fn test_full_name_variants() {
		let pattern = PathPattern::parse("").unwrap();
		let handler = Arc::new(DummyHandler);

		let unnamed = Route::new(pattern.clone(), handler.clone());
		assert_eq!(unnamed.full_name(), None);

		let named = Route::new(pattern.clone(), handler.clone()).with_name("index");
		assert_eq!(named.full_name(), Some("index".to_string()));

		let namespaced = Route::new(pattern, handler)
			.with_name("index")
			.with_namespace("polls");
		assert_eq!(namespaced.full_name(), Some("polls:index".to_string()));
	}

	#[test]
	fn test_with_prefix_keeps_identity() {
		let pattern = PathPattern::parse("{question_id:int}/").unwrap();
		let route = Route::new(pattern, Arc::new(DummyHandler)).with_name("detail");
		let mounted = route.with_prefix("/polls").unwrap();
		assert_eq!(mounted.name.as_deref(), Some("detail"));
		assert!(mounted.pattern().is_match("/polls/3/"));
	}
}
