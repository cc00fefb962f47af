use crate::params::PathParams;
use bytes::Bytes;
use grappelli_exception::{Error, Result};
use hyper::{HeaderMap, Method, Uri, Version};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// HTTP request representation.
///
/// Routers fill in `path_params` when a URL pattern matches; handlers read
/// them back through the typed accessors on [`PathParams`].
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub path_params: PathParams,
	pub query_params: HashMap<String, String>,
}

impl Request {
	/// Start building a request.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/polls/5/")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/polls/5/");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// The request path, without query string.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Parse query parameters from a URI.
	///
	/// Splits each pair on the first `=` only, so values containing `=`
	/// (Base64 payloads and the like) survive intact.
	pub(crate) fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Query parameters with percent-encoding decoded.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/search?q=django%20reinhardt")
	///     .build()
	///     .unwrap();
	///
	/// let decoded = request.decoded_query_params();
	/// assert_eq!(decoded.get("q"), Some(&"django reinhardt".to_string()));
	/// ```
	pub fn decoded_query_params(&self) -> HashMap<String, String> {
		self.query_params
			.iter()
			.map(|(k, v)| {
				let key = percent_decode_str(k).decode_utf8_lossy().to_string();
				let value = percent_decode_str(v).decode_utf8_lossy().to_string();
				(key, value)
			})
			.collect()
	}
}

/// Builder for [`Request`].
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Result<Request> {
		let method = self.method.unwrap_or(Method::GET);
		let uri: Uri = self
			.uri
			.ok_or_else(|| Error::Http("request URI is required".to_string()))?
			.parse()
			.map_err(|e| Error::Http(format!("invalid URI: {}", e)))?;
		let query_params = Request::parse_query_params(&uri);

		Ok(Request {
			method,
			uri,
			version: self.version,
			headers: self.headers,
			body: self.body,
			path_params: PathParams::new(),
			query_params,
		})
	}
}
