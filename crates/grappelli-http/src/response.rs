use bytes::Bytes;
use grappelli_exception::{Error, Result};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP response representation.
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// HTTP 200 OK.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::ok();
	/// assert_eq!(response.status, StatusCode::OK);
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// HTTP 404 Not Found.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// HTTP 400 Bad Request.
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// HTTP 500 Internal Server Error.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// HTTP 302 Found (temporary redirect), the shape `vote` handlers
	/// return after a successful POST.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::redirect("/polls/5/results/");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/polls/5/results/"
	/// );
	/// ```
	pub fn redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// Set the response body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a header, ignoring values that are not valid header values.
	pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
		if let Ok(value) = value.parse() {
			self.headers.insert(name, value);
		}
		self
	}

	fn with_location(self, location: &str) -> Self {
		self.with_header("location", location)
	}

	/// Serialize `data` as a JSON body with the matching content type.
	pub fn json<T: Serialize>(data: &T) -> Result<Self> {
		let body = serde_json::to_vec(data)
			.map_err(|e| Error::Http(format!("JSON serialization failed: {}", e)))?;
		Ok(Self::ok()
			.with_header("content-type", "application/json")
			.with_body(body))
	}

	/// The body as UTF-8 text, for assertions in tests.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).to_string()
	}
}
