use crate::{Request, Response};
use async_trait::async_trait;
use grappelli_exception::Result;
use std::sync::Arc;

/// Handler trait for processing requests.
///
/// This is the core abstraction: view functions, routers, and anything else
/// that turns a request into a response implements it.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` so `Arc<dyn Handler>` composes.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct EchoPath;

	#[async_trait]
	impl Handler for EchoPath {
		async fn handle(&self, request: Request) -> Result<Response> {
			Ok(Response::ok().with_body(request.path().to_string()))
		}
	}

	#[tokio::test]
	async fn test_handler_through_arc() {
		let handler: Arc<dyn Handler> = Arc::new(EchoPath);
		let request = Request::builder().uri("/polls/").build().unwrap();
		let response = handler.handle(request).await.unwrap();
		assert_eq!(response.text(), "/polls/");
	}
}
