//! `x-request-id` handling for the catalog service.
//!
//! Every response carries a request ID. An ID supplied by an upstream proxy
//! is reused when it is short printable ASCII; anything else is replaced by a
//! fresh UUID v4 so that log fields and Sentry tags stay well formed. The ID
//! is recorded on the `http_request` span, tagged on the Sentry scope and
//! made available to handlers as a [`RequestId`] extension.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID that is passed through unchanged.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// The ID assigned to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// A new random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse an upstream ID if it is acceptable.
    #[must_use]
    pub fn from_upstream(value: &HeaderValue) -> Option<Self> {
        let id = value.to_str().ok()?;
        let acceptable = !id.is_empty()
            && id.len() <= MAX_REQUEST_ID_LEN
            && id.bytes().all(|b| b.is_ascii_graphic());
        acceptable.then(|| Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assign a request ID, expose it to handlers and echo it in the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let upstream = request.headers().get(REQUEST_ID_HEADER);
    let request_id = match upstream.map(RequestId::from_upstream) {
        Some(Some(id)) => id,
        Some(None) => {
            tracing::debug!("Replacing malformed upstream request id");
            RequestId::generate()
        }
        None => RequestId::generate(),
    };

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let header = HeaderValue::from_str(request_id.as_str());
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Ok(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Extension, Router,
        body::{Body, to_bytes},
        http::Request,
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let echo = |Extension(id): Extension<RequestId>| async move { id.to_string() };
        Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(request_id_middleware))
    }

    fn request_with_id(id: &str) -> Request<Body> {
        Request::get("/")
            .header(REQUEST_ID_HEADER, id)
            .body(Body::empty())
            .unwrap()
    }

    fn header_id(response: &Response) -> String {
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        id.to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let request = Request::get("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(Uuid::parse_str(&header_id(&response)).is_ok());
    }

    #[tokio::test]
    async fn test_echoes_upstream_request_id() {
        let response = app().oneshot(request_with_id("edge-1234")).await.unwrap();

        assert_eq!(header_id(&response), "edge-1234");
    }

    #[tokio::test]
    async fn test_handler_sees_same_id_as_header() {
        let response = app().oneshot(request_with_id("edge-5678")).await.unwrap();
        let id = header_id(&response);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, id.as_bytes());
    }

    #[tokio::test]
    async fn test_replaces_overlong_upstream_id() {
        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        let response = app().oneshot(request_with_id(&long)).await.unwrap();

        assert!(Uuid::parse_str(&header_id(&response)).is_ok());
    }

    #[test]
    fn test_upstream_id_must_be_printable() {
        let spaced = HeaderValue::from_static("edge 1234");
        assert_eq!(RequestId::from_upstream(&spaced), None);

        let empty = HeaderValue::from_static("");
        assert_eq!(RequestId::from_upstream(&empty), None);

        let max = HeaderValue::from_str(&"a".repeat(MAX_REQUEST_ID_LEN)).unwrap();
        assert!(RequestId::from_upstream(&max).is_some());
    }
}
