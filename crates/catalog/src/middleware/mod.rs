//! HTTP middleware stack for the catalog service.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main` when `SENTRY_DSN` is set)
//! 2. `TraceLayer` (one `http_request` span per request)
//! 3. Request ID (records the ID in that span and hands it to handlers)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
