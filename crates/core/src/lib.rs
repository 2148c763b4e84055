//! tinyshop Core - Shared types library.
//!
//! This crate provides the types exchanged between tinyshop components:
//! - `catalog` - HTTP service that serves the product list
//! - `webapp` - Terminal front end that fetches and displays it
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Both sides of
//! the `GET /products` exchange serialize through these definitions, so the
//! wire format lives in exactly one place.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Product` record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
