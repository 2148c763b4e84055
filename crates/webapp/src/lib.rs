//! tinyshop web app library.
//!
//! A terminal rendition of the shop front page. On mount it fetches the
//! product list once from the catalog service, then lets the user fill in a
//! login form and place an order. Login only checks that both fields are
//! filled in, and orders are not sent anywhere.
//!
//! # Modules
//!
//! - [`state`] - `UiState` and the reducer over `Action`s
//! - [`catalog`] - HTTP client for `GET /products`
//! - [`loader`] - the one-shot background fetch
//! - [`view`] - askama text template for the page
//! - [`command`] - parsing of typed commands
//! - [`app`] - the event loop tying them together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod loader;
pub mod state;
pub mod view;

pub use app::{App, RunError, run};
pub use catalog::{CatalogClient, CatalogError};
pub use config::{ConfigError, WebappConfig};
pub use state::{Action, OrderStatus, SessionState, UiState};
