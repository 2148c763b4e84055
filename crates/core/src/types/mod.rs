//! Core types for tinyshop.

pub mod id;
pub mod product;

pub use id::*;
pub use product::Product;
