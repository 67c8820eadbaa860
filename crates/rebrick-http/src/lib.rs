//! rebrick-http - HTTP client for the upstream catalog service.

mod catalog;
mod client;
mod endpoints;

pub use catalog::HttpCatalog;
pub use client::DEFAULT_TIMEOUT;
